use std::sync::Arc;

use nalgebra::{Vector2, Vector3};

use crate::error::SdfError;
use crate::types::{BBox2, BBox3};
use crate::{csg, primitives};

/// Trait for any object that can evaluate a signed distance in 3D.
pub trait Sdf: Send + Sync {
    fn evaluate(&self, point: Vector3<f64>) -> f64;
    /// Box enclosing every point where the distance is negative.
    fn bounding_box(&self) -> BBox3;
}

/// Trait for a 2D signed distance function in the XY plane.
pub trait Sdf2d: Send + Sync {
    fn evaluate(&self, point: Vector2<f64>) -> f64;
    fn bounding_box(&self) -> BBox2;
}

// ---------------------------------------------------------------------------
// Borrowed, boxed and shared shapes are shapes too
// ---------------------------------------------------------------------------

impl<S: Sdf + ?Sized> Sdf for &S {
    fn evaluate(&self, point: Vector3<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox3 { (**self).bounding_box() }
}

impl<S: Sdf + ?Sized> Sdf for Box<S> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox3 { (**self).bounding_box() }
}

impl<S: Sdf + ?Sized> Sdf for Arc<S> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox3 { (**self).bounding_box() }
}

impl<S: Sdf2d + ?Sized> Sdf2d for &S {
    fn evaluate(&self, point: Vector2<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox2 { (**self).bounding_box() }
}

impl<S: Sdf2d + ?Sized> Sdf2d for Box<S> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox2 { (**self).bounding_box() }
}

impl<S: Sdf2d + ?Sized> Sdf2d for Arc<S> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 { (**self).evaluate(point) }
    fn bounding_box(&self) -> BBox2 { (**self).bounding_box() }
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

/// Finite right circular cylinder on the Z axis, centered at the origin.
///
/// Spans `-height/2 ..= height/2` along Z. `round` rounds the rim edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    height: f64,
    radius: f64,
    round: f64,
}

impl Cylinder {
    pub fn new(height: f64, radius: f64, round: f64) -> Result<Self, SdfError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(SdfError::InvalidRadius(radius));
        }
        if round.is_nan() || round < 0.0 {
            return Err(SdfError::InvalidRounding(round));
        }
        if round > radius {
            return Err(SdfError::RoundExceedsRadius { round, radius });
        }
        if height < 2.0 * round {
            return Err(SdfError::HeightTooSmall { height, round });
        }
        Ok(Self { height, radius, round })
    }

    pub fn height(&self) -> f64 { self.height }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn round(&self) -> f64 { self.round }
}

impl Sdf for Cylinder {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        primitives::sdf_z_cylinder(point, self.height, self.radius, self.round)
    }

    fn bounding_box(&self) -> BBox3 {
        let ext = Vector3::new(self.radius, self.radius, self.height / 2.0);
        BBox3::new(-ext, ext)
    }
}

// ---------------------------------------------------------------------------
// CSG Operations
// ---------------------------------------------------------------------------

pub struct Union<A: Sdf, B: Sdf> {
    pub a: A,
    pub b: B,
}

impl<A: Sdf, B: Sdf> Union<A, B> {
    pub fn new(a: A, b: B) -> Self { Self { a, b } }
}

impl<A: Sdf, B: Sdf> Sdf for Union<A, B> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        csg::union(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn bounding_box(&self) -> BBox3 {
        self.a.bounding_box().hull(&self.b.bounding_box())
    }
}

pub struct Intersection<A: Sdf, B: Sdf> {
    pub a: A,
    pub b: B,
}

impl<A: Sdf, B: Sdf> Intersection<A, B> {
    pub fn new(a: A, b: B) -> Self { Self { a, b } }
}

impl<A: Sdf, B: Sdf> Sdf for Intersection<A, B> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        csg::intersection(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn bounding_box(&self) -> BBox3 {
        self.a.bounding_box().overlap(&self.b.bounding_box())
    }
}

pub struct Difference<A: Sdf, B: Sdf> {
    pub a: A,
    pub b: B,
}

impl<A: Sdf, B: Sdf> Difference<A, B> {
    pub fn new(a: A, b: B) -> Self { Self { a, b } }
}

impl<A: Sdf, B: Sdf> Sdf for Difference<A, B> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        csg::difference(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn bounding_box(&self) -> BBox3 {
        self.a.bounding_box()
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Translate a shape by an offset. Inverse: shift the query point backwards.
pub struct Translate<S: Sdf> {
    pub shape: S,
    pub offset: Vector3<f64>,
}

impl<S: Sdf> Translate<S> {
    pub fn new(shape: S, offset: Vector3<f64>) -> Self { Self { shape, offset } }
}

impl<S: Sdf> Sdf for Translate<S> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        self.shape.evaluate(point - self.offset)
    }

    fn bounding_box(&self) -> BBox3 {
        self.shape.bounding_box().translate(self.offset)
    }
}

/// Translate a 2D shape by an offset.
pub struct Translate2d<S: Sdf2d> {
    pub shape: S,
    pub offset: Vector2<f64>,
}

impl<S: Sdf2d> Translate2d<S> {
    pub fn new(shape: S, offset: Vector2<f64>) -> Self { Self { shape, offset } }
}

impl<S: Sdf2d> Sdf2d for Translate2d<S> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        self.shape.evaluate(point - self.offset)
    }

    fn bounding_box(&self) -> BBox2 {
        self.shape.bounding_box().translate(self.offset)
    }
}

/// Shorthand for `Translate::new(shape, Vector3::new(x, y, z))`.
pub fn translate3d<S: Sdf>(shape: S, x: f64, y: f64, z: f64) -> Translate<S> {
    Translate::new(shape, Vector3::new(x, y, z))
}

/// Shorthand for `Translate2d::new(shape, Vector2::new(x, y))`.
pub fn translate2d<S: Sdf2d>(shape: S, x: f64, y: f64) -> Translate2d<S> {
    Translate2d::new(shape, Vector2::new(x, y))
}

// ---------------------------------------------------------------------------
// Closure-based SDF (for dynamic/user-defined shapes)
// ---------------------------------------------------------------------------

/// An SDF defined by a closure. The caller supplies the bounding box.
pub struct FnSdf<F: Fn(Vector3<f64>) -> f64 + Send + Sync> {
    pub func: F,
    pub bbox: BBox3,
}

impl<F: Fn(Vector3<f64>) -> f64 + Send + Sync> FnSdf<F> {
    pub fn new(func: F, bbox: BBox3) -> Self { Self { func, bbox } }
}

impl<F: Fn(Vector3<f64>) -> f64 + Send + Sync> Sdf for FnSdf<F> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        (self.func)(point)
    }

    fn bounding_box(&self) -> BBox3 {
        self.bbox
    }
}

/// A 2D SDF defined by a closure. The caller supplies the bounding box.
pub struct FnSdf2d<F: Fn(Vector2<f64>) -> f64 + Send + Sync> {
    pub func: F,
    pub bbox: BBox2,
}

impl<F: Fn(Vector2<f64>) -> f64 + Send + Sync> FnSdf2d<F> {
    pub fn new(func: F, bbox: BBox2) -> Self { Self { func, bbox } }
}

impl<F: Fn(Vector2<f64>) -> f64 + Send + Sync> Sdf2d for FnSdf2d<F> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        (self.func)(point)
    }

    fn bounding_box(&self) -> BBox2 {
        self.bbox
    }
}

// ---------------------------------------------------------------------------
// 2D Primitives (planar patterns for wrapping)
// ---------------------------------------------------------------------------

/// 2D circle SDF.
pub struct Circle2d {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle2d {
    pub fn new(center: Vector2<f64>, radius: f64) -> Self { Self { center, radius } }
}

impl Sdf2d for Circle2d {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        primitives::sdf_circle2d(point, self.center, self.radius)
    }

    fn bounding_box(&self) -> BBox2 {
        let r = Vector2::repeat(self.radius);
        BBox2::new(self.center - r, self.center + r)
    }
}

/// 2D rectangle SDF.
pub struct Rect2d {
    pub center: Vector2<f64>,
    pub half_extents: Vector2<f64>,
}

impl Rect2d {
    pub fn new(center: Vector2<f64>, half_extents: Vector2<f64>) -> Self {
        Self { center, half_extents }
    }
}

impl Sdf2d for Rect2d {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        primitives::sdf_rect2d(point, self.center, self.half_extents)
    }

    fn bounding_box(&self) -> BBox2 {
        BBox2::new(self.center - self.half_extents, self.center + self.half_extents)
    }
}

/// 2D union.
pub struct Union2d<A: Sdf2d, B: Sdf2d> {
    pub a: A,
    pub b: B,
}

impl<A: Sdf2d, B: Sdf2d> Union2d<A, B> {
    pub fn new(a: A, b: B) -> Self { Self { a, b } }
}

impl<A: Sdf2d, B: Sdf2d> Sdf2d for Union2d<A, B> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        csg::union(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn bounding_box(&self) -> BBox2 {
        self.a.bounding_box().hull(&self.b.bounding_box())
    }
}

/// 2D difference.
pub struct Difference2d<A: Sdf2d, B: Sdf2d> {
    pub a: A,
    pub b: B,
}

impl<A: Sdf2d, B: Sdf2d> Difference2d<A, B> {
    pub fn new(a: A, b: B) -> Self { Self { a, b } }
}

impl<A: Sdf2d, B: Sdf2d> Sdf2d for Difference2d<A, B> {
    fn evaluate(&self, point: Vector2<f64>) -> f64 {
        csg::difference(self.a.evaluate(point), self.b.evaluate(point))
    }

    fn bounding_box(&self) -> BBox2 {
        self.a.bounding_box()
    }
}
