//! Planar distance fields wrapped around a hollow cylinder.
//!
//! [`CylinderWrap`] bends a 2D field around the Z axis. The planar X axis
//! becomes arc length on the inner surface of the shell and the planar Y
//! axis becomes height, so lengths are preserved on the inside of the wrap.
//! The result is clipped to a shell between the inner and outer radius, and
//! both clips can be rounded independently.
//!
//! Angles are measured as `atan2(y, x) + π/2`, so planar `x = 0` lands on the
//! -Y axis and the planar X range `(-w/2, 3w/2]` (with `w = π·r`) covers one
//! full turn, the seam lying on the -X axis. Nothing is clamped or wrapped:
//! content outside that range is never sampled, and the planar field's own
//! background value shows wherever the pattern does not reach. A seamless
//! wrap needs a planar field whose values at both ends of the range agree.
//!
//! To emboss a wrap onto a solid cylinder, wrap with the solid's radius minus
//! the thickness as the inner radius and union the two.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Vector2, Vector3};

use crate::blend::MaxBlend;
use crate::error::SdfError;
use crate::shape::{translate3d, Cylinder, Sdf, Sdf2d, Translate};
use crate::types::BBox3;

/// Geometry and rounding of a cylindrical wrap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapSettings {
    /// Radius of the bore. Planar lengths are preserved at this radius.
    pub inner_radius: f64,
    /// Wall thickness; the outer radius is `inner_radius + thickness`.
    pub thickness: f64,
    /// Blend used when carving the bore.
    pub inner_blend: MaxBlend,
    /// Blend used when clipping to the outer cylinder.
    pub outer_blend: MaxBlend,
}

impl WrapSettings {
    /// Sharp-edged shell of the given inner radius and thickness.
    pub fn new(inner_radius: f64, thickness: f64) -> Self {
        Self {
            inner_radius,
            thickness,
            inner_blend: MaxBlend::Hard,
            outer_blend: MaxBlend::Hard,
        }
    }

    /// Round the edges along the bore; zero keeps them sharp.
    pub fn round_inside(mut self, radius: f64) -> Result<Self, SdfError> {
        self.inner_blend = MaxBlend::from_radius(radius)?;
        Ok(self)
    }

    /// Round the edges along the outer surface; zero keeps them sharp.
    pub fn round_outside(mut self, radius: f64) -> Result<Self, SdfError> {
        self.outer_blend = MaxBlend::from_radius(radius)?;
        Ok(self)
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }
}

/// A planar field wrapped around a hollow cylindrical shell.
///
/// Borrows the planar field for its whole lifetime and owns the two clipping
/// cylinders. Immutable after construction, so it can be evaluated from many
/// threads at once.
pub struct CylinderWrap<'a, P: Sdf2d + ?Sized> {
    planar: &'a P,
    width: f64,
    inner_radius: f64,
    outer_radius: f64,
    height: f64,
    outer: Translate<Cylinder>,
    inner: Translate<Cylinder>,
    inner_blend: MaxBlend,
    outer_blend: MaxBlend,
}

impl<'a, P: Sdf2d + ?Sized> CylinderWrap<'a, P> {
    /// Wrap `planar` around the shell described by `settings`.
    ///
    /// The cylinders span exactly the planar field's Y range along Z. Invalid
    /// radii surface as the cylinder constructor's errors; a rounded blend
    /// needs a finite, positive radius.
    pub fn new(planar: &'a P, settings: &WrapSettings) -> Result<Self, SdfError> {
        let inner_blend = settings.inner_blend.validate()?;
        let outer_blend = settings.outer_blend.validate()?;
        let inner_radius = settings.inner_radius;
        let outer_radius = settings.outer_radius();
        // Half the inner circumference.
        let width = PI * inner_radius;

        let bb = planar.bounding_box();
        let height = bb.max.y - bb.min.y;
        let lift = height / 2.0 + bb.min.y;

        let outer = translate3d(Cylinder::new(height, outer_radius, 0.0)?, 0.0, 0.0, lift);
        let inner = translate3d(Cylinder::new(height, inner_radius, 0.0)?, 0.0, 0.0, lift);

        log::debug!(
            "cylinder wrap: inner r={inner_radius} outer r={outer_radius} width={width} \
             z={}..{} blends {:?}/{:?}",
            bb.min.y,
            bb.max.y,
            inner_blend,
            outer_blend,
        );
        let (lo, hi) = sampled_range(width);
        if bb.min.x < lo || bb.max.x > hi {
            log::warn!(
                "planar field spans x={}..{} but only {lo}..{hi} is sampled; it will be clipped",
                bb.min.x,
                bb.max.x,
            );
        }

        Ok(Self {
            planar,
            width,
            inner_radius,
            outer_radius,
            height,
            outer,
            inner,
            inner_blend,
            outer_blend,
        })
    }

    /// Planar span mapped onto half a turn: `π · inner_radius`.
    pub fn width(&self) -> f64 { self.width }
    pub fn inner_radius(&self) -> f64 { self.inner_radius }
    pub fn outer_radius(&self) -> f64 { self.outer_radius }
    pub fn height(&self) -> f64 { self.height }
    pub fn inner_blend(&self) -> MaxBlend { self.inner_blend }
    pub fn outer_blend(&self) -> MaxBlend { self.outer_blend }
    pub fn planar(&self) -> &'a P { self.planar }

    /// Planar X range covered by one full turn, `(-w/2, 3w/2]`.
    pub fn sampled_range(&self) -> (f64, f64) {
        sampled_range(self.width)
    }

    /// True when part of the planar field's box lies outside [`Self::sampled_range`].
    pub fn is_clipped(&self) -> bool {
        let bb = self.planar.bounding_box();
        let (lo, hi) = self.sampled_range();
        bb.min.x < lo || bb.max.x > hi
    }

    /// Planar coordinates sampled for a point in space.
    pub fn planar_point(&self, point: Vector3<f64>) -> Vector2<f64> {
        let angle = point.y.atan2(point.x) + FRAC_PI_2;
        Vector2::new(self.width * angle / PI, point.z)
    }
}

impl<P: Sdf2d + ?Sized> Sdf for CylinderWrap<'_, P> {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        let d = self.planar.evaluate(self.planar_point(point));
        // Outer clip first: the bore is carved from the already clipped band.
        let d = self.outer_blend.apply(d, self.outer.evaluate(point));
        self.inner_blend.apply(d, -self.inner.evaluate(point))
    }

    /// The outer cylinder's box. Rounded blends only pull the surface inward.
    fn bounding_box(&self) -> BBox3 {
        self.outer.bounding_box()
    }
}

fn sampled_range(width: f64) -> (f64, f64) {
    (-width / 2.0, 1.5 * width)
}

/// Wrap a planar field around a hollow cylinder of the given inner radius and
/// wall thickness. A rounding radius of zero keeps that side's edges sharp.
pub fn wrap_around_cylinder<P: Sdf2d + ?Sized>(
    planar: &P,
    inner_radius: f64,
    thickness: f64,
    round_inside: f64,
    round_outside: f64,
) -> Result<CylinderWrap<'_, P>, SdfError> {
    let settings = WrapSettings::new(inner_radius, thickness)
        .round_inside(round_inside)?
        .round_outside(round_outside)?;
    CylinderWrap::new(planar, &settings)
}
