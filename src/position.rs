//! Bounding-box positioning helpers.
//!
//! Each helper borrows a reference shape `s1`, takes the shape to move `s2`
//! by value and returns `s2` translated so that its bounding box sits in the
//! requested relation to `s1`'s. Only bounding boxes are consulted, so the
//! result is exact for boxes and approximate for everything else.

use nalgebra::{Vector2, Vector3};

use crate::shape::{translate2d, translate3d, Sdf, Sdf2d, Translate, Translate2d};

/// A side of a 2D bounding box. `Top` and `Bottom` refer to Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side2d {
    Left,
    Right,
    Top,
    Bottom,
}

/// A side of a 3D bounding box. `Top` and `Bottom` refer to Z, `Front` is -Y
/// and `Back` is +Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Front,
    Back,
    Top,
    Bottom,
}

/// Rest `s` on the XY plane: its lowest point moves to `z = 0`.
pub fn set_on_xy_plane<S: Sdf>(s: S) -> Translate<S> {
    let bb = s.bounding_box();
    translate3d(s, 0.0, 0.0, -bb.min.z)
}

/// Move `s2` so that its box is centered on `s1`'s box.
pub fn center_with_2d<A, B>(s1: &A, s2: B) -> Translate2d<B>
where
    A: Sdf2d + ?Sized,
    B: Sdf2d,
{
    let offset = s1.bounding_box().center() - s2.bounding_box().center();
    translate2d(s2, offset.x, offset.y)
}

/// Center a planar shape on the X/Y center of a solid, ignoring Z.
pub fn center_2d_with_3d<A, B>(s1: &A, s2: B) -> Translate2d<B>
where
    A: Sdf + ?Sized,
    B: Sdf2d,
{
    let c1 = s1.bounding_box().center();
    let offset = Vector2::new(c1.x, c1.y) - s2.bounding_box().center();
    translate2d(s2, offset.x, offset.y)
}

/// Move `s2` so that its box is centered on `s1`'s box.
pub fn center_with_3d<A, B>(s1: &A, s2: B) -> Translate<B>
where
    A: Sdf + ?Sized,
    B: Sdf,
{
    let offset = s1.bounding_box().center() - s2.bounding_box().center();
    translate3d(s2, offset.x, offset.y, offset.z)
}

/// Move `s2` along one axis so that its box touches `side` of `s1`'s box
/// from the outside.
///
/// `Top` and `Bottom` behave like their 3D counterparts: `Bottom` puts `s2`
/// below `s1`. Some older SDF toolkits swap the two in their 2D abut; callers
/// porting from one of those must swap the side they pass.
pub fn abut_with_2d<A, B>(s1: &A, s2: B, side: Side2d) -> Translate2d<B>
where
    A: Sdf2d + ?Sized,
    B: Sdf2d,
{
    let bb1 = s1.bounding_box();
    let bb2 = s2.bounding_box();
    let offset = match side {
        Side2d::Left => Vector2::new(bb1.min.x - bb2.max.x, 0.0),
        Side2d::Right => Vector2::new(bb1.max.x - bb2.min.x, 0.0),
        Side2d::Bottom => Vector2::new(0.0, bb1.min.y - bb2.max.y),
        Side2d::Top => Vector2::new(0.0, bb1.max.y - bb2.min.y),
    };
    Translate2d::new(s2, offset)
}

/// Move `s2` along one axis so that its box touches `side` of `s1`'s box
/// from the outside.
pub fn abut_with_3d<A, B>(s1: &A, s2: B, side: Side) -> Translate<B>
where
    A: Sdf + ?Sized,
    B: Sdf,
{
    let bb1 = s1.bounding_box();
    let bb2 = s2.bounding_box();
    let offset = match side {
        Side::Left => Vector3::new(bb1.min.x - bb2.max.x, 0.0, 0.0),
        Side::Right => Vector3::new(bb1.max.x - bb2.min.x, 0.0, 0.0),
        Side::Front => Vector3::new(0.0, bb1.min.y - bb2.max.y, 0.0),
        Side::Back => Vector3::new(0.0, bb1.max.y - bb2.min.y, 0.0),
        Side::Bottom => Vector3::new(0.0, 0.0, bb1.min.z - bb2.max.z),
        Side::Top => Vector3::new(0.0, 0.0, bb1.max.z - bb2.min.z),
    };
    Translate::new(s2, offset)
}

/// Move `s2` along one axis so that `side` of its box lines up with the same
/// side of `s1`'s box.
pub fn align_with_2d<A, B>(s1: &A, s2: B, side: Side2d) -> Translate2d<B>
where
    A: Sdf2d + ?Sized,
    B: Sdf2d,
{
    let bb1 = s1.bounding_box();
    let bb2 = s2.bounding_box();
    let offset = match side {
        Side2d::Left => Vector2::new(bb1.min.x - bb2.min.x, 0.0),
        Side2d::Right => Vector2::new(bb1.max.x - bb2.max.x, 0.0),
        Side2d::Bottom => Vector2::new(0.0, bb1.min.y - bb2.min.y),
        Side2d::Top => Vector2::new(0.0, bb1.max.y - bb2.max.y),
    };
    Translate2d::new(s2, offset)
}

/// Move `s2` along one axis so that `side` of its box lines up with the same
/// side of `s1`'s box.
pub fn align_with_3d<A, B>(s1: &A, s2: B, side: Side) -> Translate<B>
where
    A: Sdf + ?Sized,
    B: Sdf,
{
    let bb1 = s1.bounding_box();
    let bb2 = s2.bounding_box();
    let offset = match side {
        Side::Left => Vector3::new(bb1.min.x - bb2.min.x, 0.0, 0.0),
        Side::Right => Vector3::new(bb1.max.x - bb2.max.x, 0.0, 0.0),
        Side::Front => Vector3::new(0.0, bb1.min.y - bb2.min.y, 0.0),
        Side::Back => Vector3::new(0.0, bb1.max.y - bb2.max.y, 0.0),
        Side::Bottom => Vector3::new(0.0, 0.0, bb1.min.z - bb2.min.z),
        Side::Top => Vector3::new(0.0, 0.0, bb1.max.z - bb2.max.z),
    };
    Translate::new(s2, offset)
}
