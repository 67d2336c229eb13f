use nalgebra::{Vector2, Vector3};

/// Signed distance to a 2D axis-aligned rectangle.
pub fn sdf_rect2d(point: Vector2<f64>, center: Vector2<f64>, half_extents: Vector2<f64>) -> f64 {
    let d = (point - center).abs() - half_extents;
    let outside = Vector2::new(d.x.max(0.0), d.y.max(0.0)).norm();
    let inside = d.x.max(d.y).min(0.0);
    outside + inside
}

/// Signed distance to a 2D circle.
pub fn sdf_circle2d(point: Vector2<f64>, center: Vector2<f64>, radius: f64) -> f64 {
    (point - center).norm() - radius
}

/// Signed distance to a capped cylinder on the Z axis, centered at the origin.
///
/// `height` is the full length along Z. The rim edges are rounded by `round`
/// (zero gives sharp rims). The cylinder is reduced to a rectangle in the
/// `(radial, z)` half-plane and inflated by `round`.
pub fn sdf_z_cylinder(point: Vector3<f64>, height: f64, radius: f64, round: f64) -> f64 {
    let radial = (point.x * point.x + point.y * point.y).sqrt();
    let half = Vector2::new(radius - round, height / 2.0 - round);
    sdf_rect2d(Vector2::new(radial, point.z), Vector2::zeros(), half) - round
}
