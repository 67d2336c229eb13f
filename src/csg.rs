// CSG (Constructive Solid Geometry) operations
//
// These combine SDF distance values to produce boolean combinations of shapes:
// - union:        the merged shape (min)
// - intersection: the overlapping region (max)
// - difference:   A minus B (max of A and negated B)
//
// The smooth intersection rounds the crease where two surfaces meet,
// controlled by the blending radius `k`.

/// Boolean union of two SDF values (logical OR).
pub fn union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

/// Boolean intersection of two SDF values (logical AND).
pub fn intersection(d1: f64, d2: f64) -> f64 {
    d1.max(d2)
}

/// Boolean difference: shape A minus shape B.
pub fn difference(d1: f64, d2: f64) -> f64 {
    d1.max(-d2)
}

/// Smooth (polynomial) intersection with blending radius `k`.
///
/// Never below `max(d1, d2)`, equal to it once `|d1 - d2| >= k`, and at most
/// `k / 4` above it where the two values meet. `k` must be positive.
pub fn smooth_intersection(d1: f64, d2: f64, k: f64) -> f64 {
    let h = (0.5 - 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    d2 * (1.0 - h) + d1 * h + k * h * (1.0 - h)
}

