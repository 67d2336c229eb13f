use approx::assert_relative_eq;
use cylwrap::csg::{difference, intersection, smooth_intersection, union};
use cylwrap::primitives::sdf_circle2d;
use nalgebra::Vector2;

#[test]
fn union_takes_minimum() {
    let p = Vector2::new(2.0, 0.0);
    let a = sdf_circle2d(p, Vector2::zeros(), 1.0);
    let b = sdf_circle2d(p, Vector2::new(5.0, 0.0), 1.0);
    assert_relative_eq!(union(a, b), 1.0, epsilon = 1e-6);
}

#[test]
fn intersection_takes_maximum() {
    let p = Vector2::new(0.5, 0.0);
    let a = sdf_circle2d(p, Vector2::zeros(), 1.0);
    let b = sdf_circle2d(p, Vector2::new(1.0, 0.0), 1.0);
    assert_relative_eq!(intersection(a, b), -0.5, epsilon = 1e-6);
}

#[test]
fn difference_subtracts() {
    let a = sdf_circle2d(Vector2::zeros(), Vector2::zeros(), 2.0);
    let b = sdf_circle2d(Vector2::zeros(), Vector2::zeros(), 1.0);
    let d = difference(a, b);
    assert!(d > 0.0, "Point inside both should be outside A-B");
}

#[test]
fn smooth_intersection_peaks_where_values_meet() {
    // Equal inputs: the blend sits k/4 above the sharp maximum.
    assert_relative_eq!(smooth_intersection(1.0, 1.0, 0.5), 1.125, epsilon = 1e-12);
}

#[test]
fn smooth_intersection_matches_max_when_far_apart() {
    assert_relative_eq!(smooth_intersection(3.0, -3.0, 0.5), 3.0, epsilon = 1e-12);
    assert_relative_eq!(smooth_intersection(-3.0, 3.0, 0.5), 3.0, epsilon = 1e-12);
}

#[test]
fn smooth_intersection_never_below_max() {
    let k = 0.4;
    for i in -20..=20 {
        let a = i as f64 * 0.05;
        let b = 0.1;
        let s = smooth_intersection(a, b, k);
        assert!(s >= a.max(b) - 1e-12, "a={a}: {s} < max");
        assert!(s <= a.max(b) + k / 4.0 + 1e-12, "a={a}: {s} exceeds k/4 bound");
    }
}
