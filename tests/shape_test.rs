use std::sync::Arc;

use approx::assert_relative_eq;
use nalgebra::{Vector2, Vector3};
use cylwrap::error::SdfError;
use cylwrap::shape::{
    translate2d, translate3d, Circle2d, Cylinder, Difference, Difference2d, FnSdf2d,
    Intersection, Rect2d, Sdf, Sdf2d, Union, Union2d,
};
use cylwrap::types::{BBox2, BBox3};

#[test]
fn difference_shape_subtracts() {
    let outer = Cylinder::new(4.0, 2.0, 0.0).unwrap();
    let inner = Cylinder::new(4.0, 1.0, 0.0).unwrap();
    let shell = Difference::new(outer, inner);
    assert!(shell.evaluate(Vector3::zeros()) > 0.0);
    assert!(shell.evaluate(Vector3::new(1.5, 0.0, 0.0)) < 0.0);
    assert_eq!(shell.bounding_box().max, Vector3::new(2.0, 2.0, 2.0));
}

#[test]
fn cylinder_rejects_bad_geometry() {
    assert_eq!(Cylinder::new(10.0, 0.0, 0.0), Err(SdfError::InvalidRadius(0.0)));
    assert_eq!(Cylinder::new(10.0, -1.0, 0.0), Err(SdfError::InvalidRadius(-1.0)));
    assert_eq!(Cylinder::new(10.0, 1.0, -0.1), Err(SdfError::InvalidRounding(-0.1)));
    assert_eq!(
        Cylinder::new(10.0, 1.0, 2.0),
        Err(SdfError::RoundExceedsRadius { round: 2.0, radius: 1.0 })
    );
    assert_eq!(
        Cylinder::new(1.0, 2.0, 1.0),
        Err(SdfError::HeightTooSmall { height: 1.0, round: 1.0 })
    );
}

#[test]
fn cylinder_is_centered_on_z_axis() {
    let c = Cylinder::new(10.0, 2.0, 0.0).unwrap();
    assert_eq!(
        c.bounding_box(),
        BBox3::new(Vector3::new(-2.0, -2.0, -5.0), Vector3::new(2.0, 2.0, 5.0))
    );
    assert_relative_eq!(c.evaluate(Vector3::zeros()), -2.0, epsilon = 1e-9);
    assert_relative_eq!(c.evaluate(Vector3::new(0.0, 3.0, 0.0)), 1.0, epsilon = 1e-9);
    assert_relative_eq!(c.evaluate(Vector3::new(0.0, 0.0, -6.0)), 1.0, epsilon = 1e-9);
}

#[test]
fn zero_height_cylinder_is_allowed() {
    let c = Cylinder::new(0.0, 1.0, 0.0).unwrap();
    assert_eq!(c.bounding_box().size().z, 0.0);
}

#[test]
fn translate_moves_field_and_box() {
    let c = translate3d(Cylinder::new(10.0, 2.0, 0.0).unwrap(), 0.0, 0.0, 5.0);
    assert_relative_eq!(c.evaluate(Vector3::new(0.0, 0.0, 5.0)), -2.0, epsilon = 1e-9);
    let bb = c.bounding_box();
    assert_eq!(bb.min.z, 0.0);
    assert_eq!(bb.max.z, 10.0);
}

#[test]
fn union_and_intersection_boxes() {
    let a = Cylinder::new(2.0, 1.0, 0.0).unwrap();
    let b = translate3d(Cylinder::new(2.0, 1.0, 0.0).unwrap(), 1.5, 0.0, 0.0);
    let u = Union::new(&a, &b);
    assert_eq!(u.bounding_box().max.x, 2.5);
    assert_eq!(u.bounding_box().min.x, -1.0);
    let i = Intersection::new(&a, &b);
    assert_eq!(i.bounding_box().min.x, 0.5);
    assert_eq!(i.bounding_box().max.x, 1.0);
    assert!(i.evaluate(Vector3::new(0.75, 0.0, 0.0)) < 0.0);
}

#[test]
fn shared_and_boxed_shapes_compose() {
    let rod = Cylinder::new(2.0, 1.0, 0.0).unwrap();
    let shared: Arc<dyn Sdf> = Arc::new(rod.clone());
    let boxed: Box<dyn Sdf> = Box::new(translate3d(rod, 3.0, 0.0, 0.0));
    let u = Union::new(shared, boxed);
    assert!(u.evaluate(Vector3::new(3.0, 0.0, 0.0)) < 0.0);
    assert!(u.evaluate(Vector3::zeros()) < 0.0);
    assert!(u.evaluate(Vector3::new(1.5, 0.0, 0.0)) > 0.0);
}

#[test]
fn planar_shapes_report_boxes() {
    let r = Rect2d::new(Vector2::new(0.0, 5.0), Vector2::new(3.0, 5.0));
    assert_eq!(r.bounding_box(), BBox2::new(Vector2::new(-3.0, 0.0), Vector2::new(3.0, 10.0)));
    let c = translate2d(Circle2d::new(Vector2::zeros(), 1.0), 4.0, 0.0);
    assert_eq!(c.bounding_box().max, Vector2::new(5.0, 1.0));
    assert!(c.evaluate(Vector2::new(4.0, 0.0)) < 0.0);

    let u = Union2d::new(&r, &c);
    assert_eq!(u.bounding_box().max.x, 5.0);
    let d = Difference2d::new(&r, &c);
    assert_eq!(d.bounding_box(), r.bounding_box());
}

#[test]
fn closure_shape_uses_supplied_box() {
    let bbox = BBox2::new(Vector2::new(-1.0, 0.0), Vector2::new(1.0, 2.0));
    let stripe = FnSdf2d::new(|p: Vector2<f64>| p.x.abs() - 1.0, bbox);
    assert_eq!(stripe.bounding_box(), bbox);
    assert_relative_eq!(stripe.evaluate(Vector2::new(0.5, 100.0)), -0.5, epsilon = 1e-12);
}
