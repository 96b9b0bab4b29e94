//! Host geometry tests.

use super::*;
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

fn p(x: f64, y: f64, z: f64) -> Point3d {
    Point3d::new(x, y, z)
}

// =============================================================================
// PLANE TESTS
// =============================================================================

#[test]
fn test_plane_orthonormalizes_axes() {
    let plane = Plane::new(
        p(1.0, 2.0, 3.0),
        Vector3d::new(0.0, 0.0, 5.0),
        Vector3d::new(1.0, 0.0, 1.0),
    );
    assert!(plane.is_valid());
    assert_eq!(plane.origin, p(1.0, 2.0, 3.0));
    assert_relative_eq!(plane.x_axis.z, 1.0);
    assert_relative_eq!(plane.y_axis.x, 1.0);
    assert_relative_eq!(plane.y_axis.z, 0.0);
    // z = x × y = (0,0,1) × (1,0,0) = (0,1,0)
    assert_relative_eq!(plane.z_axis.y, 1.0);
}

#[test]
fn test_plane_parallel_directions_unset() {
    let plane = Plane::new(
        p(1.0, 0.0, 0.0),
        Vector3d::X_AXIS,
        Vector3d::new(-2.0, 0.0, 0.0),
    );
    assert!(!plane.is_valid());
    assert_eq!(plane.origin, p(1.0, 0.0, 0.0));
    assert_eq!(plane.z_axis, Vector3d::ZERO);
}

#[test]
fn test_plane_scaled_normal_is_valid() {
    let mut plane = Plane::world_xy(Point3d::ORIGIN);
    plane.z_axis *= 4.0;
    assert!(plane.is_valid());
    assert_eq!(plane.normal(), Vector3d::new(0.0, 0.0, 4.0));
}

// =============================================================================
// CURVE TESTS
// =============================================================================

#[test]
fn test_line_and_curve_accessors() {
    let line = Line::new(p(0.0, 0.0, 0.0), p(0.0, 3.0, 4.0));
    assert_relative_eq!(line.length(), 5.0);
    assert_eq!(line.direction(), Vector3d::new(0.0, 3.0, 4.0));

    let curve = LineCurve::from_line(line);
    assert_eq!(curve.point_at_start(), line.from);
    assert_eq!(curve.point_at_end(), line.to);
    assert_eq!(curve.line(), line);
}

#[test]
fn test_ray_point_at() {
    let ray = Ray3d::new(p(1.0, 1.0, 1.0), Vector3d::new(0.0, 0.0, 2.0));
    assert_eq!(ray.point_at(1.5), p(1.0, 1.0, 4.0));
}

#[test]
fn test_polyline_closure_by_coincidence() {
    let open = Polyline::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
    assert!(!open.is_closed());

    let closed = Polyline::new(vec![
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 0.0, 0.0),
    ]);
    assert!(closed.is_closed());
    assert_relative_eq!(closed.length(), 2.0 + 2f64.sqrt());
}

#[test]
fn test_polyline_two_coincident_points_not_closed() {
    let polyline = Polyline::new(vec![p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)]);
    assert!(!polyline.is_closed());
}

#[test]
fn test_polyline_curve_matches_polyline() {
    let polyline = Polyline::new(vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 0.0, 0.0)]);
    let curve = PolylineCurve::from_polyline(&polyline);
    assert_eq!(curve.point_count(), 3);
    assert!(curve.is_closed());
    assert_eq!(curve.point(1), Some(p(2.0, 0.0, 0.0)));
    assert_eq!(curve.point(3), None);
    assert_eq!(curve.to_polyline(), polyline);
}

#[test]
fn test_arc_is_circle() {
    let plane = Plane::world_xy(Point3d::ORIGIN);
    assert!(Arc::new(plane, 2.0, TAU).is_circle());
    assert!(Arc::new(plane, 2.0, -TAU).is_circle());
    assert!(!Arc::new(plane, 2.0, PI).is_circle());
    assert!(!Arc::new(plane, 2.0, TAU - 1e-6).is_circle());
}

#[test]
fn test_arc_points() {
    let arc = Arc::new(Plane::world_xy(p(1.0, 0.0, 0.0)), 2.0, FRAC_PI_2);
    assert_eq!(arc.start_point(), p(3.0, 0.0, 0.0));
    let end = arc.end_point();
    assert_relative_eq!(end.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(end.y, 2.0);
    assert_relative_eq!(arc.length(), PI);
}

#[test]
fn test_arc_curve_from_circle() {
    let circle = Circle::new(Plane::world_xy(p(0.0, 0.0, 1.0)), 3.0);
    let curve = ArcCurve::from_circle(&circle);
    assert!(curve.is_circle());
    assert_eq!(curve.radius(), 3.0);
    assert_eq!(curve.arc().plane, circle.plane);
    assert_relative_eq!(circle.circumference(), 6.0 * PI);
    assert_eq!(circle.center(), p(0.0, 0.0, 1.0));
}

// =============================================================================
// SPHERE TESTS
// =============================================================================

#[test]
fn test_sphere_center_and_pole() {
    let sphere = Sphere::from_center(p(1.0, 2.0, 3.0), 2.0);
    assert_eq!(sphere.center(), p(1.0, 2.0, 3.0));
    assert_eq!(sphere.north_pole(), p(1.0, 2.0, 5.0));
}
