//! # Curve Conversion Tests

use std::f64::consts::PI;

use approx::assert_relative_eq;
use config::constants::FULL_TURN;
use domain_kernel::{Circle, Line, Plane, Point, Polyline, Ray, Segment, Vector};
use host_kernel::{
    Arc, ArcCurve, Circle as HostCircle, Line as HostLine, LineCurve, Plane as HostPlane,
    Point3d, Polyline as HostPolyline, PolylineCurve, Ray3d, Vector3d,
};

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]
}

fn xy_plane() -> Plane {
    Plane::new(Point::ORIGIN, Vector::WORLD_X, Vector::WORLD_Y, Vector::WORLD_Z)
}

// =============================================================================
// LINES
// =============================================================================

#[test]
fn test_line_end_is_origin_plus_axis() {
    let line = Line::new(Point::new(1.0, 1.0, 0.0), Vector::new(2.0, 0.0, 0.0));
    let host: HostLine = line.cast_to();
    assert_eq!(host.from, Point3d::new(1.0, 1.0, 0.0));
    assert_eq!(host.to, Point3d::new(3.0, 1.0, 0.0));

    let back: Line = host.cast_to();
    assert_eq!(back, line);
}

#[test]
fn test_line_curve_matches_line() {
    let line = Line::new(Point::ORIGIN, Vector::new(0.0, 0.0, 5.0));
    let curve: LineCurve = line.cast_to();
    assert_eq!(curve.point_at_end(), Point3d::new(0.0, 0.0, 5.0));

    let back: Line = curve.cast_to();
    assert_eq!(back.axis, Vector::new(0.0, 0.0, 5.0));
}

#[test]
fn test_segment_copies_end_points() {
    let segment = Segment::new(Point::new(1.0, 2.0, 3.0), Point::new(4.0, 5.0, 6.0));
    let host: HostLine = segment.cast_to();
    assert_relative_eq!(host.length(), segment.length());

    let curve: LineCurve = segment.cast_to();
    let back: Segment = curve.cast_to();
    assert_eq!(back, segment);

    let from_line: Segment = host.cast_to();
    assert_eq!(from_line, segment);
}

#[test]
fn test_ray_copies_fields() {
    let ray = Ray::new(Point::new(0.0, 1.0, 0.0), Vector::new(0.0, 0.0, -1.0));
    let host: Ray3d = ray.cast_to();
    assert_eq!(host.position, Point3d::new(0.0, 1.0, 0.0));
    assert_eq!(host.direction, Vector3d::new(0.0, 0.0, -1.0));

    let back: Ray = host.cast_to();
    assert_eq!(back, ray);
}

// =============================================================================
// POLYLINES
// =============================================================================

#[test]
fn test_closed_polyline_repeats_first_vertex() {
    let polyline = Polyline::new(square(), true);
    let host: HostPolyline = polyline.try_cast_to().unwrap();

    assert_eq!(host.count(), 5);
    assert_eq!(host[0], host[4]);
    assert!(host.is_closed());

    let back: Polyline = host.cast_to();
    assert_eq!(back, polyline);
}

#[test]
fn test_open_polyline_transfers_one_to_one() {
    let polyline = Polyline::new(square(), false);
    let host: HostPolyline = polyline.try_cast_to().unwrap();

    assert_eq!(host.count(), 4);
    assert!(!host.is_closed());

    let back: Polyline = host.cast_to();
    assert_eq!(back, polyline);
}

#[test]
fn test_polyline_curve_round_trip() {
    let polyline = Polyline::new(square(), true);
    let curve: PolylineCurve = polyline.try_cast_to().unwrap();
    assert_eq!(curve.point_count(), 5);

    let back: Polyline = curve.cast_to();
    assert_eq!(back.vertex_count(), 4);
    assert!(back.is_closed());
}

#[test]
fn test_two_vertex_closed_polyline_survives() {
    let polyline = Polyline::new(vec![Point::ORIGIN, Point::new(1.0, 0.0, 0.0)], true);
    let host: HostPolyline = polyline.try_cast_to().unwrap();
    assert_eq!(host.count(), 3);

    let back: Polyline = host.cast_to();
    assert_eq!(back, polyline);
}

#[test]
fn test_degenerate_closed_polyline_rejected() {
    for vertices in [vec![], vec![Point::ORIGIN]] {
        let count = vertices.len();
        let result: BridgeResult<HostPolyline> = Polyline::new(vertices, true).try_cast_to();
        assert_eq!(
            result,
            Err(BridgeError::DegenerateClosedPolyline { count, min: 2 })
        );
    }

    // Open polylines of any size convert
    let empty: HostPolyline = Polyline::new(vec![], false).try_cast_to().unwrap();
    assert_eq!(empty.count(), 0);
}

#[test]
fn test_host_polyline_closed_by_coincident_ends() {
    let points = vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(1.0, 0.0, 0.0),
        Point3d::new(0.0, 1.0, 0.0),
        Point3d::new(0.0, 0.0, 0.0),
    ];
    let polyline: Polyline = HostPolyline::new(points).cast_to();
    assert!(polyline.is_closed());
    assert_eq!(polyline.vertex_count(), 3);
}

// =============================================================================
// CIRCLES AND ARCS
// =============================================================================

#[test]
fn test_circle_to_host_forms() {
    let circle = Circle::new(xy_plane(), 2.5);

    let host: HostCircle = circle.cast_to();
    assert_eq!(host.radius, 2.5);

    let arc: Arc = circle.cast_to();
    assert_eq!(arc.angle, FULL_TURN);
    assert!(arc.is_circle());

    let curve: ArcCurve = circle.cast_to();
    assert!(curve.is_circle());
    assert_eq!(curve.radius(), 2.5);

    let back: Circle = host.cast_to();
    assert_eq!(back, circle);
}

#[test]
fn test_full_arc_converts_to_circle() {
    let plane = HostPlane::world_xy(Point3d::new(1.0, 0.0, 0.0));
    let circle: Circle = Arc::new(plane, 3.0, FULL_TURN).try_cast_to().unwrap();
    assert_eq!(circle.radius, 3.0);
    assert_eq!(circle.centre(), Point::new(1.0, 0.0, 0.0));

    let circle: Circle = ArcCurve::from_arc(Arc::new(plane, 3.0, FULL_TURN))
        .try_cast_to()
        .unwrap();
    assert_eq!(circle.radius, 3.0);
}

#[test]
fn test_partial_arc_rejected() {
    let plane = HostPlane::world_xy(Point3d::ORIGIN);

    let result: BridgeResult<Circle> = Arc::new(plane, 1.0, PI).try_cast_to();
    assert_eq!(
        result,
        Err(BridgeError::NotACircle {
            source_kind: "arc",
            angle: PI
        })
    );

    let result: BridgeResult<Circle> = ArcCurve::from_arc(Arc::new(plane, 1.0, PI)).try_cast_to();
    assert!(matches!(
        result,
        Err(BridgeError::NotACircle {
            source_kind: "arc curve",
            ..
        })
    ));
}
