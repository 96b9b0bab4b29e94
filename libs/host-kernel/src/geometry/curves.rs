//! Host curve types.
//!
//! Value types (`Line`, `Polyline`, `Arc`, ...) come with curve wrappers
//! (`LineCurve`, `PolylineCurve`, `ArcCurve`) that expose the same data
//! through the host's generic curve accessors.

use std::ops::Index;

use config::constants::{
    is_full_turn, Tolerances, FULL_TURN, MIN_HOST_CLOSED_POLYLINE_POINTS,
};

use super::plane::Plane;
use super::point::{Point3d, Vector3d};

// =============================================================================
// LINES AND RAYS
// =============================================================================

/// Straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point3d,
    pub to: Point3d,
}

impl Line {
    pub fn new(from: Point3d, to: Point3d) -> Self {
        Self { from, to }
    }

    /// Vector from `from` to `to`.
    pub fn direction(&self) -> Vector3d {
        self.to - self.from
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}

/// Curve wrapper around a [`Line`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCurve {
    line: Line,
}

impl LineCurve {
    pub fn new(from: Point3d, to: Point3d) -> Self {
        Self {
            line: Line::new(from, to),
        }
    }

    pub fn from_line(line: Line) -> Self {
        Self { line }
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn point_at_start(&self) -> Point3d {
        self.line.from
    }

    pub fn point_at_end(&self) -> Point3d {
        self.line.to
    }
}

/// Ray starting at `position` along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3d {
    pub position: Point3d,
    pub direction: Vector3d,
}

impl Ray3d {
    pub fn new(position: Point3d, direction: Vector3d) -> Self {
        Self {
            position,
            direction,
        }
    }

    pub fn point_at(&self, t: f64) -> Point3d {
        self.position + self.direction * t
    }
}

// =============================================================================
// POLYLINES
// =============================================================================

fn points_are_closed(points: &[Point3d]) -> bool {
    points.len() >= MIN_HOST_CLOSED_POLYLINE_POINTS && points.first() == points.last()
}

/// Ordered list of points.
///
/// There is no closure flag: a polyline is closed when it has at least
/// three points and the last one equals the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point3d>,
}

impl Polyline {
    pub fn new(points: Vec<Point3d>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        points_are_closed(&self.points)
    }

    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }
}

impl Index<usize> for Polyline {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Point3d {
        &self.points[index]
    }
}

/// Curve wrapper around a polyline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineCurve {
    points: Vec<Point3d>,
}

impl PolylineCurve {
    pub fn new(points: Vec<Point3d>) -> Self {
        Self { points }
    }

    pub fn from_polyline(polyline: &Polyline) -> Self {
        Self::new(polyline.points().to_vec())
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, index: usize) -> Option<Point3d> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn points(&self) -> &[Point3d] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        points_are_closed(&self.points)
    }

    pub fn to_polyline(&self) -> Polyline {
        Polyline::new(self.points.clone())
    }
}

// =============================================================================
// CIRCLES AND ARCS
// =============================================================================

/// Circle in a plane, centred on the plane origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub plane: Plane,
    pub radius: f64,
}

impl Circle {
    pub fn new(plane: Plane, radius: f64) -> Self {
        Self { plane, radius }
    }

    pub fn center(&self) -> Point3d {
        self.plane.origin
    }

    pub fn circumference(&self) -> f64 {
        FULL_TURN * self.radius.abs()
    }
}

/// Circular arc: a circle restricted to a sweep angle starting on the plane
/// x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub plane: Plane,
    pub radius: f64,
    /// Sweep angle in radians.
    pub angle: f64,
}

impl Arc {
    pub fn new(plane: Plane, radius: f64, angle: f64) -> Self {
        Self {
            plane,
            radius,
            angle,
        }
    }

    /// Full-turn arc covering `circle`.
    pub fn from_circle(circle: &Circle) -> Self {
        Self::new(circle.plane, circle.radius, FULL_TURN)
    }

    /// True when the sweep is a full turn within the host zero tolerance.
    ///
    /// # Examples
    /// ```
    /// use host_kernel::{Arc, Plane, Point3d};
    /// let plane = Plane::world_xy(Point3d::ORIGIN);
    /// assert!(Arc::new(plane, 1.0, std::f64::consts::TAU).is_circle());
    /// assert!(!Arc::new(plane, 1.0, std::f64::consts::PI).is_circle());
    /// ```
    pub fn is_circle(&self) -> bool {
        is_full_turn(self.angle, Tolerances::default().arc_closure)
    }

    pub fn center(&self) -> Point3d {
        self.plane.origin
    }

    pub fn length(&self) -> f64 {
        self.angle.abs() * self.radius.abs()
    }

    /// Point at sweep angle `t` (radians from the plane x axis).
    pub fn point_at(&self, t: f64) -> Point3d {
        let (sin, cos) = t.sin_cos();
        self.plane.origin
            + self.plane.x_axis * (self.radius * cos)
            + self.plane.y_axis * (self.radius * sin)
    }

    pub fn start_point(&self) -> Point3d {
        self.point_at(0.0)
    }

    pub fn end_point(&self) -> Point3d {
        self.point_at(self.angle)
    }
}

/// Curve wrapper around an [`Arc`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    arc: Arc,
}

impl ArcCurve {
    pub fn from_arc(arc: Arc) -> Self {
        Self { arc }
    }

    pub fn from_circle(circle: &Circle) -> Self {
        Self::from_arc(Arc::from_circle(circle))
    }

    pub fn arc(&self) -> Arc {
        self.arc
    }

    pub fn radius(&self) -> f64 {
        self.arc.radius
    }

    pub fn is_circle(&self) -> bool {
        self.arc.is_circle()
    }
}
