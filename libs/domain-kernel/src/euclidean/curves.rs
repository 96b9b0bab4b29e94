//! One-dimensional manifolds: lines, rays, segments, polylines and circles.

use std::ops::Index;

use super::frame::Plane;
use super::point::Point;
use super::vector::Vector;

/// Infinite line through `origin` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub axis: Vector,
}

impl Line {
    pub fn new(origin: Point, axis: Vector) -> Self {
        Self { origin, axis }
    }

    /// Point at parameter `t` (`origin + t * axis`).
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.axis * t
    }
}

/// Half-infinite line starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub axis: Vector,
}

impl Ray {
    pub fn new(origin: Point, axis: Vector) -> Self {
        Self { origin, axis }
    }
}

/// Bounded straight curve between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_point: Point,
    pub end_point: Point,
}

impl Segment {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    pub fn length(&self) -> f64 {
        self.start_point.distance_to(&self.end_point)
    }
}

/// Ordered sequence of points with an explicit closure flag.
///
/// The vertex list never repeats the first vertex at the end: a closed
/// polyline with `n` vertices has `n` segments, an open one `n - 1`.
///
/// # Examples
/// ```
/// use domain_kernel::{Point, Polyline};
/// let square = Polyline::new(
///     vec![
///         Point::new(0.0, 0.0, 0.0),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(1.0, 1.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///     ],
///     true,
/// );
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.segment_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    vertices: Vec<Point>,
    is_closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>, is_closed: bool) -> Self {
        Self {
            vertices,
            is_closed,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Option<&Point> {
        self.vertices.get(index)
    }

    /// Number of straight pieces, counting the closing one.
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            n if self.is_closed => n,
            n => n - 1,
        }
    }
}

impl Index<usize> for Polyline {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.vertices[index]
    }
}

/// Full circle of `radius` centred on the plane origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub plane: Plane,
    pub radius: f64,
}

impl Circle {
    pub fn new(plane: Plane, radius: f64) -> Self {
        Self { plane, radius }
    }

    pub fn centre(&self) -> Point {
        self.plane.origin
    }
}
