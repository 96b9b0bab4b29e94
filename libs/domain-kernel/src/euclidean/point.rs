use std::ops::{Add, AddAssign, Div, Sub};

use glam::DVec3;

use super::vector::Vector;

/// A position in 3D space.
///
/// # Examples
/// ```
/// use domain_kernel::{Point, Vector};
/// let p = Point::new(1.0, 2.0, 3.0) + Vector::new(1.0, 0.0, 0.0);
/// assert_eq!(p, Point::new(2.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Arithmetic mean of a set of points, `None` when the set is empty.
    ///
    /// # Examples
    /// ```
    /// use domain_kernel::Point;
    /// let points = [Point::new(0.0, 0.0, 0.0), Point::new(2.0, 4.0, 6.0)];
    /// assert_eq!(Point::mean(&points), Some(Point::new(1.0, 2.0, 3.0)));
    /// ```
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Point::ORIGIN, |acc, p| acc + *p);
        Some(sum / points.len() as f64)
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        (DVec3::from(self) + DVec3::from(rhs)).into()
    }
}

// Affine combination helper: only meaningful when followed by a division.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        (DVec3::from(self) + DVec3::from(rhs)).into()
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        (DVec3::from(self) - DVec3::from(rhs)).into()
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        (DVec3::from(self) / rhs).into()
    }
}
