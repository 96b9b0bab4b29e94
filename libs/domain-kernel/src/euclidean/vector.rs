use std::ops::{Add, Mul, Neg, Sub};

use config::constants::Tolerances;
use glam::DVec3;

/// A free vector in 3D space (direction and magnitude).
///
/// # Examples
/// ```
/// use domain_kernel::Vector;
/// let v = Vector::new(3.0, 4.0, 0.0);
/// assert_eq!(v.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const WORLD_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const WORLD_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const WORLD_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        DVec3::from(*self).length()
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> f64 {
        DVec3::from(*self).dot(DVec3::from(*other))
    }

    /// Cross product.
    pub fn cross(&self, other: &Vector) -> Vector {
        DVec3::from(*self).cross(DVec3::from(*other)).into()
    }

    /// Tests whether two vectors are orthogonal with the default tolerance.
    ///
    /// # Examples
    /// ```
    /// use domain_kernel::Vector;
    /// assert!(Vector::are_orthogonal(&Vector::WORLD_X, &Vector::new(0.0, 5.0, 0.0)));
    /// assert!(!Vector::are_orthogonal(&Vector::WORLD_X, &Vector::new(1.0, 1.0, 0.0)));
    /// ```
    pub fn are_orthogonal(a: &Vector, b: &Vector) -> bool {
        Self::are_orthogonal_within(a, b, &Tolerances::default())
    }

    /// Tests whether two vectors are orthogonal: `|a·b| <= tol * |a| * |b|`.
    ///
    /// A zero vector is orthogonal to everything.
    pub fn are_orthogonal_within(a: &Vector, b: &Vector, tolerances: &Tolerances) -> bool {
        a.dot(b).abs() <= tolerances.orthogonality * a.length() * b.length()
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        (DVec3::from(self) + DVec3::from(rhs)).into()
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        (DVec3::from(self) - DVec3::from(rhs)).into()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        (DVec3::from(self) * rhs).into()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        (-DVec3::from(self)).into()
    }
}
