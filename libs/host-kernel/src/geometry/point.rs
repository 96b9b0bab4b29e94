//! Thin wrappers around `glam::DVec3` for host points and vectors.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use config::constants::UNITIZE_TOLERANCE;
use glam::DVec3;

/// Location in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: Point3d) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }

    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Direction and magnitude in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X_AXIS: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z_AXIS: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        self.to_dvec3().length()
    }

    pub fn dot(&self, other: Vector3d) -> f64 {
        self.to_dvec3().dot(other.to_dvec3())
    }

    pub fn cross(&self, other: Vector3d) -> Vector3d {
        Self::from_dvec3(self.to_dvec3().cross(other.to_dvec3()))
    }

    /// Unit vector with the same direction, `None` if the vector is too short.
    ///
    /// # Examples
    /// ```
    /// use host_kernel::Vector3d;
    /// assert_eq!(Vector3d::new(0.0, 3.0, 0.0).unitize(), Some(Vector3d::Y_AXIS));
    /// assert_eq!(Vector3d::ZERO.unitize(), None);
    /// ```
    pub fn unitize(&self) -> Option<Vector3d> {
        let length = self.length();
        if !length.is_finite() || length <= UNITIZE_TOLERANCE {
            return None;
        }
        Some(Self::from_dvec3(self.to_dvec3() / length))
    }

    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_dvec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add<Vector3d> for Point3d {
    type Output = Point3d;

    fn add(self, rhs: Vector3d) -> Point3d {
        Point3d::from_dvec3(self.to_dvec3() + rhs.to_dvec3())
    }
}

impl Sub for Point3d {
    type Output = Vector3d;

    fn sub(self, rhs: Point3d) -> Vector3d {
        Vector3d::from_dvec3(self.to_dvec3() - rhs.to_dvec3())
    }
}

impl Add for Vector3d {
    type Output = Vector3d;

    fn add(self, rhs: Vector3d) -> Vector3d {
        Vector3d::from_dvec3(self.to_dvec3() + rhs.to_dvec3())
    }
}

impl Sub for Vector3d {
    type Output = Vector3d;

    fn sub(self, rhs: Vector3d) -> Vector3d {
        Vector3d::from_dvec3(self.to_dvec3() - rhs.to_dvec3())
    }
}

impl Mul<f64> for Vector3d {
    type Output = Vector3d;

    fn mul(self, rhs: f64) -> Vector3d {
        Vector3d::from_dvec3(self.to_dvec3() * rhs)
    }
}

impl MulAssign<f64> for Vector3d {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Neg for Vector3d {
    type Output = Vector3d;

    fn neg(self) -> Vector3d {
        Vector3d::from_dvec3(-self.to_dvec3())
    }
}
