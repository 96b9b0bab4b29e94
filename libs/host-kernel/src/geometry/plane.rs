use config::constants::Tolerances;

use super::point::{Point3d, Vector3d};

/// Oriented plane: origin plus a right-handed basis.
///
/// [`Plane::new`] always produces unit, mutually orthogonal axes. The axes
/// are public fields: callers may rescale `z_axis` afterwards to carry a
/// magnitude, which [`Plane::is_valid`] tolerates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point3d,
    pub x_axis: Vector3d,
    pub y_axis: Vector3d,
    pub z_axis: Vector3d,
}

impl Plane {
    /// Plane with every axis zero; what [`Plane::new`] returns for
    /// directions that cannot span a plane.
    pub const UNSET: Self = Self {
        origin: Point3d::ORIGIN,
        x_axis: Vector3d::ZERO,
        y_axis: Vector3d::ZERO,
        z_axis: Vector3d::ZERO,
    };

    /// Builds an orthonormal plane from an origin and two in-plane directions.
    ///
    /// `x_direction` is unitized; `y_direction` is made orthogonal to it and
    /// unitized; the z axis is their cross product. Parallel or zero
    /// directions give [`Plane::UNSET`] moved to `origin`.
    ///
    /// # Examples
    /// ```
    /// use host_kernel::{Plane, Point3d, Vector3d};
    /// let plane = Plane::new(Point3d::ORIGIN, Vector3d::new(2.0, 0.0, 0.0), Vector3d::new(1.0, 3.0, 0.0));
    /// assert_eq!(plane.x_axis, Vector3d::X_AXIS);
    /// assert_eq!(plane.y_axis, Vector3d::Y_AXIS);
    /// assert_eq!(plane.z_axis, Vector3d::Z_AXIS);
    /// ```
    pub fn new(origin: Point3d, x_direction: Vector3d, y_direction: Vector3d) -> Self {
        let basis = x_direction.unitize().and_then(|x_axis| {
            let y_rejected = y_direction - x_axis * x_axis.dot(y_direction);
            y_rejected
                .unitize()
                .map(|y_axis| (x_axis, y_axis, x_axis.cross(y_axis)))
        });

        match basis {
            Some((x_axis, y_axis, z_axis)) => Self {
                origin,
                x_axis,
                y_axis,
                z_axis,
            },
            None => Self {
                origin,
                ..Self::UNSET
            },
        }
    }

    /// World XY plane through `origin`.
    pub fn world_xy(origin: Point3d) -> Self {
        Self {
            origin,
            x_axis: Vector3d::X_AXIS,
            y_axis: Vector3d::Y_AXIS,
            z_axis: Vector3d::Z_AXIS,
        }
    }

    /// Normal direction (alias of `z_axis`).
    #[inline]
    pub fn normal(&self) -> Vector3d {
        self.z_axis
    }

    /// True when x and y are orthonormal and z is a non-zero vector
    /// orthogonal to both.
    pub fn is_valid(&self) -> bool {
        let tolerance = Tolerances::default().orthogonality;
        let unit = |v: Vector3d| (v.length() - 1.0).abs() <= tolerance;
        let orthogonal =
            |a: Vector3d, b: Vector3d| a.dot(b).abs() <= tolerance * a.length() * b.length();

        unit(self.x_axis)
            && unit(self.y_axis)
            && self.z_axis.length() > 0.0
            && orthogonal(self.x_axis, self.y_axis)
            && orthogonal(self.x_axis, self.z_axis)
            && orthogonal(self.y_axis, self.z_axis)
    }
}
