//! Point and vector conversions: plain coordinate copies.

use domain_kernel::{Point, Vector};
use host_kernel::{Point3d, Vector3d};

use crate::cast::CastTo;

impl CastTo<Point3d> for Point {
    #[inline]
    fn cast_to(&self) -> Point3d {
        Point3d::new(self.x, self.y, self.z)
    }
}

impl CastTo<Point> for Point3d {
    #[inline]
    fn cast_to(&self) -> Point {
        Point::new(self.x, self.y, self.z)
    }
}

impl CastTo<Vector3d> for Vector {
    #[inline]
    fn cast_to(&self) -> Vector3d {
        Vector3d::new(self.x, self.y, self.z)
    }
}

impl CastTo<Vector> for Vector3d {
    #[inline]
    fn cast_to(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }
}
