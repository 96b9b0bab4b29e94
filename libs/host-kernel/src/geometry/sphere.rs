use super::plane::Plane;
use super::point::Point3d;

/// Sphere defined by its equatorial plane and radius.
///
/// The plane orientation fixes the sphere's parametrisation (poles along the
/// plane normal); the centre is the plane origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub equatorial_plane: Plane,
    pub radius: f64,
}

impl Sphere {
    pub fn new(equatorial_plane: Plane, radius: f64) -> Self {
        Self {
            equatorial_plane,
            radius,
        }
    }

    /// World-aligned sphere centred on `center`.
    pub fn from_center(center: Point3d, radius: f64) -> Self {
        Self::new(Plane::world_xy(center), radius)
    }

    pub fn center(&self) -> Point3d {
        self.equatorial_plane.origin
    }

    pub fn north_pole(&self) -> Point3d {
        self.center() + self.equatorial_plane.z_axis * self.radius
    }
}
