//! Sphere conversions.
//!
//! The host stores a sphere as an equatorial plane and a radius; outbound
//! spheres get the world-XY oriented plane through their centre.

use domain_kernel::Sphere;
use host_kernel::Sphere as HostSphere;

use crate::cast::CastTo;

impl CastTo<HostSphere> for Sphere {
    fn cast_to(&self) -> HostSphere {
        HostSphere::from_center(self.centre.cast_to(), self.radius)
    }
}

impl CastTo<Sphere> for HostSphere {
    fn cast_to(&self) -> Sphere {
        Sphere::new(self.center().cast_to(), self.radius)
    }
}
