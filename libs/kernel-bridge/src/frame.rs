//! # Frame and Plane Conversions
//!
//! The host has a single oriented plane type. A domain [`Frame`] maps to it
//! only when its z axis is orthogonal to both in-plane axes; the z length
//! survives as the magnitude of the host `z_axis`. A domain [`Plane`] maps
//! to it without checks, carrying its normal verbatim.

use domain_kernel::{Frame, Plane, Vector};
use host_kernel::Plane as HostPlane;

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

impl TryCastTo<HostPlane> for Frame {
    /// # Errors
    ///
    /// [`BridgeError::NonOrthogonalFrame`] when z is not orthogonal to x or y.
    fn try_cast_to(&self) -> BridgeResult<HostPlane> {
        let orthogonal = Vector::are_orthogonal(&self.x_axis, &self.z_axis)
            && Vector::are_orthogonal(&self.y_axis, &self.z_axis);
        if !orthogonal {
            return Err(BridgeError::NonOrthogonalFrame);
        }

        let mut plane = HostPlane::new(
            self.origin.cast_to(),
            self.x_axis.cast_to(),
            self.y_axis.cast_to(),
        );
        plane.z_axis *= self.z_axis.length();
        Ok(plane)
    }
}

impl CastTo<Frame> for HostPlane {
    fn cast_to(&self) -> Frame {
        Frame::new(
            self.origin.cast_to(),
            self.x_axis.cast_to(),
            self.y_axis.cast_to(),
            self.z_axis.cast_to(),
        )
    }
}

impl CastTo<HostPlane> for Plane {
    fn cast_to(&self) -> HostPlane {
        HostPlane {
            z_axis: self.normal.cast_to(),
            ..HostPlane::new(
                self.origin.cast_to(),
                self.u_axis.cast_to(),
                self.v_axis.cast_to(),
            )
        }
    }
}

impl CastTo<Plane> for HostPlane {
    fn cast_to(&self) -> Plane {
        Plane::new(
            self.origin.cast_to(),
            self.x_axis.cast_to(),
            self.y_axis.cast_to(),
            self.z_axis.cast_to(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use domain_kernel::Point;
    use host_kernel::{Point3d, Vector3d};

    use super::*;

    fn frame(z: Vector) -> Frame {
        Frame::new(Point::new(1.0, 2.0, 3.0), Vector::WORLD_X, Vector::WORLD_Y, z)
    }

    #[test]
    fn test_frame_scales_host_z_axis() {
        let plane: HostPlane = frame(Vector::new(0.0, 0.0, 2.0)).try_cast_to().unwrap();
        assert_eq!(plane.origin, Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(plane.x_axis, Vector3d::X_AXIS);
        assert_relative_eq!(plane.z_axis.z, 2.0);
        assert!(plane.is_valid());
    }

    #[test]
    fn test_frame_with_skewed_z_rejected() {
        let result: BridgeResult<HostPlane> = frame(Vector::new(1.0, 0.0, 1.0)).try_cast_to();
        assert_eq!(result, Err(BridgeError::NonOrthogonalFrame));

        let result: BridgeResult<HostPlane> = frame(Vector::new(0.0, 0.5, 1.0)).try_cast_to();
        assert_eq!(result, Err(BridgeError::NonOrthogonalFrame));
    }

    #[test]
    fn test_frame_with_skewed_in_plane_axes_accepted() {
        // Only z is checked; the host orthonormalises x and y itself.
        let skewed = Frame::new(
            Point::ORIGIN,
            Vector::new(1.0, 0.0, 0.0),
            Vector::new(1.0, 1.0, 0.0),
            Vector::WORLD_Z,
        );
        let plane: HostPlane = skewed.try_cast_to().unwrap();
        assert_relative_eq!(plane.y_axis.x, 0.0);
        assert_relative_eq!(plane.y_axis.y, 1.0);
    }

    #[test]
    fn test_host_plane_to_frame_copies_axes() {
        let mut plane = HostPlane::world_xy(Point3d::new(0.0, 0.0, 5.0));
        plane.z_axis *= 3.0;
        let frame: Frame = plane.cast_to();
        assert_eq!(frame.origin, Point::new(0.0, 0.0, 5.0));
        assert_eq!(frame.z_axis, Vector::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_plane_normal_is_carried_verbatim() {
        let plane = Plane::new(
            Point::ORIGIN,
            Vector::WORLD_X,
            Vector::WORLD_Y,
            Vector::new(0.0, 0.0, -4.0),
        );
        let host: HostPlane = plane.cast_to();
        assert_eq!(host.z_axis, Vector3d::new(0.0, 0.0, -4.0));

        let back: Plane = host.cast_to();
        assert_eq!(back, plane);
    }
}
