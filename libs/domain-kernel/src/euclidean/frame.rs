use super::point::Point;
use super::vector::Vector;

/// An oriented frame: an origin and three axes.
///
/// The axes are stored as given. Nothing is normalised or orthogonalised on
/// construction; consumers that require an orthogonal basis check it
/// themselves with [`Vector::are_orthogonal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point,
    pub x_axis: Vector,
    pub y_axis: Vector,
    pub z_axis: Vector,
}

impl Frame {
    pub fn new(origin: Point, x_axis: Vector, y_axis: Vector, z_axis: Vector) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// World frame at the origin.
    pub fn world() -> Self {
        Self::new(Point::ORIGIN, Vector::WORLD_X, Vector::WORLD_Y, Vector::WORLD_Z)
    }

    /// True when the z axis is orthogonal to both x and y.
    pub fn has_orthogonal_z(&self) -> bool {
        Vector::are_orthogonal(&self.x_axis, &self.z_axis)
            && Vector::are_orthogonal(&self.y_axis, &self.z_axis)
    }
}

/// A plane given by an origin, two in-plane axes and a normal.
///
/// Unlike [`Frame`] no relation between the axes is assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point,
    pub u_axis: Vector,
    pub v_axis: Vector,
    pub normal: Vector,
}

impl Plane {
    pub fn new(origin: Point, u_axis: Vector, v_axis: Vector, normal: Vector) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
            normal,
        }
    }

    /// World XY plane through `origin`.
    pub fn world_xy(origin: Point) -> Self {
        Self::new(origin, Vector::WORLD_X, Vector::WORLD_Y, Vector::WORLD_Z)
    }
}
