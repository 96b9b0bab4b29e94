//! Euclidean 3D value types.
//!
//! Coordinates are stored as `f64`; arithmetic goes through `glam::DVec3`.

pub mod curves;
pub mod frame;
pub mod point;
pub mod sphere;
pub mod vector;

pub use curves::{Circle, Line, Polyline, Ray, Segment};
pub use frame::{Frame, Plane};
pub use point::Point;
pub use sphere::Sphere;
pub use vector::Vector;
