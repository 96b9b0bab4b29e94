//! Host geometry value types.

pub mod curves;
pub mod plane;
pub mod point;
pub mod sphere;

pub use curves::{Arc, ArcCurve, Circle, Line, LineCurve, Polyline, PolylineCurve, Ray3d};
pub use plane::Plane;
pub use point::{Point3d, Vector3d};
pub use sphere::Sphere;

#[cfg(test)]
mod tests;
