//! # Conversion Traits
//!
//! A conversion is identified by its ordered `(source, target)` type pair:
//! the source type implements [`CastTo<Target>`] when the conversion cannot
//! fail, [`TryCastTo<Target>`] when it can. A source type may implement
//! several targets (a domain `Circle` casts to a host `Circle`, `Arc` or
//! `ArcCurve`); the target is picked by type annotation.
//!
//! ```rust
//! use domain_kernel::Point;
//! use host_kernel::Point3d;
//! use kernel_bridge::CastTo;
//!
//! let p: Point3d = Point::new(1.0, 2.0, 3.0).cast_to();
//! assert_eq!(p, Point3d::new(1.0, 2.0, 3.0));
//! ```

use crate::error::BridgeResult;

/// Infallible conversion to `T`.
pub trait CastTo<T> {
    /// Converts `self` into a fresh `T`.
    fn cast_to(&self) -> T;
}

/// Fallible conversion to `T`.
pub trait TryCastTo<T> {
    /// Converts `self` into a fresh `T`, or reports why it cannot be.
    fn try_cast_to(&self) -> BridgeResult<T>;
}
