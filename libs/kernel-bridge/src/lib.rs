//! # Kernel Bridge
//!
//! Bidirectional conversions between the domain kernel (`domain-kernel`)
//! and the host CAD kernel (`host-kernel`).
//!
//! ## Architecture
//!
//! ```text
//! primitives (Point, Vector)
//!       ↓
//! frame (Frame, Plane)
//!       ↓
//! curves (Line, Ray, Segment, Polyline, Circle) · sphere
//!       ↓
//! mesh (FaceVertexMesh, HalfedgeMesh ↔ Mesh + n-gons)
//!       ↓
//! batch (array / list / parallel forms)
//! ```
//!
//! Every conversion is a pure function of its input: nothing is cached and
//! no state is shared between calls. A conversion either returns a complete
//! value or an error; batch conversions never return partial collections.
//!
//! ## Conversions
//!
//! | Domain                  | Host                                  | Outbound | Inbound  |
//! |-------------------------|---------------------------------------|----------|----------|
//! | `Point`                 | `Point3d`                             | infallible | infallible |
//! | `Vector`                | `Vector3d`                            | infallible | infallible |
//! | `Frame`                 | `Plane`                               | orthogonality check | infallible |
//! | `Plane`                 | `Plane`                               | infallible | infallible |
//! | `Line`                  | `Line`, `LineCurve`                   | infallible | infallible |
//! | `Segment`               | `Line`, `LineCurve`                   | infallible | infallible |
//! | `Ray`                   | `Ray3d`                               | infallible | infallible |
//! | `Polyline`              | `Polyline`, `PolylineCurve`           | closed needs 2+ vertices | infallible |
//! | `Circle`                | `Circle`, `Arc`, `ArcCurve`           | infallible | arcs must be full circles |
//! | `Sphere`                | `Sphere`                              | infallible | infallible |
//! | `FaceVertexMesh<Point>` | `Mesh`                                | faces need 3+ vertices | kernel checks |
//! | `HalfedgeMesh<Point>`   | `Mesh`                                | faces need 3+ vertices | kernel checks |
//!
//! ## Usage
//!
//! ```rust
//! use domain_kernel::{Frame, Point, Vector};
//! use kernel_bridge::prelude::*;
//!
//! let frame = Frame::new(
//!     Point::new(1.0, 2.0, 3.0),
//!     Vector::new(1.0, 0.0, 0.0),
//!     Vector::new(0.0, 1.0, 0.0),
//!     Vector::new(0.0, 0.0, 2.0),
//! );
//! let plane: host_kernel::Plane = frame.try_cast_to()?;
//! assert_eq!(plane.z_axis.length(), 2.0);
//!
//! let back: Frame = plane.cast_to();
//! assert_eq!(back, frame);
//! # Ok::<(), kernel_bridge::BridgeError>(())
//! ```

pub mod batch;
pub mod cast;
pub mod curves;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod primitives;
pub mod sphere;

pub use batch::{
    cast_array, cast_slice, par_cast_slice, par_try_cast_slice, try_cast_array, try_cast_slice,
};
pub use cast::{CastTo, TryCastTo};
pub use error::{BridgeError, BridgeResult, ErrorCategory};
pub use mesh::{mesh_from_host, mesh_to_host};

/// Traits and batch helpers needed at a conversion call site.
pub mod prelude {
    pub use crate::batch::{
        cast_array, cast_slice, par_cast_slice, par_try_cast_slice, try_cast_array,
        try_cast_slice,
    };
    pub use crate::cast::{CastTo, TryCastTo};
    pub use crate::error::{BridgeError, BridgeResult};
}
