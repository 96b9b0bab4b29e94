//! # Host Kernel
//!
//! Geometry model of the host CAD application.
//!
//! ## Conventions
//!
//! - Planes are built orthonormal from an origin and two directions
//! - Polylines are closed when their first and last points coincide
//! - Arcs carry a sweep angle; an arc sweeping a full turn is a circle
//! - Meshes store triangles and quads natively; larger polygons are stored
//!   as a set of triangles plus an n-gon entry recording their boundary
//!
//! ## Usage
//!
//! ```rust
//! use host_kernel::{Mesh, Point3d};
//!
//! let mut mesh = Mesh::new();
//! let a = mesh.add_vertex(Point3d::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Point3d::new(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Point3d::new(0.0, 1.0, 0.0));
//! mesh.add_triangle(a, b, c)?;
//! assert_eq!(mesh.triangle_count(), 1);
//! # Ok::<(), host_kernel::HostError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod mesh;

pub use error::{HostError, HostResult};
pub use geometry::{
    Arc, ArcCurve, Circle, Line, LineCurve, Plane, Point3d, Polyline, PolylineCurve, Ray3d,
    Sphere, Vector3d,
};
pub use mesh::{Mesh, MeshFace, MeshNgon};
