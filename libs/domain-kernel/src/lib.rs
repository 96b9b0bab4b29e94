//! # Domain Kernel
//!
//! Application-agnostic Euclidean 3D geometry and polyhedral meshes.
//!
//! ## Architecture
//!
//! ```text
//! euclidean (Point, Vector, Frame, Plane, curves, Sphere)
//!       ↓
//! mesh (PolyhedralMesh trait, FaceVertexMesh, HalfedgeMesh)
//! ```
//!
//! All values are plain owned data. Meshes are index arenas: vertices and
//! faces are identified by their position in insertion order.
//!
//! ## Usage
//!
//! ```rust
//! use domain_kernel::{FaceVertexMesh, Point, PolyhedralMesh};
//!
//! let mut mesh = FaceVertexMesh::new();
//! let a = mesh.add_vertex(Point::new(0.0, 0.0, 0.0));
//! let b = mesh.add_vertex(Point::new(1.0, 0.0, 0.0));
//! let c = mesh.add_vertex(Point::new(0.0, 1.0, 0.0));
//! mesh.add_face(&[a, b, c])?;
//! assert_eq!(mesh.face_count(), 1);
//! # Ok::<(), domain_kernel::KernelError>(())
//! ```

pub mod error;
pub mod euclidean;
pub mod mesh;

pub use error::{KernelError, KernelResult};
pub use euclidean::{Circle, Frame, Line, Plane, Point, Polyline, Ray, Segment, Sphere, Vector};
pub use mesh::face_vertex::FaceVertexMesh;
pub use mesh::halfedge::{Halfedge, HalfedgeMesh};
pub use mesh::{PolyhedralMesh, Vertex};
