//! # Polyhedral Meshes
//!
//! Index-based polygon meshes with faces of arbitrary arity.
//!
//! ## Overview
//!
//! Two representations share the [`PolyhedralMesh`] contract:
//! - [`FaceVertexMesh`](face_vertex::FaceVertexMesh): each face stores its
//!   ordered vertex indices
//! - [`HalfedgeMesh`](halfedge::HalfedgeMesh): each face stores one
//!   halfedge of its boundary loop; edge adjacency is built during face
//!   insertion
//!
//! Vertices and faces are identified by their insertion index. Indices are
//! stable: nothing is ever removed.

pub mod face_vertex;
pub mod halfedge;

use crate::error::{KernelError, KernelResult};

/// Vertex of a polyhedral mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<P> {
    /// Position of the vertex in the vertex arena.
    pub index: usize,
    /// Geometric position.
    pub position: P,
}

/// Read/build contract shared by the polyhedral mesh representations.
///
/// ## Example
///
/// ```rust
/// use domain_kernel::{HalfedgeMesh, Point, PolyhedralMesh};
///
/// fn triangle<M: PolyhedralMesh<Position = Point> + Default>() -> M {
///     let mut mesh = M::default();
///     let a = mesh.add_vertex(Point::new(0.0, 0.0, 0.0));
///     let b = mesh.add_vertex(Point::new(1.0, 0.0, 0.0));
///     let c = mesh.add_vertex(Point::new(0.0, 1.0, 0.0));
///     mesh.add_face(&[a, b, c]).unwrap();
///     mesh
/// }
///
/// let mesh: HalfedgeMesh<Point> = triangle();
/// assert_eq!(mesh.face_vertices(0).unwrap(), vec![0, 1, 2]);
/// ```
pub trait PolyhedralMesh {
    /// Position type stored on vertices.
    type Position;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces.
    fn face_count(&self) -> usize;

    /// Vertices in index order.
    fn vertices(&self) -> &[Vertex<Self::Position>];

    /// Vertex at `index`, or [`KernelError::VertexOutOfRange`].
    fn vertex(&self, index: usize) -> KernelResult<&Vertex<Self::Position>> {
        let vertices = self.vertices();
        vertices.get(index).ok_or(KernelError::VertexOutOfRange {
            index,
            count: vertices.len(),
        })
    }

    /// Ordered vertex indices of face `face`.
    fn face_vertices(&self, face: usize) -> KernelResult<Vec<usize>>;

    /// Appends a vertex and returns its index.
    fn add_vertex(&mut self, position: Self::Position) -> usize;

    /// Appends a face from an ordered list of vertex indices and returns its
    /// index. On error the mesh is left unchanged.
    fn add_face(&mut self, vertices: &[usize]) -> KernelResult<usize>;
}

/// Rejects out-of-range and repeated vertex indices.
fn check_face_vertices(vertices: &[usize], vertex_count: usize) -> KernelResult<()> {
    for (i, &vertex) in vertices.iter().enumerate() {
        if vertex >= vertex_count {
            return Err(KernelError::VertexOutOfRange {
                index: vertex,
                count: vertex_count,
            });
        }
        if vertices[..i].contains(&vertex) {
            return Err(KernelError::DuplicateFaceVertex { vertex });
        }
    }
    Ok(())
}
