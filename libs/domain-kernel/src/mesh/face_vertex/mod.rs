//! # Face-Vertex Mesh
//!
//! The simplest polygon mesh: a vertex arena and a list of faces, each face
//! holding its ordered vertex indices.
//!
//! The mesh does not impose a minimum face arity beyond "not empty". Digons
//! and single-vertex faces can be stored; consumers with stricter rules
//! (such as triangle/quad based renderers) reject them.

use super::{check_face_vertices, PolyhedralMesh, Vertex};
use crate::error::{KernelError, KernelResult};

/// Face-vertex polygon mesh over position type `P`.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceVertexMesh<P> {
    vertices: Vec<Vertex<P>>,
    faces: Vec<Vec<usize>>,
}

impl<P> Default for FaceVertexMesh<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FaceVertexMesh<P> {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Face vertex lists in insertion order.
    pub fn faces(&self) -> impl ExactSizeIterator<Item = &[usize]> + '_ {
        self.faces.iter().map(Vec::as_slice)
    }
}

impl<P> PolyhedralMesh for FaceVertexMesh<P> {
    type Position = P;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn vertices(&self) -> &[Vertex<P>] {
        &self.vertices
    }

    fn face_vertices(&self, face: usize) -> KernelResult<Vec<usize>> {
        self.faces
            .get(face)
            .cloned()
            .ok_or(KernelError::FaceOutOfRange {
                index: face,
                count: self.faces.len(),
            })
    }

    fn add_vertex(&mut self, position: P) -> usize {
        let index = self.vertices.len();
        self.vertices.push(Vertex { index, position });
        index
    }

    fn add_face(&mut self, vertices: &[usize]) -> KernelResult<usize> {
        if vertices.is_empty() {
            return Err(KernelError::DegenerateFace { count: 0, min: 1 });
        }
        check_face_vertices(vertices, self.vertices.len())?;

        let index = self.faces.len();
        self.faces.push(vertices.to_vec());
        Ok(index)
    }
}
