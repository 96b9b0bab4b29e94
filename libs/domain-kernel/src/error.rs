//! # Kernel Errors
//!
//! Error types for mesh construction and element access.

use thiserror::Error;

/// Errors that can occur while building or querying a polyhedral mesh.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KernelError {
    /// Vertex index outside of the vertex arena
    #[error("Vertex index {index} out of range (vertex count: {count})")]
    VertexOutOfRange { index: usize, count: usize },

    /// Face index outside of the face list
    #[error("Face index {index} out of range (face count: {count})")]
    FaceOutOfRange { index: usize, count: usize },

    /// Halfedge index outside of the halfedge arena
    #[error("Halfedge index {index} out of range (halfedge count: {count})")]
    HalfedgeOutOfRange { index: usize, count: usize },

    /// Face with too few vertices for the mesh representation
    #[error("Face has {count} vertices (min: {min})")]
    DegenerateFace { count: usize, min: usize },

    /// The same vertex appears twice in one face
    #[error("Vertex {vertex} appears more than once in the face")]
    DuplicateFaceVertex { vertex: usize },

    /// Directed edge already bounds another face
    #[error("Non-manifold edge: {start} -> {end} already belongs to a face")]
    NonManifoldEdge { start: usize, end: usize },
}

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;
