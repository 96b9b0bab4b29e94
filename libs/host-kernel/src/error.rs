//! # Host Errors
//!
//! Error types for host mesh construction and element access.

use thiserror::Error;

/// Errors raised by the host mesh collections.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// Vertex index outside of the vertex list
    #[error("Vertex index {index} out of range (vertex count: {count})")]
    VertexOutOfRange { index: usize, count: usize },

    /// Face index outside of the face list
    #[error("Face index {index} out of range (face count: {count})")]
    FaceOutOfRange { index: usize, count: usize },

    /// N-gon boundary with too few vertices
    #[error("N-gon boundary has {count} vertices (min: 3)")]
    DegenerateNgon { count: usize },

    /// N-gon without any underlying face
    #[error("N-gon has no faces")]
    EmptyNgon,

    /// Face already owned by an n-gon
    #[error("Face {face} already belongs to n-gon {ngon}")]
    FaceAlreadyInNgon { face: usize, ngon: usize },
}

/// Result type alias for host kernel operations.
pub type HostResult<T> = Result<T, HostError>;
