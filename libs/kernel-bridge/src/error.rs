//! # Error Types
//!
//! Error types for kernel conversions. All errors are explicit and returned
//! to the immediate caller.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when a conversion fails
//! - No retries, no default substitution, no partial results
//! - Kernel and host collection errors are propagated unchanged

use domain_kernel::KernelError;
use host_kernel::HostError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during a conversion.
///
/// ## Example
///
/// ```rust
/// use domain_kernel::{Frame, Point, Vector};
/// use kernel_bridge::{BridgeError, TryCastTo};
///
/// let skewed = Frame::new(
///     Point::new(0.0, 0.0, 0.0),
///     Vector::new(1.0, 0.0, 0.0),
///     Vector::new(0.0, 1.0, 0.0),
///     Vector::new(1.0, 0.0, 1.0),
/// );
/// let result: Result<host_kernel::Plane, _> = skewed.try_cast_to();
/// assert_eq!(result.unwrap_err(), BridgeError::NonOrthogonalFrame);
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The frame z axis is not orthogonal to its x and y axes.
    #[error("The axis Z is not orthogonal to the X and Y axes")]
    NonOrthogonalFrame,

    /// A mesh face has too few vertices to become a host face.
    #[error("Face {face} has {count} vertices (min: {min})")]
    FaceArity {
        /// Index of the face in the source mesh
        face: usize,
        /// Number of vertices of the face
        count: usize,
        /// Minimum number of vertices
        min: usize,
    },

    /// A closed polyline has too few vertices for the host closure convention.
    #[error("Closed polyline has {count} vertices (min: {min})")]
    DegenerateClosedPolyline {
        /// Number of stored vertices
        count: usize,
        /// Minimum number of vertices
        min: usize,
    },

    /// A host arc is a partial arc, which the domain kernel cannot represent.
    #[error("The {source_kind} does not represent a circle (sweep angle: {angle} rad)")]
    NotACircle {
        /// Host type being converted ("arc" or "arc curve")
        source_kind: &'static str,
        /// Sweep angle of the arc
        angle: f64,
    },

    /// Domain kernel error (out-of-range vertex, non-manifold face, ...).
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// Host kernel error (out-of-range vertex or face, invalid n-gon, ...).
    #[error(transparent)]
    Host(#[from] HostError),

    /// A fixed-size batch did not produce the expected number of elements.
    #[error("Batch produced {actual} elements (expected: {expected})")]
    BatchLength {
        /// Array length
        expected: usize,
        /// Number of converted elements
        actual: usize,
    },
}

/// Broad classification of conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input violates a precondition of the target representation.
    StructuralMismatch,
    /// The input encodes a shape the target kernel has no type for.
    RepresentationAmbiguity,
    /// The input references elements that do not exist.
    TopologyInconsistency,
}

impl BridgeError {
    /// Classifies the error.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use kernel_bridge::{BridgeError, ErrorCategory};
    ///
    /// let err = BridgeError::NotACircle { source_kind: "arc", angle: 1.0 };
    /// assert_eq!(err.category(), ErrorCategory::RepresentationAmbiguity);
    /// ```
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::NonOrthogonalFrame
            | BridgeError::FaceArity { .. }
            | BridgeError::DegenerateClosedPolyline { .. }
            | BridgeError::BatchLength { .. } => ErrorCategory::StructuralMismatch,
            BridgeError::NotACircle { .. } => ErrorCategory::RepresentationAmbiguity,
            BridgeError::Kernel(_) | BridgeError::Host(_) => ErrorCategory::TopologyInconsistency,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for conversions.
pub type BridgeResult<T> = Result<T, BridgeError>;

// =============================================================================
// TESTS
// =============================================================================
