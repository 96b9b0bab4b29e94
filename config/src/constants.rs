//! # Configuration Constants
//!
//! Centralized constants for the kernel bridge.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Angles**: Angular constants used by curve representations
//! - **Topology**: Face arity and polyline closure limits

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative tolerance used by the domain kernel orthogonality test.
///
/// Two vectors `a` and `b` are orthogonal when `|a·b| <= EPSILON * |a| * |b|`,
/// which makes the test independent of the vectors' magnitudes.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn nearly_orthogonal(dot: f64, len_a: f64, len_b: f64) -> bool {
///     dot.abs() <= EPSILON * len_a * len_b
/// }
///
/// assert!(nearly_orthogonal(1e-12, 1.0, 1.0));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Absolute tolerance used by the host kernel for "is exactly zero" checks.
///
/// Matches the host's convention for deciding whether an arc sweep equals a
/// full turn (`2^-32`).
///
/// # Example
///
/// ```rust
/// use config::constants::{FULL_TURN, ZERO_TOLERANCE};
///
/// let sweep = FULL_TURN - 1e-12;
/// assert!((sweep - FULL_TURN).abs() <= ZERO_TOLERANCE);
/// ```
pub const ZERO_TOLERANCE: f64 = 2.328_306_436_538_696_3e-10;

/// Smallest length the host kernel accepts when unitizing a vector.
///
/// Vectors shorter than this cannot define a direction; the host reports the
/// resulting plane as invalid rather than dividing by zero.
pub const UNITIZE_TOLERANCE: f64 = 1e-12;

// =============================================================================
// ANGLE CONSTANTS
// =============================================================================

/// A full turn in radians (`2π`).
///
/// Full-circle arcs are stored with this sweep angle.
pub const FULL_TURN: f64 = std::f64::consts::TAU;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Minimum number of vertices a face needs to bound an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FACE_VERTICES;
///
/// let digon = [0usize, 1];
/// assert!(digon.len() < MIN_FACE_VERTICES);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;

/// Minimum number of stored vertices for a closed polyline.
///
/// The host encodes closure by repeating the first vertex, and only treats a
/// polyline as closed when it has at least three points; a closed domain
/// polyline therefore needs at least two distinct vertices to survive the
/// round trip.
pub const MIN_CLOSED_POLYLINE_VERTICES: usize = 2;

/// Minimum number of points for the host to report a polyline as closed.
pub const MIN_HOST_CLOSED_POLYLINE_POINTS: usize = MIN_CLOSED_POLYLINE_VERTICES + 1;

// =============================================================================
// TOLERANCE SNAPSHOT
// =============================================================================

/// Immutable snapshot of the tolerances used by the kernel predicates.
///
/// # Examples
/// ```
/// use config::constants::Tolerances;
/// let tolerances = Tolerances::default();
/// assert!(tolerances.orthogonality > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Relative tolerance of the orthogonality test.
    pub orthogonality: f64,
    /// Absolute tolerance on the sweep angle of a full-circle arc.
    pub arc_closure: f64,
}

impl Tolerances {
    /// Builds a tolerance snapshot, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::Tolerances;
    /// let tolerances = Tolerances::new(1.0e-6, 1.0e-9).expect("valid tolerances");
    /// assert_eq!(tolerances.orthogonality, 1.0e-6);
    /// ```
    pub fn new(orthogonality: f64, arc_closure: f64) -> Result<Self, ConfigError> {
        if !(orthogonality.is_finite() && orthogonality > 0.0) {
            return Err(ConfigError::InvalidOrthogonality(orthogonality));
        }
        if !(arc_closure.is_finite() && arc_closure > 0.0) {
            return Err(ConfigError::InvalidArcClosure(arc_closure));
        }
        Ok(Self {
            orthogonality,
            arc_closure,
        })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            orthogonality: EPSILON,
            arc_closure: ZERO_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the orthogonality tolerance is zero, negative or not finite.
    InvalidOrthogonality(f64),
    /// Raised when the arc closure tolerance is zero, negative or not finite.
    InvalidArcClosure(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOrthogonality(value) => {
                write!(f, "orthogonality tolerance must be positive: {value}")
            }
            ConfigError::InvalidArcClosure(value) => {
                write!(f, "arc closure tolerance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if an angle (radians) describes a full turn within `tolerance`.
///
/// The sign of the angle is ignored so clockwise sweeps qualify too.
///
/// # Example
///
/// ```rust
/// use config::constants::{is_full_turn, FULL_TURN, ZERO_TOLERANCE};
///
/// assert!(is_full_turn(-FULL_TURN, ZERO_TOLERANCE));
/// assert!(!is_full_turn(std::f64::consts::PI, ZERO_TOLERANCE));
/// ```
#[inline]
pub fn is_full_turn(angle: f64, tolerance: f64) -> bool {
    (angle.abs() - FULL_TURN).abs() <= tolerance
}
