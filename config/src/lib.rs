//! # Config Crate
//!
//! Centralized tolerances and structural limits shared by the domain kernel,
//! the host kernel and the bridge between them. Every numeric threshold the
//! conversion layer depends on is defined here so both kernels agree on what
//! "orthogonal", "full turn" or "closed" means.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, MIN_FACE_VERTICES};
//!
//! // Use EPSILON for floating-point comparisons
//! let dot: f64 = 1e-12;
//! assert!(dot.abs() <= EPSILON);
//!
//! // Smaller faces cannot become host faces
//! let arity = 2;
//! assert!(arity < MIN_FACE_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime Configuration**: No environment variables or files
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
