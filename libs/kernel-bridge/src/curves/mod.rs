//! # Curve Conversions
//!
//! - [`line`]: lines, segments and rays
//! - [`polyline`]: polylines, translating between an explicit closure flag
//!   and the host's repeated-endpoint convention
//! - [`circle`]: circles, and host arcs that sweep a full turn

pub mod circle;
pub mod line;
pub mod polyline;

#[cfg(test)]
mod tests;
