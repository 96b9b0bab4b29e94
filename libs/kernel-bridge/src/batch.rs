//! # Batch Conversions
//!
//! Array and list forms of every item conversion.
//!
//! Fallible batches are all-or-nothing: the first failing element, in input
//! order, aborts the batch and its error is returned. No partial collection
//! is ever produced.
//!
//! The `par_*` forms convert elements on the rayon thread pool. Output order
//! equals input order and the reported error is that of the lowest failing
//! index, so their results are identical to the sequential forms.
//!
//! ## Example
//!
//! ```rust
//! use domain_kernel::Point;
//! use host_kernel::Point3d;
//! use kernel_bridge::prelude::*;
//!
//! let points = [Point::new(0.0, 0.0, 0.0), Point::new(1.0, 2.0, 3.0)];
//! let host: [Point3d; 2] = cast_array(&points);
//! let back: Vec<Point> = cast_slice(&host);
//! assert_eq!(back, points);
//! ```

use rayon::prelude::*;

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

// =============================================================================
// SEQUENTIAL
// =============================================================================

/// Converts every element of `source`, preserving order.
pub fn cast_slice<S, T>(source: &[S]) -> Vec<T>
where
    S: CastTo<T>,
{
    source.iter().map(CastTo::cast_to).collect()
}

/// Converts every element of a fixed-size array, preserving order.
pub fn cast_array<S, T, const N: usize>(source: &[S; N]) -> [T; N]
where
    S: CastTo<T>,
{
    source.each_ref().map(|item| item.cast_to())
}

/// Converts every element of `source`, stopping at the first failure.
///
/// # Errors
///
/// The error of the first element that fails to convert.
pub fn try_cast_slice<S, T>(source: &[S]) -> BridgeResult<Vec<T>>
where
    S: TryCastTo<T>,
{
    source.iter().map(TryCastTo::try_cast_to).collect()
}

/// Converts every element of a fixed-size array, stopping at the first
/// failure.
///
/// # Errors
///
/// The error of the first element that fails to convert.
pub fn try_cast_array<S, T, const N: usize>(source: &[S; N]) -> BridgeResult<[T; N]>
where
    S: TryCastTo<T>,
{
    into_array(try_cast_slice(source)?)
}

/// Moves a converted batch into an array of its source length.
fn into_array<T, const N: usize>(items: Vec<T>) -> BridgeResult<[T; N]> {
    items
        .try_into()
        .map_err(|items: Vec<T>| BridgeError::BatchLength {
            expected: N,
            actual: items.len(),
        })
}

// =============================================================================
// PARALLEL
// =============================================================================

/// Parallel [`cast_slice`].
pub fn par_cast_slice<S, T>(source: &[S]) -> Vec<T>
where
    S: CastTo<T> + Sync,
    T: Send,
{
    source.par_iter().map(|item| item.cast_to()).collect()
}

/// Parallel [`try_cast_slice`].
///
/// Every element is converted; the batch fails with the error of the
/// lowest failing index.
///
/// # Errors
///
/// The error of the first element, in input order, that fails to convert.
pub fn par_try_cast_slice<S, T>(source: &[S]) -> BridgeResult<Vec<T>>
where
    S: TryCastTo<T> + Sync,
    T: Send,
{
    let results: Vec<BridgeResult<T>> = source.par_iter().map(|item| item.try_cast_to()).collect();
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use domain_kernel::{Frame, Point, Vector};
    use host_kernel::{Arc, Plane, Point3d};
    use std::f64::consts::{PI, TAU};

    use super::*;

    fn frame(z: Vector) -> Frame {
        Frame::new(Point::ORIGIN, Vector::WORLD_X, Vector::WORLD_Y, z)
    }

    fn full_arc(radius: f64) -> Arc {
        Arc::new(Plane::world_xy(Point3d::ORIGIN), radius, TAU)
    }

    #[test]
    fn test_cast_slice_preserves_order() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 0.0, 0.0)).collect();
        let host: Vec<Point3d> = cast_slice(&points);
        assert_eq!(host.len(), 5);
        assert_eq!(host[3], Point3d::new(3.0, 0.0, 0.0));

        let empty: Vec<Point3d> = cast_slice::<Point, _>(&[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_try_cast_array_all_valid() {
        let frames = [frame(Vector::WORLD_Z), frame(Vector::new(0.0, 0.0, 2.0))];
        let planes: [Plane; 2] = try_cast_array(&frames).unwrap();
        assert_eq!(planes[1].z_axis.length(), 2.0);
    }

    #[test]
    fn test_try_cast_stops_at_first_failure() {
        let frames = [
            frame(Vector::WORLD_Z),
            frame(Vector::new(1.0, 0.0, 1.0)),
            frame(Vector::WORLD_Z),
        ];
        let result: BridgeResult<Vec<Plane>> = try_cast_slice(&frames);
        assert_eq!(result, Err(BridgeError::NonOrthogonalFrame));

        let result: BridgeResult<[Plane; 3]> = try_cast_array(&frames);
        assert_eq!(result, Err(BridgeError::NonOrthogonalFrame));
    }

    #[test]
    fn test_first_error_is_reported() {
        let plane = Plane::world_xy(Point3d::ORIGIN);
        let arcs = [
            full_arc(1.0),
            Arc::new(plane, 1.0, PI),
            Arc::new(plane, 1.0, 1.0),
        ];
        let result: BridgeResult<Vec<domain_kernel::Circle>> = try_cast_slice(&arcs);
        assert_eq!(
            result,
            Err(BridgeError::NotACircle {
                source_kind: "arc",
                angle: PI
            })
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let points: Vec<Point> = (0..1000)
            .map(|i| Point::new(i as f64, (i * 2) as f64, -(i as f64)))
            .collect();
        let sequential: Vec<Point3d> = cast_slice(&points);
        let parallel: Vec<Point3d> = par_cast_slice(&points);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_reports_lowest_failing_index() {
        let mut arcs: Vec<Arc> = (1..=500).map(|i| full_arc(i as f64)).collect();
        arcs[400].angle = 2.0;
        arcs[100].angle = 1.0;

        let result: BridgeResult<Vec<domain_kernel::Circle>> = par_try_cast_slice(&arcs);
        assert_eq!(
            result,
            Err(BridgeError::NotACircle {
                source_kind: "arc",
                angle: 1.0
            })
        );

        arcs[100].angle = TAU;
        arcs[400].angle = TAU;
        let circles: Vec<domain_kernel::Circle> = par_try_cast_slice(&arcs).unwrap();
        assert_eq!(circles.len(), 500);
        assert_eq!(circles[499].radius, 500.0);
    }

    #[test]
    fn test_into_array_length_mismatch() {
        let result: BridgeResult<[u8; 3]> = into_array(vec![1, 2]);
        assert_eq!(
            result,
            Err(BridgeError::BatchLength {
                expected: 3,
                actual: 2
            })
        );
    }
}
