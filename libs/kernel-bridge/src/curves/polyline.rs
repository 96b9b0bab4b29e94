//! Polyline conversions.
//!
//! The domain stores a closure flag and never repeats the first vertex; the
//! host has no flag and treats a polyline as closed when its last point
//! repeats its first. Outbound closed polylines therefore gain a copy of
//! vertex 0, and inbound closed polylines lose their final point.

use config::constants::MIN_CLOSED_POLYLINE_VERTICES;
use domain_kernel::Polyline;
use host_kernel::{Point3d, Polyline as HostPolyline, PolylineCurve};

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

/// Host point list for `polyline`, closing point included.
///
/// A closed polyline needs at least two vertices: with fewer, the host
/// form would not repeat a distinct point and would read back as open.
fn host_points(polyline: &Polyline) -> BridgeResult<Vec<Point3d>> {
    let count = polyline.vertex_count();
    if polyline.is_closed() && count < MIN_CLOSED_POLYLINE_VERTICES {
        return Err(BridgeError::DegenerateClosedPolyline {
            count,
            min: MIN_CLOSED_POLYLINE_VERTICES,
        });
    }

    let mut points: Vec<Point3d> = polyline.vertices().iter().map(CastTo::cast_to).collect();
    if polyline.is_closed() {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    Ok(points)
}

/// Domain polyline from a host point list and its closure state.
fn domain_polyline(points: &[Point3d], is_closed: bool) -> Polyline {
    let kept = match points.split_last() {
        Some((_, rest)) if is_closed => rest,
        _ => points,
    };
    Polyline::new(kept.iter().map(CastTo::cast_to).collect(), is_closed)
}

impl TryCastTo<HostPolyline> for Polyline {
    /// # Errors
    ///
    /// [`BridgeError::DegenerateClosedPolyline`] for a closed polyline with
    /// fewer than two vertices.
    fn try_cast_to(&self) -> BridgeResult<HostPolyline> {
        host_points(self).map(HostPolyline::new)
    }
}

impl TryCastTo<PolylineCurve> for Polyline {
    fn try_cast_to(&self) -> BridgeResult<PolylineCurve> {
        host_points(self).map(PolylineCurve::new)
    }
}

impl CastTo<Polyline> for HostPolyline {
    fn cast_to(&self) -> Polyline {
        domain_polyline(self.points(), self.is_closed())
    }
}

impl CastTo<Polyline> for PolylineCurve {
    fn cast_to(&self) -> Polyline {
        domain_polyline(self.points(), self.is_closed())
    }
}
