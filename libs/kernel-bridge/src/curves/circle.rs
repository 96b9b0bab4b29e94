//! Circle and arc conversions.
//!
//! A domain [`Circle`] is always a full circle. Outbound it becomes a host
//! circle, or a host arc sweeping a full turn. Inbound, host arcs are
//! accepted only when the host itself classifies them as circles.

use config::constants::FULL_TURN;
use domain_kernel::Circle;
use host_kernel::{Arc, ArcCurve, Circle as HostCircle};

use crate::cast::{CastTo, TryCastTo};
use crate::error::{BridgeError, BridgeResult};

impl CastTo<HostCircle> for Circle {
    fn cast_to(&self) -> HostCircle {
        HostCircle::new(self.plane.cast_to(), self.radius)
    }
}

impl CastTo<Arc> for Circle {
    fn cast_to(&self) -> Arc {
        Arc::new(self.plane.cast_to(), self.radius, FULL_TURN)
    }
}

impl CastTo<ArcCurve> for Circle {
    fn cast_to(&self) -> ArcCurve {
        ArcCurve::from_circle(&self.cast_to())
    }
}

impl CastTo<Circle> for HostCircle {
    fn cast_to(&self) -> Circle {
        Circle::new(self.plane.cast_to(), self.radius)
    }
}

/// Domain circle for a full-turn arc.
fn circle_from_arc(arc: &Arc, source_kind: &'static str) -> BridgeResult<Circle> {
    if !arc.is_circle() {
        return Err(BridgeError::NotACircle {
            source_kind,
            angle: arc.angle,
        });
    }
    Ok(Circle::new(arc.plane.cast_to(), arc.radius))
}

impl TryCastTo<Circle> for Arc {
    /// # Errors
    ///
    /// [`BridgeError::NotACircle`] when the arc does not sweep a full turn.
    fn try_cast_to(&self) -> BridgeResult<Circle> {
        circle_from_arc(self, "arc")
    }
}

impl TryCastTo<Circle> for ArcCurve {
    /// # Errors
    ///
    /// [`BridgeError::NotACircle`] when the arc does not sweep a full turn.
    fn try_cast_to(&self) -> BridgeResult<Circle> {
        circle_from_arc(&self.arc(), "arc curve")
    }
}
