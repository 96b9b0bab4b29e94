//! Line, segment and ray conversions.
//!
//! A domain [`Line`] is an origin plus an axis whose length is the line's
//! extent, so the host end point is `origin + axis` and the axis comes back
//! as `to - from`. A [`Segment`] already stores both end points.

use domain_kernel::{Line, Ray, Segment};
use host_kernel::{Line as HostLine, LineCurve, Ray3d};

use crate::cast::CastTo;

// =============================================================================
// LINE
// =============================================================================

impl CastTo<HostLine> for Line {
    fn cast_to(&self) -> HostLine {
        let end = self.origin + self.axis;
        HostLine::new(self.origin.cast_to(), end.cast_to())
    }
}

impl CastTo<LineCurve> for Line {
    fn cast_to(&self) -> LineCurve {
        LineCurve::from_line(self.cast_to())
    }
}

impl CastTo<Line> for HostLine {
    fn cast_to(&self) -> Line {
        Line::new(self.from.cast_to(), self.direction().cast_to())
    }
}

impl CastTo<Line> for LineCurve {
    fn cast_to(&self) -> Line {
        self.line().cast_to()
    }
}

// =============================================================================
// SEGMENT
// =============================================================================

impl CastTo<HostLine> for Segment {
    fn cast_to(&self) -> HostLine {
        HostLine::new(self.start_point.cast_to(), self.end_point.cast_to())
    }
}

impl CastTo<LineCurve> for Segment {
    fn cast_to(&self) -> LineCurve {
        LineCurve::new(self.start_point.cast_to(), self.end_point.cast_to())
    }
}

impl CastTo<Segment> for HostLine {
    fn cast_to(&self) -> Segment {
        Segment::new(self.from.cast_to(), self.to.cast_to())
    }
}

impl CastTo<Segment> for LineCurve {
    fn cast_to(&self) -> Segment {
        Segment::new(self.point_at_start().cast_to(), self.point_at_end().cast_to())
    }
}

// =============================================================================
// RAY
// =============================================================================

impl CastTo<Ray3d> for Ray {
    fn cast_to(&self) -> Ray3d {
        Ray3d::new(self.origin.cast_to(), self.axis.cast_to())
    }
}

impl CastTo<Ray> for Ray3d {
    fn cast_to(&self) -> Ray {
        Ray::new(self.position.cast_to(), self.direction.cast_to())
    }
}
