//! Shift composer: derive secondary curves by translating a base segment.
//!
//! - Vertical shifts (tax, externality gaps, AD/SRAS shocks) move both Y
//!   coordinates by `distance_offset`.
//! - Diagonal shifts (subsidy supply, S3) additionally move X by half the
//!   offset, so the curve goes right-and-down together.
//!
//! `distance_offset` is signed canvas pixels along +y: positive moves the
//! curve down the screen. Economic direction is expressed through the
//! constructors (`up` = decrease in supply / increase in demand, etc.).
//!
//! The result is re-clipped with its `clip_policy`. `None` means the curve is
//! not drawable in this frame; it is not an error.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::{DIAGONAL_X_SHARE, INTERIOR_TOL};
use crate::clip::{clip, ClipPolicy};
use crate::frame::PlotFrame;
use crate::segment::Segment;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftAxis {
    #[default]
    Vertical,
    Diagonal,
    /// Away from the axis origin (right and up); used to tag PPC growth.
    Outward,
}

/// How a derived curve is obtained from its base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftSpec {
    pub distance_offset: f64,
    pub axis: ShiftAxis,
    pub clip_policy: ClipPolicy,
}

impl ShiftSpec {
    /// Move the curve up the screen by `distance` (truncating clip).
    pub fn up(distance: f64) -> Self {
        Self {
            distance_offset: -distance,
            axis: ShiftAxis::Vertical,
            clip_policy: ClipPolicy::Truncate,
        }
    }

    /// Move the curve down the screen by `distance` (truncating clip).
    pub fn down(distance: f64) -> Self {
        Self {
            distance_offset: distance,
            axis: ShiftAxis::Vertical,
            clip_policy: ClipPolicy::Truncate,
        }
    }

    /// Right-and-down shift used for the subsidy supply curve; extends on overflow.
    pub fn diagonal(distance: f64) -> Self {
        Self {
            distance_offset: distance,
            axis: ShiftAxis::Diagonal,
            clip_policy: ClipPolicy::Extend,
        }
    }

    /// Outward shift away from the axis origin (growth).
    pub fn outward(distance: f64) -> Self {
        Self {
            distance_offset: distance,
            axis: ShiftAxis::Outward,
            clip_policy: ClipPolicy::Truncate,
        }
    }

    /// Canvas translation applied to both endpoints.
    pub fn translation(&self) -> Vector2<f64> {
        let d = self.distance_offset;
        match self.axis {
            ShiftAxis::Vertical => Vector2::new(0.0, d),
            ShiftAxis::Diagonal => Vector2::new(d * DIAGONAL_X_SHARE, d),
            ShiftAxis::Outward => Vector2::new(d, -d),
        }
    }
}

/// Translate `base` per `spec` and re-clip it to `frame`.
pub fn shift(base: Segment, spec: ShiftSpec, frame: &PlotFrame) -> Option<Segment> {
    if spec.distance_offset == 0.0 {
        return Some(base);
    }
    let moved = base.translated(spec.translation());
    let above = |p: Vector2<f64>| p.y < frame.min_y();
    let below = |p: Vector2<f64>| p.y > frame.max_y();
    if (above(moved.start) && above(moved.end)) || (below(moved.start) && below(moved.end)) {
        tracing::debug!(?spec, "shifted curve lies outside the frame");
        return None;
    }
    if moved.is_right_to_left() {
        // Demand-like curves are drawn unclipped.
        return Some(moved);
    }
    let clipped = clip(moved, frame, spec.clip_policy);
    let drawable = clipped.is_finite()
        && clipped.length() > INTERIOR_TOL
        && frame.contains_eps(clipped.start, INTERIOR_TOL)
        && frame.contains_eps(clipped.end, INTERIOR_TOL);
    if !drawable {
        tracing::debug!(?spec, "shifted curve misses the plot rectangle");
        return None;
    }
    Some(clipped)
}
