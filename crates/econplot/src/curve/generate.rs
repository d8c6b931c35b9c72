//! Line segment generator for straight economic curves.
//!
//! Model
//! - `half_width = 0.8 * plot_width * extent/100 / 2`, `v = tan(angle) * half_width`.
//! - Supply runs left→right: `(cx - hw, cy + v) -> (cx + hw, cy - v)`.
//! - Demand runs right→left: `(cx + hw, cy - v) -> (cx - hw, cy + v)`.
//!
//! Near-vertical policy
//! - Supply in `[85°, 89°]` and `(89°, 90°)`: Y endpoints are pulled toward the
//!   frame's bottom/top, weight rising with the angle; `>= 90°` snaps to
//!   `(min_y, max_y)`.
//! - Demand has no graduated band: it snaps once within 1° of vertical.
//!
//! After generation the Y endpoints are clamped to the frame; when that
//! happens the half width is recomputed from the largest admissible offset so
//! the angle survives and the length does not.

use nalgebra::Vector2;

use super::params::{resolve, CurveParams, ElasticityClass, Orientation};
use crate::cfg::{DEMAND_SNAP_DEG, LINE_WIDTH_SHARE, NEAR_VERTICAL_INNER, NEAR_VERTICAL_START};
use crate::frame::PlotFrame;
use crate::segment::Segment;

/// Generate the base segment for a curve through `center`.
pub fn generate(
    orientation: Orientation,
    elasticity: ElasticityClass,
    frame: &PlotFrame,
    center: Vector2<f64>,
) -> Segment {
    generate_from_params(orientation, resolve(orientation, elasticity), frame, center)
}

/// Generate from explicit angle/extent (tuned curves and tests).
pub fn generate_from_params(
    orientation: Orientation,
    params: CurveParams,
    frame: &PlotFrame,
    center: Vector2<f64>,
) -> Segment {
    let half_width = 0.5 * LINE_WIDTH_SHARE * frame.width() * params.extent_percent / 100.0;
    match orientation {
        Orientation::Supply => supply_segment(params.angle_degrees, half_width, frame, center),
        Orientation::Demand => demand_segment(params.angle_degrees, half_width, frame, center),
    }
}

fn vertical_snap(frame: &PlotFrame, cx: f64) -> Segment {
    Segment::from_coords(cx, frame.min_y(), cx, frame.max_y())
}

/// Interpolation weight toward the frame boundary for near-vertical supply.
fn near_vertical_weight(angle: f64) -> f64 {
    if angle < NEAR_VERTICAL_START {
        0.0
    } else if angle <= NEAR_VERTICAL_INNER {
        0.5 * (angle - NEAR_VERTICAL_START) / (NEAR_VERTICAL_INNER - NEAR_VERTICAL_START)
    } else {
        0.5 + 0.5 * (angle - NEAR_VERTICAL_INNER) / (90.0 - NEAR_VERTICAL_INNER)
    }
}

fn supply_segment(angle: f64, half_width: f64, frame: &PlotFrame, c: Vector2<f64>) -> Segment {
    if angle >= 90.0 {
        return vertical_snap(frame, c.x);
    }
    let tan = angle.to_radians().tan();
    let v = tan * half_width;
    let mut y_left = c.y + v;
    let mut y_right = c.y - v;
    let w = near_vertical_weight(angle);
    if w > 0.0 {
        y_left += w * (frame.max_y() - y_left);
        y_right += w * (frame.min_y() - y_right);
    }
    let raw = Segment::from_coords(c.x - half_width, y_left, c.x + half_width, y_right);
    clamp_preserving_angle(raw, tan, frame, c, Orientation::Supply)
}

fn demand_segment(angle: f64, half_width: f64, frame: &PlotFrame, c: Vector2<f64>) -> Segment {
    let from_vertical = 90.0 - angle.abs();
    if from_vertical < DEMAND_SNAP_DEG {
        return vertical_snap(frame, c.x);
    }
    let tan = angle.to_radians().tan();
    let v = tan * half_width;
    let raw = Segment::from_coords(c.x + half_width, c.y - v, c.x - half_width, c.y + v);
    clamp_preserving_angle(raw, tan, frame, c, Orientation::Demand)
}

/// Clamp Y endpoints to the frame; if anything moved, rebuild the segment with
/// the largest offset the frame allows around `c` so the slope is kept.
fn clamp_preserving_angle(
    raw: Segment,
    tan: f64,
    frame: &PlotFrame,
    c: Vector2<f64>,
    orientation: Orientation,
) -> Segment {
    let inside = |y: f64| y >= frame.min_y() && y <= frame.max_y();
    if inside(raw.start.y) && inside(raw.end.y) {
        return raw;
    }
    let max_offset = (c.y - frame.min_y()).min(frame.max_y() - c.y).max(0.0);
    if tan.abs() < f64::EPSILON || !tan.is_finite() {
        // Horizontal lines only leave the frame when the center does.
        let y = c.y.clamp(frame.min_y(), frame.max_y());
        return Segment::new(
            Vector2::new(raw.start.x, y),
            Vector2::new(raw.end.x, y),
        );
    }
    let half_width = max_offset / tan.abs();
    let v = max_offset * tan.signum();
    tracing::trace!(half_width, max_offset, "generator clamped to frame");
    match orientation {
        Orientation::Supply => {
            Segment::from_coords(c.x - half_width, c.y + v, c.x + half_width, c.y - v)
        }
        Orientation::Demand => {
            Segment::from_coords(c.x + half_width, c.y - v, c.x - half_width, c.y + v)
        }
    }
}

/// Move a demand segment's right endpoint along its own line to `anchor_x`.
///
/// Used when the subsidy supply curve is hidden: the "D" label then shares a
/// column with the "S" label instead of following the generic extent.
/// Vertical segments are returned as is.
pub fn retarget_demand_tail(demand: Segment, anchor_x: f64) -> Segment {
    let Some(line) = demand.line() else {
        return demand;
    };
    let tail = Vector2::new(anchor_x, line.y_at(anchor_x));
    if demand.is_right_to_left() {
        Segment::new(tail, demand.end)
    } else {
        Segment::new(demand.start, tail)
    }
}
