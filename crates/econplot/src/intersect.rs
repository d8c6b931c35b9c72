//! Intersection solver for two curve segments (lines through them).
//!
//! - Vertical detection: `|x2 - x1| < 0.1`.
//! - Both vertical: the frame's geometric center (documented degenerate default).
//! - One vertical: evaluate the other line at the vertical's x.
//! - Otherwise: `x = (b_i - a_i) / (a_s - b_s)`, `y = a_s x + a_i`.
//! - Equal slopes: `(NaN, NaN)`. Callers must check before drawing anything
//!   that depends on the point; `equilibrium` does that for the assembler.

use nalgebra::Vector2;

use crate::frame::PlotFrame;
use crate::segment::Segment;

/// Raw intersection of the lines through `a` and `b`; may be NaN.
pub fn intersect(a: &Segment, b: &Segment, frame: &PlotFrame) -> Vector2<f64> {
    match (a.line(), b.line()) {
        (None, None) => frame.center(),
        (None, Some(lb)) => {
            let x = vertical_x(a);
            Vector2::new(x, lb.y_at(x))
        }
        (Some(la), None) => {
            let x = vertical_x(b);
            Vector2::new(x, la.y_at(x))
        }
        (Some(la), Some(lb)) => {
            if la.slope == lb.slope {
                return Vector2::new(f64::NAN, f64::NAN);
            }
            let x = (lb.intercept - la.intercept) / (la.slope - lb.slope);
            Vector2::new(x, la.y_at(x))
        }
    }
}

#[inline]
fn vertical_x(s: &Segment) -> f64 {
    0.5 * (s.start.x + s.end.x)
}

/// `true` when either coordinate is NaN (parallel lines).
#[inline]
pub fn is_degenerate(p: Vector2<f64>) -> bool {
    p.x.is_nan() || p.y.is_nan()
}

/// Intersection suitable for drawing: `None` for parallel lines and points
/// outside the frame, otherwise the point clamped into the frame.
pub fn equilibrium(a: &Segment, b: &Segment, frame: &PlotFrame) -> Option<Vector2<f64>> {
    let p = intersect(a, b, frame);
    if is_degenerate(p) {
        tracing::debug!("parallel curves, no equilibrium");
        return None;
    }
    let admitted = frame.admit(p);
    if admitted.is_none() {
        tracing::debug!(x = p.x, y = p.y, "equilibrium outside the plot rectangle");
    }
    admitted
}

/// Point on `curve` at canvas x `x` (used for tax/subsidy wedges and gaps).
pub fn point_at_x(curve: &Segment, x: f64, frame: &PlotFrame) -> Option<Vector2<f64>> {
    let probe = Segment::from_coords(x, frame.min_y(), x, frame.max_y());
    equilibrium(curve, &probe, frame)
}
