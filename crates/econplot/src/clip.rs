//! Boundary clipper: restrict a segment to the plot rectangle.
//!
//! Slope-based parametric clip (Liang–Barsky restricted to one segment against
//! an axis-aligned box), endpoint by endpoint against the unclipped line:
//! Y bounds first (solve for X), then X bounds (solve for Y).
//!
//! Rules
//! - Right-to-left (demand) segments are returned unmodified.
//! - Near-vertical segments only get their Y clamped.
//! - `ClipPolicy::Extend` lengthens the segment by 1.5× any horizontal
//!   overflow before clamping, and floors it at `max_y` independently.
//! - Points already inside are never touched, so clipping is idempotent.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::EXTEND_FACTOR;
use crate::frame::PlotFrame;
use crate::segment::Segment;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipPolicy {
    #[default]
    Truncate,
    Extend,
}

/// Clip `segment` to `frame` under `policy`.
pub fn clip(segment: Segment, frame: &PlotFrame, policy: ClipPolicy) -> Segment {
    if segment.is_right_to_left() {
        return segment;
    }
    if segment.is_vertical() {
        return Segment::new(clamp_y(segment.start, frame), clamp_y(segment.end, frame));
    }
    let seg = match policy {
        ClipPolicy::Truncate => segment,
        ClipPolicy::Extend => floor_at_max_y(extend_overflow(segment, frame), frame),
    };
    truncate(seg, frame)
}

fn clamp_y(p: Vector2<f64>, frame: &PlotFrame) -> Vector2<f64> {
    Vector2::new(p.x, p.y.clamp(frame.min_y(), frame.max_y()))
}

fn truncate(seg: Segment, frame: &PlotFrame) -> Segment {
    let anchor = seg.start;
    let slope = seg.dy() / seg.dx();
    let mut pts = [seg.start, seg.end];
    for p in pts.iter_mut() {
        if slope != 0.0 {
            if p.y < frame.min_y() {
                p.x = anchor.x + (frame.min_y() - anchor.y) / slope;
                p.y = frame.min_y();
            } else if p.y > frame.max_y() {
                p.x = anchor.x + (frame.max_y() - anchor.y) / slope;
                p.y = frame.max_y();
            }
        }
        if p.x < frame.min_x() {
            p.y = anchor.y + slope * (frame.min_x() - anchor.x);
            p.x = frame.min_x();
        } else if p.x > frame.max_x() {
            p.y = anchor.y + slope * (frame.max_x() - anchor.x);
            p.x = frame.max_x();
        }
    }
    Segment::new(pts[0], pts[1])
}

/// For every endpoint beyond `[min_x, max_x]`, push the opposite endpoint
/// outward along the line by `EXTEND_FACTOR ×` the overflow.
fn extend_overflow(seg: Segment, frame: &PlotFrame) -> Segment {
    let slope = seg.dy() / seg.dx();
    let overflow = |x: f64| {
        if x > frame.max_x() {
            x - frame.max_x()
        } else if x < frame.min_x() {
            frame.min_x() - x
        } else {
            0.0
        }
    };
    let (mut start, mut end) = (seg.start, seg.end);
    // start is the left end (x1 <= x2 here); extending it means moving left.
    let over_end = overflow(seg.end.x);
    if over_end > 0.0 {
        let dx = -EXTEND_FACTOR * over_end;
        start += Vector2::new(dx, slope * dx);
    }
    let over_start = overflow(seg.start.x);
    if over_start > 0.0 {
        let dx = EXTEND_FACTOR * over_start;
        end += Vector2::new(dx, slope * dx);
    }
    if over_end > 0.0 || over_start > 0.0 {
        tracing::trace!(over_start, over_end, "extended segment before clipping");
    }
    Segment::new(start, end)
}

/// Pull any endpoint below the floor (`y > max_y`) back onto it along the line.
fn floor_at_max_y(seg: Segment, frame: &PlotFrame) -> Segment {
    let slope = seg.dy() / seg.dx();
    if slope == 0.0 {
        return seg;
    }
    let anchor = seg.start;
    let floor = |p: Vector2<f64>| {
        if p.y > frame.max_y() {
            Vector2::new(anchor.x + (frame.max_y() - anchor.y) / slope, frame.max_y())
        } else {
            p
        }
    };
    Segment::new(floor(seg.start), floor(seg.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Canvas, DiagramType};

    fn frame() -> PlotFrame {
        PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::SupplyDemand).unwrap()
    }

    #[test]
    fn inside_segment_is_untouched() {
        let f = frame();
        let s = Segment::from_coords(264.0, 401.0, 456.0, 209.0);
        assert_eq!(clip(s, &f, ClipPolicy::Truncate), s);
        assert_eq!(clip(s, &f, ClipPolicy::Extend), s);
    }

    #[test]
    fn truncates_against_top_and_right() {
        let f = frame();
        // y = -x + 665, runs from (200, 465) to (700, -35)
        let s = Segment::from_coords(200.0, 465.0, 700.0, -35.0);
        let c = clip(s, &f, ClipPolicy::Truncate);
        assert_eq!(c.start, s.start);
        // top hit at x = 585 (> max_x 560), then right edge: y = 105
        assert!((c.end.x - 560.0).abs() < 1e-9);
        assert!((c.end.y - 105.0).abs() < 1e-9);
    }

    #[test]
    fn demand_segments_are_exempt() {
        let f = frame();
        let d = Segment::from_coords(700.0, 600.0, 100.0, 0.0);
        assert_eq!(clip(d, &f, ClipPolicy::Truncate), d);
    }

    #[test]
    fn vertical_segment_only_clamps_y() {
        let f = frame();
        let v = Segment::from_coords(300.0, 0.0, 300.05, 900.0);
        let c = clip(v, &f, ClipPolicy::Truncate);
        assert_eq!(c.start.y, f.min_y());
        assert_eq!(c.end.y, f.max_y());
        assert_eq!(c.end.x, 300.05);
    }

    #[test]
    fn extend_lengthens_inner_end_and_respects_floor() {
        let f = frame();
        // y = -x + 860: right end overflows max_x by 20
        let s = Segment::from_coords(400.0, 460.0, 580.0, 280.0);
        let t = clip(s, &f, ClipPolicy::Truncate);
        let e = clip(s, &f, ClipPolicy::Extend);
        assert!((t.end.x - 560.0).abs() < 1e-9 && (e.end.x - 560.0).abs() < 1e-9);
        assert_eq!(t.start, s.start);
        // left end pushed 30px further out along the line
        assert!((e.start.x - 370.0).abs() < 1e-9);
        assert!((e.start.y - 490.0).abs() < 1e-9);
        assert!(e.length() > t.length());

        // Overflow large enough that the extension would cross the floor.
        let deep = Segment::from_coords(400.0, 460.0, 640.0, 220.0);
        let e = clip(deep, &f, ClipPolicy::Extend);
        assert!((e.start.y - f.max_y()).abs() < 1e-9);
        assert!((e.start.x - 330.0).abs() < 1e-9);
    }

    #[test]
    fn clip_is_idempotent() {
        let f = frame();
        let s = Segment::from_coords(100.0, 700.0, 900.0, -100.0);
        for policy in [ClipPolicy::Truncate, ClipPolicy::Extend] {
            let once = clip(s, &f, policy);
            let twice = clip(once, &f, policy);
            assert!((once.start - twice.start).norm() < 1e-9);
            assert!((once.end - twice.end).norm() < 1e-9);
        }
    }
}
