//! Label placement rules.
//!
//! Positions are fixed offsets, not a layout solver:
//! - curve labels: terminal point `+20px` x, `-20px` y;
//! - price labels: `x = 125` at the point's height;
//! - quantity labels: `y = canvas_height - 55` under the point;
//! - marker labels: `+10px` x, `-10px` y.
//!
//! The only collision rule is the AD/AS tax-equilibrium quantity label, which
//! is dropped when it would sit within 24px (in x) of a quantity label that is
//! already placed. Nothing else is checked.

use nalgebra::Vector2;

use super::types::{Label, LabelSlot};
use crate::cfg::{
    LABEL_DX, LABEL_DY, POINT_LABEL_OFFSET, PRICE_LABEL_X, QUANTITY_LABEL_MIN_GAP,
    WATERMARK_INSET, WATERMARK_TEXT,
};
use crate::frame::PlotFrame;
use crate::segment::Segment;

/// Endpoint a curve label hangs off: the right end of demand-like
/// (right-to-left) segments, the top end of everything else.
pub fn terminal_point(seg: &Segment) -> Vector2<f64> {
    if seg.is_right_to_left() {
        seg.start
    } else {
        seg.top()
    }
}

pub fn curve_label(seg: &Segment, text: impl Into<String>) -> Label {
    let t = terminal_point(seg);
    Label {
        text: text.into(),
        x: t.x + LABEL_DX,
        y: t.y + LABEL_DY,
        slot: LabelSlot::Curve,
    }
}

pub fn price_label(p: Vector2<f64>, text: impl Into<String>) -> Label {
    Label {
        text: text.into(),
        x: PRICE_LABEL_X,
        y: p.y,
        slot: LabelSlot::PriceAxis,
    }
}

pub fn quantity_label(p: Vector2<f64>, frame: &PlotFrame, text: impl Into<String>) -> Label {
    Label {
        text: text.into(),
        x: p.x,
        y: frame.quantity_label_y(),
        slot: LabelSlot::QuantityAxis,
    }
}

pub fn point_label(p: Vector2<f64>, text: impl Into<String>) -> Label {
    Label {
        text: text.into(),
        x: p.x + POINT_LABEL_OFFSET,
        y: p.y - POINT_LABEL_OFFSET,
        slot: LabelSlot::Point,
    }
}

/// Axis titles: vertical axis above its top end, horizontal axis under the
/// right end of the plot (one row below the quantity labels).
pub fn axis_titles(frame: &PlotFrame, y_title: &str, x_title: &str) -> [Label; 2] {
    [
        Label {
            text: y_title.to_string(),
            x: frame.min_x(),
            y: frame.min_y() + LABEL_DY,
            slot: LabelSlot::AxisTitle,
        },
        Label {
            text: x_title.to_string(),
            x: frame.max_x(),
            y: frame.quantity_label_y() + 25.0,
            slot: LabelSlot::AxisTitle,
        },
    ]
}

pub fn watermark(frame: &PlotFrame) -> Label {
    Label {
        text: WATERMARK_TEXT.to_string(),
        x: frame.canvas.width - WATERMARK_INSET,
        y: frame.canvas.height - WATERMARK_INSET,
        slot: LabelSlot::Watermark,
    }
}

/// `true` when `candidate` would sit within `QUANTITY_LABEL_MIN_GAP` (x) of any
/// quantity label already in `placed`.
pub fn crowds_quantity_row(placed: &[Label], candidate: &Label) -> bool {
    placed
        .iter()
        .filter(|l| l.slot == LabelSlot::QuantityAxis)
        .any(|l| (l.x - candidate.x).abs() < QUANTITY_LABEL_MIN_GAP)
}
