//! Coordinate frame: the usable plot rectangle inside a user-sized canvas.
//!
//! Purpose
//! - Turn a canvas size plus diagram type into the four plot boundaries every
//!   other stage clips, snaps, and labels against.
//!
//! Layout
//! - `min_x = 160`, `min_y = 80`, `max_y = height - 70`.
//! - `max_x = width - 90`, except AD/AS diagrams which use `width - 40`.
//!
//! Callers are expected to pass canvases of at least 400×400 (the UI range
//! limits). `PlotFrame::new` only rejects rectangles that are empty;
//! `PlotFrame::clamped` enforces the minimum size first.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cfg::{
    INTERIOR_TOL, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_RIGHT_ADAS, MARGIN_TOP,
    MIN_CANVAS,
};

/// The four diagram families the assembler knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramType {
    SupplyDemand,
    Externalities,
    Ppc,
    NeoClassicalAdAs,
}

impl DiagramType {
    /// Right margin of the plot rectangle for this diagram family.
    #[inline]
    pub fn margin_right(self) -> f64 {
        match self {
            DiagramType::NeoClassicalAdAs => MARGIN_RIGHT_ADAS,
            _ => MARGIN_RIGHT,
        }
    }
}

/// User-configurable canvas size. `scale` is a device pixel ratio for exports;
/// geometry is always computed in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("canvas dimensions must be finite and positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("canvas width {width} leaves no horizontal plot area (min_x {min_x} >= max_x {max_x})")]
    TooNarrow { width: f64, min_x: f64, max_x: f64 },
    #[error("canvas height {height} leaves no vertical plot area (min_y {min_y} >= max_y {max_y})")]
    TooShort { height: f64, min_y: f64, max_y: f64 },
}

/// Plot rectangle for one scene.
///
/// Invariant: `min_x < max_x` and `min_y < max_y` (checked at construction).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub canvas: Canvas,
    pub diagram: DiagramType,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_right: f64,
}

impl PlotFrame {
    /// Build a frame, rejecting canvases that leave an empty plot rectangle.
    pub fn new(canvas: Canvas, diagram: DiagramType) -> Result<Self, FrameError> {
        if !(canvas.width.is_finite() && canvas.height.is_finite())
            || canvas.width <= 0.0
            || canvas.height <= 0.0
        {
            return Err(FrameError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        let frame = Self {
            canvas,
            diagram,
            margin_left: MARGIN_LEFT,
            margin_top: MARGIN_TOP,
            margin_bottom: MARGIN_BOTTOM,
            margin_right: diagram.margin_right(),
        };
        if frame.min_x() >= frame.max_x() {
            return Err(FrameError::TooNarrow {
                width: canvas.width,
                min_x: frame.min_x(),
                max_x: frame.max_x(),
            });
        }
        if frame.min_y() >= frame.max_y() {
            return Err(FrameError::TooShort {
                height: canvas.height,
                min_y: frame.min_y(),
                max_y: frame.max_y(),
            });
        }
        Ok(frame)
    }

    /// Build a frame after raising width/height to the UI minimum (400px).
    pub fn clamped(canvas: Canvas, diagram: DiagramType) -> Result<Self, FrameError> {
        let fixed = Canvas {
            width: canvas.width.max(MIN_CANVAS),
            height: canvas.height.max(MIN_CANVAS),
            scale: if canvas.scale.is_finite() && canvas.scale > 0.0 {
                canvas.scale
            } else {
                1.0
            },
        };
        if fixed != canvas {
            tracing::debug!(?canvas, ?fixed, "canvas clamped to minimum size");
        }
        Self::new(fixed, diagram)
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.margin_left
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.canvas.width - self.margin_right
    }
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.margin_top
    }
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.canvas.height - self.margin_bottom
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// Geometric center of the plot rectangle.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            0.5 * (self.min_x() + self.max_x()),
            0.5 * (self.min_y() + self.max_y()),
        )
    }

    /// Axis origin (bottom-left corner of the plot rectangle).
    #[inline]
    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.min_x(), self.max_y())
    }

    /// Membership with slack `eps` (positive enlarges the rectangle).
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.min_x() - eps
            && p.x <= self.max_x() + eps
            && p.y >= self.min_y() - eps
            && p.y <= self.max_y() + eps
    }

    /// Clamp a point into the rectangle.
    #[inline]
    pub fn clamp(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            p.x.clamp(self.min_x(), self.max_x()),
            p.y.clamp(self.min_y(), self.max_y()),
        )
    }

    /// Clamp a point that lies inside or within `INTERIOR_TOL` of the frame;
    /// anything further out (or non-finite) is degenerate.
    pub fn admit(&self, p: Vector2<f64>) -> Option<Vector2<f64>> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return None;
        }
        if !self.contains_eps(p, INTERIOR_TOL) {
            return None;
        }
        Some(self.clamp(p))
    }

    /// Row on which quantity-axis labels sit.
    #[inline]
    pub fn quantity_label_y(&self) -> f64 {
        self.canvas.height - crate::cfg::QUANTITY_LABEL_INSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_for_default_canvas() {
        let f = PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::SupplyDemand).unwrap();
        assert_eq!(f.min_x(), 160.0);
        assert_eq!(f.max_x(), 560.0);
        assert_eq!(f.min_y(), 80.0);
        assert_eq!(f.max_y(), 530.0);
        assert_eq!(f.center(), Vector2::new(360.0, 305.0));
    }

    #[test]
    fn adas_uses_narrow_right_margin() {
        let f = PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::NeoClassicalAdAs).unwrap();
        assert_eq!(f.max_x(), 610.0);
    }

    #[test]
    fn empty_rectangles_are_rejected() {
        let narrow = PlotFrame::new(Canvas::new(200.0, 600.0), DiagramType::Ppc);
        assert!(matches!(narrow, Err(FrameError::TooNarrow { .. })));
        let short = PlotFrame::new(Canvas::new(600.0, 140.0), DiagramType::Ppc);
        assert!(matches!(short, Err(FrameError::TooShort { .. })));
        let nan = PlotFrame::new(Canvas::new(f64::NAN, 600.0), DiagramType::Ppc);
        assert!(matches!(nan, Err(FrameError::InvalidCanvas { .. })));
    }

    #[test]
    fn clamped_raises_to_minimum() {
        let f = PlotFrame::clamped(Canvas::new(100.0, 50.0), DiagramType::SupplyDemand).unwrap();
        assert_eq!(f.canvas.width, 400.0);
        assert_eq!(f.canvas.height, 400.0);
        assert!(f.min_x() < f.max_x() && f.min_y() < f.max_y());
    }

    #[test]
    fn admit_clamps_near_points_and_drops_far_ones() {
        let f = PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::SupplyDemand).unwrap();
        assert_eq!(f.admit(Vector2::new(159.8, 300.0)), Some(Vector2::new(160.0, 300.0)));
        assert_eq!(f.admit(Vector2::new(100.0, 300.0)), None);
        assert_eq!(f.admit(Vector2::new(f64::NAN, 300.0)), None);
    }
}
