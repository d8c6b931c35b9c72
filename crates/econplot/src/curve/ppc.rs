//! Production-possibility curve as a polyline.
//!
//! The curve is the positive quadrant of a superellipse anchored at the axis
//! origin: `(dx/a)^p + (dy/b)^p = 1`. `p = 1` is the constant-cost straight
//! line; `p > 1` bows outward (increasing cost); `p < 1` bows inward.
//! Segments run from the x-intercept to the y-intercept (right-to-left).

use nalgebra::Vector2;

use super::params::PpcShape;
use crate::cfg::PPC_SAMPLES;
use crate::frame::PlotFrame;
use crate::segment::Segment;

/// Axis-aligned radii of a PPC measured from the plot origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PpcRadii {
    pub x: f64,
    pub y: f64,
}

impl PpcRadii {
    /// Default radii for a shape: `extent_percent` of the plot width/height.
    pub fn for_shape(shape: PpcShape, frame: &PlotFrame) -> Self {
        Self {
            x: frame.width() * shape.extent_percent / 100.0,
            y: frame.height() * shape.extent_percent / 100.0,
        }
    }

    /// Grow outward by `distance` px on both axes, never past the frame.
    pub fn grown(self, distance: f64, frame: &PlotFrame) -> Self {
        Self {
            x: (self.x + distance).clamp(1.0, frame.width()),
            y: (self.y + distance).clamp(1.0, frame.height()),
        }
    }
}

/// Point on the curve at parameter `theta ∈ [0, π/2]` (0 = x-intercept).
pub fn ppc_point(shape: PpcShape, radii: PpcRadii, frame: &PlotFrame, theta: f64) -> Vector2<f64> {
    let e = 2.0 / shape.exponent.max(f64::EPSILON);
    let cx = theta.cos().max(0.0).powf(e);
    let sy = theta.sin().max(0.0).powf(e);
    let o = frame.origin();
    Vector2::new(o.x + radii.x * cx, o.y - radii.y * sy)
}

/// Polyline approximating the curve, `PPC_SAMPLES` segments long.
pub fn ppc_polyline(shape: PpcShape, radii: PpcRadii, frame: &PlotFrame) -> Vec<Segment> {
    let step = std::f64::consts::FRAC_PI_2 / PPC_SAMPLES as f64;
    let pts: Vec<Vector2<f64>> = (0..=PPC_SAMPLES)
        .map(|i| ppc_point(shape, radii, frame, step * i as f64))
        .collect();
    pts.windows(2).map(|w| Segment::new(w[0], w[1])).collect()
}
