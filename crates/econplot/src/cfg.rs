//! Fixed tolerances and layout constants (internal).
//!
//! Policy
//! - Defaults are fixed constants; the diagrams are tuned against them and the
//!   renderer expects labels at these offsets. Changing one changes every scene.

/// Minimum canvas side length the UI allows (px).
pub const MIN_CANVAS: f64 = 400.0;

/// Plot-rectangle margins (px).
pub const MARGIN_LEFT: f64 = 160.0;
pub const MARGIN_TOP: f64 = 80.0;
pub const MARGIN_BOTTOM: f64 = 70.0;
pub const MARGIN_RIGHT: f64 = 90.0;
/// AD/AS diagrams carry no right-hand curve labels beyond LRAS and use a narrow margin.
pub const MARGIN_RIGHT_ADAS: f64 = 40.0;

/// Share of the plot width a curve with `extent_percent = 100` may span.
pub const LINE_WIDTH_SHARE: f64 = 0.8;

/// A segment with `|x2 - x1|` below this is treated as vertical.
pub const VERTICAL_EPS: f64 = 0.1;
/// Points within this distance outside the frame are clamped instead of dropped.
pub const INTERIOR_TOL: f64 = 0.5;

/// Supply near-vertical bands (degrees).
pub const NEAR_VERTICAL_START: f64 = 85.0;
pub const NEAR_VERTICAL_INNER: f64 = 89.0;
/// Demand snaps to vertical when closer than this to 90° (degrees).
pub const DEMAND_SNAP_DEG: f64 = 1.0;

/// Overflow multiplier for `ClipPolicy::Extend`.
pub const EXTEND_FACTOR: f64 = 1.5;
/// Horizontal share of a diagonal shift.
pub const DIAGONAL_X_SHARE: f64 = 0.5;

/// Curve label offset from the segment's terminal point.
pub const LABEL_DX: f64 = 20.0;
pub const LABEL_DY: f64 = -20.0;
/// Price-axis labels are right-aligned at this x.
pub const PRICE_LABEL_X: f64 = 125.0;
/// Quantity-axis labels sit this far above the canvas bottom.
pub const QUANTITY_LABEL_INSET: f64 = 55.0;
/// Point marker labels sit this far up and right of the marker.
pub const POINT_LABEL_OFFSET: f64 = 10.0;
/// Minimum x distance between the AD/AS tax-equilibrium quantity label and any other quantity label.
pub const QUANTITY_LABEL_MIN_GAP: f64 = 24.0;

/// Number of line segments used to draw a bowed PPC.
pub const PPC_SAMPLES: usize = 32;

/// Watermark text and inset from the canvas' bottom-right corner.
pub const WATERMARK_TEXT: &str = "econplot preview";
pub const WATERMARK_INSET: f64 = 20.0;
