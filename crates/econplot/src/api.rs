//! Curated internal API (UNSTABLE).
//!
//! - Not a public API; breaking changes are allowed.
//! - One place to import every stage of the pipeline from, for the CLI,
//!   benches and integration tests.

// Frame and primitives
pub use crate::frame::{Canvas, DiagramType, FrameError, PlotFrame};
pub use crate::segment::{LineEq, Segment};
// Curve generation
pub use crate::curve::{
    generate, generate_from_params, ppc_point, ppc_polyline, resolve, resolve_ppc,
    retarget_demand_tail, CurveParams, ElasticityClass, OpportunityCost, Orientation, PpcRadii,
    PpcShape,
};
// Shifts, clipping, intersections
pub use crate::clip::{clip, ClipPolicy};
pub use crate::intersect::{equilibrium, intersect, is_degenerate, point_at_x};
pub use crate::shift::{shift, ShiftAxis, ShiftSpec};
// Scenes
pub use crate::scene::labels::crowds_quantity_row;
pub use crate::scene::{
    active_distance, build_scene, sanitize_distance, AdAsParams, BaseCurve, CurveRole, CurveShift,
    DiagramScene, ExternalityKind, ExternalityParams, Label, LabelSlot, PointProvenance, PpcParams,
    SceneParams, SceneSegment, ScenePoint, ShiftCause, ShiftDirection, Stroke, SupplyDemandParams,
    MAX_SHIFT,
};
