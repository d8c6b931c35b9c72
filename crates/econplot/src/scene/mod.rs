//! Scene assembler: one immutable `DiagramScene` per parameter snapshot.
//!
//! Purpose
//! - Dispatch once on the diagram family, then run the pipeline
//!   generate → shift/clip → intersect → label for that family.
//!
//! Why this design
//! - Every toggled curve is a `CurveRole::Shifted` carrying its `ShiftSpec`;
//!   there is no per-call-site re-derivation of which curve moved where.
//! - Scenes are rebuilt from scratch; nothing is remembered between calls.
//!
//! Degradation policy
//! - A shifted curve that is not drawable is simply absent.
//! - Parallel or out-of-frame intersections emit no marker, guide, or label.
//!
//! Code cross-refs: `curve::generate`, `shift::shift`, `intersect::equilibrium`,
//! `labels` (placement constants and the AD/AS collision rule).

mod adas;
mod builder;
mod externality;
pub mod labels;
mod params;
mod ppc;
mod supply_demand;
mod types;

pub use params::{
    active_distance, sanitize_distance, AdAsParams, CurveShift, ExternalityKind,
    ExternalityParams, PpcParams, SceneParams, ShiftDirection, SupplyDemandParams, MAX_SHIFT,
};
pub use types::{
    BaseCurve, CurveRole, DiagramScene, Label, LabelSlot, PointProvenance, SceneSegment,
    ScenePoint, ShiftCause, Stroke,
};

use crate::frame::PlotFrame;
use crate::segment::Segment;
use crate::shift::{shift, ShiftSpec};

/// Build the scene for `params` inside `frame`.
///
/// `frame` should have been built for `params.diagram_type()` (the right
/// margin differs for AD/AS); on a mismatch the diagram and right margin are
/// taken from `params` and a warning is logged.
pub fn build_scene(params: &SceneParams, frame: &PlotFrame) -> DiagramScene {
    if frame.diagram != params.diagram_type() {
        tracing::warn!(
            frame = ?frame.diagram,
            params = ?params.diagram_type(),
            "frame built for a different diagram type"
        );
    }
    let frame = &PlotFrame {
        diagram: params.diagram_type(),
        margin_right: params.diagram_type().margin_right(),
        ..*frame
    };
    match params {
        SceneParams::SupplyDemand(p) => supply_demand::build(p, frame),
        SceneParams::Externalities(p) => externality::build(p, frame),
        SceneParams::Ppc(p) => ppc::build(p, frame),
        SceneParams::NeoClassicalAdAs(p) => adas::build(p, frame),
    }
}

/// `ShiftSpec` for an upward-sloping curve (supply, SRAS): increase moves it right, i.e. down.
/// `None` for a zero distance.
pub(crate) fn supply_like_spec(sh: CurveShift) -> Option<ShiftSpec> {
    let d = active_distance(sh.distance)?;
    Some(match sh.direction {
        ShiftDirection::Increase => ShiftSpec::down(d),
        ShiftDirection::Decrease => ShiftSpec::up(d),
    })
}

/// `ShiftSpec` for a downward-sloping curve (demand, AD): increase moves it right, i.e. up.
/// `None` for a zero distance.
pub(crate) fn demand_like_spec(sh: CurveShift) -> Option<ShiftSpec> {
    let d = active_distance(sh.distance)?;
    Some(match sh.direction {
        ShiftDirection::Increase => ShiftSpec::up(d),
        ShiftDirection::Decrease => ShiftSpec::down(d),
    })
}

/// Shift `base` and tag the result; `None` if it is not drawable.
pub(crate) fn shifted_curve(
    base_seg: &Segment,
    base: BaseCurve,
    cause: ShiftCause,
    spec: ShiftSpec,
    frame: &PlotFrame,
) -> Option<(CurveRole, Segment)> {
    let seg = shift(*base_seg, spec, frame)?;
    Some((CurveRole::shifted(base, cause, spec), seg))
}

#[cfg(test)]
mod tests;
