//! Production-possibility curve with optional growth and A/B/C markers.

use nalgebra::Vector2;

use super::builder::SceneBuilder;
use super::params::{active_distance, PpcParams};
use super::types::{BaseCurve, CurveRole, DiagramScene, PointProvenance, ShiftCause, Stroke};
use crate::curve::{ppc_point, ppc_polyline, resolve_ppc, PpcRadii};
use crate::frame::PlotFrame;
use crate::scene::labels;
use crate::shift::ShiftSpec;

/// Where B (inefficient) and C (unattainable) sit relative to A along the ray from the origin.
const INEFFICIENT_SHARE: f64 = 0.6;
const UNATTAINABLE_SHARE: f64 = 1.25;

pub(crate) fn build(p: &PpcParams, frame: &PlotFrame) -> DiagramScene {
    let mut b = SceneBuilder::new(frame, false);
    b.axes(&p.y_good, &p.x_good);

    let shape = resolve_ppc(p.cost);
    let radii = PpcRadii::for_shape(shape, frame);
    let role = CurveRole::Base(BaseCurve::Ppc);
    let curve = ppc_polyline(shape, radii, frame);
    for seg in &curve {
        b.push_segment(role, *seg, Stroke::Solid);
    }
    if let Some(first) = curve.first() {
        b.label(labels::curve_label(first, "PPC"));
    }

    if let Some(d) = p.growth.and_then(active_distance) {
        let grown = radii.grown(d, frame);
        let role2 = CurveRole::shifted(BaseCurve::Ppc, ShiftCause::Growth, ShiftSpec::outward(d));
        let curve2 = ppc_polyline(shape, grown, frame);
        for seg in &curve2 {
            b.push_segment(role2, *seg, Stroke::Solid);
        }
        if let Some(first) = curve2.first() {
            b.label(labels::curve_label(first, role2.name()));
        }
    }

    if p.show_points {
        let o = frame.origin();
        let a = ppc_point(shape, radii, frame, std::f64::consts::FRAC_PI_4);
        b.marker("A", a, PointProvenance::OnCurve(role));
        let along = |share: f64| -> Vector2<f64> { o + (a - o) * share };
        if let Some(pb) = frame.admit(along(INEFFICIENT_SHARE)) {
            b.marker("B", pb, PointProvenance::Free);
        }
        if let Some(pc) = frame.admit(along(UNATTAINABLE_SHARE)) {
            b.marker("C", pc, PointProvenance::Free);
        }
    }

    b.finish()
}
