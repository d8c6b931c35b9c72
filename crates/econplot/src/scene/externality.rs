//! Externalities: private curves, the social curve offset by the gap, the
//! market and socially optimal equilibria, and the gap at the market quantity.
//!
//! - Production externalities move the cost side: MSC = MPC ∓ gap.
//! - Consumption externalities move the benefit side: MSB = MPB ± gap.

use super::builder::{EqNames, SceneBuilder};
use super::params::{active_distance, ExternalityParams};
use super::shifted_curve;
use super::types::{BaseCurve, CurveRole, DiagramScene, ShiftCause, Stroke};
use crate::curve::{generate, Orientation};
use crate::frame::PlotFrame;
use crate::intersect::point_at_x;
use crate::segment::Segment;
use crate::shift::ShiftSpec;

pub(crate) fn build(p: &ExternalityParams, frame: &PlotFrame) -> DiagramScene {
    let mut b = SceneBuilder::new(frame, p.show_guides);
    b.axes("Price, costs, benefits", "Quantity");

    let c = frame.center();
    let mpc = generate(Orientation::Supply, p.supply, frame, c);
    let mpb = generate(Orientation::Demand, p.demand, frame, c);
    let mpc_role = CurveRole::Base(BaseCurve::Mpc);
    let mpb_role = CurveRole::Base(BaseCurve::Mpb);
    // A zero gap draws no social curve and no separate optimum.
    let gap = active_distance(p.gap);

    // (cost curve, benefit curve) the social optimum is read from.
    let social: Option<((CurveRole, Segment), (CurveRole, Segment))>;
    let shifted: Option<(CurveRole, Segment)>;
    if p.kind.is_production() {
        let spec = gap.map(|g| {
            if p.kind.is_negative() {
                ShiftSpec::up(g)
            } else {
                ShiftSpec::down(g)
            }
        });
        shifted = spec.and_then(|spec| {
            shifted_curve(&mpc, BaseCurve::Mpc, ShiftCause::Externality, spec, frame)
        });
        b.curve(mpc_role, mpc, "MPC = S");
        b.curve(mpb_role, mpb, "MPB = MSB = D");
        social = shifted.map(|msc| (msc, (mpb_role, mpb)));
    } else {
        let spec = gap.map(|g| {
            if p.kind.is_negative() {
                ShiftSpec::down(g)
            } else {
                ShiftSpec::up(g)
            }
        });
        shifted = spec.and_then(|spec| {
            shifted_curve(&mpb, BaseCurve::Mpb, ShiftCause::Externality, spec, frame)
        });
        b.curve(mpc_role, mpc, "MPC = MSC = S");
        b.curve(mpb_role, mpb, "MPB = D");
        social = shifted.map(|msb| ((mpc_role, mpc), msb));
    }
    if let Some((role, seg)) = shifted {
        b.curve(role, seg, &role.name());
    }

    let market = b.equilibrium(
        (mpc_role, &mpc),
        (mpb_role, &mpb),
        EqNames {
            point: "Em",
            price: "Pm",
            quantity: "Qm",
        },
    );
    if let Some(((cr, cs), (br, bs))) = social {
        b.equilibrium(
            (cr, &cs),
            (br, &bs),
            EqNames {
                point: "E*",
                price: "P*",
                quantity: "Q*",
            },
        );
    }

    // Marginal external cost/benefit at the market quantity.
    if let (Some(m), Some((_, seg))) = (market, shifted) {
        if let Some(on_social) = point_at_x(&seg, m.x, frame) {
            if (on_social - m).norm() > f64::EPSILON {
                b.push_segment(CurveRole::Guide, Segment::new(m, on_social), Stroke::Dashed);
            }
        }
    }

    b.finish()
}
