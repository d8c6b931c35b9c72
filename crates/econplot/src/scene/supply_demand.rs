//! Supply and demand: S, D, optional S2 / D2 / tax / subsidy (S3).

use super::builder::{EqNames, SceneBuilder};
use super::params::{active_distance, SupplyDemandParams};
use super::types::{BaseCurve, CurveRole, DiagramScene, ShiftCause};
use super::{shifted_curve, supply_like_spec};
use crate::curve::{generate, retarget_demand_tail, Orientation};
use crate::frame::PlotFrame;
use crate::segment::Segment;
use crate::shift::ShiftSpec;

pub(crate) fn build(p: &SupplyDemandParams, frame: &PlotFrame) -> DiagramScene {
    let mut b = SceneBuilder::new(frame, p.show_guides);
    b.axes("Price", "Quantity");

    let c = frame.center();
    let supply = generate(Orientation::Supply, p.supply, frame, c);
    let mut demand = generate(Orientation::Demand, p.demand, frame, c);

    let s2 = p.supply_shift.and_then(supply_like_spec).and_then(|spec| {
        shifted_curve(&supply, BaseCurve::Supply, ShiftCause::Shock, spec, frame)
    });
    let taxed = p.tax.and_then(active_distance).and_then(|d| {
        shifted_curve(&supply, BaseCurve::Supply, ShiftCause::Tax, ShiftSpec::up(d), frame)
    });
    let s3 = p.subsidy.and_then(active_distance).and_then(|d| {
        shifted_curve(
            &supply,
            BaseCurve::Supply,
            ShiftCause::Subsidy,
            ShiftSpec::diagonal(d),
            frame,
        )
    });
    if s3.is_none() {
        demand = align_demand_with_supply_label(demand, &supply, frame);
    }
    let d2 = p.advertising.and_then(active_distance).and_then(|d| {
        shifted_curve(
            &demand,
            BaseCurve::Demand,
            ShiftCause::Advertising,
            ShiftSpec::up(d),
            frame,
        )
    });

    b.curve(CurveRole::SUPPLY, supply, "S");
    b.curve(CurveRole::DEMAND, demand, "D");
    for (role, seg) in [s2, d2, taxed, s3].into_iter().flatten() {
        b.curve(role, seg, &role.name());
    }

    b.equilibrium(
        (CurveRole::SUPPLY, &supply),
        (CurveRole::DEMAND, &demand),
        EqNames {
            point: "E0",
            price: "P0",
            quantity: "Q0",
        },
    );

    if s2.is_some() || d2.is_some() {
        let (sr, ss) = s2.unwrap_or((CurveRole::SUPPLY, supply));
        let (dr, ds) = d2.unwrap_or((CurveRole::DEMAND, demand));
        b.equilibrium(
            (sr, &ss),
            (dr, &ds),
            EqNames {
                point: "E1",
                price: "P1",
                quantity: "Q1",
            },
        );
    }

    // Tax and subsidy are read against the undisturbed S and D.
    if let Some((role, seg)) = taxed {
        let consumer = b.equilibrium(
            (role, &seg),
            (CurveRole::DEMAND, &demand),
            EqNames {
                point: "Et",
                price: "Pc",
                quantity: "Qt",
            },
        );
        if let Some(et) = consumer {
            b.wedge((CurveRole::SUPPLY, &supply), et, "Wt", "Pp");
        }
    }
    if let Some((role, seg)) = s3 {
        let consumer = b.equilibrium(
            (role, &seg),
            (CurveRole::DEMAND, &demand),
            EqNames {
                point: "Es",
                price: "Pcs",
                quantity: "Qs",
            },
        );
        if let Some(es) = consumer {
            b.wedge((CurveRole::SUPPLY, &supply), es, "Ws", "Pps");
        }
    }

    b.finish()
}

/// Without S3 the "D" label shares the "S" label's column: extend the demand
/// curve's right end out to the supply's right end. Never shortens the curve,
/// and leaves it alone if the (unclipped) start would leave the frame.
fn align_demand_with_supply_label(demand: Segment, supply: &Segment, frame: &PlotFrame) -> Segment {
    if supply.is_vertical() {
        return demand;
    }
    let anchor_x = supply.right().x;
    if anchor_x <= demand.right().x {
        return demand;
    }
    let moved = retarget_demand_tail(demand, anchor_x);
    if frame.contains_eps(moved.start, 0.0) {
        moved
    } else {
        demand
    }
}
