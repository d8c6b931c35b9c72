//! Neo-classical AD/AS: AD, SRAS, vertical LRAS, optional shocks and an
//! indirect tax on SRAS.
//!
//! The tax-equilibrium quantity label is the only label with a collision
//! check (see `labels::crowds_quantity_row`).

use nalgebra::Vector2;

use super::builder::{EqNames, SceneBuilder};
use super::labels;
use super::params::{active_distance, AdAsParams};
use super::types::{BaseCurve, CurveRole, DiagramScene, ShiftCause};
use super::{demand_like_spec, shifted_curve, supply_like_spec};
use crate::cfg::INTERIOR_TOL;
use crate::curve::{generate, ElasticityClass, Orientation};
use crate::frame::PlotFrame;
use crate::shift::ShiftSpec;

pub(crate) fn build(p: &AdAsParams, frame: &PlotFrame) -> DiagramScene {
    let mut b = SceneBuilder::new(frame, p.show_guides);
    b.axes("Price level", "Real GDP");

    let c = frame.center();
    let ad_role = CurveRole::Base(BaseCurve::Ad);
    let sras_role = CurveRole::Base(BaseCurve::Sras);
    let lras_role = CurveRole::Base(BaseCurve::Lras);

    let ad = generate(Orientation::Demand, p.ad, frame, c);
    let sras = generate(Orientation::Supply, p.sras, frame, c);
    let lras_x = if p.lras_offset.is_finite() {
        (c.x + p.lras_offset).clamp(frame.min_x(), frame.max_x())
    } else {
        c.x
    };
    let lras = generate(
        Orientation::Supply,
        ElasticityClass::PerfectlyInelastic,
        frame,
        Vector2::new(lras_x, c.y),
    );

    b.curve(lras_role, lras, "LRAS");
    b.curve(ad_role, ad, "AD");
    b.curve(sras_role, sras, "SRAS");

    let ad1 = p
        .ad_shift
        .and_then(demand_like_spec)
        .and_then(|spec| shifted_curve(&ad, BaseCurve::Ad, ShiftCause::Shock, spec, frame));
    let sras1 = p
        .sras_shift
        .and_then(supply_like_spec)
        .and_then(|spec| shifted_curve(&sras, BaseCurve::Sras, ShiftCause::Shock, spec, frame));
    for (role, seg) in [ad1, sras1].into_iter().flatten() {
        b.curve(role, seg, &role.name());
    }
    let (cur_ad_role, cur_ad) = ad1.unwrap_or((ad_role, ad));
    let (cur_sras_role, cur_sras) = sras1.unwrap_or((sras_role, sras));

    // At long-run equilibrium the output label is full-employment output.
    let e0 = crate::intersect::equilibrium(&ad, &sras, frame);
    let at_full_employment = e0.is_some_and(|p| (p.x - lras_x).abs() <= INTERIOR_TOL);
    let y0 = if at_full_employment { "Yf" } else { "Y0" };
    if !at_full_employment {
        b.label(labels::quantity_label(Vector2::new(lras_x, c.y), frame, "Yf"));
    }
    b.equilibrium(
        (ad_role, &ad),
        (sras_role, &sras),
        EqNames {
            point: "E0",
            price: "PL0",
            quantity: y0,
        },
    );

    if ad1.is_some() || sras1.is_some() {
        b.equilibrium(
            (cur_ad_role, &cur_ad),
            (cur_sras_role, &cur_sras),
            EqNames {
                point: "E1",
                price: "PL1",
                quantity: "Y1",
            },
        );
    }

    let taxed = p.tax.and_then(active_distance).and_then(|d| {
        shifted_curve(&cur_sras, BaseCurve::Sras, ShiftCause::Tax, ShiftSpec::up(d), frame)
    });
    if let Some((tax_role, tax_seg)) = taxed {
        b.curve(tax_role, tax_seg, &tax_role.name());
        if let Some(et) = b.equilibrium_point((tax_role, &tax_seg), (cur_ad_role, &cur_ad), "Et") {
            b.guides(et);
            b.label(labels::price_label(et, "PLt"));
            let yt = labels::quantity_label(et, frame, "Yt");
            if labels::crowds_quantity_row(b.labels(), &yt) {
                tracing::debug!(x = yt.x, "tax-equilibrium output label suppressed");
            } else {
                b.label(yt);
            }
        }
    }

    b.finish()
}
