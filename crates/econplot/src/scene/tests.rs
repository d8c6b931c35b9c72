use super::*;
use crate::curve::{ElasticityClass, OpportunityCost};
use crate::frame::{Canvas, DiagramType, PlotFrame};
use crate::shift::ShiftSpec;
use nalgebra::Vector2;

fn frame(diagram: DiagramType) -> PlotFrame {
    PlotFrame::new(Canvas::new(650.0, 600.0), diagram).unwrap()
}

fn sd(p: SupplyDemandParams) -> DiagramScene {
    build_scene(&SceneParams::SupplyDemand(p), &frame(DiagramType::SupplyDemand))
}

fn adas(p: AdAsParams) -> DiagramScene {
    build_scene(
        &SceneParams::NeoClassicalAdAs(p),
        &frame(DiagramType::NeoClassicalAdAs),
    )
}

fn pos(scene: &DiagramScene, name: &str) -> Vector2<f64> {
    scene
        .point(name)
        .unwrap_or_else(|| panic!("missing point {name}"))
        .position
}

#[test]
fn default_supply_demand_scene() {
    let s = sd(SupplyDemandParams::default());
    let e0 = pos(&s, "E0");
    assert!((e0 - Vector2::new(360.0, 305.0)).norm() < 1e-9);
    assert_eq!(s.label("P0").unwrap().x, 125.0);
    assert!((s.label("P0").unwrap().y - 305.0).abs() < 1e-9);
    assert_eq!(s.label("Q0").unwrap().y, 545.0);
    assert!(s.label("S").is_some() && s.label("D").is_some());
    // two axes, two curves, two guides
    assert_eq!(s.segments.len(), 6);
    assert_eq!(s.labels_in(LabelSlot::Watermark).count(), 1);
}

#[test]
fn watermark_is_removed_for_export() {
    let s = sd(SupplyDemandParams::default());
    let exported = s.without_watermark();
    assert_eq!(exported.labels_in(LabelSlot::Watermark).count(), 0);
    assert_eq!(exported.labels.len() + 1, s.labels.len());
    assert_eq!(exported.segments, s.segments);
}

#[test]
fn tax_wedge_straddles_base_equilibrium() {
    let s = sd(SupplyDemandParams {
        tax: Some(40.0),
        ..Default::default()
    });
    let taxed = s
        .curve(&CurveRole::shifted(
            BaseCurve::Supply,
            ShiftCause::Tax,
            ShiftSpec::up(40.0),
        ))
        .expect("tax curve");
    assert!((taxed.start.y - 361.0).abs() < 1e-9);
    let e0 = pos(&s, "E0");
    let et = pos(&s, "Et");
    let wt = pos(&s, "Wt");
    assert!((et - Vector2::new(340.0, 285.0)).norm() < 1e-9);
    assert!((wt - Vector2::new(340.0, 325.0)).norm() < 1e-9);
    assert!(et.y < e0.y && wt.y > e0.y);
    assert!(s.label("Pc").is_some() && s.label("Pp").is_some() && s.label("Qt").is_some());
}

#[test]
fn subsidy_extends_and_lowers_consumer_price() {
    let s = sd(SupplyDemandParams {
        subsidy: Some(40.0),
        ..Default::default()
    });
    let e0 = pos(&s, "E0");
    let es = pos(&s, "Es");
    let ws = pos(&s, "Ws");
    assert!(es.y > e0.y && es.x > e0.x);
    assert!(ws.y < e0.y);
    assert!(s.label("S3").is_some());
}

#[test]
fn demand_tail_follows_supply_label_column_without_s3() {
    let s = sd(SupplyDemandParams {
        supply: ElasticityClass::PerfectlyElastic,
        ..Default::default()
    });
    let supply = s.curve(&CurveRole::SUPPLY).unwrap();
    let demand = s.curve(&CurveRole::DEMAND).unwrap();
    assert!((demand.start.x - supply.right().x).abs() < 1e-9);

    let with_s3 = sd(SupplyDemandParams {
        supply: ElasticityClass::PerfectlyElastic,
        subsidy: Some(20.0),
        ..Default::default()
    });
    let demand = with_s3.curve(&CurveRole::DEMAND).unwrap();
    assert!((demand.start.x - 456.0).abs() < 1e-9);
}

#[test]
fn parallel_curves_emit_no_equilibrium() {
    let s = sd(SupplyDemandParams {
        supply: ElasticityClass::PerfectlyElastic,
        demand: ElasticityClass::PerfectlyElastic,
        ..Default::default()
    });
    assert!(s.point("E0").is_none());
    assert!(s.label("P0").is_none() && s.label("Q0").is_none());
    assert!(s.segments.iter().all(|seg| seg.role != CurveRole::Guide));
}

#[test]
fn supply_and_demand_shifts_produce_e1() {
    let s = sd(SupplyDemandParams {
        supply_shift: Some(CurveShift::increase(40.0)),
        advertising: Some(40.0),
        ..Default::default()
    });
    let e0 = pos(&s, "E0");
    let e1 = pos(&s, "E1");
    // both curves move right by 40 in quantity terms
    assert!(e1.x > e0.x);
    assert!((e1.y - e0.y).abs() < 1e-9);
    assert!(s.label("S2").is_some() && s.label("D2").is_some());
}

#[test]
fn out_of_frame_shift_drops_dependents() {
    let s = sd(SupplyDemandParams {
        tax: Some(500.0),
        ..Default::default()
    });
    assert!(s.label("S + tax").is_none());
    assert!(s.point("Et").is_none() && s.point("Wt").is_none());
}

#[test]
fn negative_production_externality() {
    let s = build_scene(
        &SceneParams::Externalities(ExternalityParams::default()),
        &frame(DiagramType::Externalities),
    );
    let em = pos(&s, "Em");
    let opt = pos(&s, "E*");
    assert!(opt.x < em.x, "overproduction at the market");
    assert!(opt.y < em.y, "social price is higher");
    assert!(s.label("MSC").is_some());
    let gap_guide = s
        .segments
        .iter()
        .filter(|g| g.role == CurveRole::Guide)
        .find(|g| (g.segment.start - em).norm() < 1e-9 && g.segment.end.y < em.y)
        .expect("gap guide at market quantity");
    assert!((gap_guide.segment.length() - 60.0).abs() < 1e-9);
}

#[test]
fn positive_consumption_externality() {
    let s = build_scene(
        &SceneParams::Externalities(ExternalityParams {
            kind: ExternalityKind::PositiveConsumption,
            ..Default::default()
        }),
        &frame(DiagramType::Externalities),
    );
    let em = pos(&s, "Em");
    let opt = pos(&s, "E*");
    assert!(opt.x > em.x, "underconsumption at the market");
    assert!(s.label("MSB").is_some());
    assert!(s.label("MPC = MSC = S").is_some());
}

#[test]
fn ppc_scene_has_curve_and_markers() {
    let s = build_scene(
        &SceneParams::Ppc(PpcParams {
            cost: OpportunityCost::Increasing,
            growth: Some(40.0),
            ..Default::default()
        }),
        &frame(DiagramType::Ppc),
    );
    let ppc = CurveRole::Base(BaseCurve::Ppc);
    assert_eq!(s.curves(&ppc).count(), crate::cfg::PPC_SAMPLES);
    let grown = CurveRole::shifted(BaseCurve::Ppc, ShiftCause::Growth, ShiftSpec::outward(40.0));
    assert_eq!(s.curves(&grown).count(), crate::cfg::PPC_SAMPLES);
    let o = s.frame.origin();
    let a = (pos(&s, "A") - o).norm();
    let b = (pos(&s, "B") - o).norm();
    let c = (pos(&s, "C") - o).norm();
    assert!(b < a && a < c);
    for seg in s.segments.iter() {
        assert!(s.frame.contains_eps(seg.segment.start, 1e-6));
        assert!(s.frame.contains_eps(seg.segment.end, 1e-6));
    }
}

#[test]
fn adas_long_run_equilibrium_uses_full_employment_label() {
    let s = adas(AdAsParams::default());
    let e0 = pos(&s, "E0");
    assert!((e0 - Vector2::new(385.0, 305.0)).norm() < 1e-9);
    assert!(s.label("Yf").is_some());
    assert!(s.label("Y0").is_none());
    let lras = s.curve(&CurveRole::Base(BaseCurve::Lras)).unwrap();
    assert_eq!((lras.start.y, lras.end.y), (80.0, 530.0));
}

#[test]
fn adas_tax_label_suppressed_when_crowded() {
    let near = adas(AdAsParams {
        tax: Some(40.0),
        ..Default::default()
    });
    let et = pos(&near, "Et");
    assert!((et.x - 365.0).abs() < 1e-9);
    assert!(near.label("PLt").is_some());
    assert!(near.label("Yt").is_none());

    let far = adas(AdAsParams {
        tax: Some(100.0),
        ..Default::default()
    });
    let yt = far.label("Yt").expect("label placed when clear of Yf");
    assert!((yt.x - 335.0).abs() < 1e-9);
}

#[test]
fn adas_demand_shock_moves_output() {
    let s = adas(AdAsParams {
        ad_shift: Some(CurveShift::decrease(60.0)),
        ..Default::default()
    });
    let e0 = pos(&s, "E0");
    let e1 = pos(&s, "E1");
    assert!(e1.x < e0.x && e1.y > e0.y);
    assert!(s.label("AD1").is_some() && s.label("Y1").is_some());
}

#[test]
fn scene_serializes_to_json() {
    let s = sd(SupplyDemandParams {
        tax: Some(40.0),
        ..Default::default()
    });
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["diagram"], "supply_demand");
    assert!(v["segments"].as_array().unwrap().len() > 4);
    assert_eq!(v["points"][0]["name"], "E0");
}

#[test]
fn params_deserialize_with_defaults_and_fallbacks() {
    let p: SceneParams =
        serde_json::from_str(r#"{"diagram": "supply_demand", "supply": "bogus", "tax": 40}"#)
            .unwrap();
    match p {
        SceneParams::SupplyDemand(sd) => {
            assert_eq!(sd.supply, ElasticityClass::Unitary);
            assert_eq!(sd.tax, Some(40.0));
            assert!(sd.show_guides);
        }
        other => panic!("unexpected {other:?}"),
    }
    let p: SceneParams = serde_json::from_str(r#"{"diagram": "ppc"}"#).unwrap();
    assert_eq!(p.diagram_type(), DiagramType::Ppc);
}

#[test]
fn zero_distance_toggles_add_nothing() {
    let plain = sd(SupplyDemandParams::default());
    for d in [0.0, -10.0, f64::NAN] {
        let s = sd(SupplyDemandParams {
            supply_shift: Some(CurveShift::increase(d)),
            advertising: Some(d),
            tax: Some(d),
            subsidy: Some(d),
            ..Default::default()
        });
        assert_eq!(s, plain, "distance {d}");
        let names: Vec<&str> = s.points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["E0"]);
        assert_eq!(s.labels_in(LabelSlot::PriceAxis).count(), 1);
    }

    let s = adas(AdAsParams {
        ad_shift: Some(CurveShift::decrease(0.0)),
        sras_shift: Some(CurveShift::increase(0.0)),
        tax: Some(0.0),
        ..Default::default()
    });
    assert_eq!(s, adas(AdAsParams::default()));
    assert!(s.point("E1").is_none() && s.point("Et").is_none());

    let s = build_scene(
        &SceneParams::Externalities(ExternalityParams {
            gap: 0.0,
            ..Default::default()
        }),
        &frame(DiagramType::Externalities),
    );
    assert!(s.point("Em").is_some());
    assert!(s.point("E*").is_none());
    assert!(s.label("MSC").is_none());
}

#[test]
fn demand_tail_is_never_shortened() {
    // relatively inelastic supply ends at x = 440, left of the demand's 456
    let s = sd(SupplyDemandParams {
        supply: ElasticityClass::RelativelyInelastic,
        ..Default::default()
    });
    let supply = s.curve(&CurveRole::SUPPLY).unwrap();
    let demand = s.curve(&CurveRole::DEMAND).unwrap();
    assert!((supply.right().x - 440.0).abs() < 1e-9);
    assert!((demand.right().x - 456.0).abs() < 1e-9);
    assert!((demand.start.y - 401.0).abs() < 1e-9);
}

#[test]
fn mismatched_frame_takes_margin_from_params() {
    let s = build_scene(
        &SceneParams::NeoClassicalAdAs(AdAsParams::default()),
        &frame(DiagramType::SupplyDemand),
    );
    assert_eq!(s.diagram, DiagramType::NeoClassicalAdAs);
    assert_eq!(s.frame.margin_right, crate::cfg::MARGIN_RIGHT_ADAS);
    assert_eq!(s.frame.max_x(), 610.0);
    assert_eq!(s, adas(AdAsParams::default()));
}
