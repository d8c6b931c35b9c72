use super::*;
use crate::frame::{Canvas, DiagramType, PlotFrame};
use nalgebra::Vector2;

fn frame() -> PlotFrame {
    PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::SupplyDemand).unwrap()
}

#[test]
fn resolver_angles_stay_in_quadrant() {
    for e in ElasticityClass::ALL {
        let s = resolve(Orientation::Supply, e);
        let d = resolve(Orientation::Demand, e);
        assert!((0.0..=90.0).contains(&s.angle_degrees), "{e:?} supply");
        assert!((-90.0..=0.0).contains(&d.angle_degrees), "{e:?} demand");
        assert_eq!(s.extent_percent, d.extent_percent);
    }
}

#[test]
fn unknown_names_fall_back_to_defaults() {
    assert_eq!(ElasticityClass::from_name("wobbly"), ElasticityClass::Unitary);
    assert_eq!(
        ElasticityClass::from_name("Relatively_Inelastic"),
        ElasticityClass::RelativelyInelastic
    );
    assert_eq!(OpportunityCost::from_name(""), OpportunityCost::Constant);
    let parsed: ElasticityClass = serde_json::from_str("\"hyper-elastic\"").unwrap();
    assert_eq!(parsed, ElasticityClass::Unitary);
    let parsed: ElasticityClass = serde_json::from_str("\"perfectly-elastic\"").unwrap();
    assert_eq!(parsed, ElasticityClass::PerfectlyElastic);
}

#[test]
fn unitary_supply_and_demand_through_center() {
    let f = frame();
    let c = f.center();
    let s = generate(Orientation::Supply, ElasticityClass::Unitary, &f, c);
    let d = generate(Orientation::Demand, ElasticityClass::Unitary, &f, c);
    // half width = 0.5 * 0.8 * 400 * 0.6 = 96
    assert!((s.start.x - 264.0).abs() < 1e-9 && (s.end.x - 456.0).abs() < 1e-9);
    assert!((s.start.y - 401.0).abs() < 1e-9 && (s.end.y - 209.0).abs() < 1e-9);
    assert!(d.is_right_to_left());
    assert!((d.start.x - 456.0).abs() < 1e-9 && (d.start.y - 401.0).abs() < 1e-9);
    assert!((d.end.x - 264.0).abs() < 1e-9 && (d.end.y - 209.0).abs() < 1e-9);
}

#[test]
fn perfectly_inelastic_snaps_full_height() {
    let f = frame();
    for o in [Orientation::Supply, Orientation::Demand] {
        let s = generate(o, ElasticityClass::PerfectlyInelastic, &f, f.center());
        assert_eq!(s.start.y, f.min_y());
        assert_eq!(s.end.y, f.max_y());
        assert_eq!(s.start.x, s.end.x);
    }
}

#[test]
fn perfectly_elastic_is_horizontal() {
    let f = frame();
    for o in [Orientation::Supply, Orientation::Demand] {
        let s = generate(o, ElasticityClass::PerfectlyElastic, &f, f.center());
        assert_eq!(s.start.y, s.end.y);
        assert!((s.dx().abs() - 256.0).abs() < 1e-9);
    }
}

#[test]
fn steep_supply_is_clamped_with_angle_preserved() {
    let f = frame();
    let params = CurveParams {
        angle_degrees: 65.0,
        extent_percent: 100.0,
    };
    let s = generate_from_params(Orientation::Supply, params, &f, f.center());
    assert!((s.start.y - f.max_y()).abs() < 1e-9);
    assert!((s.end.y - f.min_y()).abs() < 1e-9);
    let angle = (-s.dy() / s.dx()).atan().to_degrees();
    assert!((angle - 65.0).abs() < 1e-9);
}

#[test]
fn near_vertical_supply_spans_frame_without_singularity() {
    let f = frame();
    for angle in [85.0, 86.5, 87.0, 89.0, 89.5, 89.99] {
        let params = CurveParams {
            angle_degrees: angle,
            extent_percent: 60.0,
        };
        let s = generate_from_params(Orientation::Supply, params, &f, f.center());
        assert!(s.is_finite(), "angle {angle}");
        assert!(s.start.x < s.end.x, "angle {angle}");
        assert!(s.start.y <= f.max_y() && s.end.y >= f.min_y(), "angle {angle}");
        assert!(s.dx() < 40.0, "angle {angle}");
    }
}

#[test]
fn near_vertical_interpolation_moves_short_curves_toward_boundary() {
    let f = frame();
    let short = |angle: f64| CurveParams {
        angle_degrees: angle,
        extent_percent: 1.0,
    };
    // Below the band no interpolation happens: v = tan(84°) * 1.6
    let below = generate_from_params(Orientation::Supply, short(84.0), &f, f.center());
    let expected = 84.0_f64.to_radians().tan() * 1.6;
    assert!((below.start.y - (305.0 + expected)).abs() < 1e-9);
    // At 87° a quarter of the distance to the floor is covered.
    let inside = generate_from_params(Orientation::Supply, short(87.0), &f, f.center());
    let normal = 305.0 + 87.0_f64.to_radians().tan() * 1.6;
    let want = normal + 0.25 * (f.max_y() - normal);
    assert!((inside.start.y - want).abs() < 1e-9);
}

#[test]
fn demand_has_no_graduated_band() {
    let f = frame();
    let params = CurveParams {
        angle_degrees: -87.0,
        extent_percent: 1.0,
    };
    let d = generate_from_params(Orientation::Demand, params, &f, f.center());
    let v = 87.0_f64.to_radians().tan() * 1.6;
    assert!((d.start.y - (305.0 + v)).abs() < 1e-9);
    let snapped = generate_from_params(
        Orientation::Demand,
        CurveParams {
            angle_degrees: -89.5,
            extent_percent: 1.0,
        },
        &f,
        f.center(),
    );
    assert_eq!((snapped.start.y, snapped.end.y), (f.min_y(), f.max_y()));
}

#[test]
fn retarget_moves_right_end_along_line() {
    let d = crate::segment::Segment::from_coords(456.0, 401.0, 264.0, 209.0);
    let r = retarget_demand_tail(d, 500.0);
    assert_eq!(r.end, d.end);
    assert!((r.start.x - 500.0).abs() < 1e-12);
    assert!((r.start.y - 445.0).abs() < 1e-9);
}

#[test]
fn ppc_constant_cost_is_straight() {
    let f = PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::Ppc).unwrap();
    let shape = resolve_ppc(OpportunityCost::Constant);
    let radii = PpcRadii::for_shape(shape, &f);
    let segs = ppc_polyline(shape, radii, &f);
    assert_eq!(segs.len(), crate::cfg::PPC_SAMPLES);
    let o = f.origin();
    for s in &segs {
        let p = s.start - o;
        let lhs = p.x / radii.x - p.y / radii.y;
        assert!((lhs - 1.0).abs() < 1e-9);
    }
    assert!((segs[0].start - Vector2::new(o.x + radii.x, o.y)).norm() < 1e-9);
    assert!((segs.last().unwrap().end - Vector2::new(o.x, o.y - radii.y)).norm() < 1e-6);
}

#[test]
fn ppc_bow_direction_follows_cost() {
    let f = PlotFrame::new(Canvas::new(650.0, 600.0), DiagramType::Ppc).unwrap();
    let mid = std::f64::consts::FRAC_PI_4;
    let o = f.origin();
    let dist = |cost| {
        let shape = resolve_ppc(cost);
        let radii = PpcRadii {
            x: 200.0,
            y: 200.0,
        };
        (ppc_point(shape, radii, &f, mid) - o).norm()
    };
    let straight = dist(OpportunityCost::Constant);
    assert!(dist(OpportunityCost::Increasing) > straight);
    assert!(dist(OpportunityCost::Decreasing) < straight);
}
