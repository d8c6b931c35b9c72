//! Print a compact summary of the default scene for every diagram family.
//!
//! Purpose
//! - Quick eyeball check of equilibrium positions and label placement without
//!   going through the CLI or a renderer.
//!
//! Usage: `cargo run -p econplot --example dump_scenes [width height]`

use econplot::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1).map(|a| a.parse::<f64>());
    let width = args.next().and_then(Result::ok).unwrap_or(650.0);
    let height = args.next().and_then(Result::ok).unwrap_or(600.0);

    for diagram in [
        DiagramType::SupplyDemand,
        DiagramType::Externalities,
        DiagramType::Ppc,
        DiagramType::NeoClassicalAdAs,
    ] {
        let frame = PlotFrame::clamped(Canvas::new(width, height), diagram)
            .expect("clamped canvas is always valid");
        let mut params = SceneParams::default_for(diagram);
        // Turn on one intervention per family so the output shows a shift.
        match &mut params {
            SceneParams::SupplyDemand(p) => p.tax = Some(40.0),
            SceneParams::Externalities(_) => {}
            SceneParams::Ppc(p) => p.growth = Some(40.0),
            SceneParams::NeoClassicalAdAs(p) => p.tax = Some(100.0),
        }
        let scene = build_scene(&params, &frame);
        println!(
            "== {diagram:?}: {} segments, {} points, {} labels",
            scene.segments.len(),
            scene.points.len(),
            scene.labels.len()
        );
        for p in &scene.points {
            println!("  {:>4} ({:7.2}, {:7.2})", p.name, p.position.x, p.position.y);
        }
        let texts: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        println!("  labels: {}", texts.join(", "));
    }
}
