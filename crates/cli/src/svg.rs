//! Reference SVG renderer for `DiagramScene`s.
//!
//! Draws what the scene says and nothing more: solid or dashed lines, small
//! circles for markers, text for labels. The viewBox is the logical canvas;
//! `canvas.scale` only multiplies the outer width/height, so exports at 2x stay
//! pixel-identical in layout.

use std::fmt::{self, Write};

use econplot::scene::{DiagramScene, LabelSlot, Stroke};

const STROKE: &str = "#222";
const GUIDE_STROKE: &str = "#777";
const MARKER_RADIUS: f64 = 4.0;
const FONT_SIZE: f64 = 14.0;

pub fn render(scene: &DiagramScene) -> Result<String, fmt::Error> {
    let canvas = scene.frame.canvas;
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        canvas.width * canvas.scale,
        canvas.height * canvas.scale,
        canvas.width,
        canvas.height
    )?;
    writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{:.2}" height="{:.2}" fill="white"/>"#,
        canvas.width, canvas.height
    )?;

    for s in &scene.segments {
        let (stroke, width, dash) = match s.stroke {
            Stroke::Solid => (STROKE, 2.0, ""),
            Stroke::Dashed => (GUIDE_STROKE, 1.0, r#" stroke-dasharray="6,4""#),
        };
        writeln!(
            svg,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}"{}/>"#,
            s.segment.start.x, s.segment.start.y, s.segment.end.x, s.segment.end.y, stroke, width, dash
        )?;
    }

    for p in &scene.points {
        writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            p.position.x, p.position.y, MARKER_RADIUS, STROKE
        )?;
    }

    for l in &scene.labels {
        let (anchor, extra) = match l.slot {
            LabelSlot::PriceAxis => ("end", ""),
            LabelSlot::QuantityAxis => ("middle", ""),
            LabelSlot::Watermark => ("end", r#" fill-opacity="0.35""#),
            _ => ("start", ""),
        };
        writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="{:.0}" text-anchor="{}"{}>{}</text>"#,
            l.x,
            l.y,
            FONT_SIZE,
            anchor,
            extra,
            escape_xml(&l.text)
        )?;
    }
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
