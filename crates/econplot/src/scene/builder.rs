//! Accumulator used by the per-diagram assemblers.
//!
//! Owns the vectors of one scene while it is being built; `finish` hands out
//! the immutable `DiagramScene`. All equilibrium helpers go through
//! `intersect::equilibrium`, so NaN or out-of-frame points never get a marker,
//! label, or guide.

use nalgebra::Vector2;

use super::labels;
use super::types::{
    CurveRole, DiagramScene, Label, LabelSlot, PointProvenance, SceneSegment, ScenePoint, Stroke,
};
use crate::frame::PlotFrame;
use crate::intersect::{equilibrium, point_at_x};
use crate::segment::Segment;

/// Text for the marker and both axis labels of one equilibrium.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EqNames<'a> {
    pub point: &'a str,
    pub price: &'a str,
    pub quantity: &'a str,
}

pub(crate) struct SceneBuilder<'f> {
    frame: &'f PlotFrame,
    show_guides: bool,
    segments: Vec<SceneSegment>,
    points: Vec<ScenePoint>,
    labels: Vec<Label>,
}

impl<'f> SceneBuilder<'f> {
    pub fn new(frame: &'f PlotFrame, show_guides: bool) -> Self {
        Self {
            frame,
            show_guides,
            segments: Vec::new(),
            points: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Both axes plus their titles.
    pub fn axes(&mut self, y_title: &str, x_title: &str) {
        let f = self.frame;
        let o = f.origin();
        self.push_segment(
            CurveRole::Axis,
            Segment::new(Vector2::new(f.min_x(), f.min_y()), o),
            Stroke::Solid,
        );
        self.push_segment(
            CurveRole::Axis,
            Segment::new(o, Vector2::new(f.max_x(), f.max_y())),
            Stroke::Solid,
        );
        self.labels
            .extend(labels::axis_titles(f, y_title, x_title));
    }

    pub fn push_segment(&mut self, role: CurveRole, segment: Segment, stroke: Stroke) {
        self.segments.push(SceneSegment {
            role,
            segment,
            stroke,
        });
    }

    /// Solid curve with its name at the terminal point.
    pub fn curve(&mut self, role: CurveRole, segment: Segment, text: &str) {
        self.push_segment(role, segment, Stroke::Solid);
        self.labels.push(labels::curve_label(&segment, text));
    }

    pub fn label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn marker(&mut self, name: &str, position: Vector2<f64>, provenance: PointProvenance) {
        self.points.push(ScenePoint {
            name: name.to_string(),
            position,
            provenance,
        });
        self.labels.push(labels::point_label(position, name));
    }

    /// Dashed lines from `p` to both axes.
    pub fn guides(&mut self, p: Vector2<f64>) {
        if !self.show_guides {
            return;
        }
        let f = self.frame;
        self.push_segment(
            CurveRole::Guide,
            Segment::from_coords(f.min_x(), p.y, p.x, p.y),
            Stroke::Dashed,
        );
        self.push_segment(
            CurveRole::Guide,
            Segment::from_coords(p.x, p.y, p.x, f.max_y()),
            Stroke::Dashed,
        );
    }

    /// Dashed line from `p` to the price axis only.
    pub fn price_guide(&mut self, p: Vector2<f64>) {
        if !self.show_guides {
            return;
        }
        let f = self.frame;
        self.push_segment(
            CurveRole::Guide,
            Segment::from_coords(f.min_x(), p.y, p.x, p.y),
            Stroke::Dashed,
        );
    }

    /// Intersect, then emit marker, guides, price and quantity labels.
    /// Returns the point for dependent elements; `None` means nothing was drawn.
    pub fn equilibrium(
        &mut self,
        (a_role, a): (CurveRole, &Segment),
        (b_role, b): (CurveRole, &Segment),
        names: EqNames<'_>,
    ) -> Option<Vector2<f64>> {
        let p = self.equilibrium_point((a_role, a), (b_role, b), names.point)?;
        self.guides(p);
        self.labels.push(labels::price_label(p, names.price));
        self.labels
            .push(labels::quantity_label(p, self.frame, names.quantity));
        Some(p)
    }

    /// Like `equilibrium` but without axis labels or guides.
    pub fn equilibrium_point(
        &mut self,
        (a_role, a): (CurveRole, &Segment),
        (b_role, b): (CurveRole, &Segment),
        name: &str,
    ) -> Option<Vector2<f64>> {
        let p = equilibrium(a, b, self.frame)?;
        self.marker(name, p, PointProvenance::Intersection(a_role, b_role));
        Some(p)
    }

    /// Policy wedge: the point on `curve` at quantity `at.x`, with a price label.
    pub fn wedge(
        &mut self,
        (role, curve): (CurveRole, &Segment),
        at: Vector2<f64>,
        name: &str,
        price: &str,
    ) -> Option<Vector2<f64>> {
        let w = point_at_x(curve, at.x, self.frame)?;
        self.marker(name, w, PointProvenance::OnCurve(role));
        self.price_guide(w);
        self.labels.push(labels::price_label(w, price));
        Some(w)
    }

    pub fn finish(mut self) -> DiagramScene {
        self.labels.push(labels::watermark(self.frame));
        debug_assert!(
            self.labels
                .iter()
                .filter(|l| l.slot == LabelSlot::Watermark)
                .count()
                == 1
        );
        tracing::trace!(
            diagram = ?self.frame.diagram,
            segments = self.segments.len(),
            points = self.points.len(),
            labels = self.labels.len(),
            "scene assembled"
        );
        DiagramScene {
            diagram: self.frame.diagram,
            frame: *self.frame,
            segments: self.segments,
            points: self.points,
            labels: self.labels,
        }
    }
}
