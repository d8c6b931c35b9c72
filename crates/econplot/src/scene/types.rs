//! Scene value types handed to the external renderer.
//!
//! A `DiagramScene` is rebuilt from scratch for every parameter snapshot and
//! never mutated afterwards; the renderer paints it once.

use nalgebra::Vector2;
use serde::Serialize;

use crate::frame::{DiagramType, PlotFrame};
use crate::segment::Segment;
use crate::shift::ShiftSpec;

/// Economic identity of an undisturbed curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCurve {
    Supply,
    Demand,
    Mpc,
    Mpb,
    Ad,
    Sras,
    Lras,
    Ppc,
}

impl BaseCurve {
    pub fn name(self) -> &'static str {
        match self {
            BaseCurve::Supply => "S",
            BaseCurve::Demand => "D",
            BaseCurve::Mpc => "MPC",
            BaseCurve::Mpb => "MPB",
            BaseCurve::Ad => "AD",
            BaseCurve::Sras => "SRAS",
            BaseCurve::Lras => "LRAS",
            BaseCurve::Ppc => "PPC",
        }
    }
}

/// Why a derived curve moved away from its base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCause {
    Tax,
    Subsidy,
    Externality,
    Advertising,
    /// Non-policy change in the underlying determinants (S2, AD1, ...).
    Shock,
    Growth,
}

/// Role tag carried by every drawn segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveRole {
    Base(BaseCurve),
    Shifted {
        base: BaseCurve,
        cause: ShiftCause,
        spec: ShiftSpec,
    },
    Axis,
    Guide,
}

impl CurveRole {
    pub const SUPPLY: CurveRole = CurveRole::Base(BaseCurve::Supply);
    pub const DEMAND: CurveRole = CurveRole::Base(BaseCurve::Demand);

    pub fn shifted(base: BaseCurve, cause: ShiftCause, spec: ShiftSpec) -> Self {
        CurveRole::Shifted { base, cause, spec }
    }

    /// Short name drawn next to the curve.
    pub fn name(&self) -> String {
        match *self {
            CurveRole::Base(b) => b.name().to_string(),
            CurveRole::Shifted { base, cause, .. } => match (base, cause) {
                (BaseCurve::Supply, ShiftCause::Shock) => "S2".into(),
                (BaseCurve::Supply, ShiftCause::Tax) => "S + tax".into(),
                (BaseCurve::Supply, ShiftCause::Subsidy) => "S3".into(),
                (BaseCurve::Demand, ShiftCause::Advertising) => "D2".into(),
                (BaseCurve::Mpc, ShiftCause::Externality) => "MSC".into(),
                (BaseCurve::Mpb, ShiftCause::Externality) => "MSB".into(),
                (BaseCurve::Ad, ShiftCause::Shock) => "AD1".into(),
                (BaseCurve::Sras, ShiftCause::Shock) => "SRAS1".into(),
                (BaseCurve::Sras, ShiftCause::Tax) => "SRAS + tax".into(),
                (BaseCurve::Ppc, ShiftCause::Growth) => "PPC2".into(),
                (b, c) => format!("{} ({c:?})", b.name()),
            },
            CurveRole::Axis => "axis".into(),
            CurveRole::Guide => "guide".into(),
        }
    }

    /// Same role ignoring the numeric shift spec.
    pub fn same_kind(&self, other: &CurveRole) -> bool {
        match (self, other) {
            (
                CurveRole::Shifted { base, cause, .. },
                CurveRole::Shifted {
                    base: b2,
                    cause: c2,
                    ..
                },
            ) => base == b2 && cause == c2,
            _ => self == other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    #[default]
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SceneSegment {
    pub role: CurveRole,
    pub segment: Segment,
    pub stroke: Stroke,
}

/// Where a marker came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointProvenance {
    /// Equilibrium / policy wedge between two curves.
    Intersection(CurveRole, CurveRole),
    OnCurve(CurveRole),
    Free,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenePoint {
    pub name: String,
    pub position: Vector2<f64>,
    pub provenance: PointProvenance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSlot {
    Curve,
    PriceAxis,
    QuantityAxis,
    Point,
    AxisTitle,
    Watermark,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub slot: LabelSlot,
}

/// Renderer-agnostic description of one diagram.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagramScene {
    pub diagram: DiagramType,
    pub frame: PlotFrame,
    pub segments: Vec<SceneSegment>,
    pub points: Vec<ScenePoint>,
    pub labels: Vec<Label>,
}

impl DiagramScene {
    /// Copy of the scene without the watermark subset (paid export path).
    pub fn without_watermark(&self) -> DiagramScene {
        DiagramScene {
            labels: self
                .labels
                .iter()
                .filter(|l| l.slot != LabelSlot::Watermark)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// First segment whose role matches `role` (shift amounts ignored).
    pub fn curve(&self, role: &CurveRole) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.role.same_kind(role))
            .map(|s| &s.segment)
    }

    /// All segments of a role, e.g. the polyline of a PPC.
    pub fn curves<'a>(&'a self, role: &'a CurveRole) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments
            .iter()
            .filter(move |s| s.role.same_kind(role))
            .map(|s| &s.segment)
    }

    pub fn point(&self, name: &str) -> Option<&ScenePoint> {
        self.points.iter().find(|p| p.name == name)
    }

    pub fn label(&self, text: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.text == text)
    }

    pub fn labels_in(&self, slot: LabelSlot) -> impl Iterator<Item = &Label> + '_ {
        self.labels.iter().filter(move |l| l.slot == slot)
    }
}
