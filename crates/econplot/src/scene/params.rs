//! Immutable parameter snapshots, one variant per diagram family.
//!
//! JSON shape: `{"diagram": "supply_demand", "supply": "unitary", "tax": 40}`.
//! Every field has a default, so `{"diagram": "ppc"}` is a complete snapshot.
//! Shift distances are UI-limited to `0..=500` px; the assembler clamps to
//! that range rather than trusting the caller.

use serde::{Deserialize, Serialize};

use crate::curve::{ElasticityClass, OpportunityCost};
use crate::frame::DiagramType;

/// Upper bound of every shift distance slider (px).
pub const MAX_SHIFT: f64 = 500.0;

/// Clamp a caller-supplied distance into `[0, MAX_SHIFT]`; NaN becomes 0.
pub fn sanitize_distance(d: f64) -> f64 {
    if d.is_nan() {
        0.0
    } else {
        d.clamp(0.0, MAX_SHIFT)
    }
}

/// Sanitized distance of a toggled shift, or `None` when the curve would not move.
pub fn active_distance(d: f64) -> Option<f64> {
    Some(sanitize_distance(d)).filter(|d| *d > 0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    #[default]
    Increase,
    Decrease,
}

/// Economic shift of a curve (increase = rightward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveShift {
    pub distance: f64,
    #[serde(default)]
    pub direction: ShiftDirection,
}

impl CurveShift {
    pub fn increase(distance: f64) -> Self {
        Self {
            distance,
            direction: ShiftDirection::Increase,
        }
    }

    pub fn decrease(distance: f64) -> Self {
        Self {
            distance,
            direction: ShiftDirection::Decrease,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyDemandParams {
    pub supply: ElasticityClass,
    pub demand: ElasticityClass,
    /// S2: change in supply.
    pub supply_shift: Option<CurveShift>,
    /// D2: advertising campaign, shifts demand up by the distance.
    pub advertising: Option<f64>,
    /// Per-unit tax wedge (supply shifted up).
    pub tax: Option<f64>,
    /// Per-unit subsidy (S3, shifted right-and-down).
    pub subsidy: Option<f64>,
    pub show_guides: bool,
}

impl Default for SupplyDemandParams {
    fn default() -> Self {
        Self {
            supply: ElasticityClass::Unitary,
            demand: ElasticityClass::Unitary,
            supply_shift: None,
            advertising: None,
            tax: None,
            subsidy: None,
            show_guides: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalityKind {
    #[default]
    NegativeProduction,
    PositiveProduction,
    NegativeConsumption,
    PositiveConsumption,
}

impl ExternalityKind {
    pub fn is_production(self) -> bool {
        matches!(
            self,
            ExternalityKind::NegativeProduction | ExternalityKind::PositiveProduction
        )
    }

    pub fn is_negative(self) -> bool {
        matches!(
            self,
            ExternalityKind::NegativeProduction | ExternalityKind::NegativeConsumption
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalityParams {
    pub kind: ExternalityKind,
    pub supply: ElasticityClass,
    pub demand: ElasticityClass,
    /// Vertical distance between private and social curves.
    pub gap: f64,
    pub show_guides: bool,
}

impl Default for ExternalityParams {
    fn default() -> Self {
        Self {
            kind: ExternalityKind::default(),
            supply: ElasticityClass::Unitary,
            demand: ElasticityClass::Unitary,
            gap: 60.0,
            show_guides: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PpcParams {
    pub cost: OpportunityCost,
    /// Outward shift of the whole curve (economic growth).
    pub growth: Option<f64>,
    pub show_points: bool,
    pub x_good: String,
    pub y_good: String,
}

impl Default for PpcParams {
    fn default() -> Self {
        Self {
            cost: OpportunityCost::Increasing,
            growth: None,
            show_points: true,
            x_good: "Good X".into(),
            y_good: "Good Y".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdAsParams {
    pub ad: ElasticityClass,
    pub sras: ElasticityClass,
    /// Horizontal offset of LRAS from the plot center (px, may be negative).
    pub lras_offset: f64,
    pub ad_shift: Option<CurveShift>,
    pub sras_shift: Option<CurveShift>,
    /// Indirect tax, shifts SRAS up.
    pub tax: Option<f64>,
    pub show_guides: bool,
}

impl Default for AdAsParams {
    fn default() -> Self {
        Self {
            ad: ElasticityClass::Unitary,
            sras: ElasticityClass::Unitary,
            lras_offset: 0.0,
            ad_shift: None,
            sras_shift: None,
            tax: None,
            show_guides: true,
        }
    }
}

/// Parameter snapshot for one scene; the variant selects the diagram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "diagram", rename_all = "snake_case")]
pub enum SceneParams {
    SupplyDemand(SupplyDemandParams),
    Externalities(ExternalityParams),
    Ppc(PpcParams),
    NeoClassicalAdAs(AdAsParams),
}

impl SceneParams {
    pub fn diagram_type(&self) -> DiagramType {
        match self {
            SceneParams::SupplyDemand(_) => DiagramType::SupplyDemand,
            SceneParams::Externalities(_) => DiagramType::Externalities,
            SceneParams::Ppc(_) => DiagramType::Ppc,
            SceneParams::NeoClassicalAdAs(_) => DiagramType::NeoClassicalAdAs,
        }
    }

    /// Default snapshot for a diagram family.
    pub fn default_for(diagram: DiagramType) -> Self {
        match diagram {
            DiagramType::SupplyDemand => SceneParams::SupplyDemand(Default::default()),
            DiagramType::Externalities => SceneParams::Externalities(Default::default()),
            DiagramType::Ppc => SceneParams::Ppc(Default::default()),
            DiagramType::NeoClassicalAdAs => SceneParams::NeoClassicalAdAs(Default::default()),
        }
    }
}
