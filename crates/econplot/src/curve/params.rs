//! Curve parameter resolver: qualitative economics → numeric geometry.
//!
//! Table-driven. Names arriving from the UI or JSON go through `from_name`,
//! which maps anything unknown to the default row (`unitary`, `constant`).

use serde::{Deserialize, Serialize};

/// Whether a curve slopes up (supply-like) or down (demand-like).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Supply,
    Demand,
}

/// Price elasticity class of a curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ElasticityClass {
    #[default]
    Unitary,
    RelativelyElastic,
    RelativelyInelastic,
    PerfectlyElastic,
    PerfectlyInelastic,
}

impl ElasticityClass {
    pub const ALL: [ElasticityClass; 5] = [
        ElasticityClass::Unitary,
        ElasticityClass::RelativelyElastic,
        ElasticityClass::RelativelyInelastic,
        ElasticityClass::PerfectlyElastic,
        ElasticityClass::PerfectlyInelastic,
    ];

    /// Lookup by name (`kebab-case`, `snake_case` or spaced); unknown → `Unitary`.
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "unitary" => ElasticityClass::Unitary,
            "relatively-elastic" => ElasticityClass::RelativelyElastic,
            "relatively-inelastic" => ElasticityClass::RelativelyInelastic,
            "perfectly-elastic" => ElasticityClass::PerfectlyElastic,
            "perfectly-inelastic" => ElasticityClass::PerfectlyInelastic,
            other => {
                tracing::debug!(name = other, "unknown elasticity class, using unitary");
                ElasticityClass::default()
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ElasticityClass::Unitary => "unitary",
            ElasticityClass::RelativelyElastic => "relatively-elastic",
            ElasticityClass::RelativelyInelastic => "relatively-inelastic",
            ElasticityClass::PerfectlyElastic => "perfectly-elastic",
            ElasticityClass::PerfectlyInelastic => "perfectly-inelastic",
        }
    }
}

impl From<String> for ElasticityClass {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

/// Opportunity-cost behaviour along a production-possibility curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum OpportunityCost {
    #[default]
    Constant,
    Increasing,
    Decreasing,
}

impl OpportunityCost {
    pub const ALL: [OpportunityCost; 3] = [
        OpportunityCost::Constant,
        OpportunityCost::Increasing,
        OpportunityCost::Decreasing,
    ];

    /// Lookup by name; unknown → `Constant`.
    pub fn from_name(name: &str) -> Self {
        match normalize(name).as_str() {
            "constant" => OpportunityCost::Constant,
            "increasing" => OpportunityCost::Increasing,
            "decreasing" => OpportunityCost::Decreasing,
            other => {
                tracing::debug!(name = other, "unknown opportunity cost, using constant");
                OpportunityCost::default()
            }
        }
    }
}

impl From<String> for OpportunityCost {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Numeric slope and extent for a straight curve.
///
/// `angle_degrees` is measured from the horizontal: supply in `[0, 90]`,
/// demand in `[-90, 0]`. `extent_percent` scales the drawn length against
/// 80% of the plot width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub angle_degrees: f64,
    pub extent_percent: f64,
}

/// Shape of a PPC: superellipse exponent (1 = straight, >1 bowed out, <1 bowed in)
/// and extent of the axis intercepts as a share of the plot size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PpcShape {
    pub exponent: f64,
    pub extent_percent: f64,
}

/// Resolver table for straight curves.
pub fn resolve(orientation: Orientation, elasticity: ElasticityClass) -> CurveParams {
    let (angle, extent) = match elasticity {
        ElasticityClass::Unitary => (45.0, 60.0),
        ElasticityClass::RelativelyElastic => (25.0, 70.0),
        ElasticityClass::RelativelyInelastic => (65.0, 50.0),
        ElasticityClass::PerfectlyElastic => (0.0, 80.0),
        ElasticityClass::PerfectlyInelastic => (90.0, 100.0),
    };
    let angle_degrees = match orientation {
        Orientation::Supply => angle,
        // -0.0 would survive into label math as a signed zero; keep it plain.
        Orientation::Demand if angle == 0.0 => 0.0,
        Orientation::Demand => -angle,
    };
    CurveParams {
        angle_degrees,
        extent_percent: extent,
    }
}

/// Resolver table for production-possibility curves.
pub fn resolve_ppc(cost: OpportunityCost) -> PpcShape {
    match cost {
        OpportunityCost::Constant => PpcShape {
            exponent: 1.0,
            extent_percent: 75.0,
        },
        OpportunityCost::Increasing => PpcShape {
            exponent: 2.0,
            extent_percent: 75.0,
        },
        OpportunityCost::Decreasing => PpcShape {
            exponent: 0.6,
            extent_percent: 70.0,
        },
    }
}
