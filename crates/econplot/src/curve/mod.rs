//! Curves: parameter resolution and base segment generation.
//!
//! - `params`: elasticity / opportunity-cost tables with explicit fallbacks.
//! - `generate`: straight supply/demand-like segments, near-vertical policy,
//!   angle-preserving clamp, demand tail retargeting.
//! - `ppc`: bowed production-possibility curves as polylines.

mod generate;
mod params;
mod ppc;

pub use generate::{generate, generate_from_params, retarget_demand_tail};
pub use params::{
    resolve, resolve_ppc, CurveParams, ElasticityClass, OpportunityCost, Orientation, PpcShape,
};
pub use ppc::{ppc_point, ppc_polyline, PpcRadii};

#[cfg(test)]
mod tests;
