//! Geometry engine for introductory-economics diagrams.
//!
//! Turns a parameter snapshot (diagram family, elasticity classes, shift
//! toggles and distances) into a `DiagramScene`: clipped segments, equilibrium
//! markers, dashed guides and positioned labels. Rendering is left to the
//! caller; see the `cli` crate for an SVG reference renderer.
//!
//! Pipeline per scene:
//! `curve::resolve` → `curve::generate` → `shift::shift` (+ `clip::clip`)
//! → `intersect::equilibrium` → `scene::labels`.
//!
//! Coordinates are canvas pixels with y growing downward, so "up" on the
//! diagram means a smaller y.
//!
//! API Policy
//! - Internal crate; no stable public API. `api` lists the intended entry points.

pub mod api;
pub mod cfg;
pub mod clip;
pub mod curve;
pub mod frame;
pub mod intersect;
pub mod scene;
pub mod segment;
pub mod shift;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use scene::build_scene;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::{ElasticityClass, OpportunityCost, Orientation};
    pub use crate::frame::{Canvas, DiagramType, PlotFrame};
    pub use crate::scene::{
        build_scene, AdAsParams, CurveRole, CurveShift, DiagramScene, ExternalityKind,
        ExternalityParams, PpcParams, SceneParams, SupplyDemandParams,
    };
    pub use crate::segment::Segment;
    pub use crate::shift::ShiftSpec;
    pub use nalgebra::Vector2 as Vec2;
}
