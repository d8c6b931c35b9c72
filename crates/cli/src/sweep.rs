//! Parameter sweeps: rebuild a scene for each value of one distance field and
//! collect every emitted point into a long-format table.
//!
//! Columns: `value` (the swept distance), `point` (marker name), `x`, `y`.
//! Points that disappear for some values (parallel or out-of-frame) simply
//! have no row for those values.

use anyhow::{bail, Result};
use clap::ValueEnum;
use econplot::prelude::*;
use polars::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SweepField {
    Tax,
    Subsidy,
    SupplyShift,
    DemandShift,
    Gap,
    AdShift,
    SrasShift,
    Growth,
}

/// Signed slider value to an economic shift (negative = decrease).
fn signed_shift(value: f64) -> CurveShift {
    if value < 0.0 {
        CurveShift::decrease(-value)
    } else {
        CurveShift::increase(value)
    }
}

/// Write `value` into the field of `params` named by `field`.
pub fn apply(params: &mut SceneParams, field: SweepField, value: f64) -> Result<()> {
    match (params, field) {
        (SceneParams::SupplyDemand(p), SweepField::Tax) => p.tax = Some(value),
        (SceneParams::SupplyDemand(p), SweepField::Subsidy) => p.subsidy = Some(value),
        (SceneParams::SupplyDemand(p), SweepField::SupplyShift) => {
            p.supply_shift = Some(signed_shift(value))
        }
        (SceneParams::SupplyDemand(p), SweepField::DemandShift) => p.advertising = Some(value),
        (SceneParams::Externalities(p), SweepField::Gap) => p.gap = value,
        (SceneParams::Ppc(p), SweepField::Growth) => p.growth = Some(value),
        (SceneParams::NeoClassicalAdAs(p), SweepField::Tax) => p.tax = Some(value),
        (SceneParams::NeoClassicalAdAs(p), SweepField::AdShift) => {
            p.ad_shift = Some(signed_shift(value))
        }
        (SceneParams::NeoClassicalAdAs(p), SweepField::SrasShift) => {
            p.sras_shift = Some(signed_shift(value))
        }
        (p, f) => bail!("field {f:?} does not apply to {:?}", p.diagram_type()),
    }
    Ok(())
}

/// `steps` evenly spaced values from `from` to `to` inclusive.
pub fn values(from: f64, to: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => (0..n)
            .map(|i| from + (to - from) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

/// Run the sweep and return the long-format table.
pub fn run(
    base: &SceneParams,
    frame: &PlotFrame,
    field: SweepField,
    values: &[f64],
) -> Result<DataFrame> {
    let mut value_col = Vec::new();
    let mut point_col: Vec<String> = Vec::new();
    let mut x_col = Vec::new();
    let mut y_col = Vec::new();
    for &v in values {
        let mut params = base.clone();
        apply(&mut params, field, v)?;
        let scene = build_scene(&params, frame);
        for p in &scene.points {
            value_col.push(v);
            point_col.push(p.name.clone());
            x_col.push(p.position.x);
            y_col.push(p.position.y);
        }
    }
    let df = df!(
        "value" => value_col,
        "point" => point_col,
        "x" => x_col,
        "y" => y_col,
    )?;
    Ok(df)
}

/// Per-point row counts and x range, for the log line after a sweep.
pub fn summarize(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .group_by([col("point")])
        .agg([
            col("value").count().alias("rows"),
            col("x").min().alias("x_min"),
            col("x").max().alias("x_max"),
        ])
        .sort(["point"], Default::default())
        .collect()?;
    Ok(out)
}

/// Write as Parquet when the extension says so, CSV otherwise.
pub fn write_table(df: &mut DataFrame, out: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(out)?;
    if out.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(file).finish(df)?;
    } else {
        CsvWriter::new(file).include_header(true).finish(df)?;
    }
    Ok(())
}
