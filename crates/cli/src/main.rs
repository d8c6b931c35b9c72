use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use econplot::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod svg;
mod sweep;

use provenance::{write_sidecar, Payload};
use sweep::SweepField;

#[derive(Parser)]
#[command(name = "econplot")]
#[command(about = "Build, render and sweep economics diagram scenes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DiagramArg {
    SupplyDemand,
    Externalities,
    Ppc,
    AdAs,
}

impl From<DiagramArg> for DiagramType {
    fn from(d: DiagramArg) -> Self {
        match d {
            DiagramArg::SupplyDemand => DiagramType::SupplyDemand,
            DiagramArg::Externalities => DiagramType::Externalities,
            DiagramArg::Ppc => DiagramType::Ppc,
            DiagramArg::AdAs => DiagramType::NeoClassicalAdAs,
        }
    }
}

/// Inputs shared by every scene-producing command.
#[derive(Args, Debug)]
struct SceneArgs {
    /// JSON parameter snapshot; defaults for --diagram when omitted
    #[arg(long)]
    params: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = DiagramArg::SupplyDemand)]
    diagram: DiagramArg,
    #[arg(long, default_value_t = 650.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Device pixel ratio for exports (geometry is unaffected)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Export mode: omit the watermark
    #[arg(long)]
    export: bool,
}

impl SceneArgs {
    fn load_params(&self) -> Result<SceneParams> {
        let Some(path) = &self.params else {
            return Ok(SceneParams::default_for(self.diagram.into()));
        };
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let params: SceneParams = serde_json::from_str(&text)
            .with_context(|| format!("parsing parameters in {}", path.display()))?;
        Ok(params)
    }

    fn frame(&self, diagram: DiagramType) -> Result<PlotFrame> {
        let canvas = Canvas {
            width: self.width,
            height: self.height,
            scale: self.scale,
        };
        PlotFrame::clamped(canvas, diagram)
            .with_context(|| format!("canvas {}x{}", self.width, self.height))
    }

    /// Parameters, frame and the finished scene (watermark dropped in export mode).
    fn build(&self) -> Result<(SceneParams, DiagramScene)> {
        let params = self.load_params()?;
        let frame = self.frame(params.diagram_type())?;
        let scene = build_scene(&params, &frame);
        let scene = if self.export {
            scene.without_watermark()
        } else {
            scene
        };
        Ok((params, scene))
    }

    fn payload(
        &self,
        command: &'static str,
        params: &SceneParams,
        extra: serde_json::Value,
    ) -> Result<Payload> {
        let mut params_json = serde_json::to_value(params)?;
        if let (Some(obj), serde_json::Value::Object(more)) = (params_json.as_object_mut(), extra) {
            obj.extend(more);
        }
        let canvas = serde_json::json!({
            "width": self.width,
            "height": self.height,
            "scale": self.scale,
            "export": self.export,
        });
        Ok(Payload::new(command, params_json, canvas))
    }
}

#[derive(Subcommand)]
enum Action {
    /// Build a scene and write it as JSON
    Scene {
        #[command(flatten)]
        args: SceneArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build a scene and render it with the reference SVG renderer
    Svg {
        #[command(flatten)]
        args: SceneArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Rebuild the scene over a range of one distance and tabulate every point
    Sweep {
        #[command(flatten)]
        args: SceneArgs,
        #[arg(long, value_enum)]
        field: SweepField,
        #[arg(long, default_value_t = 0.0)]
        from: f64,
        #[arg(long, default_value_t = 100.0)]
        to: f64,
        #[arg(long, default_value_t = 11)]
        steps: usize,
        /// .csv or .parquet
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scene { args, out } => scene(&args, &out),
        Action::Svg { args, out } => render_svg(&args, &out),
        Action::Sweep {
            args,
            field,
            from,
            to,
            steps,
            out,
        } => run_sweep(&args, field, from, to, steps, &out),
        Action::Report => report(),
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn scene(args: &SceneArgs, out: &Path) -> Result<()> {
    let (params, scene) = args.build()?;
    tracing::info!(
        diagram = ?scene.diagram,
        segments = scene.segments.len(),
        points = scene.points.len(),
        out = %out.display(),
        "scene"
    );
    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&scene)?)
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, args.payload("scene", &params, serde_json::Value::Null)?)?;
    Ok(())
}

fn render_svg(args: &SceneArgs, out: &Path) -> Result<()> {
    let (params, scene) = args.build()?;
    tracing::info!(diagram = ?scene.diagram, export = args.export, out = %out.display(), "svg");
    let text = svg::render(&scene).context("rendering svg")?;
    ensure_parent(out)?;
    fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(out, args.payload("svg", &params, serde_json::Value::Null)?)?;
    Ok(())
}

fn run_sweep(
    args: &SceneArgs,
    field: SweepField,
    from: f64,
    to: f64,
    steps: usize,
    out: &Path,
) -> Result<()> {
    let params = args.load_params()?;
    let frame = args.frame(params.diagram_type())?;
    tracing::info!(?field, from, to, steps, out = %out.display(), "sweep");
    let values = sweep::values(from, to, steps);
    let mut df = sweep::run(&params, &frame, field, &values)?;
    let summary = sweep::summarize(&df)?;
    tracing::info!(rows = df.height(), points = summary.height(), "sweep_table_shape");
    ensure_parent(out)?;
    sweep::write_table(&mut df, out).with_context(|| format!("writing {}", out.display()))?;
    let extra = serde_json::json!({
        "sweep": {
            "field": format!("{field:?}"),
            "from": from,
            "to": to,
            "steps": steps
        }
    });
    write_sidecar(out, args.payload("sweep", &params, extra)?)?;
    Ok(())
}

/// Engine identity plus the default frame of every diagram family.
#[derive(Serialize)]
struct Report {
    code_rev: String,
    engine_version: &'static str,
    frames: Vec<PlotFrame>,
}

fn report() -> Result<()> {
    let frames = [
        DiagramType::SupplyDemand,
        DiagramType::Externalities,
        DiagramType::Ppc,
        DiagramType::NeoClassicalAdAs,
    ]
    .into_iter()
    .map(|d| PlotFrame::new(Canvas::new(650.0, 600.0), d))
    .collect::<Result<Vec<_>, _>>()?;
    let obj = Report {
        code_rev: provenance::current_git_rev(),
        engine_version: econplot::VERSION,
        frames,
    };
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
