//! Provenance sidecars: `scene.json` gets a `scene.provenance.json` next to it.
//!
//! The sidecar records which engine build and which CLI command produced the
//! artifact, together with the exact canvas and parameter snapshot, so any
//! scene, SVG, or sweep table can be regenerated later.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a command knows about the artifact it just wrote.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub canvas: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value, canvas: Value) -> Self {
        Self {
            command,
            params,
            canvas,
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

/// On-disk layout of one sidecar.
#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    engine_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    canvas: &'a Value,
    params: &'a Value,
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        engine_version: econplot::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command: payload.command,
        canvas: &payload.canvas,
        params: &payload.params,
        outputs: vec![artifact.display().to_string()],
    };

    let path = provenance_path(artifact);
    let text = serde_json::to_string_pretty(&sidecar)?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(command = payload.command, sidecar = %path.display(), "provenance");
    Ok(path)
}

/// `dir/tax.svg` -> `dir/tax.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "artifact".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit id baked in at build time, else from the environment, else asked of git.
pub fn current_git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_name_drops_the_artifact_extension() {
        assert_eq!(
            provenance_path(Path::new("out/scenes/tax.svg")),
            Path::new("out/scenes/tax.provenance.json")
        );
        assert_eq!(
            provenance_path(Path::new("sweep.tax.parquet")),
            Path::new("sweep.tax.provenance.json")
        );
    }

    #[test]
    fn sidecar_round_trips_the_snapshot() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("scene.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new(
            "svg",
            json!({"diagram": "supply_demand", "tax": 40.0}),
            json!({"width": 650.0, "height": 600.0, "scale": 2.0, "export": true}),
        );
        let written = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(written, dir.path().join("scene.provenance.json"));

        let doc: Value = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
        assert_eq!(doc["command"], "svg");
        assert_eq!(doc["engine_version"], econplot::VERSION);
        assert_eq!(doc["params"]["diagram"], "supply_demand");
        assert_eq!(doc["params"]["tax"], 40.0);
        assert_eq!(doc["canvas"]["scale"], 2.0);
        assert_eq!(doc["canvas"]["export"], true);
        assert_eq!(doc["outputs"], json!([artifact.display().to_string()]));
        assert!(doc["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }
}
