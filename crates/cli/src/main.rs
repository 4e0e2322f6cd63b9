use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fieldtrace::api::{
    CameraError, CameraSelector, DrawCmd, EdgeAnnotation, FinishResult, MediaDevice, Point,
    Recorder, Session, StaticBackend,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "fieldtrace")]
#[command(about = "Replay polygon tracings and camera selection offline")]
struct Cmd {
    /// Optional free-form tag; propagated to provenance and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Click the given points in order, press finish, print the annotations
    Trace {
        /// Inline points: "x,y;x,y;..."
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        points: Option<String>,
        /// Points file (.json as [[x,y],...] or .csv with x,y columns)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Start the first camera from a device list, then switch N times
    Cameras {
        /// JSON device list: [{"deviceId", "label", "kind"}, ...]
        #[arg(long)]
        devices: PathBuf,
        #[arg(long, default_value_t = 1)]
        switches: u32,
        /// Device ids that fail to start
        #[arg(long)]
        unavailable: Vec<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Trace { points, input, out } => trace(points, input, out, cmd.tag),
        Action::Cameras {
            devices,
            switches,
            unavailable,
        } => cameras(&devices, switches, unavailable),
        Action::Report => report(cmd.tag),
    }
}

/// Everything one replayed session produced.
#[derive(Serialize)]
struct TraceOutput {
    edges: Vec<EdgeAnnotation>,
    finish: FinishResult,
    commands: Vec<DrawCmd>,
}

fn run_trace(points: &[Point]) -> TraceOutput {
    let mut session = Session::default();
    let mut rec = Recorder::new();
    let edges = points
        .iter()
        .filter_map(|p| session.click(p.x, p.y, &mut rec))
        .collect();
    let finish = session.finish(&mut rec);
    TraceOutput {
        edges,
        finish,
        commands: rec.cmds,
    }
}

fn finish_kind(result: &FinishResult) -> &'static str {
    match result {
        FinishResult::TooFew => "too_few",
        FinishResult::Triangle { .. } => "triangle",
        FinishResult::Polygon(_) => "polygon",
    }
}

fn trace(
    points: Option<String>,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let pts = match (&points, &input) {
        (Some(s), None) => input::parse_points(s)?,
        (None, Some(path)) => input::read_points(path)?,
        _ => bail!("pass exactly one of --points or --input"),
    };
    let output = run_trace(&pts);
    let kind = finish_kind(&output.finish);
    tracing::info!(points = pts.len(), kind, tag = ?tag, "trace");
    if let FinishResult::Polygon(report) = &output.finish {
        if report.meet.is_none() {
            tracing::warn!("first two diagonals are parallel; point A and midpoints skipped");
        }
    }

    let body = serde_json::to_vec_pretty(&output)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(&out, &body).with_context(|| format!("writing {}", out.display()))?;
    let params = json!({
        "points": pts.len(),
        "input": input.as_ref().map(|p| p.to_string_lossy().into_owned()),
        "kind": kind,
    });
    let prov = provenance::write_sidecar(&out, provenance::Payload::new(params, tag))?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn camera_step(action: &str, res: Result<Option<String>, CameraError>, index: usize) -> Value {
    match res {
        Ok(active) => json!({ "action": action, "index": index, "active": active }),
        Err(err) => json!({ "action": action, "index": index, "error": err.to_string() }),
    }
}

fn run_cameras(devices: Vec<MediaDevice>, switches: u32, unavailable: Vec<String>) -> Vec<Value> {
    let mut backend = StaticBackend::new(devices);
    backend.unavailable = unavailable;
    let mut sel = CameraSelector::new(backend);
    let mut steps = Vec::with_capacity(switches as usize + 1);
    let res = sel.init().map(|a| a.map(str::to_string));
    steps.push(camera_step("init", res, sel.index()));
    for _ in 0..switches {
        let res = sel.switch_camera().map(|a| a.map(str::to_string));
        steps.push(camera_step("switch", res, sel.index()));
    }
    steps
}

fn cameras(devices: &Path, switches: u32, unavailable: Vec<String>) -> Result<()> {
    let bytes = std::fs::read(devices).with_context(|| format!("reading {}", devices.display()))?;
    let list: Vec<MediaDevice> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing device list {}", devices.display()))?;
    tracing::info!(devices = list.len(), switches, "cameras");
    let steps = run_cameras(list, switches, unavailable);
    println!("{}", serde_json::to_string_pretty(&steps)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "fieldtrace": fieldtrace::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
