//! Click sequences from the command line or from files.
//!
//! Formats
//! - Inline: `"x,y;x,y;..."` (whitespace ignored).
//! - `.json`: `[[x, y], ...]`.
//! - `.csv`: header row with `x` and `y` columns (other columns ignored).

use anyhow::{bail, Context, Result};
use fieldtrace::Point;
use polars::prelude::*;
use std::path::Path;

fn finite_point(x: f64, y: f64, what: &str) -> Result<Point> {
    if !x.is_finite() || !y.is_finite() {
        bail!("{what}: coordinates must be finite, got ({x}, {y})");
    }
    Ok(Point::new(x, y))
}

/// Parse `"x,y;x,y"`. Empty input gives an empty sequence.
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .enumerate()
        .map(|(k, pair)| {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("point {k}: expected `x,y`, got `{pair}`"))?;
            let x: f64 = x
                .trim()
                .parse()
                .with_context(|| format!("point {k}: bad x `{x}`"))?;
            let y: f64 = y
                .trim()
                .parse()
                .with_context(|| format!("point {k}: bad y `{y}`"))?;
            finite_point(x, y, &format!("point {k}"))
        })
        .collect()
}

/// Read points from a `.json` or `.csv` file.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

fn read_json(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    pairs
        .into_iter()
        .enumerate()
        .map(|(k, [x, y])| finite_point(x, y, &format!("point {k}")))
        .collect()
}

fn read_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => finite_point(x, y, &format!("row {row}")),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}
