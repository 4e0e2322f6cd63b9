//! Result types of the polygon engine.
//!
//! - `EdgeAnnotation`: one labeled edge (incremental or closing).
//! - `Diagonal`: a non-adjacent vertex pair plus its segment.
//! - `DiagonalMeet`: point A and the midpoints that depend on it.
//! - `PolygonReport` / `FinishResult`: what `finish` returns.

use serde::Serialize;

use super::cfg::{MEET_LABEL, MIDPOINT_PREFIX, UNIT};
use crate::geom2::{format_fixed2, midpoint, round2, LabeledPoint, Point, Segment};

/// Labeled edge between two consecutive vertices.
///
/// `length` is already rounded to two decimals; `label` is `"<length> px"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeAnnotation {
    pub from: Point,
    pub to: Point,
    pub midpoint: Point,
    pub length: f64,
    pub label: String,
}

impl EdgeAnnotation {
    pub fn between(from: Point, to: Point) -> Self {
        let seg = Segment::new(from, to);
        let raw = seg.length();
        Self {
            from,
            to,
            midpoint: seg.midpoint(),
            length: round2(raw),
            label: format!("{} {UNIT}", format_fixed2(raw)),
        }
    }
}

/// Vertex pair `(i, j)` with `j >= i + 2`, never `(0, n-1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Diagonal {
    pub i: usize,
    pub j: usize,
    pub segment: Segment,
}

/// Intersection A of the first two diagonals and the vertex-to-A midpoints.
///
/// Midpoints only exist together with A; a parallel pair yields no
/// `DiagonalMeet` at all.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagonalMeet {
    pub point: LabeledPoint,
    pub midpoints: Vec<LabeledPoint>,
}

impl DiagonalMeet {
    pub(crate) fn new(a: Point, vertices: &[Point]) -> Self {
        let midpoints = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| LabeledPoint::new(midpoint(v, a), format!("{MIDPOINT_PREFIX}{}", i + 1)))
            .collect();
        Self {
            point: LabeledPoint::new(a, MEET_LABEL),
            midpoints,
        }
    }
}

/// Everything computed when a polygon with more than three vertices is closed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonReport {
    pub closing_edge: EdgeAnnotation,
    pub diagonals: Vec<Diagonal>,
    pub meet: Option<DiagonalMeet>,
    /// `|Shoelace| / 2`, rounded to two decimals.
    pub area: f64,
    /// `"<area> px²"`.
    pub area_label: String,
}

/// Outcome of `PolygonGeometryEngine::finish`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinishResult {
    /// Fewer than three vertices: nothing to compute.
    TooFew,
    /// Exactly three vertices: only the centroid.
    Triangle { centroid: LabeledPoint },
    Polygon(PolygonReport),
}

impl FinishResult {
    /// `true` unless `TooFew`.
    pub fn has_geometry(&self) -> bool {
        !matches!(self, FinishResult::TooFew)
    }
}
