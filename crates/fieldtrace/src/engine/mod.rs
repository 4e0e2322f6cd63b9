//! Polygon geometry engine.
//!
//! Purpose
//! - Own the click sequence of one tracing session and turn it into edge
//!   annotations (per click) and a closing report (on finish).
//!
//! Behavior worth knowing
//! - Three vertices give a centroid only: no closing edge, area, or diagonals.
//! - Point A comes from the first two enumerated diagonals, whichever they
//!   are, not from the pair that actually crosses. For `n = 5` they share
//!   vertex 0, so A is that vertex.
//! - Area is the Shoelace magnitude over click order; self-intersecting
//!   tracings still produce a number.
//!
//! Code cross-refs: `geom2::{line_intersection, polygon_area}`, `FinishResult`

mod cfg;
mod diagonals;
mod types;

pub use diagonals::{diagonal_pairs, diagonals};
pub use types::{Diagonal, DiagonalMeet, EdgeAnnotation, FinishResult, PolygonReport};

use cfg::{CENTROID_LABEL, UNIT};

use crate::geom2::{centroid, format_fixed2, line_intersection, polygon_area, LabeledPoint, Point};

/// Append-only vertex list for one session plus the computations over it.
#[derive(Clone, Debug, Default)]
pub struct PolygonGeometryEngine {
    points: Vec<Point>,
}

impl PolygonGeometryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click. From the second point on, returns the edge from the
    /// previous point to `p`.
    pub fn add_point(&mut self, p: Point) -> Option<EdgeAnnotation> {
        self.points.push(p);
        let n = self.points.len();
        tracing::trace!(n, x = p.x, y = p.y, "add_point");
        if n < 2 {
            return None;
        }
        Some(EdgeAnnotation::between(self.points[n - 2], self.points[n - 1]))
    }

    /// Close the shape and compute its annotations. Does not modify the
    /// sequence; calling it twice yields identical results.
    pub fn finish(&self) -> FinishResult {
        let pts = &self.points;
        let result = match pts.len() {
            0..=2 => FinishResult::TooFew,
            3 => match centroid(pts) {
                Some(c) => FinishResult::Triangle {
                    centroid: LabeledPoint::new(c, CENTROID_LABEL),
                },
                None => FinishResult::TooFew,
            },
            _ => FinishResult::Polygon(polygon_report(pts)),
        };
        tracing::debug!(
            n = pts.len(),
            kind = match &result {
                FinishResult::TooFew => "too_few",
                FinishResult::Triangle { .. } => "triangle",
                FinishResult::Polygon(_) => "polygon",
            },
            "finish"
        );
        result
    }

    /// Start a new session: forget every recorded point.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Requires `pts.len() >= 4`.
fn polygon_report(pts: &[Point]) -> PolygonReport {
    let n = pts.len();
    let closing_edge = EdgeAnnotation::between(pts[n - 1], pts[0]);
    let diagonals = diagonals(pts);
    let meet = match (diagonals.first(), diagonals.get(1)) {
        (Some(d0), Some(d1)) => line_intersection(&d0.segment, &d1.segment),
        _ => None,
    }
    .map(|a| DiagonalMeet::new(a, pts));
    if meet.is_none() {
        tracing::debug!(n, "first two diagonals are parallel; no point A");
    }
    let area = polygon_area(pts);
    PolygonReport {
        closing_edge,
        diagonals,
        meet,
        area,
        area_label: format!("{} {UNIT}²", format_fixed2(area)),
    }
}
