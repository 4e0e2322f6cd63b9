//! Basic 2D types used by the engine and the render layer.
//!
//! - `Point`: a recorded click (or derived location) in canvas pixels.
//! - `Segment`: two endpoints; edges and diagonals are both segments.
//! - `LabeledPoint`: a derived point plus the text drawn next to it.

use nalgebra::Vector2;
use serde::Serialize;

use super::util::{distance, midpoint};

/// Canvas pixel coordinate `(x, y)`, y pointing down.
pub type Point = Vector2<f64>;

/// Closed segment between two points. Endpoint order is kept as given.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    /// Unrounded Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        midpoint(self.a, self.b)
    }
}

/// A derived point with its display label (e.g. `"A"`, `"P3"`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub at: Point,
    pub label: String,
}

impl LabeledPoint {
    pub fn new(at: Point, label: impl Into<String>) -> Self {
        Self {
            at,
            label: label.into(),
        }
    }
}
