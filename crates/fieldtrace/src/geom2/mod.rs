//! Canvas-space 2D geometry.
//!
//! Purpose
//! - Hold the primitive formulas the polygon engine is built from: distances,
//!   midpoints, means, the Shoelace sum, and infinite-line intersection.
//! - Keep every formula pure and exact where it can be (no tolerances): the
//!   engine's degeneracy checks compare against exact zero.
//!
//! Conventions
//! - Coordinates are canvas pixels with y growing downward. Nothing here
//!   depends on orientation except the sign of `signed_area`.
//! - Displayed scalars are rounded to two decimals with `round2`, half away
//!   from zero, and printed with `format_fixed2`.
//!
//! Code cross-refs: `Point`, `Segment`, `LabeledPoint`, `engine::PolygonGeometryEngine`

pub mod rand;
mod types;
mod util;

pub use types::{LabeledPoint, Point, Segment};
pub use util::{
    centroid, distance, format_fixed2, line_intersection, midpoint, polygon_area, round2,
    signed_area,
};
