//! Polygon tracing over a camera canvas.
//!
//! A user taps vertices on a canvas laid over a live camera feed; the engine
//! labels each edge as it appears and, on finish, closes the shape and
//! annotates it (centroid for triangles; closing edge, diagonals, point A,
//! midpoints, and area for larger polygons).
//!
//! Layout
//! - `geom2`: points and the primitive formulas.
//! - `engine`: `PolygonGeometryEngine` and its result types.
//! - `render` / `session`: the drawing-surface seam and the per-session handle
//!   UI event handlers talk to.
//! - `camera`: video input selection, independent of the geometry.

pub mod api;
pub mod camera;
pub mod engine;
pub mod geom2;
pub mod render;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{FinishResult, PolygonGeometryEngine};
pub use geom2::Point;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{
        Diagonal, DiagonalMeet, EdgeAnnotation, FinishResult, PolygonGeometryEngine, PolygonReport,
    };
    pub use crate::geom2::{LabeledPoint, Point, Segment};
    pub use crate::render::{DrawCmd, Recorder, RenderCfg, Surface};
    pub use crate::session::Session;
}
