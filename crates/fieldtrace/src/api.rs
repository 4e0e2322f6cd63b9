//! Curated surface for the CLI and other front ends.
//!
//! Prefer these re-exports over reaching into submodules.

// Geometry primitives
pub use crate::geom2::{
    centroid, distance, format_fixed2, line_intersection, midpoint, polygon_area, round2,
    signed_area, LabeledPoint, Point, Segment,
};
// Random click sequences
pub use crate::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
// Engine
pub use crate::engine::{
    diagonal_pairs, diagonals, Diagonal, DiagonalMeet, EdgeAnnotation, FinishResult,
    PolygonGeometryEngine, PolygonReport,
};
// Drawing and sessions
pub use crate::render::{render_click, render_finish, DrawCmd, Recorder, RenderCfg, Surface};
pub use crate::session::Session;
// Cameras
pub use crate::camera::{
    video_inputs, CameraBackend, CameraError, CameraSelector, DeviceKind, MediaDevice,
    StaticBackend,
};
