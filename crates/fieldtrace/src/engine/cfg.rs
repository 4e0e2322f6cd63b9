//! Label text used by the engine (internal).
//!
//! Policy
//! - Fixed constants; the render layer decides where labels go, the engine
//!   only decides what they say.

/// Label of the triangle's centroid marker.
pub(crate) const CENTROID_LABEL: &str = "A (Centroid)";
/// Label of the first-two-diagonals intersection.
pub(crate) const MEET_LABEL: &str = "A";
/// Prefix of per-vertex midpoint labels (`P1`, `P2`, ...).
pub(crate) const MIDPOINT_PREFIX: &str = "P";
/// Unit suffix for lengths and (squared) for areas.
pub(crate) const UNIT: &str = "px";
