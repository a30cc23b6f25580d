//! World-to-screen mapping and incline geometry.
//!
//! This module owns the affine transform between simulation space
//! (meters, mathematical y) and canvas space (pixels, top-left origin),
//! plus the surface geometry that keeps rendered bodies tangent to the
//! inclines they rest on. One [`CoordinateConfig`] is authoritative for
//! a whole render job.

mod config;
mod incline;
mod point;
mod system;
mod validate;

pub use config::{CoordinateConfig, Orientation};
pub use incline::Incline;
pub use point::{ScreenPoint, WorldPoint};
pub use system::{CoordinateSystem, DEFAULT_EDGE_MARGIN_PX, TRAVEL_HEADROOM};
pub use validate::{GeometryIssue, GeometryReport, ScreenSize};
