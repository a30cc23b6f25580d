//! Traceframe - turns physics-simulation traces into fixed-rate animation frames.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **coords**: World/screen transform and incline geometry
//! - **trace**: Input data model (samples, events, traces)
//! - **resample**: Fixed-rate, event-aligned frame interpolation
//! - **render**: Configuration derivation, quality checks, sink handoff
//!
//! # Usage
//!
//! ```ignore
//! use traceframe::{render_trace, RenderRequest, ResampleOptions, ScreenSize};
//!
//! let request = RenderRequest::new(ScreenSize::new(1280.0, 720.0));
//! let plan = render_trace(&trace, &request, &ResampleOptions::default(), &mut sink)?;
//! ```
//!
//! Simulation, drawing, and encoding are external: this crate consumes
//! a recorded trace and produces frames plus the one coordinate config
//! everything on screen must be projected through.

pub mod coords;
pub mod render;
pub mod resample;
pub mod trace;

// Re-export commonly used types at crate root
pub use coords::{
    CoordinateConfig, CoordinateSystem, Incline, Orientation, ScreenPoint, ScreenSize, WorldPoint,
};
pub use render::{
    plan_render, render_trace, FrameSink, HeadlessSink, RenderConfig, RenderPlan, RenderRequest,
    RenderStrategy, RenderStyle,
};
pub use resample::{resample, RenderFrame, ResampleOptions};
pub use trace::{BodyState, Energy, Sample, Trace, TraceEvent};
