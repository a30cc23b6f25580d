//! Temporal resampling of simulation traces.
//!
//! Converts irregular-timestep samples plus discrete event times into a
//! fixed-rate sequence of interpolated frames, keeping every event
//! visible: off-grid events get their own frame time, and frames near
//! an event carry it as a highlight marker.

mod engine;
mod frame;
mod grid;
mod interpolate;
mod options;

pub use engine::{resample, state_at, FrameState};
pub use frame::{FrameEvent, RenderFrame};
pub use grid::frame_times;
pub use interpolate::{
    interpolate_bodies, interpolate_body, interpolate_energy, lerp, lerp_angle, smoothstep,
    wrap_angle,
};
pub use options::{
    InterpolationMethod, ResampleOptions, DEFAULT_EVENT_SNAP_FRACTION, DEFAULT_FPS,
    DEFAULT_TIME_EPSILON,
};
