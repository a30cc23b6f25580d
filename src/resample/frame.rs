use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::trace::{BodyState, Energy};

/// An event attached to an output frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    pub id: String,
    pub t: f64,
    /// True on frames within half an interval of the event instant.
    pub highlight: bool,
}

/// One fixed-rate output frame: every body's state at `time` plus the
/// events visible on it. Never mutated after the resampler emits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub index: usize,
    pub time: f64,
    pub bodies: BTreeMap<String, BodyState>,
    pub energy: Energy,
    pub events: Vec<FrameEvent>,
    /// False when the frame coincides with a raw sample (or clamps to
    /// a boundary sample), true when it was synthesized between two.
    pub interpolated: bool,
}
