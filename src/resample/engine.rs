use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::frame::{FrameEvent, RenderFrame};
use super::grid::frame_times;
use super::interpolate::{interpolate_bodies, interpolate_energy, smoothstep};
use super::options::ResampleOptions;
use crate::trace::{BodyState, Energy, Sample, Trace};

/// Body states and energy at one instant, plus whether the values were
/// synthesized between two samples.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub bodies: BTreeMap<String, BodyState>,
    pub energy: Energy,
    pub interpolated: bool,
}

impl FrameState {
    fn from_sample(sample: &Sample) -> Self {
        Self {
            bodies: sample.bodies.clone(),
            energy: sample.energy.unwrap_or(Energy::ZERO),
            interpolated: false,
        }
    }
}

/// State of every body at `time`.
///
/// Times landing between two samples interpolate; times within
/// `time_epsilon` of a sample use that sample directly; times outside
/// the trace clamp to the nearest boundary sample. `None` only for an
/// empty trace.
pub fn state_at(trace: &Trace, time: f64, options: &ResampleOptions) -> Option<FrameState> {
    let samples = trace.samples();
    if samples.is_empty() {
        return None;
    }

    let i = samples.partition_point(|s| s.t <= time);
    if i == 0 {
        return Some(FrameState::from_sample(&samples[0]));
    }
    if i >= samples.len() {
        return Some(FrameState::from_sample(&samples[samples.len() - 1]));
    }

    let before = &samples[i - 1];
    let after = &samples[i];

    if (time - before.t).abs() < options.time_epsilon {
        return Some(FrameState::from_sample(before));
    }
    if (after.t - time).abs() < options.time_epsilon {
        return Some(FrameState::from_sample(after));
    }

    // Bracketing guarantees before.t < time < after.t here.
    let alpha = (time - before.t) / (after.t - before.t);
    let alpha = options.method.blend(alpha);
    let alpha = if options.smoothing {
        smoothstep(alpha)
    } else {
        alpha
    };

    Some(FrameState {
        bodies: interpolate_bodies(before, after, alpha),
        energy: interpolate_energy(before.energy, after.energy, alpha),
        interpolated: true,
    })
}

/// Events visible on a frame at `time`: everything within half an
/// interval of the frame highlights, and already-passed events stay
/// attached without highlight for the configured number of trailing
/// frames.
fn events_for_frame(trace: &Trace, time: f64, options: &ResampleOptions) -> Vec<FrameEvent> {
    let interval = options.frame_interval();
    let half = interval / 2.0;
    let linger = options.event_highlight_frames as f64 * interval;

    trace
        .events()
        .iter()
        .filter_map(|event| {
            let dt = time - event.t;
            let highlight = dt.abs() < half;
            let lingers = dt >= 0.0 && dt < half + linger;
            (highlight || lingers).then(|| FrameEvent {
                id: event.id.clone(),
                t: event.t,
                highlight,
            })
        })
        .collect()
}

/// Converts an irregularly-sampled trace into a fixed-rate,
/// event-aligned frame sequence.
///
/// Pure function of its inputs. An empty trace yields an empty
/// sequence; otherwise frames come back ascending in time with
/// sequential indices from zero, and every input event lies within half
/// a frame interval of some output frame.
pub fn resample(trace: &Trace, options: &ResampleOptions) -> Vec<RenderFrame> {
    let fps = options.effective_fps();
    if fps != options.fps {
        warn!("frame rate {} is unusable, using {fps} fps", options.fps);
    }

    let times = frame_times(trace, options);
    let mut frames = Vec::with_capacity(times.len());

    for time in times {
        let Some(state) = state_at(trace, time, options) else {
            continue;
        };
        frames.push(RenderFrame {
            index: frames.len(),
            time,
            bodies: state.bodies,
            energy: state.energy,
            events: events_for_frame(trace, time, options),
            interpolated: state.interpolated,
        });
    }

    debug!(
        "resampled {} samples and {} events into {} frames at {fps} fps",
        trace.samples().len(),
        trace.events().len(),
        frames.len()
    );

    frames
}
