use std::error::Error;
use std::fmt;

use tracing::debug;

use super::plan::{plan_render, RenderPlan, RenderRequest};
use crate::resample::{resample, RenderFrame, ResampleOptions};
use crate::trace::Trace;

/// Failure reported by an external drawing layer.
///
/// The core itself never fails; this is the boundary where renderers
/// and encoders surface their own problems.
#[derive(Debug)]
pub enum SinkError {
    /// The sink rejected or could not write a frame.
    Frame { index: usize, reason: String },
    /// The sink could not start or finish a sequence.
    Session(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Frame { index, reason } => {
                write!(f, "sink failed on frame {index}: {reason}")
            }
            SinkError::Session(reason) => write!(f, "sink session failed: {reason}"),
        }
    }
}

impl Error for SinkError {}

/// Receives planned frames in order; implemented by drawing and
/// encoding layers outside this crate.
pub trait FrameSink {
    /// Called once, before the first frame.
    fn begin(&mut self, plan: &RenderPlan) -> Result<(), SinkError>;

    /// Called once per frame, ascending by index.
    fn submit_frame(&mut self, frame: &RenderFrame, plan: &RenderPlan) -> Result<(), SinkError>;

    /// Called once, after the last frame.
    fn finish(&mut self) -> Result<(), SinkError>;

    fn name(&self) -> &str;
}

/// Counts frames without drawing anything. Stands in for a real
/// renderer in tests and dry runs.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: usize,
    finished: bool,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for HeadlessSink {
    fn begin(&mut self, _plan: &RenderPlan) -> Result<(), SinkError> {
        self.frames = 0;
        self.finished = false;
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame, _plan: &RenderPlan) -> Result<(), SinkError> {
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }
}

/// Plans a request, resamples the trace, and streams the frames into a
/// sink.
///
/// Planning and resampling cannot fail (malformed input degrades per
/// their own rules), so the only errors out of here are the sink's.
/// Returns the plan so callers can inspect the quality report.
pub fn render_trace(
    trace: &Trace,
    request: &RenderRequest,
    options: &ResampleOptions,
    sink: &mut dyn FrameSink,
) -> Result<RenderPlan, SinkError> {
    let plan = plan_render(trace, request);
    let frames = resample(trace, options);
    debug!("streaming {} frames to sink {}", frames.len(), sink.name());

    sink.begin(&plan)?;
    for frame in &frames {
        sink.submit_frame(frame, &plan)?;
    }
    sink.finish()?;

    Ok(plan)
}
