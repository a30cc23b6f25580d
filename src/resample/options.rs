use serde::{Deserialize, Serialize};

pub const DEFAULT_FPS: f64 = 30.0;
pub const DEFAULT_EVENT_SNAP_FRACTION: f64 = 0.25;
pub const DEFAULT_TIME_EPSILON: f64 = 1e-6;

/// Interpolation scheme between bracketing samples.
///
/// Cubic and hermite are accepted configuration values but currently
/// evaluate as linear; the blend factor passes through unchanged until
/// dedicated schemes exist.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    #[default]
    Linear,
    Cubic,
    Hermite,
}

impl InterpolationMethod {
    /// Maps the normalized position between two samples to a blend
    /// factor in `[0, 1]`.
    pub fn blend(self, alpha: f64) -> f64 {
        match self {
            InterpolationMethod::Linear => alpha,
            InterpolationMethod::Cubic | InterpolationMethod::Hermite => alpha,
        }
    }
}

/// Controls how a trace is resampled onto the output frame grid.
///
/// Every field has a default so a partial configuration document
/// parses; an absent document is the same as `ResampleOptions::default()`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleOptions {
    /// Target output frame rate.
    pub fps: f64,
    /// Give off-grid events their own frame time.
    pub event_alignment: bool,
    /// Extra trailing frames an event stays attached to after its
    /// instant, so a drawing layer can fade markers out.
    pub event_highlight_frames: usize,
    pub method: InterpolationMethod,
    /// Ease the blend factor with smoothstep instead of using it raw.
    pub smoothing: bool,
    /// Fraction of the frame interval within which an event counts as
    /// already covered by an existing grid time.
    pub event_snap_fraction: f64,
    /// Times closer together than this are the same instant.
    pub time_epsilon: f64,
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            event_alignment: true,
            event_highlight_frames: 0,
            method: InterpolationMethod::Linear,
            smoothing: false,
            event_snap_fraction: DEFAULT_EVENT_SNAP_FRACTION,
            time_epsilon: DEFAULT_TIME_EPSILON,
        }
    }
}

impl ResampleOptions {
    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// The configured rate, or the default when the configured value
    /// cannot drive a frame grid (zero, negative, or non-finite).
    pub fn effective_fps(&self) -> f64 {
        if self.fps.is_finite() && self.fps > 0.0 {
            self.fps
        } else {
            DEFAULT_FPS
        }
    }

    /// Seconds between output frames.
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.effective_fps()
    }
}
