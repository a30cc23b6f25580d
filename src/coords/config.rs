use serde::{Deserialize, Serialize};

/// Which way world +y points on the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// World +y rises toward the top of the canvas (physics convention).
    YUp,
    /// World +y follows screen +y downward.
    YDown,
}

/// The affine world→screen mapping for one render job.
///
/// Exactly one config is authoritative per job. It is a value: derive a
/// replacement instead of patching fields mid-render, or frames built
/// from different configs stop lining up with each other.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateConfig {
    /// Pixels per meter.
    pub scale: f64,
    /// Screen x of world x = 0.
    pub offset_x: f64,
    /// Screen y of world y = 0.
    pub offset_y: f64,
    pub orientation: Orientation,
}

impl CoordinateConfig {
    pub const fn new(scale: f64, offset_x: f64, offset_y: f64, orientation: Orientation) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
            orientation,
        }
    }
}
