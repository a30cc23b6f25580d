use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coords::WorldPoint;
use crate::trace::Trace;

/// Margin added around a trajectory, as a fraction of its span.
pub const MARGIN_FRACTION: f64 = 0.1;

/// Smallest margin added around a trajectory, meters.
pub const MIN_MARGIN: f64 = 0.5;

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldBounds {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Stand-in box for traces that offer no finite positions.
    pub const DEFAULT: Self = Self::new(-5.0, -5.0, 5.0, 5.0);

    /// Smallest box enclosing every finite body position in the trace.
    ///
    /// Non-finite coordinates are skipped; a trace with none left falls
    /// back to [`DEFAULT`](Self::DEFAULT), so NaN and infinity never
    /// reach a coordinate config.
    pub fn from_trace(trace: &Trace) -> Self {
        let mut bounds: Option<WorldBounds> = None;
        for sample in trace.samples() {
            for state in sample.bodies.values() {
                let p = state.position();
                if !(p.x.is_finite() && p.y.is_finite()) {
                    continue;
                }
                bounds = Some(match bounds {
                    Some(b) => b.including(p),
                    None => WorldBounds::new(p.x, p.y, p.x, p.y),
                });
            }
        }

        bounds.unwrap_or_else(|| {
            warn!("trace has no finite body positions, using the default view box");
            Self::DEFAULT
        })
    }

    pub fn including(self, p: WorldPoint) -> Self {
        Self::new(
            self.min_x.min(p.x),
            self.min_y.min(p.y),
            self.max_x.max(p.x),
            self.max_y.max(p.y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Expands each axis by a tenth of its span, at least half a meter,
    /// so trajectories never touch the canvas edge and a single-point
    /// box never has zero extent.
    pub fn padded(self) -> Self {
        let margin_x = (self.width() * MARGIN_FRACTION).max(MIN_MARGIN);
        let margin_y = (self.height() * MARGIN_FRACTION).max(MIN_MARGIN);
        Self::new(
            self.min_x - margin_x,
            self.min_y - margin_y,
            self.max_x + margin_x,
            self.max_y + margin_y,
        )
    }
}
