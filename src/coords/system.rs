use super::config::{CoordinateConfig, Orientation};
use super::incline::Incline;
use super::point::{ScreenPoint, WorldPoint};

/// Headroom factor applied to the expected travel distance when sizing
/// an incline, so bodies never stop at the very edge of the surface.
pub const TRAVEL_HEADROOM: f64 = 1.2;

/// Default pixel margin kept between an incline's far end and the
/// canvas edge.
pub const DEFAULT_EDGE_MARGIN_PX: f64 = 50.0;

/// The single world-to-screen mapping for a render job.
///
/// Every projected point in a frame sequence must pass through the same
/// system; mixing two configs in one job is how bodies detach from the
/// surfaces they rest on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateSystem {
    config: CoordinateConfig,
}

impl CoordinateSystem {
    pub const fn new(config: CoordinateConfig) -> Self {
        Self { config }
    }

    /// Projects a world point into pixel coordinates.
    ///
    /// The x axis always grows rightward. The y axis flips with the
    /// configured orientation: `YUp` subtracts so larger world heights
    /// land higher on a top-left-origin canvas.
    pub fn world_to_screen(&self, p: WorldPoint) -> ScreenPoint {
        let c = self.config;
        let x = c.offset_x + p.x * c.scale;
        let y = match c.orientation {
            Orientation::YUp => c.offset_y - p.y * c.scale,
            Orientation::YDown => c.offset_y + p.y * c.scale,
        };
        ScreenPoint::new(x, y)
    }

    /// Exact inverse of [`world_to_screen`](Self::world_to_screen).
    pub fn screen_to_world(&self, p: ScreenPoint) -> WorldPoint {
        let c = self.config;
        let x = (p.x - c.offset_x) / c.scale;
        let y = match c.orientation {
            Orientation::YUp => (c.offset_y - p.y) / c.scale,
            Orientation::YDown => (p.y - c.offset_y) / c.scale,
        };
        WorldPoint::new(x, y)
    }

    /// Screen endpoints of an incline, projected through this system.
    pub fn incline_screen_span(&self, incline: &Incline) -> (ScreenPoint, ScreenPoint) {
        (
            self.world_to_screen(incline.start),
            self.world_to_screen(incline.end_point()),
        )
    }

    /// Longest incline that both covers the expected travel distance
    /// (with headroom) and still fits on the canvas.
    ///
    /// The canvas constraint converts the available horizontal pixels,
    /// from the world origin's screen position to `edge_margin` short of
    /// the right edge, back into meters.
    pub fn optimal_incline_length(
        &self,
        max_distance: f64,
        screen_width: f64,
        edge_margin: f64,
    ) -> f64 {
        let c = self.config;
        let wanted = max_distance * TRAVEL_HEADROOM;
        let fits = (screen_width - c.offset_x - edge_margin) / c.scale;
        wanted.min(fits)
    }
}
