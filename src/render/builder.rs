use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::bounds::WorldBounds;
use super::style::RenderStyle;
use crate::coords::{
    CoordinateConfig, CoordinateSystem, GeometryReport, Incline, Orientation, ScreenSize,
};
use crate::trace::Trace;

/// Share of the canvas width the trajectory box may fill.
pub const WIDTH_FILL: f64 = 0.8;

/// Share of the canvas height the trajectory box may fill; smaller
/// than the width share to leave room for overlays.
pub const HEIGHT_FILL: f64 = 0.6;

/// Default upper bound on pixel density, px per meter.
pub const DEFAULT_SCALE_CAP: f64 = 150.0;

/// Default pixels reserved at the bottom of the canvas for overlay
/// text.
pub const DEFAULT_OVERLAY_MARGIN_PX: f64 = 100.0;

/// Knobs for deriving a coordinate config from a trace.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderOptions {
    /// Upper bound on pixel density, keeping tiny trajectories from
    /// rendering at degenerate zoom.
    pub scale_cap: f64,
    /// Pixels reserved below the ground line for overlay text.
    pub overlay_margin_px: f64,
    pub orientation: Orientation,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            scale_cap: DEFAULT_SCALE_CAP,
            overlay_margin_px: DEFAULT_OVERLAY_MARGIN_PX,
            orientation: Orientation::YUp,
        }
    }
}

/// Everything the drawing layer needs to draw a scene consistently:
/// the one authoritative coordinate config, the canvas, the world box
/// it was derived from, the styles, and the geometry report for the
/// surface (empty when the scene has none).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub coords: CoordinateConfig,
    pub screen: ScreenSize,
    pub bounds: WorldBounds,
    pub style: RenderStyle,
    pub geometry: GeometryReport,
}

impl RenderConfig {
    pub fn system(&self) -> CoordinateSystem {
        CoordinateSystem::new(self.coords)
    }
}

/// Derives a complete, self-consistent render configuration from a
/// trace's spatial extent and a target canvas.
///
/// The scale fits the padded trajectory box into the canvas fill
/// shares, capped so tiny trajectories do not zoom absurdly; the
/// offsets center the box horizontally and put the world ground line
/// just above the overlay strip. Geometry problems are surfaced in the
/// returned report and logged, never raised.
pub fn build_render_config(
    trace: &Trace,
    screen: ScreenSize,
    style: RenderStyle,
    incline: Option<&Incline>,
    travel_distance: f64,
    options: &BuilderOptions,
) -> RenderConfig {
    let bounds = WorldBounds::from_trace(trace).padded();

    let scale = (WIDTH_FILL * screen.width / bounds.width())
        .min(HEIGHT_FILL * screen.height / bounds.height())
        .min(options.scale_cap);

    let offset_x = screen.width / 2.0 - bounds.center().x * scale;
    let offset_y = screen.height - options.overlay_margin_px;

    let coords = CoordinateConfig::new(scale, offset_x, offset_y, options.orientation);
    debug!(
        "derived config: {scale:.2} px/m, origin at ({offset_x:.1}, {offset_y:.1}) on a {:.0}x{:.0} canvas",
        screen.width, screen.height
    );

    let geometry = match incline {
        Some(incline) => {
            let report =
                CoordinateSystem::new(coords).validate_geometry(incline, travel_distance, screen);
            for issue in &report.issues {
                warn!("geometry: {issue}");
            }
            report
        }
        None => GeometryReport::default(),
    };

    RenderConfig {
        coords,
        screen,
        bounds,
        style,
        geometry,
    }
}
