use std::fmt;

use serde::{Deserialize, Serialize};

use super::incline::Incline;
use super::point::ScreenPoint;
use super::system::CoordinateSystem;

/// Canvas dimensions in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// A single problem found while checking an incline against a screen
/// and an expected travel distance.
///
/// Issues are advisory. Rendering proceeds regardless; callers decide
/// whether to adjust the setup.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryIssue {
    /// The surface is shorter than the distance bodies are expected to
    /// travel along it.
    InclineTooShort { length: f64, required: f64 },
    /// The far end of the incline projects outside the canvas.
    EndpointOffCanvas { end: ScreenPoint, screen: ScreenSize },
    /// The slope angle is outside the open interval (0, 90) degrees.
    DegenerateAngle { angle_deg: f64 },
}

impl GeometryIssue {
    /// An actionable suggestion paired with the diagnostic.
    pub fn recommendation(&self) -> String {
        match self {
            GeometryIssue::InclineTooShort { required, .. } => format!(
                "extend the incline to at least {required:.2} m or reduce the travel distance"
            ),
            GeometryIssue::EndpointOffCanvas { .. } => {
                "reduce the scale or shift the origin so the whole surface fits".to_string()
            }
            GeometryIssue::DegenerateAngle { .. } => {
                "pick a slope angle strictly between 0 and 90 degrees".to_string()
            }
        }
    }
}

impl fmt::Display for GeometryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryIssue::InclineTooShort { length, required } => write!(
                f,
                "incline length {length:.2} m is shorter than the required travel distance {required:.2} m"
            ),
            GeometryIssue::EndpointOffCanvas { end, screen } => write!(
                f,
                "incline endpoint ({:.1}, {:.1}) px falls outside the {:.0}x{:.0} canvas",
                end.x, end.y, screen.width, screen.height
            ),
            GeometryIssue::DegenerateAngle { angle_deg } => write!(
                f,
                "slope angle {angle_deg:.1} degrees does not describe an incline"
            ),
        }
    }
}

/// Outcome of a geometry check: empty means the setup is sound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryReport {
    pub issues: Vec<GeometryIssue>,
}

impl GeometryReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(GeometryIssue::to_string).collect()
    }

    pub fn recommendations(&self) -> Vec<String> {
        self.issues.iter().map(GeometryIssue::recommendation).collect()
    }
}

impl CoordinateSystem {
    /// Checks an incline against the canvas and the expected travel
    /// distance. Each check is independent; one bad input can surface
    /// several issues at once.
    pub fn validate_geometry(
        &self,
        incline: &Incline,
        max_distance: f64,
        screen: ScreenSize,
    ) -> GeometryReport {
        let mut issues = Vec::new();

        if incline.length < max_distance {
            issues.push(GeometryIssue::InclineTooShort {
                length: incline.length,
                required: max_distance,
            });
        }

        let end = self.world_to_screen(incline.end_point());
        if !screen.contains(end) {
            issues.push(GeometryIssue::EndpointOffCanvas { end, screen });
        }

        if incline.angle_deg <= 0.0 || incline.angle_deg >= 90.0 {
            issues.push(GeometryIssue::DegenerateAngle {
                angle_deg: incline.angle_deg,
            });
        }

        GeometryReport { issues }
    }
}
