use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builder::{build_render_config, BuilderOptions, RenderConfig};
use super::style::RenderStyle;
use crate::coords::{Incline, ScreenSize};
use crate::trace::Trace;

/// Scales below this render bodies too small to read, px per meter.
pub const MIN_READABLE_SCALE: f64 = 20.0;

/// Which renderer family draws the frames. Drawing itself is external;
/// the choice is recorded in the plan for the drawing layer to honor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStrategy {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

/// The three independent pre-render checks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CheckKind {
    Geometric,
    Physical,
    Visual,
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityCheck {
    pub kind: CheckKind,
    pub passed: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Aggregate of all pre-render checks.
///
/// Advisory only: a low score surfaces diagnostics to the caller and
/// never blocks rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityReport {
    pub checks: Vec<QualityCheck>,
    pub score: f64,
}

impl QualityReport {
    fn from_checks(checks: Vec<QualityCheck>) -> Self {
        let passed = checks.iter().filter(|c| c.passed).count();
        let score = passed as f64 / checks.len() as f64;
        Self { checks, score }
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Union of every check's issues.
    pub fn issues(&self) -> Vec<String> {
        self.checks
            .iter()
            .flat_map(|c| c.issues.iter().cloned())
            .collect()
    }

    /// Union of every check's recommendations.
    pub fn recommendations(&self) -> Vec<String> {
        self.checks
            .iter()
            .flat_map(|c| c.recommendations.iter().cloned())
            .collect()
    }
}

/// What the caller wants rendered and onto what canvas. Only the canvas
/// is required; everything else has workable defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub screen: ScreenSize,
    #[serde(default)]
    pub style: RenderStyle,
    #[serde(default)]
    pub incline: Option<Incline>,
    /// Expected travel distance along the surface, meters.
    #[serde(default)]
    pub travel_distance: f64,
    #[serde(default)]
    pub strategy: RenderStrategy,
    #[serde(default)]
    pub builder: BuilderOptions,
}

impl RenderRequest {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            style: RenderStyle::default(),
            incline: None,
            travel_distance: 0.0,
            strategy: RenderStrategy::default(),
            builder: BuilderOptions::default(),
        }
    }

    pub fn with_incline(mut self, incline: Incline, travel_distance: f64) -> Self {
        self.incline = Some(incline);
        self.travel_distance = travel_distance;
        self
    }

    pub fn with_strategy(mut self, strategy: RenderStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// A validated, ready-to-draw description of a render job.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub config: RenderConfig,
    pub strategy: RenderStrategy,
    pub quality: QualityReport,
}

/// Builds the configuration for a request and runs the pre-render
/// checks against it.
///
/// A plan always comes back; the quality score tells the caller how
/// much to trust it.
pub fn plan_render(trace: &Trace, request: &RenderRequest) -> RenderPlan {
    let config = build_render_config(
        trace,
        request.screen,
        request.style.clone(),
        request.incline.as_ref(),
        request.travel_distance,
        &request.builder,
    );

    let quality = QualityReport::from_checks(vec![
        geometric_check(&config),
        physical_check(request),
        visual_check(&config),
    ]);
    debug!(
        "plan scored {:.2}: {} issue(s)",
        quality.score,
        quality.issues().len()
    );

    RenderPlan {
        config,
        strategy: request.strategy,
        quality,
    }
}

fn geometric_check(config: &RenderConfig) -> QualityCheck {
    QualityCheck {
        kind: CheckKind::Geometric,
        passed: config.geometry.is_valid(),
        issues: config.geometry.messages(),
        recommendations: config.geometry.recommendations(),
    }
}

fn physical_check(request: &RenderRequest) -> QualityCheck {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if let Some(incline) = &request.incline {
        if incline.length < request.travel_distance {
            issues.push(format!(
                "surface is {:.2} m but bodies travel {:.2} m along it",
                incline.length, request.travel_distance
            ));
            recommendations
                .push("lengthen the surface or shorten the simulated run".to_string());
        }
        if incline.angle_deg <= 0.0 || incline.angle_deg >= 90.0 {
            issues.push(format!(
                "slope angle {:.1} degrees is outside the physical range",
                incline.angle_deg
            ));
            recommendations.push("use a slope angle between 0 and 90 degrees".to_string());
        }
    }

    QualityCheck {
        kind: CheckKind::Physical,
        passed: issues.is_empty(),
        issues,
        recommendations,
    }
}

fn visual_check(config: &RenderConfig) -> QualityCheck {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let scale = config.coords.scale;
    if scale < MIN_READABLE_SCALE {
        issues.push(format!(
            "pixel density {scale:.1} px/m is below the readable minimum of {MIN_READABLE_SCALE} px/m"
        ));
        recommendations
            .push("enlarge the canvas or trim the trajectory to a tighter region".to_string());
    }

    QualityCheck {
        kind: CheckKind::Visual,
        passed: issues.is_empty(),
        issues,
        recommendations,
    }
}
