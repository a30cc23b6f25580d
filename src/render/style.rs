use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque RGB color. Per-element transparency lives on the styles as
/// `opacity`, where a drawing layer can apply it to fill and stroke
/// together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const SLATE: Self = Self::new(70, 80, 90);
}

/// The finite set of motion phases a body can be drawn in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPhase {
    Rest,
    FreeFall,
    Projectile,
    Sliding,
    Rolling,
    ElasticCollision,
    InelasticCollision,
    Oscillation,
}

impl MotionPhase {
    /// Accent color for a body in this phase. Exhaustive, so adding a
    /// phase forces a styling decision.
    pub const fn accent(self) -> Color {
        match self {
            MotionPhase::Rest => Color::new(128, 128, 128),
            MotionPhase::FreeFall => Color::new(214, 69, 65),
            MotionPhase::Projectile => Color::new(230, 126, 34),
            MotionPhase::Sliding => Color::new(41, 128, 185),
            MotionPhase::Rolling => Color::new(39, 174, 96),
            MotionPhase::ElasticCollision => Color::new(155, 89, 182),
            MotionPhase::InelasticCollision => Color::new(120, 66, 18),
            MotionPhase::Oscillation => Color::new(22, 160, 133),
        }
    }
}

/// How a body is drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    #[default]
    Circle,
    Box,
    Point,
}

/// Visual configuration for one drawn body.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyStyle {
    pub shape: BodyShape,
    pub fill: Color,
    pub stroke: Color,
    pub opacity: f64,
    pub line_width: f64,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            shape: BodyShape::Circle,
            fill: MotionPhase::Sliding.accent(),
            stroke: Color::BLACK,
            opacity: 1.0,
            line_width: 2.0,
        }
    }
}

impl BodyStyle {
    /// Default style filled with the phase's accent color.
    pub fn for_phase(phase: MotionPhase) -> Self {
        Self {
            fill: phase.accent(),
            ..Self::default()
        }
    }
}

/// Visual configuration for a drawn surface.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub stroke: Color,
    pub line_width: f64,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            stroke: Color::SLATE,
            line_width: 3.0,
        }
    }
}

/// Closed style configuration for a whole scene: the recognized visual
/// knobs and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background: Color,
    pub surface: SurfaceStyle,
    pub default_body: BodyStyle,
    pub body_overrides: BTreeMap<String, BodyStyle>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            surface: SurfaceStyle::default(),
            default_body: BodyStyle::default(),
            body_overrides: BTreeMap::new(),
        }
    }
}

impl RenderStyle {
    /// Style for a body id, override first.
    pub fn body_style(&self, id: &str) -> BodyStyle {
        self.body_overrides
            .get(id)
            .copied()
            .unwrap_or(self.default_body)
    }

    pub fn with_body_override(mut self, id: impl Into<String>, style: BodyStyle) -> Self {
        self.body_overrides.insert(id.into(), style);
        self
    }
}
