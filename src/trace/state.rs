use serde::{Deserialize, Serialize};

use crate::coords::WorldPoint;

/// Kinematic state of one body at one instant.
///
/// Positions are meters, `theta` is radians, velocities are meters per
/// second and `omega` radians per second.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub theta: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    #[serde(default)]
    pub omega: f64,
}

impl BodyState {
    pub const fn new(x: f64, y: f64, theta: f64, vx: f64, vy: f64, omega: f64) -> Self {
        Self {
            x,
            y,
            theta,
            vx,
            vy,
            omega,
        }
    }

    /// A body at rest at the given position.
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

/// Energy bookkeeping attached to a sample by simulators that track it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub mechanical: f64,
}

impl Energy {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(kinetic: f64, potential: f64, mechanical: f64) -> Self {
        Self {
            kinetic,
            potential,
            mechanical,
        }
    }

    /// Builds the triple from its parts, with mechanical as their sum.
    pub fn from_parts(kinetic: f64, potential: f64) -> Self {
        Self::new(kinetic, potential, kinetic + potential)
    }
}
