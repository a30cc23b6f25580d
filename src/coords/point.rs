use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position (or displacement) in world space, measured in meters.
///
/// Distinct from [`ScreenPoint`]; the two only convert through a
/// [`CoordinateSystem`](super::CoordinateSystem).
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub fn distance_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for WorldPoint {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for WorldPoint {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for WorldPoint {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// A position in device pixels. The y axis always points down.
///
/// Carries no arithmetic on purpose: pixel math outside the coordinate
/// system is how trajectories drift away from the surfaces they sit on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn world_point_arithmetic() {
        let a = WorldPoint::new(1.0, 2.0);
        let b = WorldPoint::new(3.0, -1.0);

        let sum = a + b;
        assert_relative_eq!(sum.x, 4.0, epsilon = TOLERANCE);
        assert_relative_eq!(sum.y, 1.0, epsilon = TOLERANCE);

        let diff = b - a;
        assert_relative_eq!(diff.x, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(diff.y, -3.0, epsilon = TOLERANCE);

        let scaled = a * 2.5;
        assert_relative_eq!(scaled.x, 2.5, epsilon = TOLERANCE);
        assert_relative_eq!(scaled.y, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = WorldPoint::new(0.0, 0.0);
        let b = WorldPoint::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(b), 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(b.distance_to(a), 5.0, epsilon = TOLERANCE);
    }
}
