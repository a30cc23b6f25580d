use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// A straight surface in world coordinates: a segment starting at
/// `start` and rising at `angle_deg` above the horizontal for `length`
/// meters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incline {
    pub angle_deg: f64,
    pub length: f64,
    pub start: WorldPoint,
    pub friction: Option<f64>,
}

impl Incline {
    pub const fn new(angle_deg: f64, length: f64, start: WorldPoint) -> Self {
        Self {
            angle_deg,
            length,
            start,
            friction: None,
        }
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Unit vector pointing up the slope.
    pub fn direction(&self) -> WorldPoint {
        let angle = self.angle_rad();
        WorldPoint::new(angle.cos(), angle.sin())
    }

    /// Unit normal pointing away from the surface, on the side bodies
    /// rest on.
    pub fn outward_normal(&self) -> WorldPoint {
        let angle = self.angle_rad();
        WorldPoint::new(-angle.sin(), angle.cos())
    }

    /// Point on the surface `distance` meters up the slope from `start`.
    pub fn point_along(&self, distance: f64) -> WorldPoint {
        self.start + self.direction() * distance
    }

    /// Center of a round body of `radius` resting on the surface at
    /// `distance` along it: displaced by exactly `radius` along the
    /// outward normal, tangent to the surface and never inside it.
    ///
    /// Bodies drawn on the incline must be placed from here, not with
    /// ad-hoc trigonometry at the call site.
    pub fn contact_point(&self, distance: f64, radius: f64) -> WorldPoint {
        debug_assert!(radius >= 0.0, "contact radius must be non-negative");
        self.point_along(distance) + self.outward_normal() * radius
    }

    pub fn end_point(&self) -> WorldPoint {
        self.point_along(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn point_along_follows_slope() {
        let incline = Incline::new(30.0, 10.0, WorldPoint::ZERO);
        let p = incline.point_along(2.0);

        assert_relative_eq!(p.x, 2.0 * 30f64.to_radians().cos(), epsilon = TOLERANCE);
        assert_relative_eq!(p.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn point_along_respects_start_offset() {
        let incline = Incline::new(45.0, 5.0, WorldPoint::new(1.0, 2.0));
        let p = incline.point_along(0.0);

        assert_relative_eq!(p.x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(p.y, 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn direction_and_normal_are_orthonormal() {
        let incline = Incline::new(37.0, 8.0, WorldPoint::ZERO);
        let d = incline.direction();
        let n = incline.outward_normal();

        assert_relative_eq!(d.x * d.x + d.y * d.y, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(n.x * n.x + n.y * n.y, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(d.x * n.x + d.y * n.y, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn contact_point_sits_exactly_one_radius_off_the_surface() {
        let incline = Incline::new(30.0, 10.0, WorldPoint::ZERO);
        let radius = 0.1;
        let contact = incline.contact_point(3.0, radius);
        let base = incline.point_along(3.0);

        assert_relative_eq!(base.distance_to(contact), radius, epsilon = TOLERANCE);

        // Perpendicular distance from the incline line equals the radius,
        // on the upward (outward) side.
        let d = incline.direction();
        let rel = contact - incline.start;
        let perp = d.x * rel.y - d.y * rel.x;
        assert_relative_eq!(perp, radius, epsilon = TOLERANCE);
    }

    #[test]
    fn contact_point_with_zero_radius_is_the_surface_point() {
        let incline = Incline::new(20.0, 6.0, WorldPoint::new(-1.0, 0.5));
        let on_surface = incline.point_along(4.0);
        let contact = incline.contact_point(4.0, 0.0);

        assert_relative_eq!(contact.x, on_surface.x, epsilon = TOLERANCE);
        assert_relative_eq!(contact.y, on_surface.y, epsilon = TOLERANCE);
    }

    #[test]
    fn end_point_is_length_along_the_slope() {
        let incline = Incline::new(30.0, 10.0, WorldPoint::ZERO);
        let end = incline.end_point();

        assert_relative_eq!(end.x, 10.0 * 30f64.to_radians().cos(), epsilon = TOLERANCE);
        assert_relative_eq!(end.y, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn friction_is_optional() {
        let plain = Incline::new(30.0, 10.0, WorldPoint::ZERO);
        assert!(plain.friction.is_none());

        let rough = plain.with_friction(0.3);
        assert_relative_eq!(rough.friction.unwrap(), 0.3, epsilon = TOLERANCE);
    }
}
