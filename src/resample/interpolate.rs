use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::trace::{BodyState, Energy, Sample};

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wraps an angle into `[-pi, pi]`.
pub fn wrap_angle(rad: f64) -> f64 {
    if (-PI..=PI).contains(&rad) {
        return rad;
    }
    (rad + PI).rem_euclid(2.0 * PI) - PI
}

/// Interpolates between two angles along the shorter arc, so a turn
/// from 170 to -170 degrees passes through 180, never back through 0.
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    a + wrap_angle(b - a) * t
}

/// Cubic ease between 0 and 1 with zero slope at both ends.
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Blends two body states: positions and velocities linearly, the
/// orientation along the shortest arc.
pub fn interpolate_body(a: &BodyState, b: &BodyState, t: f64) -> BodyState {
    BodyState::new(
        lerp(a.x, b.x, t),
        lerp(a.y, b.y, t),
        lerp_angle(a.theta, b.theta, t),
        lerp(a.vx, b.vx, t),
        lerp(a.vy, b.vy, t),
        lerp(a.omega, b.omega, t),
    )
}

/// Blends every body present in `before`. A body missing from `after`
/// passes through unchanged rather than being extrapolated.
pub fn interpolate_bodies(
    before: &Sample,
    after: &Sample,
    t: f64,
) -> BTreeMap<String, BodyState> {
    before
        .bodies
        .iter()
        .map(|(id, a)| {
            let state = match after.bodies.get(id) {
                Some(b) => interpolate_body(a, b, t),
                None => *a,
            };
            (id.clone(), state)
        })
        .collect()
}

/// Blends energy readings, falling back to whichever side carries data
/// and to zero when neither does.
pub fn interpolate_energy(a: Option<Energy>, b: Option<Energy>, t: f64) -> Energy {
    match (a, b) {
        (Some(ea), Some(eb)) => Energy::new(
            lerp(ea.kinetic, eb.kinetic, t),
            lerp(ea.potential, eb.potential, t),
            lerp(ea.mechanical, eb.mechanical, t),
        ),
        (Some(e), None) | (None, Some(e)) => e,
        (None, None) => Energy::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn lerp_hits_both_endpoints_and_the_midpoint() {
        assert_relative_eq!(lerp(2.0, 10.0, 0.0), 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(lerp(2.0, 10.0, 1.0), 10.0, epsilon = TOLERANCE);
        assert_relative_eq!(lerp(2.0, 10.0, 0.5), 6.0, epsilon = TOLERANCE);
    }

    #[test]
    fn wrap_angle_in_range_unchanged() {
        for angle in [0.0, 1.0, -1.0, PI - 0.01, -PI + 0.01] {
            assert_relative_eq!(wrap_angle(angle), angle, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn wrap_angle_reduces_full_turns() {
        assert_relative_eq!(wrap_angle(2.0 * PI + 0.3), 0.3, epsilon = TOLERANCE);
        assert_relative_eq!(wrap_angle(-2.0 * PI - 0.3), -0.3, epsilon = TOLERANCE);
    }

    #[test]
    fn wrap_angle_handles_inputs_far_outside_the_range() {
        assert_relative_eq!(wrap_angle(7.0 * PI + 0.2), 0.2 - PI, epsilon = TOLERANCE);
        assert_relative_eq!(wrap_angle(-7.0 * PI - 0.2), PI - 0.2, epsilon = TOLERANCE);
    }

    #[test]
    fn lerp_angle_takes_the_short_arc_through_pi() {
        let a = 170f64.to_radians();
        let b = (-170f64).to_radians();
        let half = lerp_angle(a, b, 0.5);

        assert_relative_eq!(half.abs(), PI, epsilon = TOLERANCE);
    }

    #[test]
    fn lerp_angle_matches_lerp_when_no_wrap_is_needed() {
        let a = 0.2;
        let b = 0.8;
        assert_relative_eq!(lerp_angle(a, b, 0.25), lerp(a, b, 0.25), epsilon = TOLERANCE);
    }

    #[test]
    fn smoothstep_preserves_endpoints_and_eases_between() {
        assert_relative_eq!(smoothstep(0.0), 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(smoothstep(1.0), 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(smoothstep(0.5), 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(smoothstep(0.25), 0.15625, epsilon = TOLERANCE);
        assert_relative_eq!(smoothstep(0.75), 0.84375, epsilon = TOLERANCE);
    }

    #[test]
    fn interpolate_body_blends_position_and_velocity() {
        let a = BodyState::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let b = BodyState::new(10.0, 20.0, 0.0, 3.0, 4.0, 2.0);
        let mid = interpolate_body(&a, &b, 0.5);

        assert_relative_eq!(mid.x, 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.y, 10.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.vx, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.vy, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.omega, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn bodies_missing_from_the_later_sample_pass_through() {
        let before = Sample::new(0.0)
            .with_body("ball", BodyState::at(0.0, 0.0))
            .with_body("spark", BodyState::at(3.0, 4.0));
        let after = Sample::new(1.0).with_body("ball", BodyState::at(10.0, 0.0));

        let blended = interpolate_bodies(&before, &after, 0.5);

        assert_relative_eq!(blended["ball"].x, 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(blended["spark"].x, 3.0, epsilon = TOLERANCE);
        assert_relative_eq!(blended["spark"].y, 4.0, epsilon = TOLERANCE);
    }

    #[test]
    fn energy_blends_linearly_when_both_sides_have_it() {
        let a = Energy::new(10.0, 0.0, 10.0);
        let b = Energy::new(0.0, 10.0, 10.0);
        let mid = interpolate_energy(Some(a), Some(b), 0.5);

        assert_relative_eq!(mid.kinetic, 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.potential, 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(mid.mechanical, 10.0, epsilon = TOLERANCE);
    }

    #[test]
    fn energy_falls_back_to_the_populated_side() {
        let only = Energy::from_parts(3.0, 7.0);

        let from_before = interpolate_energy(Some(only), None, 0.8);
        let from_after = interpolate_energy(None, Some(only), 0.2);

        assert_relative_eq!(from_before.mechanical, 10.0, epsilon = TOLERANCE);
        assert_relative_eq!(from_after.mechanical, 10.0, epsilon = TOLERANCE);
    }

    #[test]
    fn energy_defaults_to_zero_when_absent() {
        let none = interpolate_energy(None, None, 0.5);
        assert_relative_eq!(none.mechanical, 0.0, epsilon = TOLERANCE);
    }
}
