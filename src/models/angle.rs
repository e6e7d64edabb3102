//! Heading and angle primitives
//!
//! All angles are radians in one canonical frame: 0 points along +X and
//! positive angles turn from +X toward +Y. Renderers with other axis
//! conventions convert at draw time (see `ui::render_adapter`).

use std::f64::consts::{PI, TAU};

use super::position::Position3;

/// Angles this close to the ±π seam are treated as sitting on it.
const SEAM_EPSILON: f64 = 1e-9;

/// Map any angle into the canonical range `[-π, π)`.
///
/// The ±π boundary always comes back as `-π`, so `π`, `3π` and `-3π` all
/// normalize to the same value. Non-finite input is returned unchanged.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    if angle > -PI + SEAM_EPSILON && angle < PI - SEAM_EPSILON {
        return angle;
    }

    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped >= PI - SEAM_EPSILON || wrapped <= -PI + SEAM_EPSILON {
        -PI
    } else {
        wrapped
    }
}

/// Signed shortest rotation that takes `current` onto `target`.
pub fn angle_difference(target: f64, current: f64) -> f64 {
    normalize_angle(target - current)
}

/// Heading pointing from `from` to `to` in the plane.
pub fn angle_to_target(from: Position3, to: Position3) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Turn `current` toward `target` by at most `max_change` along the shorter arc.
pub fn rotate_towards(current: f64, target: f64, max_change: f64) -> f64 {
    let max_change = max_change.max(0.0);
    let diff = angle_difference(target, current);

    if diff.abs() <= max_change {
        normalize_angle(target)
    } else {
        normalize_angle(current + max_change * diff.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn seam_collapses_to_negative_pi() {
        for angle in [PI, -PI, 3.0 * PI, -3.0 * PI, 5.0 * PI] {
            assert_eq!(normalize_angle(angle), -PI, "angle {}", angle);
        }
    }

    #[test]
    fn zero_and_full_turns() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!(normalize_angle(TAU).abs() < 1e-12);
        assert!(normalize_angle(-TAU).abs() < 1e-12);
    }

    #[test]
    fn in_range_angles_unchanged() {
        assert_eq!(normalize_angle(FRAC_PI_2), FRAC_PI_2);
        assert_eq!(normalize_angle(-FRAC_PI_4), -FRAC_PI_4);
    }

    #[test]
    fn difference_takes_short_way_round() {
        // 170° to -170° is a 20° turn, not 340°
        let diff = angle_difference((-170.0f64).to_radians(), 170.0f64.to_radians());
        assert!((diff - 20.0f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn angle_to_diagonal_target() {
        let from = Position3::new(0.0, 0.0, 50.0);
        let to = Position3::new(100.0, 100.0, 50.0);
        assert!((angle_to_target(from, to) - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn rotate_clamps_to_max_change() {
        let heading = rotate_towards(0.0, FRAC_PI_2, 0.1);
        assert!((heading - 0.1).abs() < 1e-12);

        let heading = rotate_towards(0.0, -FRAC_PI_2, 0.1);
        assert!((heading + 0.1).abs() < 1e-12);
    }

    #[test]
    fn rotate_snaps_when_close() {
        assert_eq!(rotate_towards(0.5, 0.55, 0.1), 0.55);
    }

    #[test]
    fn rotate_crosses_seam() {
        let current = 175.0f64.to_radians();
        let target = (-175.0f64).to_radians();
        let heading = rotate_towards(current, target, 5.0f64.to_radians());
        assert_eq!(heading, -PI);
    }

    #[test]
    fn negative_max_change_holds_heading() {
        assert_eq!(rotate_towards(0.3, 1.0, -1.0), 0.3);
    }
}
