use crate::models::angle::{angle_to_target, rotate_towards};
use crate::models::constants::HEADING_FREEZE_DISTANCE;
use crate::models::position::{distance_2d, Position3};

/// Turn `current_heading` toward `target_pos` by at most
/// `turn_speed * delta_time` radians.
///
/// The desired heading comes from the same `(dx, dy)` the translation step
/// uses, in the engine's canonical frame. Within one unit of the target the
/// heading is frozen so the actor does not spin on arrival.
pub fn update_rotation(
    current_heading: f64,
    current_pos: Position3,
    target_pos: Position3,
    turn_speed: f64,
    delta_time: f64,
) -> f64 {
    let distance = distance_2d(current_pos, target_pos);
    if !(distance >= HEADING_FREEZE_DISTANCE) {
        return current_heading;
    }

    let desired = angle_to_target(current_pos, target_pos);
    let max_change = turn_speed * delta_time;
    if !max_change.is_finite() {
        return current_heading;
    }
    rotate_towards(current_heading, desired, max_change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn at(x: f64, y: f64) -> Position3 {
        Position3::new(x, y, 50.0)
    }

    #[test]
    fn frozen_near_target() {
        let heading = update_rotation(0.3, at(0.0, 0.0), at(0.5, 0.5), PI, 1.0);
        assert_eq!(heading, 0.3);
    }

    #[test]
    fn turn_is_rate_limited() {
        let heading = update_rotation(0.0, at(0.0, 0.0), at(0.0, 100.0), 1.0, 0.1);
        assert!((heading - 0.1).abs() < 1e-12);
    }

    #[test]
    fn reaches_desired_heading() {
        let mut heading = 0.0;
        for _ in 0..60 {
            heading = update_rotation(heading, at(0.0, 0.0), at(100.0, 100.0), PI, 1.0 / 60.0);
        }
        assert!((heading - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn positive_y_target_gives_positive_heading() {
        // No axis flip inside the engine: +Y is a quarter turn from +X
        let heading = update_rotation(0.0, at(0.0, 0.0), at(0.0, 50.0), 100.0, 1.0);
        assert!((heading - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn turns_the_short_way() {
        // Facing just below +π, target just above -π: turn through the seam
        let current = PI - 0.05;
        let heading = update_rotation(current, at(0.0, 0.0), at(-100.0, -1.0), 0.2, 1.0);
        assert!(heading < 0.0, "expected to wrap past π, got {}", heading);
    }
}
