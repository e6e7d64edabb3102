use std::time::Instant;

use tracing::{debug, trace};

use crate::models::constants::MIN_BRAKING_SPEED_FRACTION;
use crate::models::movement_state::{MovementPhase, MovementState, MovementUpdate};
use crate::models::position::{distance_2d, Position2, Position3};

/// Start moving toward `target`.
///
/// Targets closer than `min_movement_distance` are treated as already
/// reached: the state goes idle with zero velocity, which suppresses jitter
/// from duplicate or sub-pixel requests. Returns whether motion started.
pub fn set_movement_target(
    state: &mut MovementState,
    current_pos: Position3,
    target: Position3,
) -> bool {
    let distance = distance_2d(current_pos, target);

    // Negated so a NaN distance also lands here
    if !(distance >= state.config.min_movement_distance) {
        trace!(distance, "target within minimum movement distance, ignoring");
        state.reset();
        state.total_distance = 0.0;
        return false;
    }

    state.target_position = Some(target);
    state.total_distance = distance;
    state.remaining_distance = distance;
    state.last_update_time = Some(Instant::now());
    state.is_moving = true;
    debug!(
        from_x = current_pos.x,
        from_y = current_pos.y,
        to_x = target.x,
        to_y = target.y,
        distance,
        "movement target set"
    );
    true
}

/// Stop immediately and go idle.
pub fn cancel_movement(state: &mut MovementState) {
    if state.phase() == MovementPhase::Moving {
        debug!(remaining = state.remaining_distance, "movement cancelled");
    }
    state.reset();
}

/// Fraction of the current trip already covered, in `[0, 1]`.
/// Idle actors report 1.
pub fn movement_progress(state: &MovementState) -> f64 {
    if state.phase() == MovementPhase::Idle || state.total_distance <= 0.0 {
        return 1.0;
    }
    (1.0 - state.remaining_distance / state.total_distance).clamp(0.0, 1.0)
}

/// Advance one tick of `delta_time` seconds.
///
/// Arrival snaps the plane coordinates exactly onto the target. While
/// travelling, the actor accelerates toward `base_speed`, brakes early when
/// within twice its braking distance, never covers more than
/// `max_movement_per_update * delta_time` in one tick and never passes the
/// target. The layer of `current_pos` is preserved.
pub fn update_movement_state(
    state: &mut MovementState,
    current_pos: Position3,
    delta_time: f64,
) -> MovementUpdate {
    let target = match (state.phase(), state.target_position) {
        (MovementPhase::Moving, Some(target)) => target,
        _ => {
            return MovementUpdate {
                new_position: current_pos,
                completed: true,
            }
        }
    };

    let dx = target.x - current_pos.x;
    let dy = target.y - current_pos.y;
    let distance = (dx * dx + dy * dy).sqrt();
    state.last_update_time = Some(Instant::now());

    let config = state.config;
    if distance <= config.arrival_radius {
        state.reset();
        debug!(x = target.x, y = target.y, "arrived at target");
        return MovementUpdate {
            new_position: current_pos.with_xy(target.x, target.y),
            completed: true,
        };
    }

    if !delta_time.is_finite() || delta_time <= 0.0 || !distance.is_finite() {
        state.remaining_distance = distance;
        return MovementUpdate {
            new_position: current_pos,
            completed: false,
        };
    }

    let current_speed = state.speed();
    let mut target_speed = config.base_speed;

    let braking_distance = current_speed * current_speed / (2.0 * config.acceleration);
    if distance < 2.0 * braking_distance {
        let scaled = config.base_speed * distance / (2.0 * braking_distance);
        target_speed = scaled.max(config.base_speed * MIN_BRAKING_SPEED_FRACTION);
    }

    let max_speed_change = config.acceleration * delta_time;
    let speed = if current_speed < target_speed {
        (current_speed + max_speed_change).min(target_speed)
    } else {
        (current_speed - max_speed_change).max(target_speed)
    };

    let step = (speed * delta_time)
        .min(config.max_movement_per_update * delta_time)
        .min(distance);

    let (dir_x, dir_y) = (dx / distance, dy / distance);
    state.current_velocity = Position2 {
        x: dir_x * step / delta_time,
        y: dir_y * step / delta_time,
    };
    state.remaining_distance = distance - step;

    let new_position = if step >= distance {
        current_pos.with_xy(target.x, target.y)
    } else {
        current_pos.with_xy(current_pos.x + dir_x * step, current_pos.y + dir_y * step)
    };
    trace!(
        x = new_position.x,
        y = new_position.y,
        speed,
        remaining = state.remaining_distance,
        "movement tick"
    );

    MovementUpdate {
        new_position,
        completed: false,
    }
}
