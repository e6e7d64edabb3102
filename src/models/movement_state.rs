use std::time::Instant;

use super::movement_config::UniversalMovementConfig;
use super::position::{Position2, Position3};

/// Whether an actor is currently travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPhase {
    Idle,
    Moving,
}

/// Per-actor kinematic state. Owned by exactly one actor.
#[derive(Debug, Clone)]
pub struct MovementState {
    pub is_moving: bool,
    pub target_position: Option<Position3>,
    /// Velocity in the plane, units per second
    pub current_velocity: Position2,
    pub config: UniversalMovementConfig,
    pub total_distance: f64,
    pub remaining_distance: f64,
    pub last_update_time: Option<Instant>,
}

impl MovementState {
    pub fn new(config: UniversalMovementConfig) -> Self {
        Self {
            is_moving: false,
            target_position: None,
            current_velocity: Position2::default(),
            config,
            total_distance: 0.0,
            remaining_distance: 0.0,
            last_update_time: None,
        }
    }

    pub fn phase(&self) -> MovementPhase {
        if self.is_moving && self.target_position.is_some() {
            MovementPhase::Moving
        } else {
            MovementPhase::Idle
        }
    }

    /// Scalar speed in the plane.
    pub fn speed(&self) -> f64 {
        let v = self.current_velocity;
        (v.x * v.x + v.y * v.y).sqrt()
    }

    /// Return to idle: no target, no velocity, no distance left.
    pub fn reset(&mut self) {
        self.is_moving = false;
        self.target_position = None;
        self.current_velocity = Position2::default();
        self.remaining_distance = 0.0;
    }
}

impl Default for MovementState {
    fn default() -> Self {
        Self::new(UniversalMovementConfig::default())
    }
}

/// Outcome of one translation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementUpdate {
    pub new_position: Position3,
    pub completed: bool,
}
