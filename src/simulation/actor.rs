use tracing::warn;

use crate::models::constants::ObjectType;
use crate::models::movement_config::UniversalMovementConfig;
use crate::models::movement_state::{MovementPhase, MovementState};
use crate::models::position::{distance_2d, to_3d, Position2, Position3};
use crate::models::validation::{validate_position, ValidationReport};
use crate::services::movement::{
    cancel_movement, set_movement_target, update_movement_state, update_rotation,
};
use crate::services::recorder::MovementRecorder;

pub type ActorId = u32;

/// What happened to an actor during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    Moving,
    Arrived,
    /// The position failed validation and the update was not applied
    Skipped(ValidationReport),
}

/// A mobile entity: owns its position, heading and movement state.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ObjectType,
    pub profile: String,
    pub position: Position3,
    /// Heading in the engine's canonical frame, radians
    pub heading: f64,
    pub movement: MovementState,
}

impl Actor {
    /// Place a new idle actor on the layer of its kind.
    pub fn new(
        id: ActorId,
        kind: ObjectType,
        profile: impl Into<String>,
        position: Position2,
        config: UniversalMovementConfig,
    ) -> Self {
        let layer = kind.layer();
        Self {
            id,
            kind,
            profile: profile.into(),
            position: to_3d(position, layer),
            heading: 0.0,
            movement: MovementState::new(config),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.movement.phase() == MovementPhase::Moving
    }

    /// Head for `target` on this actor's own layer. Returns whether motion
    /// started; targets that are too close leave the actor idle.
    pub fn command_move(
        &mut self,
        target: Position2,
        recorder: Option<&mut MovementRecorder>,
    ) -> bool {
        let target = to_3d(target, self.position.z);
        let started = set_movement_target(&mut self.movement, self.position, target);

        if let Some(recorder) = recorder {
            if started {
                let distance = distance_2d(self.position, target);
                recorder.record_target_set(self.id, self.position, target, distance);
            } else {
                recorder.record_target_ignored(self.id, target);
            }
        }
        started
    }

    pub fn cancel(&mut self, recorder: Option<&mut MovementRecorder>) {
        if self.is_moving() {
            if let Some(recorder) = recorder {
                recorder.record_cancelled(self.id, self.position);
            }
        }
        cancel_movement(&mut self.movement);
    }

    /// Advance heading and position by one tick.
    ///
    /// Rotation and translation both read the same position/target snapshot
    /// taken before either runs, so heading always agrees with the direction
    /// of travel. An actor whose position is not finite is left untouched.
    pub fn tick(
        &mut self,
        delta_time: f64,
        recorder: Option<&mut MovementRecorder>,
    ) -> TickOutcome {
        let report = validate_position(self.position);
        if !report.is_valid {
            warn!(
                actor = self.id,
                errors = report.errors.len(),
                "skipping actor with invalid position"
            );
            if let Some(recorder) = recorder {
                recorder.record_skipped(self.id, report.errors.clone());
            }
            return TickOutcome::Skipped(report);
        }
        if report.has_warnings() {
            warn!(
                actor = self.id,
                x = self.position.x,
                y = self.position.y,
                "actor outside coordinate bounds"
            );
        }

        let target = match (self.movement.phase(), self.movement.target_position) {
            (MovementPhase::Moving, Some(target)) => target,
            _ => return TickOutcome::Idle,
        };

        let snapshot = self.position;
        self.heading = update_rotation(
            self.heading,
            snapshot,
            target,
            self.movement.config.turn_speed,
            delta_time,
        );
        let update = update_movement_state(&mut self.movement, snapshot, delta_time);
        self.position = update.new_position;

        if update.completed {
            if let Some(recorder) = recorder {
                recorder.record_arrived(self.id, self.position);
            }
            TickOutcome::Arrived
        } else {
            TickOutcome::Moving
        }
    }
}
