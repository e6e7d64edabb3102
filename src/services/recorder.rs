//! Opt-in movement tracing
//!
//! A recorder is an ordinary value handed to the actors that should be
//! traced. Independent simulations keep independent recorders.

use serde::Serialize;

use crate::models::position::Position3;
use crate::models::validation::CoordinateIssue;

/// Something worth tracing in an actor's movement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MovementEvent {
    TargetSet {
        tick: u64,
        actor: u32,
        from: Position3,
        target: Position3,
        distance: f64,
    },
    /// The target was closer than the minimum movement distance
    TargetIgnored {
        tick: u64,
        actor: u32,
        target: Position3,
    },
    Arrived {
        tick: u64,
        actor: u32,
        position: Position3,
    },
    Cancelled {
        tick: u64,
        actor: u32,
        position: Position3,
    },
    /// The actor's update was skipped because its position was unusable
    Skipped {
        tick: u64,
        actor: u32,
        issues: Vec<CoordinateIssue>,
    },
}

impl MovementEvent {
    pub fn actor(&self) -> u32 {
        match self {
            MovementEvent::TargetSet { actor, .. }
            | MovementEvent::TargetIgnored { actor, .. }
            | MovementEvent::Arrived { actor, .. }
            | MovementEvent::Cancelled { actor, .. }
            | MovementEvent::Skipped { actor, .. } => *actor,
        }
    }

    pub fn tick(&self) -> u64 {
        match self {
            MovementEvent::TargetSet { tick, .. }
            | MovementEvent::TargetIgnored { tick, .. }
            | MovementEvent::Arrived { tick, .. }
            | MovementEvent::Cancelled { tick, .. }
            | MovementEvent::Skipped { tick, .. } => *tick,
        }
    }
}

/// Collects [`MovementEvent`]s for later inspection or export.
#[derive(Debug, Clone, Default)]
pub struct MovementRecorder {
    events: Vec<MovementEvent>,
    tick: u64,
}

impl MovementRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick number stamped onto subsequent events.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn set_tick(&mut self, tick: u64) {
        self.tick = tick;
    }

    pub fn record_target_set(
        &mut self,
        actor: u32,
        from: Position3,
        target: Position3,
        distance: f64,
    ) {
        self.events.push(MovementEvent::TargetSet {
            tick: self.tick,
            actor,
            from,
            target,
            distance,
        });
    }

    pub fn record_target_ignored(&mut self, actor: u32, target: Position3) {
        self.events.push(MovementEvent::TargetIgnored {
            tick: self.tick,
            actor,
            target,
        });
    }

    pub fn record_arrived(&mut self, actor: u32, position: Position3) {
        self.events.push(MovementEvent::Arrived {
            tick: self.tick,
            actor,
            position,
        });
    }

    pub fn record_cancelled(&mut self, actor: u32, position: Position3) {
        self.events.push(MovementEvent::Cancelled {
            tick: self.tick,
            actor,
            position,
        });
    }

    pub fn record_skipped(&mut self, actor: u32, issues: Vec<CoordinateIssue>) {
        self.events.push(MovementEvent::Skipped {
            tick: self.tick,
            actor,
            issues,
        });
    }

    pub fn events(&self) -> &[MovementEvent] {
        &self.events
    }

    pub fn events_for(&self, actor: u32) -> Vec<&MovementEvent> {
        self.events.iter().filter(|e| e.actor() == actor).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.tick = 0;
    }

    /// Pretty-printed JSON array of every recorded event.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }
}
