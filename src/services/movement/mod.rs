//! Movement engine
//!
//! Per-actor translation (accelerate, cruise, brake, arrive) and heading
//! updates. Both are plain functions over caller-owned state; the owning
//! actor calls them once per tick with the same position/target snapshot.

mod rotation;
mod translation;

pub use rotation::update_rotation;
pub use translation::{
    cancel_movement, movement_progress, set_movement_target, update_movement_state,
};
