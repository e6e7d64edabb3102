//! Domain models
//!
//! Plain coordinate, heading and configuration types plus the pure
//! primitives over them. Models hold no long-lived state.

pub mod angle;
pub mod camera;
pub mod constants;
pub mod errors;
pub mod movement_config;
pub mod movement_state;
pub mod position;
pub mod region;
pub mod validation;
