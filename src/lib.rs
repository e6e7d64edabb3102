//! Spatial Navigation Engine
//!
//! Coordinates, headings and point-to-point movement for 2D space scenes
//! drawn with layered depth.
//!
//! # Overview
//!
//! Every entity lives at a 3D position whose `z` is a render layer, never a
//! physical height. Distance and movement work on the XY plane only. Headings
//! are radians in one canonical frame; renderers with other axis conventions
//! convert at the edge through [`ui::render_adapter::RenderAxis`].
//!
//! # Modules
//!
//! - [`models`] - Positions, angles, tunables, regions, camera, errors
//! - [`services`] - Movement, spatial grid, regions, coordinate cache, view transforms
//! - [`config`] - JSON engine configuration
//! - [`simulation`] - Seeded fleet harness that drives the engine
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Presentation and renderer adapters
//!
//! # Example
//!
//! ```rust,no_run
//! use spacenav::{EngineConfig, Simulation};
//!
//! let mut sim = Simulation::new(42, EngineConfig::default(), 16).unwrap();
//! sim.run(600, 1.0 / 60.0);
//! ```

pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod services;
pub mod simulation;
pub mod ui;

// Re-export commonly used types
pub use config::EngineConfig;
pub use models::errors::{SpatialError, SpatialResult};
pub use models::movement_config::UniversalMovementConfig;
pub use models::position::{Position2, Position3};
pub use simulation::{Simulation, SimulationSummary, StepReport};
