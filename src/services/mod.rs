//! Engine services
//!
//! Operations over the models: spatial indexing, regions, the coordinate
//! cache, movement, view transforms and tracing.

pub mod clock;
pub mod coordinate_cache;
pub mod movement;
pub mod recorder;
pub mod regions;
pub mod spatial_grid;
pub mod view_transform;
