//! Presentation
//!
//! Presenters format simulation results for display. Renderer axis
//! adapters live here too, outside the engine.

pub mod presenters;
pub mod render_adapter;
