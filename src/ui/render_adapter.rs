//! Renderer axis adapters
//!
//! The engine produces headings in one frame: 0 along +X, positive toward
//! +Y, with +Y pointing down the screen. A renderer with another convention
//! converts here when drawing and never hands its converted heading back to
//! the engine.

use std::f64::consts::FRAC_PI_2;

use crate::models::angle::normalize_angle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAxis {
    /// Same frame as the engine
    Canonical,
    /// +Y points up the screen; angles turn counter-clockwise on screen
    YUp,
    /// Compass bearing: 0 is screen-up, angles turn clockwise
    NorthUp,
}

impl RenderAxis {
    /// Engine heading → the angle this renderer should draw.
    pub fn to_render_heading(self, heading: f64) -> f64 {
        match self {
            RenderAxis::Canonical => normalize_angle(heading),
            RenderAxis::YUp => normalize_angle(-heading),
            RenderAxis::NorthUp => normalize_angle(heading + FRAC_PI_2),
        }
    }

    /// Renderer angle → engine heading.
    /// Inverse of [`to_render_heading`](Self::to_render_heading).
    pub fn from_render_heading(self, angle: f64) -> f64 {
        match self {
            RenderAxis::Canonical => normalize_angle(angle),
            RenderAxis::YUp => normalize_angle(-angle),
            RenderAxis::NorthUp => normalize_angle(angle - FRAC_PI_2),
        }
    }
}
