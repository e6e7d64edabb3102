//! Screen ↔ world mapping for a pannable, zoomable camera
//!
//! Screen space has its origin at the top-left corner of the canvas. The
//! camera position is the world point drawn at the canvas centre. Neither
//! axis is flipped; renderers with a different convention adapt on their side.

use crate::models::camera::{Camera, Viewport};
use crate::models::position::Position2;
use crate::models::region::Bounds2;

/// World-space half extents of the visible area.
fn half_viewport(camera: &Camera, viewport: &Viewport) -> (f64, f64) {
    (
        viewport.width() / camera.zoom() / 2.0,
        viewport.height() / camera.zoom() / 2.0,
    )
}

/// Convert a pointer position to the world point under it.
pub fn screen_to_world(
    screen_x: f64,
    screen_y: f64,
    camera: &Camera,
    viewport: &Viewport,
) -> Position2 {
    let (half_w, half_h) = half_viewport(camera, viewport);
    Position2 {
        x: camera.x - half_w + screen_x / camera.zoom(),
        y: camera.y - half_h + screen_y / camera.zoom(),
    }
}

/// Exact inverse of [`screen_to_world`].
pub fn world_to_screen(
    world_x: f64,
    world_y: f64,
    camera: &Camera,
    viewport: &Viewport,
) -> Position2 {
    let (half_w, half_h) = half_viewport(camera, viewport);
    Position2 {
        x: (world_x - camera.x + half_w) * camera.zoom(),
        y: (world_y - camera.y + half_h) * camera.zoom(),
    }
}

/// World rectangle currently on screen.
pub fn visible_world_bounds(camera: &Camera, viewport: &Viewport) -> Bounds2 {
    let (half_w, half_h) = half_viewport(camera, viewport);
    Bounds2 {
        min: Position2::new(camera.x - half_w, camera.y - half_h),
        max: Position2::new(camera.x + half_w, camera.y + half_h),
    }
}
