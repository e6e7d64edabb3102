use super::constants::{MAX_ZOOM, MIN_ZOOM};
use super::errors::{SpatialError, SpatialResult};

/// A pannable, zoomable 2D camera. `(x, y)` is the world point at the
/// centre of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    zoom: f64,
}

impl Camera {
    /// Zoom must be positive and finite.
    pub fn new(x: f64, y: f64, zoom: f64) -> SpatialResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SpatialError::InvalidZoom(zoom));
        }
        Ok(Self { x, y, zoom })
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set zoom, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Canvas size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> SpatialResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SpatialError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_must_be_positive() {
        assert!(Camera::new(0.0, 0.0, 0.0).is_err());
        assert!(Camera::new(0.0, 0.0, -1.0).is_err());
        assert!(Camera::new(0.0, 0.0, f64::NAN).is_err());
        assert!(Camera::new(0.0, 0.0, 0.5).is_ok());
    }

    #[test]
    fn set_zoom_clamps() {
        let mut camera = Camera::default();
        camera.set_zoom(10.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.set_zoom(f64::NAN);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn pan_moves_centre() {
        let mut camera = Camera::default();
        camera.pan(10.0, -5.0);
        assert_eq!((camera.x, camera.y), (10.0, -5.0));
    }

    #[test]
    fn viewport_rejects_empty() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, 600.0).is_ok());
    }
}
