use serde::{Deserialize, Serialize};

use super::position::{Position2, Position3};

/// Axis-aligned rectangle in the plane. Both edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Position2,
    pub max: Position2,
}

impl Bounds2 {
    /// Build from two opposite corners in any order.
    pub fn from_corners(a: Position2, b: Position2) -> Self {
        Self {
            min: Position2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Position2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A named zone, optionally restricted to one layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub bounds: Bounds2,
    #[serde(default)]
    pub layer: Option<f64>,
}

impl Region {
    pub fn new(id: impl Into<String>, bounds: Bounds2) -> Self {
        Self {
            id: id.into(),
            bounds,
            layer: None,
        }
    }

    pub fn on_layer(mut self, layer: f64) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Bounds check in the plane plus the layer restriction, if any.
    pub fn contains(&self, pos: Position3) -> bool {
        if !self.bounds.contains(pos.x, pos.y) {
            return false;
        }
        match self.layer {
            Some(layer) => pos.z == layer,
            None => true,
        }
    }
}
