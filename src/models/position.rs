use serde::{Deserialize, Serialize};

use super::constants::{COORDINATE_DECIMALS, COORDINATE_LIMIT};

/// A point in the gameplay plane.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2 {
    pub x: f64,
    pub y: f64,
}

/// A point in the plane tagged with its interaction layer.
///
/// `z` is one of the layer constants, not a depth. Gameplay distance and
/// collision checks only read `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Position3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same layer, new plane coordinates.
    pub fn with_xy(self, x: f64, y: f64) -> Self {
        Self { x, y, z: self.z }
    }

    pub fn xy(self) -> Position2 {
        to_2d(self)
    }
}

impl From<Position3> for Position2 {
    fn from(pos: Position3) -> Self {
        to_2d(pos)
    }
}

/// Lift a plane point onto a layer.
pub fn to_3d(pos: Position2, layer: f64) -> Position3 {
    Position3 {
        x: pos.x,
        y: pos.y,
        z: layer,
    }
}

/// Drop the layer.
pub fn to_2d(pos: Position3) -> Position2 {
    Position2 { x: pos.x, y: pos.y }
}

/// Distance in the plane; the layer is ignored.
pub fn distance_2d(a: Position3, b: Position3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn distance_3d(a: Position3, b: Position3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// True when both plane coordinates differ by at most `tolerance`.
pub fn positions_equal_2d(a: Position3, b: Position3, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// Round every component to three decimals for stable serialization.
pub fn normalize_coordinates(pos: Position3) -> Position3 {
    let scale = 10f64.powi(COORDINATE_DECIMALS);
    let round = |v: f64| (v * scale).round() / scale;
    Position3 {
        x: round(pos.x),
        y: round(pos.y),
        z: round(pos.z),
    }
}

/// Finite and within the playable bounds.
pub fn is_valid_coordinate(value: f64) -> bool {
    value.is_finite() && value.abs() <= COORDINATE_LIMIT
}

pub fn is_valid_position(pos: Position3) -> bool {
    is_valid_coordinate(pos.x) && is_valid_coordinate(pos.y) && is_valid_coordinate(pos.z)
}
