//! Coordinate validation
//!
//! Malformed positions are reported, never thrown, so one bad actor cannot
//! abort the shared per-tick update.

use std::fmt;

use serde::Serialize;

use super::constants::COORDINATE_LIMIT;
use super::position::Position3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A single problem found on a position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CoordinateIssue {
    /// NaN or infinite component
    NonFinite { axis: Axis },
    /// Finite but beyond the playable bounds
    OutOfBounds { axis: Axis, value: f64 },
}

impl fmt::Display for CoordinateIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoordinateIssue::NonFinite { axis } => {
                write!(f, "{} coordinate is not a finite number", axis.label())
            }
            CoordinateIssue::OutOfBounds { axis, value } => write!(
                f,
                "{} coordinate {} exceeds bounds of ±{}",
                axis.label(),
                value,
                COORDINATE_LIMIT
            ),
        }
    }
}

/// Result of validating a position.
///
/// Errors make the position unusable; warnings leave it usable.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<CoordinateIssue>,
    pub warnings: Vec<CoordinateIssue>,
}

impl ValidationReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Check every component of `pos`.
///
/// Non-finite values are errors. Values beyond [`COORDINATE_LIMIT`] are
/// warnings only: motion continues and the caller decides whether to clamp.
pub fn validate_position(pos: Position3) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..Default::default()
    };

    for (axis, value) in [(Axis::X, pos.x), (Axis::Y, pos.y), (Axis::Z, pos.z)] {
        if !value.is_finite() {
            report.errors.push(CoordinateIssue::NonFinite { axis });
        } else if value.abs() > COORDINATE_LIMIT {
            report
                .warnings
                .push(CoordinateIssue::OutOfBounds { axis, value });
        }
    }

    report.is_valid = report.errors.is_empty();
    report
}
