//! Per-actor-class movement tunables

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::errors::{SpatialError, SpatialResult};

/// Movement tunables supplied per actor class.
///
/// Distances are world units, speeds units per second, `turn_speed` radians
/// per second. `max_movement_per_update` caps the distance covered per second
/// of frame time, which bounds the jump from an abnormally long frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversalMovementConfig {
    /// Within this distance the actor snaps onto its target
    pub arrival_radius: f64,
    /// Targets closer than this are treated as already reached
    pub min_movement_distance: f64,
    pub max_movement_per_update: f64,
    pub base_speed: f64,
    pub acceleration: f64,
    pub turn_speed: f64,
}

impl Default for UniversalMovementConfig {
    fn default() -> Self {
        Self {
            arrival_radius: 2.0,
            min_movement_distance: 0.01,
            max_movement_per_update: 500.0,
            base_speed: 100.0,
            acceleration: 200.0,
            turn_speed: PI,
        }
    }
}

impl UniversalMovementConfig {
    /// Light, fast and agile.
    pub fn courier() -> Self {
        Self {
            base_speed: 180.0,
            acceleration: 360.0,
            turn_speed: 2.0 * PI,
            ..Self::default()
        }
    }

    /// Slow to accelerate and slow to turn.
    pub fn freighter() -> Self {
        Self {
            arrival_radius: 4.0,
            base_speed: 60.0,
            acceleration: 40.0,
            turn_speed: PI / 4.0,
            ..Self::default()
        }
    }

    /// Reject tunables that would stall or destabilize the integrator.
    pub fn validate(&self) -> SpatialResult<()> {
        let non_negative = [
            ("arrival_radius", self.arrival_radius),
            ("min_movement_distance", self.min_movement_distance),
            ("max_movement_per_update", self.max_movement_per_update),
            ("turn_speed", self.turn_speed),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SpatialError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("base_speed", self.base_speed),
            ("acceleration", self.acceleration),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpatialError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(UniversalMovementConfig::default().validate().is_ok());
        assert!(UniversalMovementConfig::courier().validate().is_ok());
        assert!(UniversalMovementConfig::freighter().validate().is_ok());
    }

    #[test]
    fn courier_outruns_freighter() {
        let courier = UniversalMovementConfig::courier();
        let freighter = UniversalMovementConfig::freighter();
        assert!(courier.base_speed > freighter.base_speed);
        assert!(courier.turn_speed > freighter.turn_speed);
    }

    #[test]
    fn zero_acceleration_rejected() {
        let config = UniversalMovementConfig {
            acceleration: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("acceleration"));
    }

    #[test]
    fn nan_radius_rejected() {
        let config = UniversalMovementConfig {
            arrival_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: UniversalMovementConfig =
            serde_json::from_str(r#"{ "base_speed": 42.0 }"#).unwrap();
        assert_eq!(config.base_speed, 42.0);
        assert_eq!(config.arrival_radius, 2.0);
    }
}
