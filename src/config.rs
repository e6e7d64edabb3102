//! Engine configuration
//!
//! Loaded from JSON. Every field is optional in the file and falls back to
//! its default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::constants::DEFAULT_CELL_SIZE;
use crate::models::errors::{SpatialError, SpatialResult};
use crate::models::movement_config::UniversalMovementConfig;

/// Settings for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub grid_cell_size: f64,
    pub cache_max_age_ms: u64,
    /// Ships within this distance of a gate count as gate traffic
    pub gate_trigger_radius: f64,
    /// Movement tunables by actor class name
    pub profiles: BTreeMap<String, UniversalMovementConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert("courier".to_string(), UniversalMovementConfig::courier());
        profiles.insert("freighter".to_string(), UniversalMovementConfig::freighter());

        Self {
            grid_cell_size: DEFAULT_CELL_SIZE,
            cache_max_age_ms: 5000,
            gate_trigger_radius: 50.0,
            profiles,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> SpatialResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SpatialResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> SpatialResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn cache_max_age(&self) -> Duration {
        Duration::from_millis(self.cache_max_age_ms)
    }

    pub fn validate(&self) -> SpatialResult<()> {
        if !self.grid_cell_size.is_finite() || self.grid_cell_size <= 0.0 {
            return Err(SpatialError::InvalidCellSize(self.grid_cell_size));
        }
        if !self.gate_trigger_radius.is_finite() || self.gate_trigger_radius < 0.0 {
            return Err(SpatialError::InvalidConfig(format!(
                "gate_trigger_radius must be non-negative, got {}",
                self.gate_trigger_radius
            )));
        }
        if self.profiles.is_empty() {
            return Err(SpatialError::InvalidConfig(
                "at least one movement profile is required".to_string(),
            ));
        }
        for (name, profile) in &self.profiles {
            profile.validate().map_err(|err| {
                SpatialError::InvalidConfig(format!("profile '{}': {}", name, err))
            })?;
        }
        Ok(())
    }

    /// Profile names in a stable order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.profile_names(), vec!["courier", "freighter"]);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn custom_profile_from_json() {
        let json = r#"{
            "grid_cell_size": 250.0,
            "profiles": { "scout": { "base_speed": 300.0, "acceleration": 900.0 } }
        }"#;
        let config = EngineConfig::from_json_str(json).unwrap();
        assert_eq!(config.grid_cell_size, 250.0);
        assert_eq!(config.profiles["scout"].base_speed, 300.0);
        assert_eq!(config.profiles["scout"].arrival_radius, 2.0);
    }

    #[test]
    fn bad_cell_size_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "grid_cell_size": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SpatialError::InvalidCellSize(_)));
    }

    #[test]
    fn bad_profile_named_in_error() {
        let json = r#"{ "profiles": { "brick": { "acceleration": -1.0 } } }"#;
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("brick"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ nope"),
            Err(SpatialError::Json(_))
        ));
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join("spacenav_config_test.json");
        let config = EngineConfig::default();
        fs::write(&path, config.to_json().unwrap()).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SpatialError::Io(_)));
    }
}
