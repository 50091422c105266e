//! Generator configuration loaded from JSON

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, Result, WorldGenError};
use crate::world::WorldType;

/// Settings for one generation run. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub world_type: WorldType,
    /// `None` draws a fresh seed per run
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 70,
            world_type: WorldType::Classic,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| WorldGenError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!((config.width, config.height), (100, 70));
        assert_eq!(config.world_type, WorldType::Classic);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GeneratorConfig::from_json_str(r#"{ "world_type": "islands", "seed": 7 }"#).unwrap();
        assert_eq!(config.world_type, WorldType::Islands);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.width, 100);
    }

    #[test]
    fn test_bad_world_type_is_config_error() {
        let err = GeneratorConfig::from_json_str(r#"{ "world_type": "swamp" }"#).unwrap_err();
        assert!(matches!(err, WorldGenError::Config(_)));
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = GeneratorConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, WorldGenError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("worldgen_config_{}.json", std::process::id()));
        let config = GeneratorConfig {
            width: 32,
            height: 24,
            world_type: WorldType::Volcanic,
            seed: Some(1),
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = GeneratorConfig::from_json_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GeneratorConfig::from_json_file("/nonexistent/worldgen.json").unwrap_err();
        assert!(matches!(err, WorldGenError::Io(_)));
    }
}
