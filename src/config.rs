//! Start-up configuration for the simulation driver.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_SIZE;
use crate::domain::PatternLibrary;
use crate::error::ConfigError;

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_density() -> f64 {
    0.3
}

fn default_speed() -> u8 {
    5
}

fn default_pattern() -> String {
    "glider".to_owned()
}

fn default_save_path() -> PathBuf {
    PathBuf::from("game_of_life_state.json")
}

fn default_pattern_path() -> PathBuf {
    PathBuf::from("game_of_life_pattern.json")
}

/// Top-level simulation configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid side length in cells.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Probability of a live cell when randomizing.
    #[serde(default = "default_density")]
    pub density: f64,
    /// Speed 0-10; 0 pauses.
    #[serde(default = "default_speed")]
    pub speed: u8,
    /// Built-in pattern placed at start-up and after resizing.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Where the viewer keeps its saved state.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,
    /// Where the viewer exports patterns to and imports them from.
    #[serde(default = "default_pattern_path")]
    pub pattern_path: PathBuf,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            density: default_density(),
            speed: default_speed(),
            pattern: default_pattern(),
            save_path: default_save_path(),
            pattern_path: default_pattern_path(),
        }
    }
}

impl SimulationConfig {
    /// Read and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        if self.speed > 10 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !PatternLibrary::with_presets().contains(&self.pattern) {
            return Err(ConfigError::UnknownPattern(self.pattern.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.size, 40);
        assert_eq!(config.speed, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig = serde_json::from_str(r#"{"size": 60, "pattern": "pulsar"}"#).unwrap();
        assert_eq!(config.size, 60);
        assert_eq!(config.pattern, "pulsar");
        assert_eq!(config.density, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let bad = |edit: fn(&mut SimulationConfig)| {
            let mut config = SimulationConfig::default();
            edit(&mut config);
            config.validate()
        };
        assert!(matches!(bad(|c| c.size = 0), Err(ConfigError::InvalidSize)));
        assert!(matches!(bad(|c| c.density = 1.5), Err(ConfigError::InvalidDensity(_))));
        assert!(matches!(bad(|c| c.speed = 11), Err(ConfigError::InvalidSpeed(11))));
        assert!(matches!(bad(|c| c.pattern = "nope".into()), Err(ConfigError::UnknownPattern(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("torus_life_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"size": 20, "speed": 3}"#).unwrap();
        let config = SimulationConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.size, 20);
        assert_eq!(config.speed, 3);
        assert!(matches!(SimulationConfig::from_file(&path), Err(ConfigError::Io(_))));
    }
}
