//! Processing configuration
//!
//! Settings for turning a raw run log into temperatures, stored as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::datalog::{LoadOptions, DEFAULT_TIMESTAMP_COLUMN};
use crate::unit_conversion::TemperatureUnit;

/// Errors that can occur while reading or writing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Processing settings; every field is optional in the JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Header of the timestamp column
    pub timestamp_column: String,

    /// Column holding thermocouple voltages (raw or normalized name)
    pub voltage_column: Option<String>,

    /// Multiplier taking the voltage column to millivolts
    pub voltage_scale: f64,

    /// Explicit chrono format for timestamps
    pub timestamp_format: Option<String>,

    /// Unit for written temperatures
    pub unit: TemperatureUnit,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
            voltage_column: None,
            voltage_scale: 1.0,
            timestamp_format: None,
            unit: TemperatureUnit::Celsius,
        }
    }
}

impl ProcessingConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Log loading options for a given input file
    pub fn load_options(&self, input: &Path) -> LoadOptions {
        LoadOptions {
            timestamp_column: self.timestamp_column.clone(),
            timestamp_format: self.timestamp_format.clone(),
            ..LoadOptions::for_path(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: ProcessingConfig =
            serde_json::from_str(r#"{ "voltage_column": "V_TC (mV)" }"#).unwrap();
        assert_eq!(config.timestamp_column, "RealTimestamp");
        assert_eq!(config.voltage_column.as_deref(), Some("V_TC (mV)"));
        assert_eq!(config.voltage_scale, 1.0);
        assert_eq!(config.unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unit_is_lowercase_in_json() {
        let config: ProcessingConfig = serde_json::from_str(r#"{ "unit": "kelvin" }"#).unwrap();
        assert_eq!(config.unit, TemperatureUnit::Kelvin);
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shieldrun.json");

        let config = ProcessingConfig {
            voltage_column: Some("V_Wasp".to_string()),
            voltage_scale: 1000.0,
            unit: TemperatureUnit::Fahrenheit,
            ..ProcessingConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(ProcessingConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_options_follow_extension() {
        let config = ProcessingConfig {
            timestamp_column: "Time".to_string(),
            ..ProcessingConfig::default()
        };
        let options = config.load_options(Path::new("run.tsv"));
        assert_eq!(options.timestamp_column, "Time");
        assert_eq!(options.delimiter, b'\t');
    }

    #[test]
    fn test_missing_file() {
        let err = ProcessingConfig::load(Path::new("/nonexistent/shieldrun.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/shieldrun.json"));
    }
}
