//! Runtime settings
//!
//! Settings come from an optional TOML file. Every key is optional; a
//! missing default file just means defaults.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use log::{debug, LevelFilter};

use crate::errors::{GeoError, GeoResult};
use crate::units::DistanceUnit;

/// File read when no path is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "geodist.toml";

/// Settings shared by all commands
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Log file path; `None` logs to stderr only
    pub log_file: Option<String>,
    /// Most verbose level logged
    pub log_level: LevelFilter,
    /// Normalise results with smart unit conversion
    pub smart_units: bool,
    /// Unit assumed for bare numbers where a distance is expected
    pub default_unit: DistanceUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_file: None,
            log_level: LevelFilter::Warn,
            smart_units: true,
            default_unit: DistanceUnit::Miles,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Table = content
            .parse()
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut settings = Settings::default();

        if let Some(value) = toml_value.get("log_file") {
            let path = value.as_str()
                .ok_or_else(|| GeoError::ConfigError("log_file must be a string".to_string()))?;
            settings.log_file = Some(path.to_string());
        }

        if let Some(value) = toml_value.get("log_level") {
            let level = value.as_str()
                .ok_or_else(|| GeoError::ConfigError("log_level must be a string".to_string()))?;
            settings.log_level = LevelFilter::from_str(level)
                .map_err(|_| GeoError::ConfigError(format!("Unknown log level '{}'", level)))?;
        }

        if let Some(value) = toml_value.get("smart_units") {
            settings.smart_units = value.as_bool()
                .ok_or_else(|| GeoError::ConfigError("smart_units must be true or false".to_string()))?;
        }

        if let Some(value) = toml_value.get("default_unit") {
            let unit = value.as_str()
                .ok_or_else(|| GeoError::ConfigError("default_unit must be a string".to_string()))?;
            settings.default_unit = unit.parse::<DistanceUnit>()
                .map_err(|e| GeoError::ConfigError(format!("default_unit: {}", e)))?;
        }

        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load settings for a run
    ///
    /// An explicit path must exist. Without one, `geodist.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&str>) -> GeoResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
                Ok(Settings::default())
            }
        }
    }
}
