//! Unit alias table
//!
//! Spellings accepted for each unit when parsing text. The table ships in
//! `units.toml` at the crate root and is embedded at compile time.

use std::collections::HashMap;
use lazy_static::lazy_static;
use log::warn;

use crate::errors::{GeoError, GeoResult};
use super::unit::DistanceUnit;

lazy_static! {
    // Parse the embedded table on first use
    pub(crate) static ref UNIT_DEFINITIONS: UnitDefinitions = {
        let content = include_str!("../../units.toml");
        UnitDefinitions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse unit definitions, using built-in abbreviations: {}", e);
            UnitDefinitions::default()
        })
    };
}

/// Maps lowercase unit spellings to units
#[derive(Debug)]
pub struct UnitDefinitions {
    aliases: HashMap<String, DistanceUnit>,
}

impl Default for UnitDefinitions {
    /// Abbreviations and canonical names only
    fn default() -> Self {
        let mut aliases = HashMap::new();
        for unit in DistanceUnit::ALL {
            aliases.insert(unit.abbreviation().to_string(), unit);
            aliases.insert(unit.name().to_string(), unit);
        }
        UnitDefinitions { aliases }
    }
}

impl UnitDefinitions {
    /// Parse unit definitions from a TOML string
    ///
    /// Every table under `[units]` must be named after a unit's canonical
    /// name. Built-in abbreviations and names are always present.
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Table = content
            .parse()
            .map_err(|e| GeoError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let units = toml_value
            .get("units")
            .and_then(|v| v.as_table())
            .ok_or_else(|| GeoError::ConfigError("Missing [units] table".to_string()))?;

        let mut defs = UnitDefinitions::default();

        for (name, entry) in units {
            let unit = DistanceUnit::ALL
                .into_iter()
                .find(|u| u.name() == name.as_str())
                .ok_or_else(|| GeoError::UnknownUnit(name.clone()))?;

            if let Some(abbreviation) = entry.get("abbreviation").and_then(|v| v.as_str()) {
                defs.insert(abbreviation, unit);
            }

            if let Some(list) = entry.get("aliases").and_then(|v| v.as_array()) {
                for alias in list.iter().filter_map(|v| v.as_str()) {
                    defs.insert(alias, unit);
                }
            }
        }

        Ok(defs)
    }

    fn insert(&mut self, alias: &str, unit: DistanceUnit) {
        self.aliases.insert(alias.trim().to_lowercase(), unit);
    }

    /// Look a spelling up, ignoring case and surrounding whitespace
    pub fn lookup(&self, alias: &str) -> Option<DistanceUnit> {
        self.aliases.get(&alias.trim().to_lowercase()).copied()
    }
}
