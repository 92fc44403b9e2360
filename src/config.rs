// In: src/config.rs

//! The single source of truth for all encoding configuration.
//!
//! `CodecConfig` is created once at the application boundary (from a JSON file,
//! a JSON string, or `Default`) and passed by reference to the field-level
//! encoder. Decoding needs no configuration: every buffer describes itself.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::array_pipeline::strategy::Strategy;
use crate::bridge::fields::StructureField;
use crate::error::CodecError;
use crate::kernels::fixed_point;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// How the field-level encoder chooses a strategy for each field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// **Default:** the fixed per-field table used by the reference encoder.
    /// Output is byte-compatible with other writers of the format.
    #[default]
    DefaultTable,

    /// Trial-encode every applicable strategy and keep the smallest output.
    Smallest,
}

/// Settings for the empirical planner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PlannerSettings {
    /// The scale factor used for lossy float candidates.
    #[serde(default = "default_coordinate_factor")]
    pub float_factor: i32,

    /// If false, only the raw float pass-through is considered for float arrays.
    #[serde(default = "default_true")]
    pub allow_lossy: bool,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            float_factor: default_coordinate_factor(),
            allow_lossy: true,
        }
    }
}

/// A raw `(id, parameter)` pair, as it would appear in a header.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySpec {
    pub id: i32,
    #[serde(default)]
    pub parameter: i32,
}

impl StrategySpec {
    pub fn to_strategy(self) -> Result<Strategy, CodecError> {
        Strategy::from_id(self.id, self.parameter)
    }
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

/// The single, unified configuration for encoding a set of structure fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    #[serde(default)]
    pub selection: SelectionMode,

    /// Divisor for x/y/z coordinates (three decimal places by default).
    #[serde(default = "default_coordinate_factor")]
    pub coordinate_factor: i32,

    /// Divisor for B-factors.
    #[serde(default = "default_hundredths")]
    pub b_factor_factor: i32,

    /// Divisor for occupancies.
    #[serde(default = "default_hundredths")]
    pub occupancy_factor: i32,

    /// Record length for chain ids and chain names.
    #[serde(default = "default_chain_name_length")]
    pub chain_name_length: i32,

    #[serde(default)]
    pub planner: PlannerSettings,

    /// Per-field strategies that take precedence over both selection modes.
    #[serde(default)]
    pub overrides: BTreeMap<StructureField, StrategySpec>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            selection: SelectionMode::default(),
            coordinate_factor: default_coordinate_factor(),
            b_factor_factor: default_hundredths(),
            occupancy_factor: default_hundredths(),
            chain_name_length: default_chain_name_length(),
            planner: PlannerSettings::default(),
            overrides: BTreeMap::new(),
        }
    }
}

impl CodecConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks every factor, length and override.
    pub fn validate(&self) -> Result<(), CodecError> {
        fixed_point::validate_factor(self.coordinate_factor)?;
        fixed_point::validate_factor(self.b_factor_factor)?;
        fixed_point::validate_factor(self.occupancy_factor)?;
        fixed_point::validate_factor(self.planner.float_factor)?;
        if self.chain_name_length <= 0 {
            return Err(CodecError::InvalidParameter(format!(
                "chain_name_length must be positive, got {}",
                self.chain_name_length
            )));
        }
        for (field, spec) in &self.overrides {
            let strategy = spec
                .to_strategy()
                .map_err(|e| e.in_field(field.name()))?;
            if strategy.value_type() != field.value_type() {
                return Err(CodecError::TypeMismatch {
                    expected: field.value_type(),
                    actual: strategy.value_type(),
                }
                .in_field(field.name()));
            }
        }
        Ok(())
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

fn default_coordinate_factor() -> i32 {
    1000
}

fn default_hundredths() -> i32 {
    100
}

fn default_chain_name_length() -> i32 {
    4
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = CodecConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.coordinate_factor, 1000);
        assert_eq!(config.b_factor_factor, 100);
        assert_eq!(config.chain_name_length, 4);
        assert_eq!(config.selection, SelectionMode::DefaultTable);
        assert!(config.planner.allow_lossy);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "selection": "smallest",
            "coordinate_factor": 100,
            "planner": { "float_factor": 10, "allow_lossy": false },
            "overrides": { "b_factor_list": { "id": 1 } }
        }"#;
        let config = CodecConfig::from_json_str(json).unwrap();
        assert_eq!(config.selection, SelectionMode::Smallest);
        assert_eq!(config.coordinate_factor, 100);
        assert_eq!(config.planner.float_factor, 10);
        assert!(!config.planner.allow_lossy);
        assert_eq!(
            config.overrides.get(&StructureField::BFactorList),
            Some(&StrategySpec { id: 1, parameter: 0 })
        );
    }

    #[test]
    fn test_invalid_factor_is_rejected() {
        let result = CodecConfig::from_json_str(r#"{ "coordinate_factor": 0 }"#);
        assert!(matches!(result, Err(CodecError::InvalidParameter(_))));
    }

    #[test]
    fn test_override_with_unknown_id_names_the_field() {
        let result = CodecConfig::from_json_str(r#"{ "overrides": { "atom_id_list": { "id": 77 } } }"#);
        match result {
            Err(CodecError::Field { field, source }) => {
                assert_eq!(field, "atom_id_list");
                assert!(matches!(*source, CodecError::UnknownStrategy(77)));
            }
            other => panic!("Expected a field error, got {:?}", other),
        }
    }

    #[test]
    fn test_override_with_wrong_type_is_rejected() {
        let result =
            CodecConfig::from_json_str(r#"{ "overrides": { "x_coord_list": { "id": 8 } } }"#);
        assert!(matches!(result, Err(CodecError::Field { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CodecConfig::from_json_str("{ not json"),
            Err(CodecError::SerdeJson(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CodecConfig::from_json_file("/nonexistent/codec.json"),
            Err(CodecError::Io(_))
        ));
    }
}
