//! Parsing and validation for rulecheck.toml rule files

use crate::error::ConfigError;
use crate::rules::RuleDefinition;
use crate::types::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for rulecheck.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// rulecheck metadata
    pub rulecheck: RulecheckMeta,

    /// Rules declared per field
    #[serde(default)]
    pub fields: BTreeMap<FieldName, FieldConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rulecheck.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.rulecheck.version
            )));
        }

        if self.fields.is_empty() {
            return Err(ConfigError::Validation(
                "No fields configured. Add a [fields.<name>] table to rulecheck.toml.".to_string(),
            ));
        }

        for (field, field_config) in &self.fields {
            if field_config.rules.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Field '{}' declares no rules",
                    field
                )));
            }

            for definition in &field_config.rules {
                definition.check().map_err(|message| {
                    ConfigError::Validation(format!(
                        "Invalid {} rule for field '{}': {}",
                        definition.kind(),
                        field,
                        message
                    ))
                })?;
            }
        }

        Ok(())
    }
}

/// rulecheck metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulecheckMeta {
    /// Configuration version (must be "1")
    pub version: String,
}

/// Rules for a single field
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Rules, evaluated in order; the first failure is reported
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
