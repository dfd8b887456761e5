#![forbid(unsafe_code)]

//! Rule registry for per-field rules
//!
//! The RuleRegistry holds the ordered list of rules declared for each field.
//! Fields are kept sorted by name so reports come out in a stable order.

use crate::config::Config;
use crate::error::ConfigError;
use crate::rules::Rule;
use crate::types::FieldName;
use std::collections::BTreeMap;

/// Registry of rules keyed by field
#[derive(Debug, Default)]
pub struct RuleRegistry {
    fields: BTreeMap<FieldName, Vec<Box<dyn Rule>>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Build a registry from a parsed configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a rule definition is inconsistent.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut registry = Self::new();

        for (field, field_config) in &config.fields {
            for definition in &field_config.rules {
                definition.check().map_err(|message| {
                    ConfigError::Validation(format!(
                        "Invalid {} rule for field '{}': {}",
                        definition.kind(),
                        field,
                        message
                    ))
                })?;
                registry.add_rule(field.clone(), definition.build());
            }
        }

        Ok(registry)
    }

    /// Append a rule to a field's list
    ///
    /// Rules for a field run in the order they were added.
    pub fn add_rule(&mut self, field: FieldName, rule: Box<dyn Rule>) {
        self.fields.entry(field).or_default().push(rule);
    }

    /// Get the rules declared for a field
    ///
    /// Returns an empty slice for unknown fields.
    pub fn rules_for(&self, field: &FieldName) -> &[Box<dyn Rule>] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over fields and their rules in field order
    pub fn iter_fields(&self) -> impl Iterator<Item = (&FieldName, &[Box<dyn Rule>])> {
        self.fields
            .iter()
            .map(|(field, rules)| (field, rules.as_slice()))
    }

    /// Get the number of fields with rules
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
