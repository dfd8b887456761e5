#![forbid(unsafe_code)]

//! Core domain types for rulecheck

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of rule rulecheck knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    NotEmpty,
    Range,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::NotEmpty => write!(f, "not_empty"),
            RuleKind::Range => write!(f, "range"),
        }
    }
}

/// A validated field name
///
/// Field names must be non-empty and contain only ASCII letters, digits,
/// hyphens, underscores and dots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Creates a new FieldName, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return None;
        }
        Some(FieldName(name))
    }

    /// Returns the field name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FieldName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldName::new(value.clone()).ok_or_else(|| format!("Invalid field name '{}'", value))
    }
}

impl From<FieldName> for String {
    fn from(field: FieldName) -> Self {
        field.0
    }
}
