#![forbid(unsafe_code)]

//! Presence rule
//!
//! `NotEmptyRule` rejects values that are absent (a nil reference at any
//! depth) or that have no content (zero-length strings, sequences and
//! mappings). Numbers, booleans and records always pass.

use crate::error::RuleError;
use crate::rules::Rule;
use crate::types::RuleKind;
use crate::value::Value;
use std::sync::LazyLock;

/// Default failure message for `NotEmptyRule`
pub const DEFAULT_NOT_EMPTY_MESSAGE: &str = "must not be empty";

/// Shared default instance
pub static NOT_EMPTY: LazyLock<NotEmptyRule> = LazyLock::new(NotEmptyRule::new);

/// A rule that checks a value is present and has content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEmptyRule {
    message: String,
}

impl NotEmptyRule {
    /// Creates a rule with the default message
    pub fn new() -> Self {
        NotEmptyRule {
            message: DEFAULT_NOT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl Default for NotEmptyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NotEmptyRule {
    fn kind(&self) -> RuleKind {
        RuleKind::NotEmpty
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        if value.is_empty() {
            return Err(RuleError::Empty {
                message: self.message.clone(),
            });
        }
        Ok(())
    }

    fn with_message(&self, message: impl Into<String>) -> Self {
        NotEmptyRule {
            message: message.into(),
        }
    }
}
