//! Error types for rulecheck
//!
//! Rule failures are plain data (`RuleError`) returned from `Rule::validate`.
//! Loading rule files and inputs has its own hierarchy rooted at
//! `RulecheckError`.

use crate::value::Value;
use std::path::PathBuf;

/// A rule rejected a value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// The value is absent or has no content
    #[error("{message}")]
    Empty { message: String },

    /// The value lies below the lower bound by more than the tolerance
    #[error("smaller than {min:.6}: {value}")]
    BelowMinimum { min: f64, value: Value },

    /// The value lies above the upper bound by more than the tolerance
    #[error("bigger than {max:.6}: {value}")]
    AboveMaximum { max: f64, value: Value },

    /// The value is not a number
    #[error("invalid value type: {value}")]
    InvalidType { value: Value },
}

impl RuleError {
    /// Stable machine-readable name of the failure
    pub fn code(&self) -> &'static str {
        match self {
            RuleError::Empty { .. } => "empty",
            RuleError::BelowMinimum { .. } => "below_minimum",
            RuleError::AboveMaximum { .. } => "above_maximum",
            RuleError::InvalidType { .. } => "invalid_type",
        }
    }
}

/// Rule file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The rule file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule file is not valid TOML or does not match the schema
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// The rule file parsed but is semantically invalid
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level error type for rulecheck
#[derive(Debug, thiserror::Error)]
pub enum RulecheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input document could not be decoded
    #[error("Invalid input in {file}: {message}")]
    Input { file: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
