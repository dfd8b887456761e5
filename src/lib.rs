#![forbid(unsafe_code)]

//! rulecheck: composable value-validation rules
//!
//! Each rule inspects a single `Value` and either accepts it or returns a
//! `RuleError`. `NotEmptyRule` checks presence; `RangeRule` checks that a
//! number lies within inclusive bounds with a small floating-point tolerance.
//! Rules can also be declared per field in a `rulecheck.toml` file and run
//! against JSON records from the `rulecheck` CLI.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;
pub mod validation;
pub mod value;

// Re-export error types for convenient access
pub use error::{ConfigError, RuleError, RulecheckError};

// Re-export the rule API for convenient access
pub use rules::{Bound, NOT_EMPTY, NotEmptyRule, RangeRule, Rule, RuleRegistry, range};
pub use types::{FieldName, RuleKind};
pub use validation::{ValidationReport, validate, validate_record};
pub use value::{Number, Value};
