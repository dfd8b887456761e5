#![forbid(unsafe_code)]

//! Core Rule trait

use crate::error::RuleError;
use crate::types::RuleKind;
use crate::value::Value;
use std::fmt;

/// Trait that all rules must implement
///
/// A rule inspects a single value and either accepts it or returns a
/// `RuleError` describing why not. Rules hold no mutable state, so the trait
/// is `Send + Sync` and one instance can validate from many threads.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Returns the kind of this rule
    fn kind(&self) -> RuleKind;

    /// Returns the configured human-readable failure message
    fn message(&self) -> &str;

    /// Checks the value
    ///
    /// Returns `Ok(())` when the value satisfies the rule.
    fn validate(&self, value: &Value) -> Result<(), RuleError>;

    /// Returns a copy of this rule carrying a custom failure message
    ///
    /// The receiver is left untouched.
    fn with_message(&self, message: impl Into<String>) -> Self
    where
        Self: Sized;
}
