#![forbid(unsafe_code)]

//! Rule definitions as data
//!
//! A `RuleDefinition` is the serde form of a rule, as written in
//! `rulecheck.toml`:
//!
//! ```toml
//! rules = [
//!     { kind = "not_empty", message = "name is required" },
//!     { kind = "range", min = 18, max = 130 },
//!     { kind = "range", min = 0, max = 10, zero_is_bound = true },
//! ]
//! ```

use crate::rules::{Bound, NotEmptyRule, RangeRule, Rule};
use crate::types::RuleKind;
use serde::{Deserialize, Serialize};

/// Serializable description of a single rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleDefinition {
    /// Builds a `NotEmptyRule`
    NotEmpty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Builds a `RangeRule`
    ///
    /// Without `zero_is_bound`, a limit of `0` leaves that side open. With it,
    /// every given limit is inclusive and only an omitted side is open.
    ///
    /// `message` replaces the rule's description (shown by `list`). Bound
    /// failures always report the limit and the offending value.
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default)]
        zero_is_bound: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleDefinition {
    /// Returns the kind of rule this definition builds
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleDefinition::NotEmpty { .. } => RuleKind::NotEmpty,
            RuleDefinition::Range { .. } => RuleKind::Range,
        }
    }

    /// Checks the definition is internally consistent
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self) -> Result<(), String> {
        let RuleDefinition::Range { min, max, .. } = self else {
            return Ok(());
        };

        for limit in [min, max].into_iter().flatten() {
            if !limit.is_finite() {
                return Err(format!("range bound must be finite, got {}", limit));
            }
        }

        let (lo, hi) = self.range_bounds();
        if let (Some(lo), Some(hi)) = (lo.limit(), hi.limit())
            && lo > hi
        {
            return Err(format!("range min {} is greater than max {}", lo, hi));
        }

        Ok(())
    }

    /// Builds the rule this definition describes
    pub fn build(&self) -> Box<dyn Rule> {
        match self {
            RuleDefinition::NotEmpty { message } => {
                let rule = NotEmptyRule::new();
                match message {
                    Some(message) => Box::new(rule.with_message(message.as_str())),
                    None => Box::new(rule),
                }
            }
            RuleDefinition::Range { message, .. } => {
                let (min, max) = self.range_bounds();
                let rule = RangeRule::new(min, max);
                match message {
                    Some(message) => Box::new(rule.with_message(message.as_str())),
                    None => Box::new(rule),
                }
            }
        }
    }

    fn range_bounds(&self) -> (Bound, Bound) {
        match self {
            RuleDefinition::Range {
                min,
                max,
                zero_is_bound,
                ..
            } => {
                let to_bound = |limit: Option<f64>| match limit {
                    None => Bound::Unbounded,
                    Some(limit) if *zero_is_bound => Bound::Inclusive(limit),
                    Some(limit) => Bound::from_sentinel(limit),
                };
                (to_bound(*min), to_bound(*max))
            }
            RuleDefinition::NotEmpty { .. } => (Bound::Unbounded, Bound::Unbounded),
        }
    }
}
