#![forbid(unsafe_code)]

//! Numeric range rule
//!
//! `RangeRule` checks that a number lies within an inclusive `[min, max]`
//! interval. Every native integer and float width is widened to `f64`, and a
//! value within `ACCURACY` of a bound counts as on the bound.
//!
//! Absent and empty values pass: presence is the job of `NotEmptyRule`.

use crate::error::RuleError;
use crate::rules::Rule;
use crate::types::RuleKind;
use crate::value::Value;
use std::fmt;

/// Tolerance for bound comparisons
pub const ACCURACY: f64 = 0.0000001;

/// One side of a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// No limit on this side
    Unbounded,
    /// Values may reach but not pass this limit
    Inclusive(f64),
}

impl Bound {
    /// Reads a limit where `0` means "no bound"
    pub fn from_sentinel(limit: f64) -> Self {
        if limit == 0.0 {
            Bound::Unbounded
        } else {
            Bound::Inclusive(limit)
        }
    }

    /// Returns the limit, if any
    pub fn limit(self) -> Option<f64> {
        match self {
            Bound::Unbounded => None,
            Bound::Inclusive(limit) => Some(limit),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Unbounded => write!(f, "unbounded"),
            Bound::Inclusive(limit) => write!(f, "{}", limit),
        }
    }
}

/// Builds a range rule where a bound of `0` leaves that side open
///
/// Use `RangeRule::new` with explicit `Bound`s when zero is a real limit.
pub fn range(min: f64, max: f64) -> RangeRule {
    RangeRule::new(Bound::from_sentinel(min), Bound::from_sentinel(max))
}

/// A rule that checks a number lies within inclusive bounds
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    min: Bound,
    max: Bound,
    message: String,
}

impl RangeRule {
    /// Creates a rule with explicit bounds and a message derived from them
    pub fn new(min: Bound, max: Bound) -> Self {
        let message = match (min.limit(), max.limit()) {
            (None, Some(_)) => format!("must be no more than {}", max),
            (Some(_), None) => format!("must be no less than {}", min),
            (Some(_), Some(_)) => format!("must be between {} and {}", min, max),
            (None, None) => "must be empty".to_string(),
        };
        RangeRule { min, max, message }
    }

    /// Lower bound
    pub fn min(&self) -> Bound {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> Bound {
        self.max
    }
}

impl Rule for RangeRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Range
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn validate(&self, value: &Value) -> Result<(), RuleError> {
        if value.is_empty() {
            return Ok(());
        }
        let Some(concrete) = value.indirect() else {
            return Ok(());
        };

        let f = match concrete {
            Value::Number(number) => number.to_f64(),
            other => {
                return Err(RuleError::InvalidType {
                    value: other.clone(),
                });
            }
        };

        if let Bound::Inclusive(min) = self.min
            && f.min(min) == f
            && (f - min).abs() > ACCURACY
        {
            return Err(RuleError::BelowMinimum {
                min,
                value: concrete.clone(),
            });
        }

        if let Bound::Inclusive(max) = self.max
            && f.max(max) == f
            && (f - max).abs() > ACCURACY
        {
            return Err(RuleError::AboveMaximum {
                max,
                value: concrete.clone(),
            });
        }

        Ok(())
    }

    fn with_message(&self, message: impl Into<String>) -> Self {
        RangeRule {
            min: self.min,
            max: self.max,
            message: message.into(),
        }
    }
}
