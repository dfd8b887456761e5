#![forbid(unsafe_code)]

//! Running rules against values and records
//!
//! `validate` runs a list of rules against one value and stops at the first
//! failure. `validate_record` does the same for every field in a
//! `RuleRegistry` and collects one error per failing field.

use crate::error::RuleError;
use crate::rules::{Rule, RuleRegistry};
use crate::types::FieldName;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// Run rules in order against a value
///
/// Returns the first failure, or `Ok(())` if every rule accepts the value.
pub fn validate(value: &Value, rules: &[&dyn Rule]) -> Result<(), RuleError> {
    for rule in rules {
        if let Err(err) = rule.validate(value) {
            debug!(kind = %rule.kind(), value_kind = value.kind(), error = %err, "rule rejected value");
            return Err(err);
        }
    }
    Ok(())
}

/// Run every registered field's rules against a record
///
/// Fields missing from the record are validated as absent values. A value
/// that is not a record or mapping has no fields, so every field is absent.
pub fn validate_record(record: &Value, registry: &RuleRegistry) -> ValidationReport {
    let absent = Value::null();
    let mut report = ValidationReport::default();

    for (field, rules) in registry.iter_fields() {
        let value = record.field(field.as_str()).unwrap_or(&absent);
        let rules: Vec<&dyn Rule> = rules.iter().map(|rule| rule.as_ref() as &dyn Rule).collect();

        trace!(field = %field, rules = rules.len(), "validating field");
        if let Err(err) = validate(value, &rules) {
            report.errors.insert(field.clone(), err);
        }
    }

    report
}

/// Outcome of validating one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// First failure per field, in field order
    pub errors: BTreeMap<FieldName, RuleError>,
}

impl ValidationReport {
    /// Returns true when no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure for a field, if it failed
    pub fn error_for(&self, field: &FieldName) -> Option<&RuleError> {
        self.errors.get(field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return Ok(());
        }
        for (i, (field, err)) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, err)?;
        }
        write!(f, ".")
    }
}
