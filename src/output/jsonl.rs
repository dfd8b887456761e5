#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All error records (sorted by record index, then field)
//! 2. One status record

use crate::rules::RuleRegistry;
use crate::validation::ValidationReport;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats validation reports and registry listings as JSON Lines.
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format one report per input record as JSONL
    pub fn format_reports(&self, reports: &[ValidationReport]) -> String {
        let mut output = String::new();

        // Reports are indexed by record, and each report's errors are already in field order
        for (index, report) in reports.iter().enumerate() {
            for (field, err) in &report.errors {
                push_line(
                    &mut output,
                    &ErrorRecord {
                        record_type: "error",
                        record: index,
                        field: field.as_str(),
                        code: err.code(),
                        message: err.to_string(),
                    },
                );
            }
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        push_line(
            &mut output,
            &StatusRecord {
                record_type: "status",
                passed: invalid == 0,
                records: reports.len(),
                invalid_records: invalid,
                total_errors: reports.iter().map(ValidationReport::len).sum(),
            },
        );

        output
    }

    /// Format the configured fields and their rules as JSONL
    pub fn format_registry(&self, registry: &RuleRegistry) -> String {
        let mut output = String::new();

        for (field, rules) in registry.iter_fields() {
            push_line(
                &mut output,
                &FieldRecord {
                    record_type: "field",
                    field: field.as_str(),
                    rules: rules
                        .iter()
                        .map(|rule| RuleEntry {
                            kind: rule.kind().to_string(),
                            message: rule.message(),
                        })
                        .collect(),
                },
            );
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Error record for JSONL output
#[derive(Debug, Serialize)]
struct ErrorRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    record: usize,
    field: &'a str,
    code: &'static str,
    message: String,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    records: usize,
    invalid_records: usize,
    total_errors: usize,
}

/// Field listing record for JSONL output
#[derive(Debug, Serialize)]
struct FieldRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    field: &'a str,
    rules: Vec<RuleEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct RuleEntry<'a> {
    kind: String,
    message: &'a str,
}
