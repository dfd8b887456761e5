#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! Writes one line per failing field, grouped by record, followed by a
//! summary line. Colors go through `termcolor` so they can be switched off.

use crate::rules::RuleRegistry;
use crate::validation::ValidationReport;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable output formatter
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write one report per input record
    pub fn write_reports<W: WriteColor>(
        &self,
        out: &mut W,
        reports: &[ValidationReport],
    ) -> io::Result<()> {
        for (index, report) in reports.iter().enumerate() {
            if report.is_valid() {
                continue;
            }

            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "record {}:", index)?;
            out.reset()?;

            for (field, err) in &report.errors {
                write!(out, "  ")?;
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "{}", field)?;
                out.reset()?;
                writeln!(out, ": {}", err)?;
            }
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        if invalid == 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "PASS")?;
            out.reset()?;
            writeln!(out, ": {} record(s) valid", reports.len())?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "FAIL")?;
            out.reset()?;
            writeln!(
                out,
                ": {} of {} record(s) invalid",
                invalid,
                reports.len()
            )?;
        }

        Ok(())
    }

    /// Write the configured fields and their rules
    pub fn write_registry<W: WriteColor>(
        &self,
        out: &mut W,
        registry: &RuleRegistry,
    ) -> io::Result<()> {
        for (field, rules) in registry.iter_fields() {
            out.set_color(ColorSpec::new().set_bold(true))?;
            writeln!(out, "{}", field)?;
            out.reset()?;
            for rule in rules {
                writeln!(out, "  {:<10} {}", rule.kind().to_string(), rule.message())?;
            }
        }
        Ok(())
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::rules::{NotEmptyRule, range};
    use crate::types::FieldName;
    use crate::value::Value;
    use termcolor::Buffer;

    fn render_reports(reports: &[ValidationReport]) -> String {
        let mut buffer = Buffer::no_color();
        HumanFormatter::new()
            .write_reports(&mut buffer, reports)
            .unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_all_valid() {
        let output = render_reports(&[ValidationReport::default()]);
        assert_eq!(output, "PASS: 1 record(s) valid\n");
    }

    #[test]
    fn test_failures_grouped_by_record() {
        let mut failing = ValidationReport::default();
        failing.errors.insert(
            FieldName::new("score").unwrap(),
            RuleError::InvalidType {
                value: Value::from("high"),
            },
        );

        let output = render_reports(&[ValidationReport::default(), failing]);
        assert_eq!(
            output,
            "record 1:\n  score: invalid value type: high\nFAIL: 1 of 2 record(s) invalid\n"
        );
    }

    #[test]
    fn test_write_registry() {
        let mut registry = RuleRegistry::new();
        registry.add_rule(FieldName::new("name").unwrap(), Box::new(NotEmptyRule::new()));
        registry.add_rule(FieldName::new("age").unwrap(), Box::new(range(0.0, 99.0)));

        let mut buffer = Buffer::no_color();
        HumanFormatter::new()
            .write_registry(&mut buffer, &registry)
            .unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();

        assert_eq!(
            output,
            "age\n  range      must be no more than 99\nname\n  not_empty  must not be empty\n"
        );
    }
}
