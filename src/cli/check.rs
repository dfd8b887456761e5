//! Check command implementation
//!
//! This module implements the `rulecheck check` command, which:
//! - Loads the rule file and builds the rule registry
//! - Reads records from a JSON input file
//! - Validates every record
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_INVALID, EXIT_SUCCESS, exit_code_for, load_config, read_records, resolve_color,
    resolve_format,
};
use crate::error::RulecheckError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleRegistry;
use crate::validation::{ValidationReport, validate_record};
use crate::value::Value;
use std::io::Write;
use std::path::Path;
use termcolor::StandardStream;
use tracing::{info, warn};

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (every record is valid)
/// - 1: Invalid (at least one record failed a rule)
/// - 2: Error (I/O or input error)
/// - 3: Parse error (invalid rule file)
pub fn run_check(
    config_path: &Path,
    input: &Path,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> i32 {
    match run_check_inner(config_path, input, format, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_INVALID,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of check command
///
/// Returns whether every record passed.
fn run_check_inner(
    config_path: &Path,
    input: &Path,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> Result<bool, RulecheckError> {
    let config = load_config(config_path)?;
    let registry = RuleRegistry::from_config(&config)?;
    let records = read_records(input)?;

    if records.is_empty() {
        warn!(input = %input.display(), "input holds no records");
    }

    let reports = check_records(&records, &registry);
    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    info!(
        records = reports.len(),
        invalid,
        fields = registry.len(),
        "validation finished"
    );

    match resolve_format(format, &config) {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(resolve_color(color, &config));
            HumanFormatter::new().write_reports(&mut stdout, &reports)?;
        }
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format_reports(&reports);
            std::io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(invalid == 0)
}

/// Validate each record against the registry, preserving input order
pub fn check_records(records: &[Value], registry: &RuleRegistry) -> Vec<ValidationReport> {
    records
        .iter()
        .map(|record| validate_record(record, registry))
        .collect()
}
