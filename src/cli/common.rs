//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading the rule file,
//! reading input records and resolving output settings.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::config::Config;
use crate::error::{ConfigError, RulecheckError};
use crate::value::Value;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load the rule file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file does not exist or cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if it is invalid.
pub(crate) fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }

    let config = Config::load(path)?;
    debug!(path = %path.display(), fields = config.fields.len(), "loaded rule file");
    Ok(config)
}

/// Read the records to validate from a JSON file
///
/// A top-level array yields one record per element; any other document is a
/// single record.
///
/// # Errors
///
/// Returns `RulecheckError::Io` if the file cannot be read and
/// `RulecheckError::Input` if it is not valid JSON.
pub(crate) fn read_records(path: &Path) -> Result<Vec<Value>, RulecheckError> {
    let content = fs::read_to_string(path)?;
    let document: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| RulecheckError::Input {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let records = match document {
        serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
        other => vec![Value::from(other)],
    };
    debug!(path = %path.display(), records = records.len(), "read input");
    Ok(records)
}

/// Pick the output format: command line first, then the rule file
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output.format.into())
}

/// Pick the color mode: command line first, then the rule file
///
/// `Auto` only colors when stdout is a terminal.
pub(crate) fn resolve_color(flag: Option<ColorChoice>, config: &Config) -> termcolor::ColorChoice {
    match flag.unwrap_or_else(|| config.output.color.into()) {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorChoice::Auto => termcolor::ColorChoice::Never,
    }
}

/// Map an error to the exit code the CLI reports for it
pub(crate) fn exit_code_for(err: &RulecheckError) -> i32 {
    match err {
        RulecheckError::Config(ConfigError::Parse(_) | ConfigError::Validation(_)) => {
            EXIT_PARSE_ERROR
        }
        _ => EXIT_ERROR,
    }
}
