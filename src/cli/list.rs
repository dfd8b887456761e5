//! List command implementation
//!
//! This module implements the `rulecheck list` command, which prints every
//! configured field with its rules in evaluation order.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_SUCCESS, exit_code_for, load_config, resolve_color, resolve_format};
use crate::error::RulecheckError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleRegistry;
use std::io::Write;
use std::path::Path;
use termcolor::StandardStream;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid rule file)
pub fn run_list(config_path: &Path, format: Option<OutputFormat>, color: Option<ColorChoice>) -> i32 {
    match run_list_inner(config_path, format, color) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_list_inner(
    config_path: &Path,
    format: Option<OutputFormat>,
    color: Option<ColorChoice>,
) -> Result<(), RulecheckError> {
    let config = load_config(config_path)?;
    let registry = RuleRegistry::from_config(&config)?;

    match resolve_format(format, &config) {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(resolve_color(color, &config));
            HumanFormatter::new().write_registry(&mut stdout, &registry)?;
        }
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format_registry(&registry);
            std::io::stdout().write_all(output.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rulecheck.toml");
        fs::write(
            &path,
            r#"
[rulecheck]
version = "1"

[fields.name]
rules = [{ kind = "not_empty" }]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let registry = RuleRegistry::from_config(&config).unwrap();
        let output = JsonlFormatter::new().format_registry(&registry);
        assert_eq!(
            output,
            "{\"type\":\"field\",\"field\":\"name\",\"rules\":[{\"kind\":\"not_empty\",\"message\":\"must not be empty\"}]}\n"
        );
    }

    #[test]
    fn test_list_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rulecheck.toml");
        assert_eq!(run_list(&path, None, None), EXIT_ERROR);
    }

    #[test]
    fn test_list_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rulecheck.toml");
        fs::write(&path, "[rulecheck]\nversion = \"9\"\n").unwrap();
        assert_eq!(run_list(&path, None, None), EXIT_PARSE_ERROR);
    }
}
