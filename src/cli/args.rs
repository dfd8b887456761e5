//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for rulecheck commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<crate::config::OutputFormat> for OutputFormat {
    fn from(format: crate::config::OutputFormat) -> Self {
        match format {
            crate::config::OutputFormat::Human => OutputFormat::Human,
            crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<crate::config::ColorOption> for ColorChoice {
    fn from(color: crate::config::ColorOption) -> Self {
        match color {
            crate::config::ColorOption::Auto => ColorChoice::Auto,
            crate::config::ColorOption::Always => ColorChoice::Always,
            crate::config::ColorOption::Never => ColorChoice::Never,
        }
    }
}

/// rulecheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "rulecheck")]
#[command(about = "Validate JSON records against declarative field rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Rule file to load
    #[arg(short, long, global = true, default_value = "rulecheck.toml")]
    pub config: PathBuf,

    /// Output coloring (overrides the rule file's [output] color)
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,
}

/// Available rulecheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the records in a JSON file
    Check {
        /// JSON file holding one object or an array of objects
        input: PathBuf,

        /// Output format (overrides the rule file's [output] format)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List configured fields and their rules
    List {
        /// Output format (overrides the rule file's [output] format)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}
