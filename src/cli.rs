//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub(crate) mod common;
pub mod list;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
