//! Configuration file parsing and validation

pub mod rulecheck_toml;

pub use rulecheck_toml::{
    ColorOption, Config, FieldConfig, OutputConfig, OutputFormat, RulecheckMeta,
};
