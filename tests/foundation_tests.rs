//! Integration tests for rulecheck foundation types
//!
//! This module contains integration tests for the error types and domain types
//! defined in the rulecheck library.

use rulecheck::error::{ConfigError, RuleError, RulecheckError};
use rulecheck::types::{FieldName, RuleKind};
use rulecheck::value::{Number, Value};
use std::path::PathBuf;

// Error integration tests

#[test]
fn test_error_hierarchy_config_to_rulecheck() {
    let config_err = ConfigError::Validation("bad".to_string());
    let err: RulecheckError = config_err.into();

    match err {
        RulecheckError::Config(_) => {} // Expected
        _ => panic!("Expected RulecheckError::Config variant"),
    }
}

#[test]
fn test_error_hierarchy_io_to_rulecheck() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RulecheckError = io_err.into();

    match err {
        RulecheckError::Io(_) => {} // Expected
        _ => panic!("Expected RulecheckError::Io variant"),
    }
}

#[test]
fn test_input_error_contains_file_path() {
    let err = RulecheckError::Input {
        file: PathBuf::from("/path/to/records.json"),
        message: "expected value".to_string(),
    };

    let err_string = err.to_string();
    assert!(err_string.contains("/path/to/records.json"));
    assert!(err_string.contains("expected value"));
}

#[test]
fn test_rule_error_display() {
    let empty = RuleError::Empty {
        message: "is required".to_string(),
    };
    assert_eq!(empty.to_string(), "is required");

    let below = RuleError::BelowMinimum {
        min: 1.5,
        value: Value::from(1),
    };
    assert_eq!(below.to_string(), "smaller than 1.500000: 1");

    let above = RuleError::AboveMaximum {
        max: 10.0,
        value: Value::Number(Number::F64(10.25)),
    };
    assert_eq!(above.to_string(), "bigger than 10.000000: 10.25");

    let invalid = RuleError::InvalidType {
        value: Value::from(vec!["a", "b"]),
    };
    assert_eq!(invalid.to_string(), "invalid value type: [a, b]");
}

#[test]
fn test_rule_error_codes() {
    let errors = [
        (RuleError::Empty { message: String::new() }, "empty"),
        (
            RuleError::BelowMinimum {
                min: 0.0,
                value: Value::from(-1),
            },
            "below_minimum",
        ),
        (
            RuleError::AboveMaximum {
                max: 0.0,
                value: Value::from(1),
            },
            "above_maximum",
        ),
        (
            RuleError::InvalidType {
                value: Value::from(true),
            },
            "invalid_type",
        ),
    ];

    for (err, code) in errors {
        assert_eq!(err.code(), code);
    }
}

#[test]
fn test_rule_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<RuleError>();
    assert_error::<ConfigError>();
    assert_error::<RulecheckError>();
}

// Domain type integration tests

#[test]
fn test_field_name_serde_roundtrip() {
    let name = FieldName::new("user.age").unwrap();
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"user.age\"");

    let parsed: FieldName = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, name);

    let invalid: Result<FieldName, _> = serde_json::from_str("\"user age\"");
    assert!(invalid.is_err());
}

#[test]
fn test_rule_kind_display() {
    assert_eq!(RuleKind::NotEmpty.to_string(), "not_empty");
    assert_eq!(RuleKind::Range.to_string(), "range");
}

#[test]
fn test_value_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
    assert_send_sync::<RuleError>();
}
