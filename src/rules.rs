#![forbid(unsafe_code)]

//! Rule definitions and registry

mod definition;
mod not_empty;
mod range;
mod registry;
mod rule;

// Re-export core types
pub use definition::RuleDefinition;
pub use not_empty::{DEFAULT_NOT_EMPTY_MESSAGE, NOT_EMPTY, NotEmptyRule};
pub use range::{ACCURACY, Bound, RangeRule, range};
pub use registry::RuleRegistry;
pub use rule::Rule;
