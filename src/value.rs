#![forbid(unsafe_code)]

//! Value model shared by all rules
//!
//! Rules never inspect arbitrary types at runtime. Callers describe the value
//! under test with the explicit `Value` enum instead, and `Value::indirect`
//! strips optional/reference wrappers down to the concrete content.

use std::collections::BTreeMap;
use std::fmt;

/// A native numeric value of any width, sign and representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Converts the number to the canonical `f64` used for comparisons
    ///
    /// 64-bit integers beyond 2^53 lose precision, as any widening to `f64` does.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I8(n) => f64::from(n),
            Number::I16(n) => f64::from(n),
            Number::I32(n) => f64::from(n),
            Number::I64(n) => n as f64,
            Number::Isize(n) => n as f64,
            Number::U8(n) => f64::from(n),
            Number::U16(n) => f64::from(n),
            Number::U32(n) => f64::from(n),
            Number::U64(n) => n as f64,
            Number::Usize(n) => n as f64,
            Number::F32(n) => f64::from(n),
            Number::F64(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{}", n),
            Number::I16(n) => write!(f, "{}", n),
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            Number::Isize(n) => write!(f, "{}", n),
            Number::U8(n) => write!(f, "{}", n),
            Number::U16(n) => write!(f, "{}", n),
            Number::U32(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::Usize(n) => write!(f, "{}", n),
            Number::F32(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

/// A value handed to a rule
///
/// `Optional` stands in for every reference-like wrapper (pointers,
/// interfaces, nullable fields). `Optional(None)` is a nil reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any native number
    Number(Number),

    /// A boolean
    Bool(bool),

    /// A string
    Str(String),

    /// A slice, array or set
    Sequence(Vec<Value>),

    /// A map keyed by string
    Mapping(BTreeMap<String, Value>),

    /// A struct-like value; never considered empty
    Record(BTreeMap<String, Value>),

    /// A reference that may be nil
    Optional(Option<Box<Value>>),
}

impl Value {
    /// A nil reference
    pub fn null() -> Self {
        Value::Optional(None)
    }

    /// Wraps a value in one level of indirection
    pub fn some(value: impl Into<Value>) -> Self {
        Value::Optional(Some(Box::new(value.into())))
    }

    /// Follows `Optional` wrappers down to the concrete value
    ///
    /// Returns `None` as soon as a nil reference is found anywhere in the chain.
    pub fn indirect(&self) -> Option<&Value> {
        let mut current = self;
        loop {
            match current {
                Value::Optional(Some(inner)) => current = inner,
                Value::Optional(None) => return None,
                concrete => return Some(concrete),
            }
        }
    }

    /// Returns true when the value is absent or has no content
    ///
    /// Strings, sequences and mappings are empty at zero length. Numbers,
    /// booleans and records are always present, including `0` and `false`.
    pub fn is_empty(&self) -> bool {
        match self.indirect() {
            None => true,
            Some(Value::Str(s)) => s.is_empty(),
            Some(Value::Sequence(items)) => items.is_empty(),
            Some(Value::Mapping(entries)) => entries.is_empty(),
            Some(Value::Number(_) | Value::Bool(_) | Value::Record(_) | Value::Optional(_)) => {
                false
            }
        }
    }

    /// Looks up a named field of a record or mapping, through any indirection
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self.indirect()? {
            Value::Record(fields) | Value::Mapping(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Record(_) => "record",
            Value::Optional(_) => "optional",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "{}", s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Mapping(entries) | Value::Record(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Optional(Some(inner)) => write!(f, "{}", inner),
            Value::Optional(None) => write!(f, "null"),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::$variant(n))
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Mapping(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Optional(value.map(|v| Box::new(v.into())))
    }
}

/// JSON documents map onto values the way a decoder fills dynamic types:
/// objects become mappings and `null` becomes a nil reference.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::from(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indirect_concrete_value() {
        let value = Value::from(5);
        assert_eq!(value.indirect(), Some(&Value::from(5)));
    }

    #[test]
    fn test_indirect_follows_chain() {
        let value = Value::some(Value::some("abc"));
        assert_eq!(value.indirect(), Some(&Value::from("abc")));
    }

    #[test]
    fn test_indirect_nil_at_any_depth() {
        assert_eq!(Value::null().indirect(), None);
        assert_eq!(Value::some(Value::null()).indirect(), None);
        assert_eq!(Value::some(Value::some(Value::null())).indirect(), None);
    }

    #[test]
    fn test_is_empty_containers() {
        assert!(Value::from("").is_empty());
        assert!(Value::Sequence(vec![]).is_empty());
        assert!(Value::Mapping(BTreeMap::new()).is_empty());
        assert!(!Value::from("a").is_empty());
        assert!(!Value::from(vec![1]).is_empty());
    }

    #[test]
    fn test_is_empty_scalars_never_empty() {
        assert!(!Value::from(0).is_empty());
        assert!(!Value::from(0.0).is_empty());
        assert!(!Value::from(false).is_empty());
        assert!(!Value::Record(BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_is_empty_through_indirection() {
        assert!(Value::some("").is_empty());
        assert!(!Value::some(Value::some(0u8)).is_empty());
        assert!(Value::from(None::<i32>).is_empty());
    }

    #[test]
    fn test_number_to_f64_all_widths() {
        assert_eq!(Number::I8(-8).to_f64(), -8.0);
        assert_eq!(Number::I16(-16).to_f64(), -16.0);
        assert_eq!(Number::I32(-32).to_f64(), -32.0);
        assert_eq!(Number::I64(-64).to_f64(), -64.0);
        assert_eq!(Number::Isize(-1).to_f64(), -1.0);
        assert_eq!(Number::U8(8).to_f64(), 8.0);
        assert_eq!(Number::U16(16).to_f64(), 16.0);
        assert_eq!(Number::U32(32).to_f64(), 32.0);
        assert_eq!(Number::U64(64).to_f64(), 64.0);
        assert_eq!(Number::Usize(1).to_f64(), 1.0);
        assert_eq!(Number::F32(0.5).to_f64(), 0.5);
        assert_eq!(Number::F64(2.25).to_f64(), 2.25);
    }

    #[test]
    fn test_field_lookup() {
        let mut fields = BTreeMap::new();
        fields.insert("age".to_string(), Value::from(30));
        let record = Value::some(Value::Record(fields));

        assert_eq!(record.field("age"), Some(&Value::from(30)));
        assert_eq!(record.field("name"), None);
        assert_eq!(Value::from(1).field("age"), None);
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"a": null, "b": [1, -2, 2.5], "c": "x", "d": true}"#)
                .unwrap();
        let value = Value::from(json);

        assert_eq!(value.field("a"), Some(&Value::null()));
        assert_eq!(
            value.field("b"),
            Some(&Value::Sequence(vec![
                Value::from(1i64),
                Value::from(-2i64),
                Value::from(2.5f64)
            ]))
        );
        assert_eq!(value.field("c"), Some(&Value::from("x")));
        assert_eq!(value.field("d"), Some(&Value::from(true)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(42u16).to_string(), "42");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::null().to_string(), "null");
        assert_eq!(Value::some(7).to_string(), "7");
    }
}
