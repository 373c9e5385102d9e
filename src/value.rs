use std::fmt;
use std::sync::Arc;

use crate::data_type::DataType;

/// A single value bound to a column of a row.
///
/// There is no `Null` variant: a row that has nothing for a column simply has
/// no binding for it, and an absent binding never compares equal to anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Int(i64),
    /// A 64-bit floating-point value.
    Float(f64),
    /// A UTF-8 string value, wrapped in an [Arc] for cheap cloning when rows
    /// are materialized out of the column storage.
    Text(Arc<str>),
    /// A boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the inner integer value if this is a [Value::Int].
    /// Otherwise, returns `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner float value if this is a [Value::Float].
    /// Otherwise, returns `None`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the inner string slice if this is a [Value::Text].
    /// Otherwise, returns `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner boolean value if this is a [Value::Bool].
    /// Otherwise, returns `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the [DataType] tag this value carries.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int(_) => DataType::Int,
            Self::Float(_) => DataType::Float,
            Self::Text(_) => DataType::Text,
            Self::Bool(_) => DataType::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Arc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Arc::from(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;

    // ─────────────────────────────────────────────────────────────
    // Test 1 : accessors
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(1.0).as_int(), None);
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::Int(1).as_float(), None);
        assert_eq!(Value::Text("hello".into()).as_str(), Some("hello"));
        assert_eq!(Value::Bool(true).as_str(), None);
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Text("true".into()).as_bool(), None);
    }

    // ─────────────────────────────────────────────────────────────
    // Test 2 : data_type
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_data_type() {
        assert_eq!(Value::Int(1).data_type(), DataType::Int);
        assert_eq!(Value::Float(1.0).data_type(), DataType::Float);
        assert_eq!(Value::Text("x".into()).data_type(), DataType::Text);
        assert_eq!(Value::Bool(true).data_type(), DataType::Bool);
    }

    // ─────────────────────────────────────────────────────────────
    // Test 3 : equality never coerces between types
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Int(10), Value::Int(10));
        assert_ne!(Value::Int(10), Value::Int(20));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Text("1".into()), Value::Int(1));
        assert_eq!(Value::Text("abc".into()), Value::Text("abc".into()));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    // ─────────────────────────────────────────────────────────────
    // Test 4 : From conversions and Display
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_from_and_display() {
        assert_eq!(Value::from(7_i64), Value::Int(7));
        assert_eq!(Value::from("Ada"), Value::Text("Ada".into()));
        assert_eq!(Value::from(String::from("Bob")).to_string(), "Bob");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(1.5_f64).to_string(), "1.5");
    }
}
