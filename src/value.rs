//! Field values handed to validators by the host framework
//!
//! A [`Value`] is what a schema field holds at validation time. Two variants
//! represent "no value": [`Value::Missing`] for a field that was never set and
//! [`Value::Null`] for an explicit null. Skip policies treat both the same way.
//!
//! # Example
//!
//! ```rust
//! use sluice::Value;
//!
//! assert!(Value::Missing.is_null_or_missing());
//! assert!(Value::from(None::<&str>).is_null_or_missing());
//! assert!(Value::from("").is_empty_string());
//! assert_eq!(Value::from(42).to_input_string(), "42");
//! ```

use std::borrow::Cow;
use std::fmt;

/// A validated field value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The field was not supplied at all.
    #[default]
    Missing,
    /// The field was explicitly set to null.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
}

impl Value {
    /// Returns `true` for [`Value::Missing`] and [`Value::Null`].
    #[inline]
    pub fn is_null_or_missing(&self) -> bool {
        matches!(self, Value::Missing | Value::Null)
    }

    /// Returns `true` only for an empty [`Value::String`].
    #[inline]
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Borrow the string contents, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce the value to the string a string-checking predicate operates on.
    ///
    /// Null and missing values become the empty string, so a string predicate
    /// evaluated without a skip policy sees `""` rather than a sentinel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::Value;
    ///
    /// assert_eq!(Value::Null.to_input_string(), "");
    /// assert_eq!(Value::Bool(true).to_input_string(), "true");
    /// assert_eq!(Value::Number(1.5).to_input_string(), "1.5");
    /// assert_eq!(Value::from("abc").to_input_string(), "abc");
    /// ```
    pub fn to_input_string(&self) -> Cow<'_, str> {
        match self {
            Value::Missing | Value::Null => Cow::Borrowed(""),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::String(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => f.write_str("<missing>"),
            Value::Null => f.write_str("null"),
            other => f.write_str(&other.to_input_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_are_both_absent() {
        assert!(Value::Missing.is_null_or_missing());
        assert!(Value::Null.is_null_or_missing());
        assert!(!Value::from("").is_null_or_missing());
        assert!(!Value::Bool(false).is_null_or_missing());
    }

    #[test]
    fn test_empty_string_detection() {
        assert!(Value::from("").is_empty_string());
        assert!(!Value::from(" ").is_empty_string());
        assert!(!Value::Null.is_empty_string());
        assert!(!Value::Missing.is_empty_string());
    }

    #[test]
    fn test_input_string_coercion() {
        assert_eq!(Value::Missing.to_input_string(), "");
        assert_eq!(Value::Number(42.0).to_input_string(), "42");
        assert_eq!(Value::Number(-0.25).to_input_string(), "-0.25");
        assert_eq!(Value::Bool(false).to_input_string(), "false");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::default(), Value::Missing);
    }
}
