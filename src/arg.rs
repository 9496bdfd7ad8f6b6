//! Arguments passed to validator generators
//!
//! Generators accept a heterogeneous argument list. [`Arg`] is the tagged
//! variant for one entry in that list: the call-shape normalizer matches on
//! [`Arg::Object`] to find an options record, while [`Arg::Regex`] and every
//! other variant are always positional arguments for the core predicate.
//!
//! # Example
//!
//! ```rust
//! use sluice::{args, record, Arg};
//!
//! let list = args!["cuicca", 3, true];
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[0], Arg::from("cuicca"));
//!
//! let config = record! { "require_protocol" => true };
//! assert!(config.get("require_protocol").is_some_and(Arg::is_truthy));
//! ```

use regex::Regex;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// One argument in a generator call.
#[derive(Debug, Clone)]
pub enum Arg {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Str(String),
    /// A compiled regular expression. Never mistaken for an options record.
    Regex(Regex),
    /// An ordered list of arguments.
    List(Vec<Arg>),
    /// A string-keyed record: validator options, or predicate configuration.
    Object(Record),
}

impl Arg {
    /// Truthiness used when coercing option flags.
    ///
    /// `Null`, `false`, `0`, `NaN` and the empty string are falsy. Regexes,
    /// lists and records are always truthy, even when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::{Arg, Record};
    ///
    /// assert!(!Arg::Null.is_truthy());
    /// assert!(!Arg::from(0).is_truthy());
    /// assert!(!Arg::from("").is_truthy());
    /// assert!(Arg::from("no").is_truthy());
    /// assert!(Arg::Object(Record::new()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Arg::Null => false,
            Arg::Bool(b) => *b,
            Arg::Number(n) => *n != 0.0 && !n.is_nan(),
            Arg::Str(s) => !s.is_empty(),
            Arg::Regex(_) | Arg::List(_) | Arg::Object(_) => true,
        }
    }

    /// Borrow the string contents of an [`Arg::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Read an [`Arg::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the record of an [`Arg::Object`].
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Arg::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "bool",
            Arg::Number(_) => "number",
            Arg::Str(_) => "string",
            Arg::Regex(_) => "regex",
            Arg::List(_) => "list",
            Arg::Object(_) => "object",
        }
    }
}

// Regex has no PartialEq; two regexes are equal when their sources are.
impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Arg::Null, Arg::Null) => true,
            (Arg::Bool(a), Arg::Bool(b)) => a == b,
            (Arg::Number(a), Arg::Number(b)) => a == b,
            (Arg::Str(a), Arg::Str(b)) => a == b,
            (Arg::Regex(a), Arg::Regex(b)) => a.as_str() == b.as_str(),
            (Arg::List(a), Arg::List(b)) => a == b,
            (Arg::Object(a), Arg::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("null"),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Number(n) => write!(f, "{}", n),
            Arg::Str(s) => f.write_str(s),
            Arg::Regex(re) => write!(f, "/{}/", re.as_str()),
            Arg::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Arg::Object(record) => write!(f, "{}", record),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_owned())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<f64> for Arg {
    fn from(n: f64) -> Self {
        Arg::Number(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Number(f64::from(n))
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<usize> for Arg {
    fn from(n: usize) -> Self {
        Arg::Number(n as f64)
    }
}

impl From<Regex> for Arg {
    fn from(re: Regex) -> Self {
        Arg::Regex(re)
    }
}

impl From<Record> for Arg {
    fn from(record: Record) -> Self {
        Arg::Object(record)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Arg::Null, Into::into)
    }
}

/// A string-keyed record of arguments, iterated in key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: BTreeMap<String, Arg>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, consuming and returning the record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the previous value for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Arg>) -> Option<Arg> {
        self.fields.insert(key.into(), value.into())
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.fields.get(key)
    }

    /// Returns `true` when `key` is present and truthy.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(Arg::is_truthy)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Arg> {
        self.fields.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Arg>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Arg);
    type IntoIter = btree_map::Iter<'a, String, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Build a `Vec<Arg>` from heterogeneous expressions.
///
/// Each expression is converted with `Arg::from`.
///
/// # Example
///
/// ```rust
/// use sluice::{args, Arg, Options};
///
/// let list = args![Options::new().skip_null(true), "cuicca"];
/// assert!(matches!(list[0], Arg::Object(_)));
/// assert_eq!(list[1], Arg::from("cuicca"));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($arg)),+]
    };
}

/// Build a [`Record`] from `key => value` pairs.
///
/// # Example
///
/// ```rust
/// use sluice::{record, Arg};
///
/// let r = record! { "skipNull" => true, "message" => "bad value" };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r.get("message"), Some(&Arg::from("bad value")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.with($key, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Arg::Null.is_truthy());
        assert!(!Arg::Bool(false).is_truthy());
        assert!(Arg::Bool(true).is_truthy());
        assert!(!Arg::Number(0.0).is_truthy());
        assert!(!Arg::Number(f64::NAN).is_truthy());
        assert!(Arg::Number(-1.0).is_truthy());
        assert!(!Arg::from("").is_truthy());
        assert!(Arg::from("false").is_truthy());
        assert!(Arg::List(vec![]).is_truthy());
        assert!(Arg::Object(Record::new()).is_truthy());
    }

    #[test]
    fn test_regex_equality_by_source() {
        let a = Arg::from(Regex::new("^a+$").unwrap());
        let b = Arg::from(Regex::new("^a+$").unwrap());
        let c = Arg::from(Regex::new("^b+$").unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Arg::from("^a+$"));
    }

    #[test]
    fn test_record_flag_and_lookup() {
        let r = record! { "on" => true, "off" => 0, "name" => "x" };
        assert!(r.flag("on"));
        assert!(!r.flag("off"));
        assert!(!r.flag("absent"));
        assert_eq!(r.get("name").and_then(Arg::as_str), Some("x"));
    }

    #[test]
    fn test_display() {
        let r = record! { "b" => 1, "a" => vec!["x", "y"] };
        assert_eq!(r.to_string(), "{a: [x, y], b: 1}");
        assert_eq!(Arg::from(Regex::new("a.c").unwrap()).to_string(), "/a.c/");
    }

    #[test]
    fn test_args_macro() {
        let empty = args![];
        assert!(empty.is_empty());

        let list = args!["a", 1, None::<&str>];
        assert_eq!(list, vec![Arg::from("a"), Arg::Number(1.0), Arg::Null]);
    }
}
