//! Testing utilities and helpers for Sluice
//!
//! This module provides a small stand-in predicate library, assertion macros
//! for descriptors, and (behind the `proptest` feature) `Arbitrary` impls for
//! the value and option types.
//!
//! The stand-in library is only as strict as the tests need. It is not a
//! replacement for a real predicate library.
//!
//! # Examples
//!
//! ```rust
//! use sluice::testing::fixtures;
//! use sluice::{args, assert_accepts, assert_rejects, Registry};
//!
//! let registry = Registry::new(&fixtures());
//! let d = registry.create("contains", args!["@"]).unwrap();
//!
//! assert_accepts!(d, "user@example.com");
//! assert_rejects!(d, "user.example.com");
//! ```

use crate::arg::{Arg, Record};
use crate::error::PredicateError;
use crate::predicate::{infallible, PredicateSet};
use crate::value::Value;
use regex::RegexBuilder;

/// Version string exposed as the non-callable `version` fixture entry.
pub const FIXTURE_VERSION: &str = "0.0.0-fixture";

/// A predicate set shaped like a typical string-validation library.
///
/// Contains `equals`, `contains`, `isAlphanumeric`, `isLength`, `matches`
/// and `isURL`, plus a non-callable `version` entry. Every predicate checks
/// the value's [`to_input_string`](Value::to_input_string) form.
pub fn fixtures() -> PredicateSet {
    PredicateSet::new()
        .with_predicate("equals", equals)
        .with_predicate("contains", contains)
        .with_predicate("isAlphanumeric", infallible(is_alphanumeric))
        .with_predicate("isLength", is_length)
        .with_predicate("matches", matches)
        .with_predicate("isURL", is_url)
        .with_constant("version", FIXTURE_VERSION)
}

fn required(args: &[Arg], index: usize) -> Result<&Arg, PredicateError> {
    args.get(index)
        .ok_or(PredicateError::MissingArgument { index })
}

fn equals(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    let comparison = required(args, 0)?;
    Ok(value.to_input_string() == comparison.to_string())
}

fn contains(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    let seed = required(args, 0)?;
    Ok(value.to_input_string().contains(&seed.to_string()))
}

fn is_alphanumeric(value: &Value, _: &[Arg]) -> bool {
    let s = value.to_input_string();
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_length(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    let number = |index: usize| -> Result<Option<usize>, PredicateError> {
        match args.get(index) {
            None | Some(Arg::Null) => Ok(None),
            Some(Arg::Number(n)) if *n >= 0.0 => Ok(Some(*n as usize)),
            Some(other) => Err(PredicateError::InvalidArgument {
                index,
                expected: "non-negative number",
                found: other.kind(),
            }),
        }
    };

    let min = number(0)?.unwrap_or(0);
    let max = number(1)?;
    let len = value.to_input_string().chars().count();
    Ok(len >= min && max.is_none_or(|max| len <= max))
}

fn matches(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    let input = value.to_input_string();
    match required(args, 0)? {
        Arg::Regex(re) => Ok(re.is_match(&input)),
        Arg::Str(pattern) => {
            let flags = args.get(1).and_then(Arg::as_str).unwrap_or("");
            let re = RegexBuilder::new(pattern)
                .case_insensitive(flags.contains('i'))
                .multi_line(flags.contains('m'))
                .build()
                .map_err(|e| PredicateError::failed(e.to_string()))?;
            Ok(re.is_match(&input))
        }
        other => Err(PredicateError::InvalidArgument {
            index: 0,
            expected: "regex or string",
            found: other.kind(),
        }),
    }
}

const URL_PROTOCOLS: [&str; 3] = ["http", "https", "ftp"];

fn is_url(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
    let require_protocol = match args.first() {
        None | Some(Arg::Null) => false,
        Some(Arg::Object(config)) => config.flag("require_protocol"),
        Some(other) => {
            return Err(PredicateError::InvalidArgument {
                index: 0,
                expected: "object",
                found: other.kind(),
            })
        }
    };

    let input = value.to_input_string();
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return Ok(false);
    }

    let rest = match input.split_once("://") {
        Some((protocol, rest)) => {
            if !URL_PROTOCOLS.contains(&protocol.to_ascii_lowercase().as_str()) {
                return Ok(false);
            }
            rest
        }
        None if require_protocol => return Ok(false),
        None => &*input,
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority
        .rsplit_once(':')
        .map_or(authority, |(host, port)| {
            if port.chars().all(|c| c.is_ascii_digit()) {
                host
            } else {
                authority
            }
        });

    Ok(is_host_name(host))
}

// Dotted host name with an alphabetic top-level label.
fn is_host_name(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    let Some(tld) = labels.last() else {
        return false;
    };
    labels.len() >= 2
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Build a URL configuration record for the `isURL` fixture.
pub fn url_config(require_protocol: bool) -> Record {
    Record::new().with("require_protocol", require_protocol)
}

/// Assert that a descriptor accepts a value.
///
/// The value is converted with `Value::from`. Panics when the check returns
/// `Ok(false)` or an error.
///
/// # Example
///
/// ```rust
/// use sluice::testing::fixtures;
/// use sluice::{args, assert_accepts, Registry};
///
/// let d = Registry::new(&fixtures()).create("equals", args!["a"]).unwrap();
/// assert_accepts!(d, "a");
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($descriptor:expr, $value:expr) => {
        match $descriptor.check(&$crate::Value::from($value)) {
            Ok(true) => {}
            Ok(false) => {
                panic!("Expected value to be accepted, got rejection");
            }
            Err(e) => {
                panic!("Expected value to be accepted, got error: {:?}", e);
            }
        }
    };
}

/// Assert that a descriptor rejects a value.
///
/// The value is converted with `Value::from`. Panics when the check returns
/// `Ok(true)` or an error.
///
/// # Example
///
/// ```rust
/// use sluice::testing::fixtures;
/// use sluice::{args, assert_rejects, Registry};
///
/// let d = Registry::new(&fixtures()).create("equals", args!["a"]).unwrap();
/// assert_rejects!(d, "b");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($descriptor:expr, $value:expr) => {
        match $descriptor.check(&$crate::Value::from($value)) {
            Ok(false) => {}
            Ok(true) => {
                panic!("Expected value to be rejected, got acceptance");
            }
            Err(e) => {
                panic!("Expected value to be rejected, got error: {:?}", e);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Value::Missing),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1.0e6..1.0e6f64).prop_map(Value::Number),
            Just(Value::String(String::new())),
            "[a-zA-Z0-9_@. -]{0,16}".prop_map(Value::String),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Options {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            proptest::option::of("[a-z ]{0,12}"),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(message, skip_null, skip_empty)| crate::Options {
                message,
                skip_null,
                skip_empty,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, Registry};
    use regex::Regex;

    fn registry() -> Registry {
        Registry::new(&fixtures())
    }

    #[test]
    fn equals_fixture() {
        let d = registry().create("equals", args!["cuicca"]).unwrap();
        assert_accepts!(d, "cuicca");
        assert_rejects!(d, "cu1cca");
        assert_rejects!(d, "");
        assert_rejects!(d, None::<&str>);
    }

    #[test]
    fn alphanumeric_fixture() {
        let d = registry().create("isAlphanumeric", args![]).unwrap();
        assert_accepts!(d, "cuicca1");
        assert_rejects!(d, "cu_cca");
        assert_rejects!(d, "");
    }

    #[test]
    fn length_fixture() {
        let d = registry().create("isLength", args![2, 4]).unwrap();
        assert_accepts!(d, "abc");
        assert_rejects!(d, "a");
        assert_rejects!(d, "abcde");

        let open = registry().create("isLength", args![2]).unwrap();
        assert_accepts!(open, "abcdefgh");

        let bad = registry().create("isLength", args!["two"]).unwrap();
        assert!(bad.check(&Value::from("x")).is_err());
    }

    #[test]
    fn matches_fixture() {
        let by_regex = registry()
            .create("matches", args![Regex::new("^c.+a$").unwrap()])
            .unwrap();
        assert_accepts!(by_regex, "cuicca");
        assert_rejects!(by_regex, "Cuicca");

        let by_pattern = registry().create("matches", args!["^c.+a$", "i"]).unwrap();
        assert_accepts!(by_pattern, "CUICCA");

        let broken = registry().create("matches", args!["("]).unwrap();
        assert!(matches!(
            broken.check(&Value::from("x")),
            Err(PredicateError::Failed(_))
        ));
    }

    #[test]
    fn url_fixture() {
        let lenient = registry().create("isURL", args![]).unwrap();
        assert_accepts!(lenient, "example.com");
        assert_accepts!(lenient, "https://example.com:8080/path?q=1");
        assert_rejects!(lenient, "not a url");
        assert_rejects!(lenient, "gopher://example.com");
        assert_rejects!(lenient, "localhost");

        let strict = registry()
            .create("isURL", args![url_config(true)])
            .unwrap();
        assert_accepts!(strict, "http://example.com");
        assert_rejects!(strict, "example.com");

        let wrong = registry().create("isURL", args!["strict"]).unwrap();
        assert!(wrong.check(&Value::from("example.com")).is_err());
    }

    #[test]
    fn fixtures_expose_version_constant() {
        let set = fixtures();
        assert!(set.get("version").is_some_and(|e| !e.is_callable()));
    }

    #[test]
    #[should_panic(expected = "Expected value to be accepted, got rejection")]
    fn assert_accepts_panics_on_rejection() {
        let d = registry().create("equals", args!["a"]).unwrap();
        assert_accepts!(d, "b");
    }

    #[test]
    #[should_panic(expected = "Expected value to be rejected, got acceptance")]
    fn assert_rejects_panics_on_acceptance() {
        let d = registry().create("equals", args!["a"]).unwrap();
        assert_rejects!(d, "a");
    }

    #[test]
    #[should_panic(expected = "got error")]
    fn assert_accepts_panics_on_error() {
        let d = registry().create("equals", args![]).unwrap();
        assert_accepts!(d, "a");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::Options;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn skip_null_always_accepts_null_like(
                value in any::<Value>(),
                options in any::<Options>(),
            ) {
                let d = registry()
                    .create("equals", args![options.clone().skip_null(true), "x"])
                    .unwrap();
                if value.is_null_or_missing() {
                    prop_assert_eq!(d.check(&value), Ok(true));
                }
                prop_assert_eq!(d.message(), options.message.as_deref());
            }
        }
    }
}
