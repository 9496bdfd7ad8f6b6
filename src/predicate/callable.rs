//! The core predicate trait
//!
//! A core predicate is one entry of the externally supplied predicate library:
//! a check over a value plus zero or more positional arguments.

use crate::arg::Arg;
use crate::error::PredicateError;
use crate::value::Value;
use std::fmt;

/// A predicate over a value and its curried arguments.
///
/// Implemented for every closure of the matching signature, so most
/// libraries never name this trait directly.
///
/// # Example
///
/// ```rust
/// use sluice::{Arg, CorePredicate, PredicateError, Value};
///
/// let equals = |value: &Value, args: &[Arg]| -> Result<bool, PredicateError> {
///     let expected = args
///         .first()
///         .ok_or(PredicateError::MissingArgument { index: 0 })?;
///     Ok(value.to_input_string() == expected.to_string())
/// };
///
/// assert_eq!(equals.test(&Value::from("a"), &[Arg::from("a")]), Ok(true));
/// assert!(equals.test(&Value::from("a"), &[]).is_err());
/// ```
pub trait CorePredicate: Send + Sync {
    /// Evaluate the predicate for `value` with the bound `args`.
    fn test(&self, value: &Value, args: &[Arg]) -> Result<bool, PredicateError>;
}

impl<F> CorePredicate for F
where
    F: Fn(&Value, &[Arg]) -> Result<bool, PredicateError> + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
        self(value, args)
    }
}

/// A core predicate that cannot fail.
///
/// Created by [`infallible`].
#[derive(Clone, Copy)]
pub struct Infallible<F>(pub F);

impl<F> CorePredicate for Infallible<F>
where
    F: Fn(&Value, &[Arg]) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
        Ok((self.0)(value, args))
    }
}

impl<F> fmt::Debug for Infallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Infallible(..)")
    }
}

/// Lift a plain boolean closure into a [`CorePredicate`].
///
/// # Example
///
/// ```rust
/// use sluice::{infallible, CorePredicate, Value};
///
/// let not_blank = infallible(|value: &Value, _: &[_]| !value.to_input_string().trim().is_empty());
/// assert_eq!(not_blank.test(&Value::from("  x "), &[]), Ok(true));
/// assert_eq!(not_blank.test(&Value::Null, &[]), Ok(false));
/// ```
pub fn infallible<F>(f: F) -> Infallible<F>
where
    F: Fn(&Value, &[Arg]) -> bool + Send + Sync,
{
    Infallible(f)
}
