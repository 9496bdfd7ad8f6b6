//! The predicate library seam
//!
//! Predicates are supplied from outside the crate. This module only defines
//! their calling convention ([`CorePredicate`]) and the container a library
//! is delivered in ([`PredicateSet`]).
//!
//! # Example
//!
//! ```rust
//! use sluice::predicate::*;
//! use sluice::{Arg, PredicateError, Value};
//!
//! fn contains(value: &Value, args: &[Arg]) -> Result<bool, PredicateError> {
//!     let needle = args
//!         .first()
//!         .ok_or(PredicateError::MissingArgument { index: 0 })?;
//!     Ok(value.to_input_string().contains(&needle.to_string()))
//! }
//!
//! let set = PredicateSet::new().with_predicate("contains", contains);
//! let (_, p) = set.predicates().next().unwrap();
//! assert_eq!(p.test(&Value::from("haystack"), &[Arg::from("st")]), Ok(true));
//! ```

mod callable;
mod set;

pub use self::callable::{infallible, CorePredicate, Infallible};
pub use self::set::{Entry, PredicateSet};
