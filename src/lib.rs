//! # Sluice
//!
//! > *Let the right values through*
//!
//! A Rust library that adapts a library of plain value predicates into
//! validator descriptors for a schema-validation host.
//!
//! ## Philosophy
//!
//! A predicate library knows how to answer "is this an email?" or "does this
//! equal `x`?". A schema host wants one thing per field: a single-argument
//! check and an optional message. **Sluice** sits between the two:
//! - **Generators** curry a predicate's extra arguments
//! - **Options** add a message and the `skipNull`/`skipEmpty` policies
//! - **Descriptors** are immutable, cheap to clone, and safe to share
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::testing::fixtures;
//! use sluice::{args, Options, Registry, Value};
//!
//! // Build the generator table once, from whatever predicate library you use.
//! let registry = Registry::new(&fixtures());
//!
//! // `equals("cuicca")`, but let empty fields through.
//! let descriptor = registry
//!     .create(
//!         "equals",
//!         args![Options::new().skip_empty(true).message("wrong word"), "cuicca"],
//!     )
//!     .unwrap();
//!
//! assert_eq!(descriptor.check(&Value::from("cuicca")), Ok(true));
//! assert_eq!(descriptor.check(&Value::from("cu1cca")), Ok(false));
//! assert_eq!(descriptor.check(&Value::from("")), Ok(true));
//! assert_eq!(descriptor.message(), Some("wrong word"));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapter;
pub mod arg;
pub mod error;
pub mod options;
pub mod predicate;
pub mod testing;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use adapter::{build, normalize, CallShape, Descriptor, Generator, Registry, SkipPolicy};
pub use arg::{Arg, Record};
pub use error::{AdapterError, PredicateError, ValidationError};
pub use options::Options;
pub use predicate::{infallible, CorePredicate, Entry, PredicateSet};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapter::{Descriptor, Generator, Registry};
    pub use crate::arg::{Arg, Record};
    pub use crate::error::{AdapterError, PredicateError, ValidationError};
    pub use crate::options::Options;
    pub use crate::predicate::{infallible, CorePredicate, PredicateSet};
    pub use crate::value::Value;
    pub use crate::{args, record};
}
