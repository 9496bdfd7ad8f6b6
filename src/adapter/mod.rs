//! Adapting predicates into validator descriptors
//!
//! This is the adapter factory. A generator call flows through two steps:
//!
//! 1. [`normalize`] splits the raw argument list into [`Options`](crate::Options)
//!    and the arguments bound to the core predicate.
//! 2. [`build`] closes over the core predicate, those arguments and the skip
//!    policy to produce a [`Descriptor`].
//!
//! [`Registry`] runs both steps for every callable entry of a
//! [`PredicateSet`](crate::PredicateSet).
//!
//! # Example
//!
//! ```rust
//! use sluice::testing::fixtures;
//! use sluice::{args, Options, Registry, Value};
//!
//! let registry = Registry::new(&fixtures());
//!
//! // Curried argument only.
//! let plain = registry.create("equals", args!["cuicca"]).unwrap();
//! assert_eq!(plain.check(&Value::Null), Ok(false));
//!
//! // Options first, then the curried argument.
//! let lenient = registry
//!     .create("equals", args![Options::new().skip_null(true), "cuicca"])
//!     .unwrap();
//! assert_eq!(lenient.check(&Value::Null), Ok(true));
//! ```

mod descriptor;
mod call_shape;
mod registry;

pub use descriptor::{build, Descriptor, SkipPolicy};
pub use call_shape::{normalize, CallShape, CONFIG_FIRST_PREDICATE};
pub use registry::{Generator, Registry};
