//! The generator table
//!
//! A [`Registry`] is built once from a [`PredicateSet`] and never changes.
//! Consumers hold it by reference (or behind an `Arc`) and ask it for a
//! [`Generator`] per predicate name.

use super::call_shape::normalize;
use super::descriptor::{build_shared, Descriptor};
use crate::arg::Arg;
use crate::error::AdapterError;
use crate::predicate::{CorePredicate, PredicateSet};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Produces descriptors for one named predicate.
#[derive(Clone)]
pub struct Generator {
    name: Arc<str>,
    core: Arc<dyn CorePredicate>,
}

impl Generator {
    /// The predicate name this generator is bound to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalize `args` and build a descriptor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::testing::fixtures;
    /// use sluice::{args, Options, Registry, Value};
    ///
    /// let registry = Registry::new(&fixtures());
    /// let equals = registry.generator("equals").unwrap();
    ///
    /// let d = equals.call(args![Options::new().skip_empty(true), "cuicca"]);
    /// assert_eq!(d.check(&Value::from("")), Ok(true));
    /// assert_eq!(d.check(&Value::from("cuicca")), Ok(true));
    /// ```
    pub fn call<I>(&self, args: I) -> Descriptor
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        let raw: Vec<Arg> = args.into_iter().map(Into::into).collect();
        build_shared(Arc::clone(&self.core), normalize(&self.name, raw))
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from predicate name to [`Generator`].
///
/// # Example
///
/// ```rust
/// use sluice::testing::fixtures;
/// use sluice::{args, record, AdapterError, Registry, Value};
///
/// let registry = Registry::new(&fixtures());
/// assert!(registry.contains("isURL"));
/// assert!(!registry.contains("version"));
///
/// let d = registry.create("isURL", args![record! { "require_protocol" => true }])?;
/// assert_eq!(d.check(&Value::from("http://example.com")), Ok(true));
/// assert_eq!(d.check(&Value::from("example.com")), Ok(false));
///
/// assert_eq!(
///     registry.create("isBogus", args![]).unwrap_err(),
///     AdapterError::UnknownPredicate("isBogus".to_string())
/// );
/// # Ok::<(), AdapterError>(())
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    generators: BTreeMap<String, Generator>,
}

impl Registry {
    /// Register a generator for every callable entry of `set`.
    pub fn new(set: &PredicateSet) -> Self {
        let mut generators = BTreeMap::new();

        for (name, entry) in set.iter() {
            match entry.as_predicate() {
                Some(core) => {
                    generators.insert(
                        name.to_owned(),
                        Generator {
                            name: Arc::from(name),
                            core: Arc::clone(core),
                        },
                    );
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(name, "skipping non-callable predicate set entry");
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registered = generators.len(),
            skipped = set.len() - generators.len(),
            "built validator registry"
        );

        Self { generators }
    }

    /// The generator for `name`, if a callable predicate has that name.
    pub fn generator(&self, name: &str) -> Option<&Generator> {
        self.generators.get(name)
    }

    /// Build a descriptor for `name` in one step.
    pub fn create<I>(&self, name: &str, args: I) -> Result<Descriptor, AdapterError>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.generator(name)
            .map(|generator| generator.call(args))
            .ok_or_else(|| AdapterError::UnknownPredicate(name.to_owned()))
    }

    /// Returns `true` when a generator exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
