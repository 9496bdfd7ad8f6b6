//! The predicate set: the library of named checks being adapted

use super::callable::CorePredicate;
use crate::arg::Arg;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One member of a predicate library.
#[derive(Clone)]
pub enum Entry {
    /// A callable predicate.
    Predicate(Arc<dyn CorePredicate>),
    /// A non-callable member such as a version string. Never registered.
    Constant(Arg),
}

impl Entry {
    /// The predicate, if this entry is callable.
    pub fn as_predicate(&self) -> Option<&Arc<dyn CorePredicate>> {
        match self {
            Entry::Predicate(p) => Some(p),
            Entry::Constant(_) => None,
        }
    }

    /// Returns `true` for [`Entry::Predicate`].
    pub fn is_callable(&self) -> bool {
        matches!(self, Entry::Predicate(_))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Predicate(_) => f.write_str("Predicate(..)"),
            Entry::Constant(arg) => f.debug_tuple("Constant").field(arg).finish(),
        }
    }
}

/// A read-only mapping from predicate name to [`Entry`].
///
/// Assembled once by whoever provides the predicate library, then handed to
/// [`Registry::new`](crate::Registry::new).
///
/// # Example
///
/// ```rust
/// use sluice::{infallible, Arg, PredicateSet, Value};
///
/// let set = PredicateSet::new()
///     .with_predicate("isEmpty", infallible(|v: &Value, _: &[Arg]| v.to_input_string().is_empty()))
///     .with_constant("version", "1.0.0");
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.predicates().count(), 1);
/// assert!(set.get("version").is_some_and(|e| !e.is_callable()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredicateSet {
    entries: BTreeMap<String, Entry>,
}

impl PredicateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callable predicate, replacing any entry of the same name.
    pub fn with_predicate<P>(mut self, name: impl Into<String>, predicate: P) -> Self
    where
        P: CorePredicate + 'static,
    {
        self.entries
            .insert(name.into(), Entry::Predicate(Arc::new(predicate)));
        self
    }

    /// Add a non-callable member, replacing any entry of the same name.
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.entries
            .insert(name.into(), Entry::Constant(value.into()));
        self
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Iterate over the callable entries in name order.
    pub fn predicates(&self) -> impl Iterator<Item = (&str, &Arc<dyn CorePredicate>)> {
        self.iter()
            .filter_map(|(name, entry)| entry.as_predicate().map(|p| (name, p)))
    }

    /// Total number of entries, callable or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
