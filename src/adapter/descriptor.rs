//! Validator descriptors
//!
//! A [`Descriptor`] pairs a single-argument check with an optional message.
//! It is the shape a host framework registers against a schema field.

use super::call_shape::CallShape;
use crate::error::{PredicateError, ValidationError};
use crate::options::Options;
use crate::predicate::CorePredicate;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

type Check = dyn Fn(&Value) -> Result<bool, PredicateError> + Send + Sync;

/// Which values pass without consulting the core predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkipPolicy {
    /// Pass null and missing values.
    pub skip_null: bool,
    /// Pass null, missing and empty-string values.
    pub skip_empty: bool,
}

impl SkipPolicy {
    /// Take the policy flags from options.
    pub fn from_options(options: &Options) -> Self {
        Self {
            skip_null: options.skip_null,
            skip_empty: options.skip_empty,
        }
    }

    /// Returns `true` when `value` passes without evaluation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::adapter::SkipPolicy;
    /// use sluice::Value;
    ///
    /// let policy = SkipPolicy { skip_null: false, skip_empty: true };
    /// assert!(policy.skips(&Value::Null));
    /// assert!(policy.skips(&Value::from("")));
    /// assert!(!policy.skips(&Value::from(" ")));
    /// ```
    #[inline]
    pub fn skips(&self, value: &Value) -> bool {
        let absent = value.is_null_or_missing();
        (self.skip_null && absent) || (self.skip_empty && (absent || value.is_empty_string()))
    }
}

/// A ready-to-register validator.
///
/// Immutable once built. Cloning shares the underlying check.
///
/// # Example
///
/// ```rust
/// use sluice::adapter::{build, normalize};
/// use sluice::{args, infallible, Arg, Options, Value};
///
/// let equals = infallible(|v: &Value, a: &[Arg]| {
///     a.first().is_some_and(|x| v.to_input_string() == x.to_string())
/// });
/// let shape = normalize("equals", args![Options::new().skip_null(true), "cuicca"]);
/// let d = build(equals, shape);
///
/// assert_eq!(d.check(&Value::from("cuicca")), Ok(true));
/// assert_eq!(d.check(&Value::from("other")), Ok(false));
/// assert_eq!(d.check(&Value::Null), Ok(true));
/// assert_eq!(d.check(&Value::from("")), Ok(false));
/// assert_eq!(d.message(), None);
/// ```
#[derive(Clone)]
pub struct Descriptor {
    predicate: Arc<Check>,
    message: Option<String>,
}

impl Descriptor {
    /// Evaluate the descriptor against a field value.
    ///
    /// `Ok(false)` means the value failed validation. An `Err` comes from
    /// the core predicate and is passed through untouched.
    #[inline]
    pub fn check(&self, value: &Value) -> Result<bool, PredicateError> {
        (self.predicate)(value)
    }

    /// The configured error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// A shared handle to the single-argument check.
    pub fn predicate(&self) -> Arc<dyn Fn(&Value) -> Result<bool, PredicateError> + Send + Sync> {
        Arc::clone(&self.predicate)
    }

    /// Check a value and turn a `false` result into an error.
    ///
    /// The rejection carries this descriptor's message; its display falls
    /// back to the host default when none was configured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::adapter::{build, normalize};
    /// use sluice::{args, infallible, Arg, Options, ValidationError, Value};
    ///
    /// let never = infallible(|_: &Value, _: &[Arg]| false);
    /// let d = build(never, normalize("never", args![Options::new().message("nope")]));
    ///
    /// let err = d.ensure(&Value::from("x")).unwrap_err();
    /// assert_eq!(err, ValidationError::Rejected { message: Some("nope".into()) });
    /// assert_eq!(err.to_string(), "nope");
    /// ```
    pub fn ensure(&self, value: &Value) -> Result<(), ValidationError> {
        if self.check(value)? {
            Ok(())
        } else {
            Err(ValidationError::Rejected {
                message: self.message.clone(),
            })
        }
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Wrap a core predicate and a normalized call into a [`Descriptor`].
///
/// The bound arguments and skip policy are captured by value; the options
/// record itself is dropped after its message is taken.
pub fn build<P>(core: P, shape: CallShape) -> Descriptor
where
    P: CorePredicate + 'static,
{
    build_shared(Arc::new(core), shape)
}

pub(crate) fn build_shared(core: Arc<dyn CorePredicate>, shape: CallShape) -> Descriptor {
    let CallShape {
        bound_args,
        options,
    } = shape;
    let policy = SkipPolicy::from_options(&options);

    let predicate = move |value: &Value| -> Result<bool, PredicateError> {
        if policy.skips(value) {
            return Ok(true);
        }
        core.test(value, &bound_args)
    };

    Descriptor {
        predicate: Arc::new(predicate),
        message: options.message,
    }
}
