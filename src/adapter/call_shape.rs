//! Call-shape normalization
//!
//! A generator call is a flat argument list. Normalization splits it into the
//! adapter [`Options`] and the arguments bound to the core predicate.

use crate::arg::Arg;
use crate::options::Options;

/// Predicate whose own first argument is a configuration record.
///
/// Its leading record is read as adapter options *and* forwarded to the
/// predicate, never stripped.
pub const CONFIG_FIRST_PREDICATE: &str = "isURL";

/// A normalized generator call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallShape {
    /// Arguments forwarded to the core predicate after the validated value.
    pub bound_args: Vec<Arg>,
    /// Adapter options detected in the call.
    pub options: Options,
}

impl CallShape {
    /// Returns `true` when neither skip policy is active.
    pub fn is_unconditional(&self) -> bool {
        !self.options.skip_null && !self.options.skip_empty
    }
}

/// Split a raw generator call for `method` into options and bound arguments.
///
/// A leading [`Arg::Object`] is the options record. For every method other
/// than [`CONFIG_FIRST_PREDICATE`] it is consumed and not forwarded; for that
/// one method it is read as options and forwarded as well. Any other leading
/// argument, including a regex, leaves the options at their defaults and the
/// list untouched.
///
/// # Example
///
/// ```rust
/// use sluice::adapter::normalize;
/// use sluice::{args, record, Arg, Options};
///
/// let shape = normalize("equals", args![Options::new().skip_null(true), "cuicca"]);
/// assert!(shape.options.skip_null);
/// assert_eq!(shape.bound_args, args!["cuicca"]);
///
/// let shape = normalize("isURL", args![record! { "require_protocol" => true }]);
/// assert_eq!(shape.options, Options::default());
/// assert_eq!(shape.bound_args.len(), 1);
/// ```
pub fn normalize(method: &str, mut raw_args: Vec<Arg>) -> CallShape {
    let options = match raw_args.first() {
        Some(Arg::Object(record)) => Some(Options::from_record(record)),
        _ => None,
    };

    let start = if method == CONFIG_FIRST_PREDICATE {
        0
    } else if options.is_some() {
        1
    } else {
        0
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        method,
        has_options = options.is_some(),
        stripped = start,
        "normalized validator call"
    );

    raw_args.drain(..start);

    CallShape {
        bound_args: raw_args,
        options: options.unwrap_or_default(),
    }
}
