//! Error types
//!
//! Nothing in this crate catches or retries an error. A [`PredicateError`] is
//! raised by a core predicate and reaches the caller of
//! [`Descriptor::check`](crate::Descriptor::check) unchanged.

use thiserror::Error;

/// Host framework's message for a rejected value when no message was configured.
pub const DEFAULT_MESSAGE: &str = "Validation failed";

/// A fault raised by a core predicate while evaluating a value.
///
/// This is distinct from a value failing validation, which is an ordinary
/// `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// A required positional argument was not supplied.
    #[error("missing argument at position {index}")]
    MissingArgument {
        /// Position in the bound argument list.
        index: usize,
    },
    /// A positional argument had the wrong shape.
    #[error("argument at position {index} must be {expected}, got {found}")]
    InvalidArgument {
        /// Position in the bound argument list.
        index: usize,
        /// What the predicate expected.
        expected: &'static str,
        /// What it received.
        found: &'static str,
    },
    /// Any other predicate failure.
    #[error("{0}")]
    Failed(String),
}

impl PredicateError {
    /// Create a free-form predicate failure.
    pub fn failed(message: impl Into<String>) -> Self {
        PredicateError::Failed(message.into())
    }
}

/// Errors raised by the adapter itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// No callable predicate is registered under this name.
    #[error("no predicate named `{0}` is registered")]
    UnknownPredicate(String),
}

/// Outcome of [`Descriptor::ensure`](crate::Descriptor::ensure) when a value
/// does not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The predicate returned `false`.
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_MESSAGE))]
    Rejected {
        /// The descriptor's message, if one was configured.
        message: Option<String>,
    },
    /// The predicate itself failed.
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_default_message() {
        let err = ValidationError::Rejected { message: None };
        assert_eq!(err.to_string(), "Validation failed");

        let err = ValidationError::Rejected {
            message: Some("not an email".to_string()),
        };
        assert_eq!(err.to_string(), "not an email");
    }

    #[test]
    fn test_predicate_error_display() {
        let err = PredicateError::InvalidArgument {
            index: 0,
            expected: "regex or string",
            found: "number",
        };
        assert_eq!(
            err.to_string(),
            "argument at position 0 must be regex or string, got number"
        );
        assert_eq!(
            ValidationError::from(PredicateError::MissingArgument { index: 1 }).to_string(),
            "missing argument at position 1"
        );
    }

    #[test]
    fn test_unknown_predicate_display() {
        let err = AdapterError::UnknownPredicate("isBogus".to_string());
        assert_eq!(err.to_string(), "no predicate named `isBogus` is registered");
    }
}
