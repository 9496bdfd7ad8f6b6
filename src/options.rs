//! Validator options
//!
//! [`Options`] carries the adapter-level configuration for one descriptor:
//! an optional error message and the two skip policies. Options reach a
//! generator as the leading [`Arg::Object`] of its argument list, either
//! written as a raw [`Record`] with the keys `message`, `skipNull` and
//! `skipEmpty`, or built with the typed builder and converted.
//!
//! # Example
//!
//! ```rust
//! use sluice::{record, Arg, Options};
//!
//! let typed = Options::new().message("must match").skip_empty(true);
//! let raw = Options::from_record(&record! {
//!     "message" => "must match",
//!     "skipEmpty" => 1,
//!     "unrelated" => "ignored",
//! });
//! assert_eq!(typed, raw);
//!
//! let arg = Arg::from(typed.clone());
//! assert_eq!(Options::from_record(arg.as_record().unwrap()), typed);
//! ```

use crate::arg::{Arg, Record};

/// Record key for the error message.
pub const MESSAGE_KEY: &str = "message";
/// Record key for the skip-null policy.
pub const SKIP_NULL_KEY: &str = "skipNull";
/// Record key for the skip-empty policy.
pub const SKIP_EMPTY_KEY: &str = "skipEmpty";

/// Adapter options for a single validator descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Error message reported by the host when validation fails.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
    /// Pass null and missing values without consulting the predicate.
    pub skip_null: bool,
    /// Pass null, missing and empty-string values without consulting the predicate.
    pub skip_empty: bool,
}

impl Options {
    /// Options with no message and no skip policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the skip-null policy.
    pub fn skip_null(mut self, skip: bool) -> Self {
        self.skip_null = skip;
        self
    }

    /// Set the skip-empty policy.
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    /// Read options out of a record.
    ///
    /// Flags are coerced with [`Arg::is_truthy`]. A null message counts as
    /// absent; a string message is kept verbatim and any other value is kept
    /// in its display form. Keys other than `message`, `skipNull` and
    /// `skipEmpty` are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::{record, Arg, Options};
    ///
    /// let opts = Options::from_record(&record! {
    ///     "message" => Arg::Null,
    ///     "skipNull" => "yes",
    /// });
    /// assert_eq!(opts.message, None);
    /// assert!(opts.skip_null);
    /// assert!(!opts.skip_empty);
    /// ```
    pub fn from_record(record: &Record) -> Self {
        let message = match record.get(MESSAGE_KEY) {
            None | Some(Arg::Null) => None,
            Some(Arg::Str(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Self {
            message,
            skip_null: record.flag(SKIP_NULL_KEY),
            skip_empty: record.flag(SKIP_EMPTY_KEY),
        }
    }

    /// Write the options back out as a record.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new()
            .with(SKIP_NULL_KEY, self.skip_null)
            .with(SKIP_EMPTY_KEY, self.skip_empty);
        if let Some(message) = &self.message {
            record.insert(MESSAGE_KEY, message.as_str());
        }
        record
    }
}

impl From<Options> for Arg {
    fn from(options: Options) -> Self {
        Arg::Object(options.to_record())
    }
}

impl From<Options> for Record {
    fn from(options: Options) -> Self {
        options.to_record()
    }
}
