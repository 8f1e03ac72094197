//! The error type shared by every fallible operation in this crate.

use thiserror::Error;

/// Errors returned by [Pluralizer](crate::Pluralizer) operations and by
/// dataset loading.
///
/// Words that no rule applies to are *not* errors. They are returned
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The word passed to `plural`, `singular`, or `pluralize` was empty.
    #[error("cannot {operation} an empty word")]
    EmptyInput { operation: &'static str },

    /// The count passed to `pluralize` was not a number.
    #[error("count must be a number, got `{0}`")]
    InvalidCount(String),

    /// A rule, irregular pair, or uncountable word was rejected. This covers
    /// empty arguments and patterns that do not compile.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// A dataset could not be parsed.
    #[error("could not parse dataset")]
    Dataset(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn empty_input(operation: &'static str) -> Self {
        Error::EmptyInput { operation }
    }
}
