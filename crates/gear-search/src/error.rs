//! Error types for query compilation.

use thiserror::Error;

/// A specialized Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while building the registry or compiling a query.
///
/// Clause-level errors (`InvalidRange`, `MissingValue`, `UnknownKeyword`,
/// `UnexpectedToken`) never abort compilation: the offending clause is dropped
/// to a non-match and the error is reported through
/// [`CompiledQuery::diagnostics`](crate::query::CompiledQuery::diagnostics).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A numeric range literal could not be parsed.
    #[error("invalid range '{value}': {reason}")]
    InvalidRange {
        /// The raw range text.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A clause had a keyword but no value.
    #[error("missing value for filter '{keyword}'")]
    MissingValue {
        /// The keyword without a value.
        keyword: String,
    },

    /// An unrecognized filter keyword was used.
    #[error(
        "unknown filter keyword: {keyword}{}",
        .suggestion.as_deref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default()
    )]
    UnknownKeyword {
        /// The unrecognized keyword.
        keyword: String,
        /// The closest registered keyword, if any is close enough.
        suggestion: Option<String>,
    },

    /// A connective appeared where a clause was expected.
    #[error("unexpected token: {token}")]
    UnexpectedToken {
        /// The unexpected token.
        token: String,
    },

    /// Two filter definitions claim the same keyword or value.
    #[error("duplicate filter keyword: {0}")]
    DuplicateKeyword(String),

    /// A definition tried to register a keyword reserved by the query syntax.
    #[error("reserved filter keyword: {0}")]
    ReservedKeyword(String),

    /// Lexicon data could not be loaded.
    #[error("failed to load lexicon: {0}")]
    Lexicon(String),
}

impl SearchError {
    /// Creates an invalid range error.
    pub fn invalid_range(value: impl Into<String>, reason: impl Into<String>) -> Self {
        SearchError::InvalidRange {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown keyword error.
    pub fn unknown_keyword(keyword: impl Into<String>, suggestion: Option<String>) -> Self {
        SearchError::UnknownKeyword {
            keyword: keyword.into(),
            suggestion,
        }
    }

    /// Creates an unexpected token error.
    pub fn unexpected_token(token: impl Into<String>) -> Self {
        SearchError::UnexpectedToken {
            token: token.into(),
        }
    }
}
