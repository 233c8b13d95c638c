//! Error types for the formatting toolkit.

use thiserror::Error;

/// Errors that can occur while building records or formatting them.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A required record field was not provided to the builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A template referenced a field the record does not have.
    #[error("unknown field in template: {0}")]
    UnknownField(String),

    /// The template string itself is malformed.
    #[error("invalid template: {0}")]
    Template(String),

    /// Formatter configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
