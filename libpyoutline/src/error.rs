//! Error types for outline lexing and parsing.

use thiserror::Error;

/// Result type for outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for outline operations.
///
/// All variants are recoverable: the caller may retry with corrected
/// arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside its accepted domain (e.g. retracting zero tokens).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Retraction was requested past the start of the input.
    #[error("Cannot retract {requested} token(s), only {available} available")]
    OutOfRange { requested: usize, available: usize },

    /// No document was available to parse.
    #[error("No input: {0}")]
    MissingInput(String),
}

impl Error {
    /// Create a `MissingInput` error with a description of what was missing.
    pub fn missing_input(what: impl Into<String>) -> Self {
        Error::MissingInput(what.into())
    }
}
