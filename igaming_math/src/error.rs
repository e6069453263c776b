//! Error types for the calculation library.
//!
//! Failed validations are not errors; they come back as
//! `ValidationResult` or `bool`. Errors are reserved for inputs a
//! calculation cannot proceed with and for exhausted retry budgets.

use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Exhausted {attempts} attempts without finding an unused identifier")]
    ExhaustedAttempts { attempts: u32 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl Error {
    /// True for the invalid-input family (empty input, bad weights, bad arguments).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput(_) | Error::InvalidWeights(_) | Error::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
