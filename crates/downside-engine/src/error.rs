//! Error types for the risk engine.

use downside_core::DownsideError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while building and scoring portfolio metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Not enough aligned observations to form a portfolio series.
    #[error("Insufficient data: {reason}")]
    InsufficientData {
        /// What was missing.
        reason: String,
    },

    /// The request itself was malformed.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the request.
        reason: String,
    },

    /// A core type rejected its input.
    #[error(transparent)]
    Core(#[from] DownsideError),
}

impl EngineError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self::InsufficientData {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
