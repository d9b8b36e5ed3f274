//! Error types for statistical calculations.

use thiserror::Error;

/// Result type for statistical operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur during statistical calculations.
///
/// Most primitives in this crate signal "not enough data" by returning
/// `None` rather than an error. `StatsError` is reserved for genuinely
/// invalid requests, such as parsing an unknown method name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A VaR method name could not be parsed.
    #[error("Unknown VaR method: {value}")]
    UnknownVarMethod {
        /// The unrecognized method name.
        value: String,
    },
}

impl StatsError {
    /// Creates an unknown VaR method error.
    #[must_use]
    pub fn unknown_var_method(value: impl Into<String>) -> Self {
        Self::UnknownVarMethod {
            value: value.into(),
        }
    }
}
