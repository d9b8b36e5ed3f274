//! Error types for the Downside library.
//!
//! This module defines the error type shared by the Downside crates,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Downside operations.
pub type DownsideResult<T> = Result<T, DownsideError>;

/// The main error type for Downside domain types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DownsideError {
    /// Invalid price value.
    #[error("Invalid price for '{asset_id}': {value} - {reason}")]
    InvalidPrice {
        /// Asset the price belongs to.
        asset_id: String,
        /// The invalid price value.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid portfolio weight (negative or not finite).
    #[error("Invalid weight for '{asset_id}': {value}")]
    InvalidWeight {
        /// Asset the weight belongs to.
        asset_id: String,
        /// The invalid weight value.
        value: f64,
    },
}

impl DownsideError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(
        asset_id: impl Into<String>,
        value: Decimal,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPrice {
            asset_id: asset_id.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(asset_id: impl Into<String>, value: f64) -> Self {
        Self::InvalidWeight {
            asset_id: asset_id.into(),
            value,
        }
    }
}
