//! # Downside Core
//!
//! Core types for portfolio risk analytics.
//!
//! This crate provides the foundational types shared across the Downside
//! workspace:
//!
//! - **Price observations**: [`PricePoint`] pairs an asset with a dated,
//!   validated price
//! - **Return series**: [`ReturnSeries`] holds chronologically ordered
//!   percentage returns
//! - **Portfolio weights**: [`PortfolioWeights`] maps assets to their share
//!   of the portfolio with deterministic iteration order
//! - **Windows**: [`RiskPeriod`] enumerates the rolling windows used for
//!   trailing volatility
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use downside_core::{PricePoint, ReturnSeries};
//! use rust_decimal_macros::dec;
//!
//! let point = PricePoint::new(
//!     "BTC",
//!     Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
//!     dec!(42000.50),
//! )
//! .unwrap();
//! assert_eq!(point.asset_id(), "BTC");
//!
//! let series = ReturnSeries::from_pairs([
//!     (Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap(), 0.012),
//!     (Utc.with_ymd_and_hms(2024, 1, 17, 0, 0, 0).unwrap(), -0.004),
//! ]);
//! assert_eq!(series.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod types;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::error::{DownsideError, DownsideResult};
    pub use crate::types::{
        PortfolioWeights, PricePoint, ReturnPoint, ReturnSeries, RiskPeriod,
    };
}

pub use error::{DownsideError, DownsideResult};
pub use types::{PortfolioWeights, PricePoint, ReturnPoint, ReturnSeries, RiskPeriod};
