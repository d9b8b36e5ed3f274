//! Domain types for portfolio risk analytics.
//!
//! This module provides type-safe representations of the engine's inputs:
//!
//! - [`PricePoint`]: Dated price observation for one asset
//! - [`ReturnSeries`] / [`ReturnPoint`]: Ordered percentage returns
//! - [`PortfolioWeights`]: Asset share mapping with deterministic ordering
//! - [`RiskPeriod`]: Rolling window lengths for volatility metrics

mod period;
mod price;
mod returns;
mod weights;

pub use period::RiskPeriod;
pub use price::PricePoint;
pub use returns::{ReturnPoint, ReturnSeries};
pub use weights::PortfolioWeights;
