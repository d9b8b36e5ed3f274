//! # Downside Engine
//!
//! Portfolio risk calculation engine for crypto portfolios.
//!
//! The engine turns a raw price history into one immutable [`RiskMetrics`]
//! report in four stages:
//!
//! 1. **Return series**: [`build_return_series`] converts per-asset prices
//!    into daily percentage returns
//! 2. **Aggregation**: [`aggregate_portfolio_returns`] folds the per-asset
//!    series into one weighted portfolio series
//! 3. **Metrics**: the `downside-stats` primitives measure volatility, tail
//!    risk, drawdown, concentration and dependence
//! 4. **Scoring**: [`risk_score`] grades the bundle into a 1-10 composite
//!
//! [`PortfolioRiskCalculator`] runs the stages in order, and
//! [`AssetRiskCalculator`] reports on a single asset the same way.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use downside_core::{PortfolioWeights, PricePoint};
//! use downside_engine::{PortfolioRiskCalculator, RiskConfig};
//! use rust_decimal::Decimal;
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let mut prices = Vec::new();
//! for i in 0..60 {
//!     let ts = start + Duration::days(i);
//!     prices.push(PricePoint::new("BTC", ts, Decimal::new(42_000 + i * 50, 0)).unwrap());
//!     prices.push(PricePoint::new("ETH", ts, Decimal::new(2_500 + i * 3, 0)).unwrap());
//! }
//! let weights = PortfolioWeights::from_pairs([("BTC", 0.7), ("ETH", 0.3)]).unwrap();
//!
//! let calculator = PortfolioRiskCalculator::new(RiskConfig::default());
//! let metrics = calculator.calculate_all_metrics(&prices, &weights, None).unwrap();
//!
//! assert_eq!(metrics.observations, 59);
//! assert!((1..=10).contains(&metrics.risk_score));
//! assert_eq!(metrics.correlation_matrix.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod error;
pub mod metrics;
pub mod returns;
pub mod score;

/// Commonly used types and functions, re-exported for convenience.
pub mod prelude {
    pub use crate::calculator::{AssetRiskCalculator, BenchmarkReturns, PortfolioRiskCalculator};
    pub use crate::config::RiskConfig;
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::metrics::{RiskLevel, RiskMetrics};
    pub use downside_core::prelude::*;
    pub use downside_stats::VarMethod;
}

pub use aggregate::{aggregate_portfolio_returns, MIN_PORTFOLIO_OBSERVATIONS};
pub use calculator::{AssetRiskCalculator, BenchmarkReturns, PortfolioRiskCalculator};
pub use config::{RiskConfig, DEFAULT_RISK_FREE_RATE};
pub use error::{EngineError, EngineResult};
pub use metrics::{RiskLevel, RiskMetrics};
pub use returns::build_return_series;
pub use score::{
    risk_score, risk_score_or_default, DEFAULT_RISK_SCORE, MAX_RISK_SCORE, MIN_RISK_SCORE,
};
