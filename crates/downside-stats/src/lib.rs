//! # Downside Stats
//!
//! Statistical primitives for portfolio risk analytics.
//!
//! Each module covers one family of metrics:
//!
//! - **Volatility**: [`trailing_volatility`], [`annualized_volatility`]
//! - **Risk-adjusted return**: [`sharpe_ratio`], [`sortino_ratio`]
//! - **Drawdown**: [`max_drawdown`], [`current_drawdown`]
//! - **Tail risk**: [`historical_var`], [`parametric_var`],
//!   [`expected_shortfall`]
//! - **Market sensitivity**: [`beta`]
//! - **Concentration**: [`herfindahl_index`], [`effective_assets`]
//! - **Dependence**: [`correlation_matrix`]
//!
//! All primitives are pure functions over `f64` return samples. A sample too
//! small or too degenerate to support a statistic yields `None` rather than
//! an error, so one thin series never sinks a whole metrics run.
//!
//! # Example
//!
//! ```
//! use downside_stats::{annualized_volatility, historical_var, max_drawdown};
//!
//! let returns: Vec<f64> = (0..60).map(|i| (i % 7) as f64 * 0.01 - 0.03).collect();
//!
//! assert!(annualized_volatility(&returns, 30).unwrap() > 0.0);
//! assert!(historical_var(&returns, 0.95).unwrap() < 0.0);
//! assert!(max_drawdown(&returns) <= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod beta;
pub mod concentration;
pub mod correlation;
pub mod descriptive;
pub mod drawdown;
pub mod error;
pub mod sharpe;
pub mod shortfall;
pub mod var;
pub mod volatility;

/// Minimum number of return observations for distribution-sensitive metrics.
///
/// Sharpe, Sortino, beta, VaR and expected shortfall report `None` below
/// this floor. Thirty daily returns is roughly one trading month.
pub const MIN_OBSERVATIONS: usize = 30;

/// Trading days per year, used to annualize daily statistics.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Commonly used functions and types, re-exported for convenience.
pub mod prelude {
    pub use crate::beta::beta;
    pub use crate::concentration::{effective_assets, herfindahl_index};
    pub use crate::correlation::{correlation_matrix, CorrelationMatrix};
    pub use crate::drawdown::{current_drawdown, max_drawdown};
    pub use crate::error::{StatsError, StatsResult};
    pub use crate::sharpe::{sharpe_ratio, sortino_ratio};
    pub use crate::shortfall::expected_shortfall;
    pub use crate::var::{historical_var, parametric_var, value_at_risk, VarMethod};
    pub use crate::volatility::{annualized_volatility, trailing_volatility};
    pub use crate::{MIN_OBSERVATIONS, TRADING_DAYS_PER_YEAR};
}

pub use beta::beta;
pub use concentration::{effective_assets, herfindahl_index};
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use descriptive::{
    excess_kurtosis, mean, population_std, sample_std, sample_variance, skewness,
};
pub use drawdown::{current_drawdown, max_drawdown};
pub use error::{StatsError, StatsResult};
pub use sharpe::{daily_rate, sharpe_ratio, sortino_ratio};
pub use shortfall::expected_shortfall;
pub use var::{historical_var, parametric_var, value_at_risk, VarMethod};
pub use volatility::{annualized_volatility, trailing_volatility};
