//! Risk metric orchestration.

use std::collections::BTreeMap;

use downside_core::{PortfolioWeights, PricePoint, ReturnSeries, RiskPeriod};
use downside_stats::{
    annualized_volatility, beta, correlation_matrix, current_drawdown, effective_assets,
    excess_kurtosis, expected_shortfall, herfindahl_index, max_drawdown, sharpe_ratio, skewness,
    sortino_ratio, value_at_risk,
};
use tracing::debug;

use crate::aggregate::aggregate_portfolio_returns;
use crate::config::RiskConfig;
use crate::error::{EngineError, EngineResult};
use crate::metrics::RiskMetrics;
use crate::returns::build_return_series;
use crate::score::risk_score_or_default;

/// Benchmark return series for beta calculations.
///
/// Both series are optional. A missing benchmark simply leaves the matching
/// beta undetermined.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkReturns {
    /// Bitcoin benchmark returns.
    pub btc: Option<ReturnSeries>,
    /// S&P 500 benchmark returns.
    pub sp500: Option<ReturnSeries>,
}

impl BenchmarkReturns {
    /// Creates an empty benchmark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the BTC benchmark series.
    #[must_use]
    pub fn with_btc(mut self, series: ReturnSeries) -> Self {
        self.btc = Some(series);
        self
    }

    /// Sets the S&P 500 benchmark series.
    #[must_use]
    pub fn with_sp500(mut self, series: ReturnSeries) -> Self {
        self.sp500 = Some(series);
        self
    }
}

/// Portfolio-level risk calculator.
///
/// Runs the full pipeline in order: per-asset return series, weighted
/// portfolio aggregation, the statistical metric set, and finally the
/// composite risk score. The result is one immutable [`RiskMetrics`]
/// bundle.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use downside_core::{PortfolioWeights, PricePoint};
/// use downside_engine::{PortfolioRiskCalculator, RiskConfig};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let prices: Vec<PricePoint> = (0..40)
///     .map(|i| {
///         let price = Decimal::new(100 + (i % 7) - 3, 0);
///         PricePoint::new("BTC", start + Duration::days(i), price).unwrap()
///     })
///     .collect();
/// let weights = PortfolioWeights::single("BTC");
///
/// let calculator = PortfolioRiskCalculator::new(RiskConfig::default());
/// let metrics = calculator.calculate_all_metrics(&prices, &weights, None).unwrap();
/// assert!((1..=10).contains(&metrics.risk_score));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioRiskCalculator {
    config: RiskConfig,
}

impl PortfolioRiskCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Calculates the full metric set from a raw price history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientData`] when the history cannot
    /// support a portfolio series of at least two aligned observations.
    pub fn calculate_all_metrics(
        &self,
        prices: &[PricePoint],
        weights: &PortfolioWeights,
        benchmarks: Option<&BenchmarkReturns>,
    ) -> EngineResult<RiskMetrics> {
        let returns = build_return_series(prices);
        self.calculate_from_returns(&returns, weights, benchmarks)
    }

    /// Calculates the full metric set from prepared per-asset return series.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientData`] when the union timeline of
    /// the series holds fewer than two observations.
    pub fn calculate_from_returns(
        &self,
        returns: &BTreeMap<String, ReturnSeries>,
        weights: &PortfolioWeights,
        benchmarks: Option<&BenchmarkReturns>,
    ) -> EngineResult<RiskMetrics> {
        let portfolio = aggregate_portfolio_returns(returns, weights)?;
        let values = portfolio.values();
        let method = self.config.var_method;

        let mut metrics = RiskMetrics {
            volatility_30d: annualized_volatility(&values, RiskPeriod::Days30.window()),
            volatility_90d: annualized_volatility(&values, RiskPeriod::Days90.window()),
            volatility_365d: annualized_volatility(&values, RiskPeriod::Days365.window()),
            sharpe_ratio: sharpe_ratio(&values, self.config.risk_free_rate),
            sortino_ratio: sortino_ratio(&values, self.config.risk_free_rate),
            max_drawdown: max_drawdown(&values),
            current_drawdown: current_drawdown(&values),
            beta_btc: benchmarks
                .and_then(|b| b.btc.as_ref())
                .and_then(|series| beta(&portfolio, series)),
            beta_sp500: benchmarks
                .and_then(|b| b.sp500.as_ref())
                .and_then(|series| beta(&portfolio, series)),
            herfindahl_index: herfindahl_index(weights),
            effective_assets: effective_assets(weights),
            var_95: value_at_risk(&values, 0.95, method),
            var_99: value_at_risk(&values, 0.99, method),
            expected_shortfall: expected_shortfall(&values, 0.95, method),
            skewness: skewness(&values),
            kurtosis: excess_kurtosis(&values),
            correlation_matrix: correlation_matrix(returns),
            risk_score: 0, // scored below
            var_method: method,
            observations: portfolio.len(),
        };
        metrics.risk_score = risk_score_or_default(&metrics);
        debug!(
            "Portfolio risk metrics: {} assets, {} observations, score {}",
            returns.len(),
            metrics.observations,
            metrics.risk_score
        );
        Ok(metrics)
    }
}

/// Single-asset risk calculator.
///
/// Treats one asset as a portfolio holding a single full-weight position,
/// so an asset's standalone report agrees exactly with the report of a
/// one-asset portfolio.
#[derive(Debug, Clone, Default)]
pub struct AssetRiskCalculator {
    inner: PortfolioRiskCalculator,
}

impl AssetRiskCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn new(config: RiskConfig) -> Self {
        Self {
            inner: PortfolioRiskCalculator::new(config),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RiskConfig {
        self.inner.config()
    }

    /// Calculates the metric set for one asset's return series.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientData`] when the series holds fewer
    /// than two returns.
    pub fn calculate(
        &self,
        asset_id: &str,
        returns: &ReturnSeries,
        benchmarks: Option<&BenchmarkReturns>,
    ) -> EngineResult<RiskMetrics> {
        let mut series = BTreeMap::new();
        series.insert(asset_id.to_string(), returns.clone());
        let weights = PortfolioWeights::single(asset_id);
        self.inner
            .calculate_from_returns(&series, &weights, benchmarks)
    }

    /// Calculates the metric set from one asset's price history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when the history covers more
    /// than one asset, and [`EngineError::InsufficientData`] when no asset
    /// has enough prices to form a return series.
    pub fn calculate_from_prices(
        &self,
        prices: &[PricePoint],
        benchmarks: Option<&BenchmarkReturns>,
    ) -> EngineResult<RiskMetrics> {
        let mut series = build_return_series(prices);
        if series.len() > 1 {
            return Err(EngineError::invalid_input(format!(
                "asset calculator expects a single asset, got {}",
                series.len()
            )));
        }
        match series.pop_first() {
            Some((asset_id, returns)) => self.calculate(&asset_id, &returns, benchmarks),
            None => Err(EngineError::insufficient_data(
                "no asset has enough price observations to form a return series",
            )),
        }
    }
}
