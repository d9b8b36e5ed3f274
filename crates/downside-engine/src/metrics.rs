//! The assembled portfolio risk report.

use std::fmt;

use downside_stats::{CorrelationMatrix, VarMethod};
use serde::{Deserialize, Serialize};

/// Qualitative band for a composite risk score.
///
/// Serializes as the capitalized variant name, so reports carry the
/// literals `"Low"`, `"Medium"` and `"High"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Scores 1 through 3.
    Low,
    /// Scores 4 through 6.
    Medium,
    /// Scores 7 and above.
    High,
}

impl RiskLevel {
    /// Band for a composite risk score.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Complete risk picture for one portfolio.
///
/// Produced by [`PortfolioRiskCalculator::calculate_all_metrics`] and not
/// mutated afterwards. A metric the history could not support is `None` and
/// serializes as `null`, so consumers can tell "not computable" apart from
/// a zero reading.
///
/// [`PortfolioRiskCalculator::calculate_all_metrics`]:
/// crate::PortfolioRiskCalculator::calculate_all_metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Annualized volatility over the trailing 30 days.
    pub volatility_30d: Option<f64>,
    /// Annualized volatility over the trailing 90 days.
    pub volatility_90d: Option<f64>,
    /// Annualized volatility over the trailing 365 days.
    pub volatility_365d: Option<f64>,
    /// Annualized Sharpe ratio against the configured risk-free rate.
    pub sharpe_ratio: Option<f64>,
    /// Annualized Sortino ratio, penalizing downside deviation only.
    pub sortino_ratio: Option<f64>,
    /// Worst peak-to-trough decline of the compounded series, zero or negative.
    pub max_drawdown: f64,
    /// Decline of the latest value from the running peak, zero or negative.
    pub current_drawdown: f64,
    /// Beta against the BTC benchmark series, when one was supplied.
    pub beta_btc: Option<f64>,
    /// Beta against the S&P 500 benchmark series, when one was supplied.
    pub beta_sp500: Option<f64>,
    /// Herfindahl-Hirschman concentration of the portfolio weights.
    pub herfindahl_index: f64,
    /// Equivalent number of equally-weighted assets.
    pub effective_assets: Option<f64>,
    /// Value at Risk at 95% confidence, in return space.
    pub var_95: Option<f64>,
    /// Value at Risk at 99% confidence, in return space.
    pub var_99: Option<f64>,
    /// Average return beyond the 95% VaR threshold.
    pub expected_shortfall: Option<f64>,
    /// Sample skewness of the portfolio returns.
    pub skewness: Option<f64>,
    /// Sample excess kurtosis of the portfolio returns.
    pub kurtosis: Option<f64>,
    /// Pairwise correlations between the portfolio's assets.
    pub correlation_matrix: CorrelationMatrix,
    /// Composite risk score from 1 (lowest) to 10 (highest).
    pub risk_score: u8,
    /// Estimator that produced the VaR and expected shortfall figures.
    pub var_method: VarMethod,
    /// Number of aligned portfolio return observations used.
    pub observations: usize,
}

impl RiskMetrics {
    /// Qualitative band for the composite risk score.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}
