//! Engine configuration.

use downside_stats::VarMethod;
use serde::{Deserialize, Serialize};

/// Default annual risk-free rate used for Sharpe and Sortino ratios.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;

/// Configuration for a risk calculation run.
///
/// # Example
///
/// ```
/// use downside_engine::RiskConfig;
/// use downside_stats::VarMethod;
///
/// let config = RiskConfig::new()
///     .with_risk_free_rate(0.045)
///     .with_var_method(VarMethod::Parametric);
/// assert_eq!(config.risk_free_rate, 0.045);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Annual risk-free rate, compounded down to a daily rate internally.
    pub risk_free_rate: f64,
    /// Estimator used for Value at Risk and the expected shortfall threshold.
    pub var_method: VarMethod,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            var_method: VarMethod::default(),
        }
    }
}

impl RiskConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annual risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the Value at Risk estimation method.
    #[must_use]
    pub fn with_var_method(mut self, method: VarMethod) -> Self {
        self.var_method = method;
        self
    }
}
