//! Rolling window periods for volatility metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing window length, in daily observations, for rolling metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskPeriod {
    /// 30 observations (about one month of daily data).
    #[default]
    Days30,
    /// 90 observations (about one quarter of daily data).
    Days90,
    /// 365 observations (about one year of daily data).
    Days365,
}

impl RiskPeriod {
    /// All periods, shortest first.
    pub const ALL: [RiskPeriod; 3] = [RiskPeriod::Days30, RiskPeriod::Days90, RiskPeriod::Days365];

    /// Returns the window length in observations.
    #[must_use]
    pub fn window(self) -> usize {
        match self {
            RiskPeriod::Days30 => 30,
            RiskPeriod::Days90 => 90,
            RiskPeriod::Days365 => 365,
        }
    }
}

impl fmt::Display for RiskPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskPeriod::Days30 => "30d",
            RiskPeriod::Days90 => "90d",
            RiskPeriod::Days365 => "365d",
        };
        write!(f, "{name}")
    }
}
