//! Value at Risk estimators.
//!
//! Two estimators are provided: [`historical_var`] reads the loss threshold
//! off the empirical return distribution, while [`parametric_var`] fits a
//! normal distribution to the sample. [`VarMethod`] selects between them at
//! the call site and travels with the reported metrics so consumers know
//! which model produced the figure.

mod historical;
mod parametric;

pub use historical::historical_var;
pub use parametric::parametric_var;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Estimation method for Value at Risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarMethod {
    /// Empirical quantile of the observed returns.
    #[default]
    Historical,
    /// Normal approximation from the sample mean and standard deviation.
    Parametric,
}

impl fmt::Display for VarMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Historical => write!(f, "historical"),
            Self::Parametric => write!(f, "parametric"),
        }
    }
}

impl FromStr for VarMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "historical" => Ok(Self::Historical),
            "parametric" => Ok(Self::Parametric),
            _ => Err(StatsError::unknown_var_method(s)),
        }
    }
}

/// Value at Risk at the given confidence level using the selected method.
///
/// The result is a return-space threshold: -0.05 at 95% confidence means a
/// one-day loss of 5% or worse is expected on no more than 5% of days.
pub fn value_at_risk(returns: &[f64], confidence: f64, method: VarMethod) -> Option<f64> {
    match method {
        VarMethod::Historical => historical_var(returns, confidence),
        VarMethod::Parametric => parametric_var(returns, confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_method_display() {
        assert_eq!(VarMethod::Historical.to_string(), "historical");
        assert_eq!(VarMethod::Parametric.to_string(), "parametric");
    }

    #[test]
    fn test_var_method_from_str() {
        assert_eq!(
            "historical".parse::<VarMethod>().unwrap(),
            VarMethod::Historical
        );
        assert_eq!(
            "Parametric".parse::<VarMethod>().unwrap(),
            VarMethod::Parametric
        );
        assert!("montecarlo".parse::<VarMethod>().is_err());
    }

    #[test]
    fn test_var_method_default() {
        assert_eq!(VarMethod::default(), VarMethod::Historical);
    }

    #[test]
    fn test_var_method_serde() {
        let json = serde_json::to_string(&VarMethod::Parametric).unwrap();
        assert_eq!(json, "\"parametric\"");
        let back: VarMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VarMethod::Parametric);
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let returns: Vec<f64> = (0..60).map(|i| (i % 9) as f64 * 0.005 - 0.02).collect();
        assert_eq!(
            value_at_risk(&returns, 0.95, VarMethod::Historical),
            historical_var(&returns, 0.95)
        );
        assert_eq!(
            value_at_risk(&returns, 0.95, VarMethod::Parametric),
            parametric_var(&returns, 0.95)
        );
    }
}
