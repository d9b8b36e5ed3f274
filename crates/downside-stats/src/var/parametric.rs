//! Parametric (variance-covariance) Value at Risk.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::descriptive::{mean, population_std};
use crate::MIN_OBSERVATIONS;

/// Parametric Value at Risk under a normal model.
///
/// ## Formula
///
/// ```text
/// var = mean + z * std
/// z   = Phi^-1(1 - confidence)
/// ```
///
/// Fits a normal distribution to the sample mean and population standard
/// deviation, then reads the (1 - confidence) quantile off the fitted curve.
/// The z score is negative at the usual confidence levels, so the threshold
/// lands below the mean. Returns `None` when fewer than
/// [`MIN_OBSERVATIONS`] returns are available or the confidence level is
/// outside (0, 1).
pub fn parametric_var(returns: &[f64], confidence: f64) -> Option<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return None;
    }
    if confidence.is_nan() || confidence <= 0.0 || confidence >= 1.0 {
        return None;
    }
    let mu = mean(returns)?;
    let sigma = population_std(returns)?;
    let normal = Normal::new(0.0, 1.0).ok()?;
    let z = normal.inverse_cdf(1.0 - confidence);
    Some(mu + z * sigma)
}
