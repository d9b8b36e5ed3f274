//! Historical simulation Value at Risk.

use std::cmp::Ordering;

use crate::MIN_OBSERVATIONS;

/// Historical Value at Risk at the given confidence level.
///
/// ## Formula
///
/// ```text
/// var = quantile(returns, 1 - confidence)
/// ```
///
/// The empirical quantile is taken with linear interpolation between order
/// statistics, so 95% confidence reads the 5th percentile of the observed
/// returns. Returns `None` when fewer than [`MIN_OBSERVATIONS`] returns are
/// available or the confidence level is outside (0, 1).
pub fn historical_var(returns: &[f64], confidence: f64) -> Option<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return None;
    }
    if confidence.is_nan() || confidence <= 0.0 || confidence >= 1.0 {
        return None;
    }
    let mut sorted = returns.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(quantile_sorted(&sorted, 1.0 - confidence))
}

/// Linear-interpolation quantile of an ascending sample.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
