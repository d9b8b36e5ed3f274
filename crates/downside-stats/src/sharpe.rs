//! Risk-adjusted return ratios.

use crate::descriptive::{mean, sample_std};
use crate::{MIN_OBSERVATIONS, TRADING_DAYS_PER_YEAR};

/// Converts an annual rate to its daily equivalent by compounding.
///
/// ## Formula
///
/// ```text
/// daily = (1 + annual)^(1/252) - 1
/// ```
pub fn daily_rate(annual: f64) -> f64 {
    (1.0 + annual).powf(1.0 / TRADING_DAYS_PER_YEAR) - 1.0
}

/// Annualized Sharpe ratio of a daily return series.
///
/// ## Formula
///
/// ```text
/// sharpe = mean(r - rf_daily) / std(r - rf_daily) * sqrt(252)
/// ```
///
/// Returns `None` when fewer than [`MIN_OBSERVATIONS`] returns are available
/// or the excess returns have zero variance.
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> Option<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return None;
    }
    let rf_daily = daily_rate(risk_free_rate);
    let excess: Vec<f64> = returns.iter().map(|r| r - rf_daily).collect();
    // Constant excess returns have no variance. Checked on the raw values,
    // since the computed std of a constant sample carries summation noise
    // instead of landing on exactly zero.
    if excess.windows(2).all(|w| w[0] == w[1]) {
        return None;
    }
    let std = sample_std(&excess)?;
    if std == 0.0 {
        return None;
    }
    Some(mean(&excess)? / std * TRADING_DAYS_PER_YEAR.sqrt())
}

/// Annualized Sortino ratio of a daily return series.
///
/// Like the Sharpe ratio but penalizes only downside deviation, measured as
/// the root mean square of the negative excess returns. Returns `None` when
/// fewer than [`MIN_OBSERVATIONS`] returns are available or no excess return
/// is negative.
pub fn sortino_ratio(returns: &[f64], risk_free_rate: f64) -> Option<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return None;
    }
    let rf_daily = daily_rate(risk_free_rate);
    let excess: Vec<f64> = returns.iter().map(|r| r - rf_daily).collect();
    let downside: Vec<f64> = excess.iter().copied().filter(|e| *e < 0.0).collect();
    if downside.is_empty() {
        return None;
    }
    let downside_dev =
        (downside.iter().map(|e| e * e).sum::<f64>() / downside.len() as f64).sqrt();
    Some(mean(&excess)? / downside_dev * TRADING_DAYS_PER_YEAR.sqrt())
}
