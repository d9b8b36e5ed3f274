//! Trailing and annualized volatility.

use crate::descriptive::sample_std;
use crate::TRADING_DAYS_PER_YEAR;

/// Standard deviation of the most recent `window` returns.
///
/// Uses the sample standard deviation (one delta degree of freedom) over the
/// trailing slice. Returns `None` when the window is shorter than two
/// observations or the series does not cover the full window.
pub fn trailing_volatility(returns: &[f64], window: usize) -> Option<f64> {
    if window < 2 || returns.len() < window {
        return None;
    }
    sample_std(&returns[returns.len() - window..])
}

/// Annualized trailing volatility.
///
/// ## Formula
///
/// ```text
/// vol_annual = std(returns[-window:]) * sqrt(252)
/// ```
///
/// Daily volatility is scaled by the square root of the trading-day count,
/// the standard annualization for daily return series.
pub fn annualized_volatility(returns: &[f64], window: usize) -> Option<f64> {
    trailing_volatility(returns, window).map(|vol| vol * TRADING_DAYS_PER_YEAR.sqrt())
}
