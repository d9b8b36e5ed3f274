//! Drawdown measures over compounded return paths.

/// Largest peak-to-trough decline of the compounded return path.
///
/// ## Formula
///
/// ```text
/// wealth_t  = prod(1 + r_i) for i <= t
/// drawdown_t = wealth_t / max(wealth_0..wealth_t) - 1
/// max_drawdown = min(drawdown_t)
/// ```
///
/// The result is zero or negative; -0.25 means a 25% decline from the
/// running peak. Series with fewer than two returns report 0.0, and the
/// first observation establishes the initial peak.
pub fn max_drawdown(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let mut wealth = 1.0_f64;
    let mut peak = f64::NEG_INFINITY;
    let mut worst = 0.0_f64;
    for r in returns {
        wealth *= 1.0 + r;
        peak = peak.max(wealth);
        let drawdown = wealth / peak - 1.0;
        worst = worst.min(drawdown);
    }
    worst
}

/// Decline of the latest compounded value from the running peak.
///
/// Zero when the series ends at a new high. Series with fewer than two
/// returns report 0.0.
pub fn current_drawdown(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    let mut wealth = 1.0_f64;
    let mut peak = f64::NEG_INFINITY;
    for r in returns {
        wealth *= 1.0 + r;
        peak = peak.max(wealth);
    }
    wealth / peak - 1.0
}
