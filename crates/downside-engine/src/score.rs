//! Composite risk scoring.
//!
//! The score is an additive ladder: it starts at 1, the lowest risk, each
//! metric is graded against fixed thresholds and the matching increment is
//! added, then the total is clamped to the 1-10 band. A metric the history
//! could not support fires no rule at all, so thin data reads as neutral
//! rather than risky.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::metrics::RiskMetrics;

/// Lowest possible composite risk score.
pub const MIN_RISK_SCORE: u8 = 1;

/// Highest possible composite risk score.
pub const MAX_RISK_SCORE: u8 = 10;

/// Score reported when scoring itself fails.
pub const DEFAULT_RISK_SCORE: u8 = 5;

/// One scored metric with its graded thresholds.
///
/// Tiers are ordered most severe first; the first predicate that matches
/// supplies the increment and the remaining tiers are skipped.
struct ScoreRule {
    metric: &'static str,
    tiers: &'static [(fn(&RiskMetrics) -> bool, u8)],
}

static RULES: &[ScoreRule] = &[
    ScoreRule {
        metric: "volatility_30d",
        tiers: &[
            (|m| m.volatility_30d.is_some_and(|v| v > 0.8), 3),
            (|m| m.volatility_30d.is_some_and(|v| v > 0.5), 2),
            (|m| m.volatility_30d.is_some_and(|v| v > 0.3), 1),
        ],
    },
    ScoreRule {
        metric: "sharpe_ratio",
        tiers: &[
            (|m| m.sharpe_ratio.is_some_and(|v| v < 0.0), 2),
            (|m| m.sharpe_ratio.is_some_and(|v| v < 0.5), 1),
        ],
    },
    ScoreRule {
        metric: "max_drawdown",
        tiers: &[
            (|m| m.max_drawdown < -0.5, 2),
            (|m| m.max_drawdown < -0.3, 1),
        ],
    },
    ScoreRule {
        metric: "beta_btc",
        tiers: &[
            (|m| m.beta_btc.is_some_and(|v| v.abs() > 2.0), 2),
            (|m| m.beta_btc.is_some_and(|v| v.abs() > 1.5), 1),
        ],
    },
    ScoreRule {
        metric: "herfindahl_index",
        tiers: &[
            (|m| m.herfindahl_index > 0.5, 2),
            (|m| m.herfindahl_index > 0.3, 1),
        ],
    },
    ScoreRule {
        metric: "var_95",
        tiers: &[(|m| m.var_95.is_some_and(|v| v < -0.1), 1)],
    },
];

/// Composite 1-10 risk score for a set of metrics.
///
/// Grades annualized 30-day volatility, Sharpe ratio, maximum drawdown, BTC
/// beta, concentration and 95% VaR against fixed thresholds, adds the
/// increments to a base of [`MIN_RISK_SCORE`] and clamps the total to
/// [[`MIN_RISK_SCORE`], [`MAX_RISK_SCORE`]].
pub fn risk_score(metrics: &RiskMetrics) -> u8 {
    let mut score = MIN_RISK_SCORE;
    for rule in RULES {
        if let Some((_, increment)) = rule.tiers.iter().find(|(applies, _)| applies(metrics)) {
            debug!("Risk rule {} fired (+{})", rule.metric, increment);
            score += increment;
        }
    }
    score.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE)
}

/// Like [`risk_score`], but any panic raised while scoring is caught and
/// [`DEFAULT_RISK_SCORE`] is reported after logging a warning.
pub fn risk_score_or_default(metrics: &RiskMetrics) -> u8 {
    score_or_fallback(|| risk_score(metrics))
}

fn score_or_fallback(score: impl FnOnce() -> u8) -> u8 {
    match catch_unwind(AssertUnwindSafe(score)) {
        Ok(score) => score,
        Err(_) => {
            warn!(
                "Risk scoring panicked, reporting fallback score {}",
                DEFAULT_RISK_SCORE
            );
            DEFAULT_RISK_SCORE
        }
    }
}
