//! Portfolio concentration measures.

use downside_core::PortfolioWeights;

/// Herfindahl-Hirschman concentration index.
///
/// ## Formula
///
/// ```text
/// hhi = sum((w_i / sum(w))^2)
/// ```
///
/// Weights are normalized before squaring, so unnormalized inputs score the
/// same as their normalized form. Ranges from 1/N for an equal-weight
/// portfolio of N assets up to 1.0 for a single holding. An empty portfolio
/// or one with zero total weight scores 0.0.
pub fn herfindahl_index(weights: &PortfolioWeights) -> f64 {
    let total = weights.total();
    if total <= 0.0 {
        return 0.0;
    }
    weights.iter().map(|(_, w)| (w / total).powi(2)).sum()
}

/// Number of equally-weighted assets with the same concentration.
///
/// The reciprocal of [`herfindahl_index`]. Returns `None` for an empty
/// portfolio.
pub fn effective_assets(weights: &PortfolioWeights) -> Option<f64> {
    let hhi = herfindahl_index(weights);
    if hhi > 0.0 {
        Some(1.0 / hhi)
    } else {
        None
    }
}
