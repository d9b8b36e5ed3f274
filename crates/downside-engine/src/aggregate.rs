//! Weighted aggregation of per-asset returns into a portfolio series.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use downside_core::{PortfolioWeights, ReturnSeries};

use crate::error::{EngineError, EngineResult};

/// Minimum number of aligned observations for a usable portfolio series.
pub const MIN_PORTFOLIO_OBSERVATIONS: usize = 2;

/// Aggregates per-asset return series into one weighted portfolio series.
///
/// The portfolio timeline is the union of every asset's timestamps. An asset
/// with no return on a date contributes zero for that date, and each
/// portfolio return is the weighted sum of the per-asset returns. Assets
/// absent from the weights count as zero-weighted.
///
/// # Errors
///
/// Returns [`EngineError::InsufficientData`] when the union timeline holds
/// fewer than [`MIN_PORTFOLIO_OBSERVATIONS`] dates.
pub fn aggregate_portfolio_returns(
    series: &BTreeMap<String, ReturnSeries>,
    weights: &PortfolioWeights,
) -> EngineResult<ReturnSeries> {
    let timeline: BTreeSet<DateTime<Utc>> =
        series.values().flat_map(ReturnSeries::timestamps).collect();
    if timeline.len() < MIN_PORTFOLIO_OBSERVATIONS {
        return Err(EngineError::insufficient_data(format!(
            "portfolio series needs at least {} aligned observations, got {}",
            MIN_PORTFOLIO_OBSERVATIONS,
            timeline.len()
        )));
    }

    let aligned: Vec<(f64, BTreeMap<DateTime<Utc>, f64>)> = series
        .iter()
        .map(|(asset_id, s)| (weights.weight_or_zero(asset_id), s.value_map()))
        .collect();

    let points = timeline.into_iter().map(|ts| {
        let value = aligned
            .iter()
            .map(|(weight, values)| weight * values.get(&ts).copied().unwrap_or(0.0))
            .sum::<f64>();
        (ts, value)
    });
    Ok(ReturnSeries::from_pairs(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn day(i: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i)
    }

    fn series(pairs: &[(i64, f64)]) -> ReturnSeries {
        ReturnSeries::from_pairs(pairs.iter().map(|(i, v)| (day(*i), *v)))
    }

    #[test]
    fn test_weighted_sum() {
        let mut assets = BTreeMap::new();
        assets.insert("BTC".to_string(), series(&[(1, 0.10), (2, -0.10)]));
        assets.insert("ETH".to_string(), series(&[(1, 0.02), (2, 0.04)]));
        let weights = PortfolioWeights::from_pairs([("BTC", 0.5), ("ETH", 0.5)]).unwrap();

        let portfolio = aggregate_portfolio_returns(&assets, &weights).unwrap();
        assert_eq!(portfolio.len(), 2);
        assert_relative_eq!(portfolio.points()[0].value, 0.06, epsilon = 1e-12);
        assert_relative_eq!(portfolio.points()[1].value, -0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_dates_fill_as_zero() {
        let mut assets = BTreeMap::new();
        assets.insert("BTC".to_string(), series(&[(1, 0.10), (2, 0.20)]));
        assets.insert("ETH".to_string(), series(&[(1, 0.02)]));
        let weights = PortfolioWeights::from_pairs([("BTC", 0.5), ("ETH", 0.5)]).unwrap();

        let portfolio = aggregate_portfolio_returns(&assets, &weights).unwrap();
        assert_eq!(portfolio.len(), 2);
        assert_relative_eq!(portfolio.points()[0].value, 0.06, epsilon = 1e-12);
        assert_relative_eq!(portfolio.points()[1].value, 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_unweighted_asset_contributes_nothing() {
        let mut assets = BTreeMap::new();
        assets.insert("BTC".to_string(), series(&[(1, 0.10), (2, -0.05)]));
        assets.insert("ETH".to_string(), series(&[(1, 0.5), (2, 0.5)]));
        let weights = PortfolioWeights::from_pairs([("BTC", 1.0)]).unwrap();

        let portfolio = aggregate_portfolio_returns(&assets, &weights).unwrap();
        assert_relative_eq!(portfolio.points()[0].value, 0.10, epsilon = 1e-12);
        assert_relative_eq!(portfolio.points()[1].value, -0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let weights = PortfolioWeights::single("BTC");
        let err = aggregate_portfolio_returns(&BTreeMap::new(), &weights).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientData { .. }));
        assert!(err.to_string().contains("Insufficient data"));
    }

    #[test]
    fn test_single_observation_is_an_error() {
        let mut assets = BTreeMap::new();
        assets.insert("BTC".to_string(), series(&[(1, 0.10)]));
        let weights = PortfolioWeights::single("BTC");
        let err = aggregate_portfolio_returns(&assets, &weights).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientData { .. }));
    }
}
