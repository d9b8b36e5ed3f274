//! Return series construction from raw price history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use downside_core::{PricePoint, ReturnSeries};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

/// Builds per-asset daily return series from a price history.
///
/// Prices are grouped by asset and sorted by timestamp; each consecutive
/// pair yields one percentage return, so an asset with N prices produces
/// N - 1 returns stamped with the later timestamp. An asset with fewer than
/// two observations cannot produce a return and is skipped with a debug log
/// instead of failing the whole batch.
pub fn build_return_series(prices: &[PricePoint]) -> BTreeMap<String, ReturnSeries> {
    let mut by_asset: BTreeMap<String, Vec<(DateTime<Utc>, Decimal)>> = BTreeMap::new();
    for point in prices {
        by_asset
            .entry(point.asset_id().to_string())
            .or_default()
            .push((point.timestamp(), point.price()));
    }

    let mut series = BTreeMap::new();
    for (asset_id, mut history) in by_asset {
        if history.len() < 2 {
            debug!(
                "Skipping asset {} with {} price observations",
                asset_id,
                history.len()
            );
            continue;
        }
        history.sort_by_key(|(ts, _)| *ts);
        let mut points = Vec::with_capacity(history.len() - 1);
        for pair in history.windows(2) {
            let (_, prev) = pair[0];
            let (ts, curr) = pair[1];
            let value = match curr
                .checked_div(prev)
                .map(|ratio| ratio - Decimal::ONE)
                .and_then(|delta| delta.to_f64())
            {
                Some(v) => v,
                None => continue,
            };
            points.push((ts, value));
        }
        if points.is_empty() {
            continue;
        }
        series.insert(asset_id, ReturnSeries::from_pairs(points));
    }
    series
}
