//! Pairwise return correlations.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use downside_core::ReturnSeries;
use serde::{Deserialize, Serialize};

/// Pearson correlations between every pair of assets.
///
/// Labels are sorted lexicographically and `values[i][j]` holds the
/// correlation between assets `i` and `j`. The matrix is symmetric with a
/// unit diagonal. Undetermined cells, such as a pair involving a flat
/// series, hold `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    assets: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Asset labels in matrix order.
    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Number of assets covered.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns `true` when the matrix covers no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Cell by row and column index, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Option<f64>> {
        self.values.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Correlation between two assets by label.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let row = self.assets.iter().position(|x| x == a)?;
        let col = self.assets.iter().position(|x| x == b)?;
        self.get(row, col).flatten()
    }

    /// Matrix rows in label order.
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }
}

/// Correlation matrix across the given return series.
///
/// Series are aligned on the union of their timestamps, with missing values
/// filled as zero to match the portfolio aggregation convention. Each pair
/// is scored with the Pearson coefficient over the aligned columns.
pub fn correlation_matrix(series: &BTreeMap<String, ReturnSeries>) -> CorrelationMatrix {
    let assets: Vec<String> = series.keys().cloned().collect();
    let timeline: BTreeSet<DateTime<Utc>> =
        series.values().flat_map(ReturnSeries::timestamps).collect();
    let columns: Vec<Vec<f64>> = series
        .values()
        .map(|s| {
            let map = s.value_map();
            timeline
                .iter()
                .map(|ts| map.get(ts).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    let n = assets.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let rho = pearson(&columns[i], &columns[j]);
            values[i][j] = rho;
            values[j][i] = rho;
        }
    }
    CorrelationMatrix { assets, values }
}

/// Pearson correlation of two equal-length samples.
fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    let n = a.len();
    if n < 2 {
        return None;
    }
    // A constant column has no variance. Checked on the raw values, since
    // the computed variance of a constant sample carries summation noise
    // instead of landing on exactly zero.
    if a.windows(2).all(|w| w[0] == w[1]) || b.windows(2).all(|w| w[0] == w[1]) {
        return None;
    }
    let nf = n as f64;
    let mean_a = a.iter().sum::<f64>() / nf;
    let mean_b = b.iter().sum::<f64>() / nf;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }
    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn day(i: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i)
    }

    fn series_from(scale: f64, len: i64) -> ReturnSeries {
        ReturnSeries::from_pairs(
            (0..len).map(|i| (day(i), scale * ((i % 7) as f64 * 0.01 - 0.03))),
        )
    }

    fn pair(a: ReturnSeries, b: ReturnSeries) -> BTreeMap<String, ReturnSeries> {
        BTreeMap::from([("BTC".to_string(), a), ("ETH".to_string(), b)])
    }

    #[test]
    fn test_perfectly_correlated_pair() {
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), series_from(2.0, 40)));
        assert_relative_eq!(matrix.between("BTC", "ETH").unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_anti_correlated_pair() {
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), series_from(-1.0, 40)));
        assert_relative_eq!(matrix.between("BTC", "ETH").unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_diagonal_and_symmetry() {
        let mut series = pair(series_from(1.0, 40), series_from(-0.5, 40));
        series.insert(
            "SOL".to_string(),
            ReturnSeries::from_pairs((0..40).map(|i| (day(i), (i % 11) as f64 * 0.002))),
        );
        let matrix = correlation_matrix(&series);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i).unwrap(), Some(1.0));
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn test_labels_are_sorted() {
        let mut series = BTreeMap::new();
        series.insert("ETH".to_string(), series_from(1.0, 10));
        series.insert("BTC".to_string(), series_from(1.0, 10));
        let matrix = correlation_matrix(&series);
        assert_eq!(matrix.assets(), ["BTC".to_string(), "ETH".to_string()]);
    }

    #[test]
    fn test_flat_series_is_undetermined() {
        let flat = ReturnSeries::from_pairs((0..40).map(|i| (day(i), 0.0)));
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), flat));
        assert_eq!(matrix.get(0, 1).unwrap(), None);
        assert!(matrix.between("BTC", "ETH").is_none());
        // The diagonal stays determined.
        assert_eq!(matrix.get(1, 1).unwrap(), Some(1.0));
    }

    #[test]
    fn test_flat_nonzero_series_is_undetermined() {
        // 0.001 is inexact in binary, so the column's computed variance is
        // rounding noise rather than zero; the pair must still be None.
        let flat = ReturnSeries::from_pairs((0..40).map(|i| (day(i), 0.001)));
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), flat));
        assert!(matrix.between("BTC", "ETH").is_none());
        assert_eq!(matrix.get(1, 1).unwrap(), Some(1.0));
    }

    #[test]
    fn test_partial_overlap_uses_union() {
        // ETH misses the first 20 days; the gap is filled with zeros.
        let btc = series_from(1.0, 40);
        let eth = ReturnSeries::from_pairs(
            (20..40).map(|i| (day(i), (i % 7) as f64 * 0.01 - 0.03)),
        );
        let matrix = correlation_matrix(&pair(btc, eth));
        let rho = matrix.between("BTC", "ETH").unwrap();
        assert!(rho > 0.0 && rho < 1.0);
    }

    #[test]
    fn test_empty_input() {
        let matrix = correlation_matrix(&BTreeMap::new());
        assert!(matrix.is_empty());
        assert_eq!(matrix.len(), 0);
    }

    #[test]
    fn test_unknown_label() {
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), series_from(2.0, 40)));
        assert!(matrix.between("BTC", "DOGE").is_none());
    }

    #[test]
    fn test_matrix_serde_roundtrip() {
        let matrix = correlation_matrix(&pair(series_from(1.0, 40), series_from(2.0, 40)));
        let json = serde_json::to_string(&matrix).unwrap();
        let back: CorrelationMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }
}
