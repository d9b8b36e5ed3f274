//! Beta against a benchmark return series.

use downside_core::ReturnSeries;

use crate::MIN_OBSERVATIONS;

/// Beta of an asset or portfolio against a benchmark.
///
/// ## Formula
///
/// ```text
/// beta = cov(r_asset, r_benchmark) / var(r_benchmark)
/// ```
///
/// Returns are aligned on timestamp first; only dates present in both series
/// contribute. Returns `None` when either series, or the aligned overlap,
/// has fewer than [`MIN_OBSERVATIONS`] points, or the benchmark shows zero
/// variance over the overlap.
pub fn beta(asset: &ReturnSeries, benchmark: &ReturnSeries) -> Option<f64> {
    if asset.len() < MIN_OBSERVATIONS || benchmark.len() < MIN_OBSERVATIONS {
        return None;
    }
    let bench = benchmark.value_map();
    let pairs: Vec<(f64, f64)> = asset
        .points()
        .iter()
        .filter_map(|p| bench.get(&p.timestamp).map(|b| (p.value, *b)))
        .collect();
    if pairs.len() < MIN_OBSERVATIONS {
        return None;
    }
    // A flat benchmark has nothing to regress against. Checked on the raw
    // values, since the computed variance of a constant sample carries
    // summation noise instead of landing on exactly zero.
    if pairs.windows(2).all(|w| w[0].1 == w[1].1) {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_a = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_b = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_b = 0.0;
    for (a, b) in &pairs {
        cov += (a - mean_a) * (b - mean_b);
        var_b += (b - mean_b).powi(2);
    }
    if var_b == 0.0 {
        return None;
    }
    // Matching denominators cancel in the ratio.
    Some(cov / var_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(i: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(i)
    }

    fn varying_series(scale: f64, len: i64) -> ReturnSeries {
        ReturnSeries::from_pairs(
            (0..len).map(|i| (day(i), scale * ((i % 7) as f64 * 0.01 - 0.03))),
        )
    }

    #[test]
    fn test_beta_against_itself_is_one() {
        let series = varying_series(1.0, 40);
        assert_relative_eq!(beta(&series, &series).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_scales_with_amplitude() {
        let benchmark = varying_series(1.0, 40);
        let levered = varying_series(2.0, 40);
        assert_relative_eq!(beta(&levered, &benchmark).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_requires_overlap() {
        let asset = varying_series(1.0, 40);
        let shifted = ReturnSeries::from_pairs(
            (0..40).map(|i| (day(i + 1000), (i % 7) as f64 * 0.01 - 0.03)),
        );
        assert!(beta(&asset, &shifted).is_none());
    }

    #[test]
    fn test_beta_flat_benchmark() {
        // 0.001 is inexact in binary, so the computed benchmark variance is
        // rounding noise rather than zero; beta must still be None.
        let asset = varying_series(1.0, 40);
        let flat = ReturnSeries::from_pairs((0..40).map(|i| (day(i), 0.001)));
        assert!(beta(&asset, &flat).is_none());
    }

    #[test]
    fn test_beta_insufficient_data() {
        let short = varying_series(1.0, 10);
        let long = varying_series(1.0, 40);
        assert!(beta(&short, &long).is_none());
        assert!(beta(&long, &short).is_none());
    }
}
