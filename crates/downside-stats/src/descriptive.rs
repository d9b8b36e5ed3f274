//! Descriptive statistics over return samples.
//!
//! These are the building blocks the higher-level risk metrics are assembled
//! from. All functions return `None` when the sample is too small to support
//! the statistic rather than producing a misleading number.

/// Arithmetic mean of a sample.
///
/// Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with one delta degree of freedom.
///
/// Returns `None` when fewer than two observations are available.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mu = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>();
    Some(sum_sq / (n - 1) as f64)
}

/// Sample standard deviation with one delta degree of freedom.
///
/// Returns `None` when fewer than two observations are available.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Population standard deviation (no degrees-of-freedom correction).
///
/// Returns `None` for an empty slice.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let n = values.len() as f64;
    let sum_sq = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>();
    Some((sum_sq / n).sqrt())
}

/// True when every value is bit-identical to the first.
///
/// Exact check for constant samples, whose computed central moments carry
/// summation noise instead of landing on exactly zero.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Central moment of the given order.
fn central_moment(values: &[f64], mu: f64, order: i32) -> f64 {
    let n = values.len() as f64;
    values.iter().map(|v| (v - mu).powi(order)).sum::<f64>() / n
}

/// Sample skewness with bias correction.
///
/// ## Formula
///
/// ```text
/// g1 = m3 / m2^(3/2)
/// G1 = g1 * sqrt(n * (n - 1)) / (n - 2)
/// ```
///
/// where `m2` and `m3` are the second and third central moments. Positive
/// skew means the right tail is heavier; crypto return series are typically
/// negatively skewed.
///
/// Returns `None` when fewer than three observations are available or the
/// sample has zero variance.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    if is_constant(values) {
        return None;
    }
    let mu = mean(values)?;
    let m2 = central_moment(values, mu, 2);
    if m2 == 0.0 {
        return None;
    }
    let m3 = central_moment(values, mu, 3);
    let g1 = m3 / m2.powf(1.5);
    let nf = n as f64;
    Some(g1 * (nf * (nf - 1.0)).sqrt() / (nf - 2.0))
}

/// Sample excess kurtosis with bias correction.
///
/// ## Formula
///
/// ```text
/// g2 = m4 / m2^2 - 3
/// G2 = ((n + 1) * g2 + 6) * (n - 1) / ((n - 2) * (n - 3))
/// ```
///
/// A normal distribution scores zero. Positive values indicate fat tails,
/// the usual regime for crypto assets.
///
/// Returns `None` when fewer than four observations are available or the
/// sample has zero variance.
pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    if is_constant(values) {
        return None;
    }
    let mu = mean(values)?;
    let m2 = central_moment(values, mu, 2);
    if m2 == 0.0 {
        return None;
    }
    let m4 = central_moment(values, mu, 4);
    let g2 = m4 / m2.powi(2) - 3.0;
    let nf = n as f64;
    Some(((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)))
}
