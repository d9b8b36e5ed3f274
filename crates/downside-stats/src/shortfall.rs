//! Expected shortfall, the average loss beyond Value at Risk.

use crate::descriptive::mean;
use crate::var::{value_at_risk, VarMethod};
use crate::MIN_OBSERVATIONS;

/// Expected shortfall at the given confidence level.
///
/// ## Formula
///
/// ```text
/// es = mean(r : r <= var)
/// ```
///
/// The average of the returns at or beyond the VaR threshold, answering how
/// bad the typical day is once the VaR level is breached. The threshold
/// comes from the selected method; the tail average itself is always
/// empirical. When no observation reaches the threshold, which can happen
/// with a parametric threshold below the sample minimum, the threshold
/// itself is reported.
///
/// Returns `None` when fewer than [`MIN_OBSERVATIONS`] returns are available
/// or the confidence level is outside (0, 1).
pub fn expected_shortfall(returns: &[f64], confidence: f64, method: VarMethod) -> Option<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return None;
    }
    let threshold = value_at_risk(returns, confidence, method)?;
    let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= threshold).collect();
    if tail.is_empty() {
        return Some(threshold);
    }
    mean(&tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_shortfall_historical_tail_mean() {
        let returns: Vec<f64> = (0..100).map(f64::from).collect();
        // VaR at 95% is 4.95, so the tail is {0, 1, 2, 3, 4}.
        let es = expected_shortfall(&returns, 0.95, VarMethod::Historical).unwrap();
        assert_relative_eq!(es, 2.0);
        let es_99 = expected_shortfall(&returns, 0.99, VarMethod::Historical).unwrap();
        assert_relative_eq!(es_99, 0.0);
    }

    #[test]
    fn test_expected_shortfall_at_most_var() {
        let returns: Vec<f64> = (0..120).map(|i| (i % 17) as f64 * 0.004 - 0.03).collect();
        for method in [VarMethod::Historical, VarMethod::Parametric] {
            let var = value_at_risk(&returns, 0.95, method).unwrap();
            let es = expected_shortfall(&returns, 0.95, method).unwrap();
            assert!(es <= var, "{method}: es {es} exceeds var {var}");
        }
    }

    #[test]
    fn test_expected_shortfall_empty_tail_reports_threshold() {
        // A two-valued sample leaves nothing at or below the normal quantile.
        let returns: Vec<f64> = (0..100)
            .map(|i| if i % 2 == 0 { 0.01 } else { -0.01 })
            .collect();
        let var = value_at_risk(&returns, 0.95, VarMethod::Parametric).unwrap();
        let es = expected_shortfall(&returns, 0.95, VarMethod::Parametric).unwrap();
        assert_relative_eq!(es, var);
    }

    #[test]
    fn test_expected_shortfall_insufficient_data() {
        let returns = vec![0.01; 29];
        assert!(expected_shortfall(&returns, 0.95, VarMethod::Historical).is_none());
    }
}
