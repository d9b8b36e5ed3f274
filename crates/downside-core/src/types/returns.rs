//! Return series types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single percentage return observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    /// Observation time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Simple percentage return (0.05 = +5%).
    pub value: f64,
}

impl ReturnPoint {
    /// Creates a new return observation.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered series of percentage returns for one asset or portfolio.
///
/// Observations are kept sorted ascending by timestamp. Duplicate
/// timestamps are preserved in their incoming order; de-duplication is an
/// upstream data quality concern, not a series concern.
///
/// # Example
///
/// ```rust
/// use downside_core::types::ReturnSeries;
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let series = ReturnSeries::from_pairs([
///     (start + Duration::days(1), -0.02),
///     (start, 0.01),
/// ]);
/// assert_eq!(series.values(), vec![0.01, -0.02]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    /// Creates a series from observations, sorted ascending by timestamp.
    #[must_use]
    pub fn new(mut points: Vec<ReturnPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Creates a series from (timestamp, value) pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (DateTime<Utc>, f64)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(timestamp, value)| ReturnPoint::new(timestamp, value))
                .collect(),
        )
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the observations in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[ReturnPoint] {
        &self.points
    }

    /// Returns the return values in timestamp order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Returns the timestamps in order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Returns a timestamp to value lookup map.
    ///
    /// Duplicate timestamps keep the last value in series order.
    #[must_use]
    pub fn value_map(&self) -> BTreeMap<DateTime<Utc>, f64> {
        self.points
            .iter()
            .map(|p| (p.timestamp, p.value))
            .collect()
    }
}
