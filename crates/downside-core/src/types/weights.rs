//! Portfolio weight mapping.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{DownsideError, DownsideResult};

/// Portfolio weights by asset identifier.
///
/// Weights are economic shares, typically current value over total value.
/// The mapping is ordered by asset id so every artifact derived from it
/// (aggregation order, correlation labels) is identical for identical
/// inputs.
///
/// Weights are applied as supplied; only the concentration metrics
/// normalize internally, so callers wanting a true portfolio series should
/// pass shares that sum to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWeights {
    weights: BTreeMap<String, f64>,
}

impl PortfolioWeights {
    /// Creates an empty weight mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates weights from an asset to weight map.
    ///
    /// # Errors
    ///
    /// Returns `DownsideError::InvalidWeight` if any weight is negative or
    /// not finite.
    pub fn from_map(weights: BTreeMap<String, f64>) -> DownsideResult<Self> {
        for (asset, weight) in &weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(DownsideError::invalid_weight(asset.clone(), *weight));
            }
        }
        Ok(Self { weights })
    }

    /// Creates weights from (asset, weight) pairs.
    ///
    /// # Errors
    ///
    /// Returns `DownsideError::InvalidWeight` if any weight is negative or
    /// not finite.
    pub fn from_pairs<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, f64)>,
    ) -> DownsideResult<Self> {
        Self::from_map(
            pairs
                .into_iter()
                .map(|(asset, weight)| (asset.into(), weight))
                .collect(),
        )
    }

    /// Creates a single-asset weighting at weight 1.0.
    #[must_use]
    pub fn single(asset_id: impl Into<String>) -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(asset_id.into(), 1.0);
        Self { weights }
    }

    /// Derives weights from current valuations (value / total value).
    ///
    /// Returns an empty mapping when the input is empty or the total is not
    /// positive.
    #[must_use]
    pub fn from_valuations(valuations: &BTreeMap<String, Decimal>) -> Self {
        let total: Decimal = valuations.values().copied().sum();
        if total <= Decimal::ZERO {
            return Self::default();
        }
        let weights = valuations
            .iter()
            .filter_map(|(asset, value)| {
                let share = value.checked_div(total)?;
                Some((asset.clone(), share.to_f64()?))
            })
            .collect();
        Self { weights }
    }

    /// Returns the weight for an asset, if present.
    #[must_use]
    pub fn get(&self, asset_id: &str) -> Option<f64> {
        self.weights.get(asset_id).copied()
    }

    /// Returns the weight for an asset, or 0.0 when absent.
    #[must_use]
    pub fn weight_or_zero(&self, asset_id: &str) -> f64 {
        self.get(asset_id).unwrap_or(0.0)
    }

    /// Returns the number of assets with a weight entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no weights are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates (asset, weight) in asset id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(asset, w)| (asset.as_str(), *w))
    }

    /// Returns the sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }
}
