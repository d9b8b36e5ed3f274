//! Price observation type for asset price histories.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DownsideError, DownsideResult};

/// A single dated price observation for one asset.
///
/// Price histories are the raw input for return calculations. Prices are
/// carried as `Decimal` so the return ratios are formed without binary
/// floating-point drift; everything derived from them downstream is `f64`.
///
/// # Example
///
/// ```rust
/// use downside_core::types::PricePoint;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal_macros::dec;
///
/// let observed = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let point = PricePoint::new("BTC", observed, dec!(42000.50)).unwrap();
/// assert_eq!(point.asset_id(), "BTC");
/// assert_eq!(point.price(), dec!(42000.50));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Asset identifier (exchange symbol or internal id).
    asset_id: String,
    /// Observation time (UTC).
    timestamp: DateTime<Utc>,
    /// Observed price.
    price: Decimal,
}

impl PricePoint {
    /// Creates a new price observation.
    ///
    /// # Errors
    ///
    /// Returns `DownsideError::InvalidPrice` if the price is not positive.
    pub fn new(
        asset_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        price: Decimal,
    ) -> DownsideResult<Self> {
        let asset_id = asset_id.into();
        if price <= Decimal::ZERO {
            return Err(DownsideError::invalid_price(
                asset_id,
                price,
                "price must be positive",
            ));
        }
        Ok(Self {
            asset_id,
            timestamp,
            price,
        })
    }

    /// Returns the asset identifier.
    #[must_use]
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Returns the observation timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the observed price.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.asset_id, self.timestamp, self.price)
    }
}
