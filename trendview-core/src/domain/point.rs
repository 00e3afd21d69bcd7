//! Price, smoothed and forecast points flowing through the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest price the random walk may emit.
pub const PRICE_FLOOR: f64 = 10.0;

/// Lowest value the forecast projector may emit.
pub const FORECAST_FLOOR: f64 = 5.0;

/// One synthetic daily observation for a single symbol.
///
/// Produced by the series generator and never mutated afterwards. Within a
/// series there is exactly one point per calendar day, in ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
    pub symbol: String,
}

/// A price point paired with its trailing moving average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub symbol: String,
    pub moving_average: f64,
}

impl SmoothedPoint {
    pub fn from_price(point: &PricePoint, moving_average: f64) -> Self {
        Self {
            date: point.date,
            price: point.price,
            symbol: point.symbol.clone(),
            moving_average,
        }
    }

    /// The underlying price point, without the average.
    pub fn to_price_point(&self) -> PricePoint {
        PricePoint {
            date: self.date,
            price: self.price,
            symbol: self.symbol.clone(),
        }
    }
}

/// A projected value at a future month boundary.
///
/// Illustrative only: the projector is a biased perturbation of the last
/// price, not a statistical model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub forecast: f64,
}

/// Round to 2 decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
