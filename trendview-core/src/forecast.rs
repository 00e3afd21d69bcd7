//! Forward projection of the last price.
//!
//! This is a placeholder stochastic process, not a model. Each month draws
//! `u` uniformly in `[0, 1)` and emits `max(5, base + (u - 0.4) * 6)`: a band
//! of `[-2.4, +3.6)` around the base with a mean drift of +0.6. Every month
//! perturbs the same base; nothing compounds.
//!
//! Dates are `today + m` calendar months. When the target month is shorter
//! than today's day of month, the date clamps to the last day of that month
//! (Jan 31 + 1 month = Feb 28, or Feb 29 in leap years). Each date is derived
//! from `today` directly, so the sequence is strictly increasing.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::domain::{round_cents, ForecastPoint, FORECAST_FLOOR};
use crate::error::PipelineError;
use crate::rng::RandomSource;

/// Default projection horizon in months.
pub const DEFAULT_HORIZON_MONTHS: usize = 6;

const UPWARD_BIAS: f64 = 0.4;
const SPREAD: f64 = 6.0;

#[derive(Debug, Clone)]
pub struct ForecastProjector {
    horizon_months: usize,
}

impl ForecastProjector {
    pub fn new(horizon_months: usize) -> Result<Self, PipelineError> {
        PipelineError::require_positive("horizon_months", horizon_months)?;
        Ok(Self { horizon_months })
    }

    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    pub fn project<R: RandomSource + ?Sized>(
        &self,
        last_price: f64,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<ForecastPoint>, PipelineError> {
        let base = if last_price.is_finite() && last_price > 0.0 {
            last_price
        } else {
            FORECAST_FLOOR
        };

        // The last date is the furthest out; if it exists, so do the rest.
        month_offset(today, self.horizon_months)?;

        let mut points = Vec::with_capacity(self.horizon_months);
        for month in 1..=self.horizon_months {
            let date = month_offset(today, month)?;
            let noise = (rng.next_f64() - UPWARD_BIAS) * SPREAD;
            points.push(ForecastPoint {
                date,
                forecast: round_cents((base + noise).max(FORECAST_FLOOR)),
            });
        }

        debug!(base, horizon = self.horizon_months, "projected forecast");
        Ok(points)
    }
}

impl Default for ForecastProjector {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

/// Project `horizon_months` monthly points from `last_price`.
pub fn project<R: RandomSource + ?Sized>(
    last_price: f64,
    horizon_months: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ForecastPoint>, PipelineError> {
    ForecastProjector::new(horizon_months)?.project(last_price, today, rng)
}

/// `today + months`, clamped to the last day of the target month.
pub fn month_offset(today: NaiveDate, months: usize) -> Result<NaiveDate, PipelineError> {
    u32::try_from(months)
        .ok()
        .and_then(|m| today.checked_add_months(Months::new(m)))
        .ok_or_else(|| {
            PipelineError::invalid("horizon_months", "reaches past the latest representable date")
        })
}
