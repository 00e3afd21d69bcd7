//! Synthetic daily price series.
//!
//! A random walk starting uniformly in `[100, 150)`. Each day after the first
//! adds a periodic drift `0.2 * sin(r / 9)` plus bounded noise
//! `(u - 0.5) * 0.8`, where `r` is the number of days remaining until today.
//! The walk is floored at [`PRICE_FLOOR`] and carried unrounded; only the
//! emitted prices are rounded to cents.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::domain::{round_cents, PricePoint, PRICE_FLOOR};
use crate::error::PipelineError;
use crate::rng::RandomSource;

/// Default series length: 120 trailing days plus today.
pub const DEFAULT_LENGTH: usize = 121;

const START_PRICE_LOW: f64 = 100.0;
const START_PRICE_HIGH: f64 = 150.0;
const DRIFT_AMPLITUDE: f64 = 0.2;
const DRIFT_PERIOD_DAYS: f64 = 9.0;
const NOISE_SCALE: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    length: usize,
    start_price: Option<f64>,
}

impl SeriesGenerator {
    pub fn new(length: usize) -> Result<Self, PipelineError> {
        PipelineError::require_positive("length", length)?;
        Ok(Self {
            length,
            start_price: None,
        })
    }

    /// Pin the starting price instead of drawing it. No draw is consumed.
    pub fn with_start_price(mut self, price: f64) -> Self {
        self.start_price = Some(price);
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate `length` consecutive daily points ending at `today`.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        symbol: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>, PipelineError> {
        if symbol.trim().is_empty() {
            return Err(PipelineError::invalid("symbol", "must not be empty"));
        }

        let span = (self.length - 1) as u64;
        let first_day = today.checked_sub_days(Days::new(span)).ok_or_else(|| {
            PipelineError::invalid("length", "reaches past the earliest representable date")
        })?;

        let mut price = match self.start_price {
            Some(p) => p,
            None => rng.uniform(START_PRICE_LOW, START_PRICE_HIGH),
        }
        .max(PRICE_FLOOR);

        let mut points = Vec::with_capacity(self.length);
        for (offset, date) in first_day.iter_days().take(self.length).enumerate() {
            if offset > 0 {
                let days_remaining = self.length - 1 - offset;
                price = (price + drift(days_remaining, rng)).max(PRICE_FLOOR);
            }
            points.push(PricePoint {
                date,
                price: round_cents(price),
                symbol: symbol.to_string(),
            });
        }

        debug!(symbol, length = self.length, %first_day, "generated synthetic series");
        Ok(points)
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            start_price: None,
        }
    }
}

/// Generate a series of `length` points ending at `today`.
pub fn generate<R: RandomSource + ?Sized>(
    symbol: &str,
    length: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<PricePoint>, PipelineError> {
    SeriesGenerator::new(length)?.generate(symbol, today, rng)
}

fn drift<R: RandomSource + ?Sized>(days_remaining: usize, rng: &mut R) -> f64 {
    let periodic = DRIFT_AMPLITUDE * (days_remaining as f64 / DRIFT_PERIOD_DAYS).sin();
    let noise = (rng.next_f64() - 0.5) * NOISE_SCALE;
    periodic + noise
}
