//! Smoothing filter: price series in, series with moving average out.

use crate::domain::{round_cents, PricePoint, SmoothedPoint};
use crate::error::PipelineError;
use crate::indicators::{Indicator, MovingAverage};

pub use crate::indicators::moving_average::DEFAULT_WINDOW;

/// Attaches a trailing moving average to every point of a series.
///
/// Pure and length-preserving. Date, price and symbol are copied unchanged;
/// the average is rounded to cents.
#[derive(Debug, Clone, Default)]
pub struct SmoothingFilter {
    indicator: MovingAverage,
}

impl SmoothingFilter {
    pub fn new(window: usize) -> Result<Self, PipelineError> {
        Ok(Self {
            indicator: MovingAverage::new(window)?,
        })
    }

    pub fn window(&self) -> usize {
        self.indicator.window()
    }

    /// Label for legends, e.g. "MA(14)".
    pub fn label(&self) -> &str {
        self.indicator.name()
    }

    pub fn apply(&self, series: &[PricePoint]) -> Vec<SmoothedPoint> {
        let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
        let averages = self.indicator.compute(&prices);
        series
            .iter()
            .zip(averages)
            .map(|(point, avg)| SmoothedPoint::from_price(point, round_cents(avg)))
            .collect()
    }
}

/// Smooth `series` with a trailing window of `window` points.
pub fn smooth(series: &[PricePoint], window: usize) -> Result<Vec<SmoothedPoint>, PipelineError> {
    Ok(SmoothingFilter::new(window)?.apply(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_points(prices: &[f64]) -> Vec<PricePoint> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: base_date + chrono::Duration::days(i as i64),
                price,
                symbol: "TEST".to_string(),
            })
            .collect()
    }

    #[test]
    fn three_points_window_two() {
        let smoothed = smooth(&make_points(&[10.0, 20.0, 30.0]), 2).unwrap();
        let averages: Vec<_> = smoothed.iter().map(|p| p.moving_average).collect();
        assert_eq!(averages, vec![10.0, 15.0, 25.0]);
    }

    #[test]
    fn averages_are_rounded_to_cents() {
        let smoothed = smooth(&make_points(&[10.0, 10.02, 10.02]), 3).unwrap();
        // mean(10.00, 10.02, 10.02) = 10.01333…
        assert_eq!(smoothed[2].moving_average, 10.01);
        assert_eq!(smoothed[1].moving_average, 10.01);
    }

    #[test]
    fn copies_point_fields() {
        let points = make_points(&[101.5, 99.25]);
        let smoothed = smooth(&points, 14).unwrap();
        for (raw, s) in points.iter().zip(&smoothed) {
            assert_eq!(s.to_price_point(), *raw);
        }
    }

    #[test]
    fn empty_series() {
        assert!(smooth(&[], 14).unwrap().is_empty());
    }

    #[test]
    fn zero_window_rejected() {
        assert!(matches!(
            smooth(&make_points(&[1.0]), 0),
            Err(PipelineError::InvalidArgument { name: "window", .. })
        ));
    }

    #[test]
    fn repeated_application_is_identical() {
        let points = make_points(&[12.0, 13.5, 11.25, 14.0, 15.75]);
        let filter = SmoothingFilter::new(3).unwrap();
        assert_eq!(filter.apply(&points), filter.apply(&points));
    }

    #[test]
    fn default_filter_uses_fourteen_days() {
        let filter = SmoothingFilter::default();
        assert_eq!(filter.window(), DEFAULT_WINDOW);
        assert_eq!(filter.label(), "MA(14)");
    }
}
