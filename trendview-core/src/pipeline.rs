//! Generator → smoothing → projection, composed for one symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::domain::{round_cents, ForecastPoint, SmoothedPoint, Symbol};
use crate::error::PipelineError;
use crate::forecast::ForecastProjector;
use crate::generator::SeriesGenerator;
use crate::rng::RandomSource;
use crate::smoothing::SmoothingFilter;

/// Everything the dashboard shows for one symbol at one point in time.
///
/// Built wholesale by [`AnalyticsPipeline::run`] and replaced, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSnapshot {
    pub symbol: Symbol,
    pub generated_on: NaiveDate,
    pub history: Vec<SmoothedPoint>,
    pub forecast: Vec<ForecastPoint>,
}

impl SeriesSnapshot {
    pub fn last_price(&self) -> Option<f64> {
        self.history.last().map(|p| p.price)
    }

    /// Headline figures for the overview cards.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let last = self.history.last()?;
        let previous_price = self
            .history
            .len()
            .checked_sub(2)
            .map(|i| self.history[i].price);
        let (change, change_pct) = match previous_price {
            Some(prev) if prev != 0.0 => {
                let change = last.price - prev;
                (round_cents(change), round_cents(change / prev * 100.0))
            }
            _ => (0.0, 0.0),
        };
        let period_high = self.history.iter().map(|p| p.price).fold(f64::MIN, f64::max);
        let period_low = self.history.iter().map(|p| p.price).fold(f64::MAX, f64::min);

        Some(SeriesSummary {
            last_price: last.price,
            previous_price,
            change,
            change_pct,
            moving_average: last.moving_average,
            period_high,
            period_low,
            next_forecast: self.forecast.first().map(|p| p.forecast),
        })
    }
}

/// Headline figures derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSummary {
    pub last_price: f64,
    pub previous_price: Option<f64>,
    /// Day-over-day change, in price units.
    pub change: f64,
    /// Day-over-day change, in percent.
    pub change_pct: f64,
    pub moving_average: f64,
    pub period_high: f64,
    pub period_low: f64,
    pub next_forecast: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsPipeline {
    generator: SeriesGenerator,
    filter: SmoothingFilter,
    projector: ForecastProjector,
}

impl AnalyticsPipeline {
    pub fn new(
        generator: SeriesGenerator,
        filter: SmoothingFilter,
        projector: ForecastProjector,
    ) -> Self {
        Self {
            generator,
            filter,
            projector,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        Ok(Self::new(
            SeriesGenerator::new(config.length)?,
            SmoothingFilter::new(config.window)?,
            ForecastProjector::new(config.horizon_months)?,
        ))
    }

    pub fn filter(&self) -> &SmoothingFilter {
        &self.filter
    }

    /// Run all three stages for `symbol`, with `today` as the last day.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        symbol: &str,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<SeriesSnapshot, PipelineError> {
        debug!(
            symbol,
            %today,
            length = self.generator.length(),
            window = self.filter.window(),
            horizon = self.projector.horizon_months(),
            "running pipeline"
        );
        let series = self.generator.generate(symbol, today, rng)?;
        let history = self.filter.apply(&series);
        let last_price = history.last().map(|p| p.price).unwrap_or_default();
        let forecast = self.projector.project(last_price, today, rng)?;

        info!(
            symbol,
            points = history.len(),
            last_price,
            months = forecast.len(),
            "pipeline run complete"
        );

        Ok(SeriesSnapshot {
            symbol: symbol.to_string(),
            generated_on: today,
            history,
            forecast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ReplaySource, StdRandom};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    #[test]
    fn run_with_defaults() {
        let pipeline = AnalyticsPipeline::default();
        let snapshot = pipeline.run("AAPL", today(), &mut StdRandom::seeded(5)).unwrap();

        assert_eq!(snapshot.symbol, "AAPL");
        assert_eq!(snapshot.generated_on, today());
        assert_eq!(snapshot.history.len(), 121);
        assert_eq!(snapshot.forecast.len(), 6);
        assert_eq!(snapshot.history.last().unwrap().date, today());
        assert!(snapshot.forecast[0].date > today());
    }

    #[test]
    fn forecast_starts_from_last_price() {
        let config = PipelineConfig {
            length: 3,
            window: 2,
            horizon_months: 2,
        };
        let pipeline = AnalyticsPipeline::new(
            SeriesGenerator::new(config.length).unwrap().with_start_price(120.0),
            SmoothingFilter::new(config.window).unwrap(),
            ForecastProjector::new(config.horizon_months).unwrap(),
        );
        // 0.4 draws: walk noise -0.08/day, forecast noise 0.
        let snapshot = pipeline
            .run("TEST", today(), &mut ReplaySource::constant(0.4))
            .unwrap();
        let last = snapshot.last_price().unwrap();
        assert!(snapshot.forecast.iter().all(|p| p.forecast == last));
    }

    #[test]
    fn from_config_carries_stage_sizes() {
        let config = PipelineConfig {
            length: 30,
            window: 5,
            horizon_months: 12,
        };
        let pipeline = AnalyticsPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.generator.length(), 30);
        assert_eq!(pipeline.filter().window(), 5);
        assert_eq!(pipeline.projector.horizon_months(), 12);

        let snapshot = pipeline.run("SIZE", today(), &mut StdRandom::seeded(1)).unwrap();
        assert_eq!(snapshot.forecast.len(), 12);
    }

    #[test]
    fn from_config_rejects_zero_sizes() {
        let config = PipelineConfig {
            length: 10,
            window: 0,
            horizon_months: 6,
        };
        assert!(AnalyticsPipeline::from_config(&config).is_err());
    }

    #[test]
    fn summary_figures() {
        let snapshot = SeriesSnapshot {
            symbol: "TEST".into(),
            generated_on: today(),
            history: [100.0, 110.0, 99.0]
                .iter()
                .enumerate()
                .map(|(i, &price)| SmoothedPoint {
                    date: today() - chrono::Duration::days(2 - i as i64),
                    price,
                    symbol: "TEST".into(),
                    moving_average: 103.0,
                })
                .collect(),
            forecast: vec![ForecastPoint {
                date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                forecast: 101.5,
            }],
        };
        let summary = snapshot.summary().unwrap();
        assert_eq!(summary.last_price, 99.0);
        assert_eq!(summary.previous_price, Some(110.0));
        assert_eq!(summary.change, -11.0);
        assert_eq!(summary.change_pct, -10.0);
        assert_eq!(summary.period_high, 110.0);
        assert_eq!(summary.period_low, 99.0);
        assert_eq!(summary.moving_average, 103.0);
        assert_eq!(summary.next_forecast, Some(101.5));
    }

    #[test]
    fn summary_of_single_point_has_no_change() {
        let pipeline = AnalyticsPipeline::from_config(&PipelineConfig {
            length: 1,
            ..PipelineConfig::default()
        })
        .unwrap();
        let snapshot = pipeline.run("ONE", today(), &mut StdRandom::seeded(1)).unwrap();
        let summary = snapshot.summary().unwrap();
        assert_eq!(summary.previous_price, None);
        assert_eq!(summary.change, 0.0);
        assert_eq!(summary.period_high, summary.period_low);
    }

    #[test]
    fn empty_snapshot_has_no_summary() {
        let snapshot = SeriesSnapshot {
            symbol: "NONE".into(),
            generated_on: today(),
            history: vec![],
            forecast: vec![],
        };
        assert!(snapshot.summary().is_none());
        assert!(snapshot.last_price().is_none());
    }
}
