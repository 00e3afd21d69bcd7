//! TrendView Core: the analytics pipeline behind the dashboard.
//!
//! Three pure stages, composed in order:
//! - [`generator`]: synthetic daily random walk with periodic drift
//! - [`smoothing`]: trailing moving average with boundary shrink
//! - [`forecast`]: illustrative month-by-month projection of the last price
//!
//! Randomness is injected through [`rng::RandomSource`] and "today" is always
//! passed in, so every stage is deterministic under test.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod indicators;
pub mod pipeline;
pub mod rng;
pub mod smoothing;

pub use error::PipelineError;
pub use forecast::{project, ForecastProjector};
pub use generator::{generate, SeriesGenerator};
pub use pipeline::{AnalyticsPipeline, SeriesSnapshot, SeriesSummary};
pub use smoothing::{smooth, SmoothingFilter};
