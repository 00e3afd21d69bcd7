//! Trailing moving average with boundary shrink.
//!
//! Output at index i is the mean of `values[max(0, i + 1 - window)..=i]`.
//! The first `window - 1` outputs average over the points available so far,
//! so index 0 is the value itself.

use super::Indicator;
use crate::error::PipelineError;

/// Default smoothing window in days.
pub const DEFAULT_WINDOW: usize = 14;

#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    name: String,
}

impl MovingAverage {
    pub fn new(window: usize) -> Result<Self, PipelineError> {
        PipelineError::require_positive("window", window)?;
        Ok(Self {
            window,
            name: format!("MA({window})"),
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            name: format!("MA({DEFAULT_WINDOW})"),
        }
    }
}

impl Indicator for MovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, values: &[f64]) -> Vec<f64> {
        // Each window is summed directly rather than rolled, so the result
        // at i is exactly the mean of its slice.
        (0..values.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(self.window);
                let slice = &values[start..=i];
                slice.iter().sum::<f64>() / slice.len() as f64
            })
            .collect()
    }
}
