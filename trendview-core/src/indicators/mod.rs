//! Indicators over a numeric series.
//!
//! Indicators are pure functions: values in, a series of the same length out.
//! Unlike warmup-style indicators, every output index is defined; windows
//! shrink at the start of the series instead of producing gaps.

pub mod moving_average;

pub use moving_average::MovingAverage;

/// Trait for series indicators.
///
/// # Look-ahead guard
/// No output at index t may depend on input from index t+1 or later.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "MA(14)").
    fn name(&self) -> &str;

    /// Compute the indicator over the whole series.
    ///
    /// Returns a `Vec<f64>` of the same length as `values`.
    fn compute(&self, values: &[f64]) -> Vec<f64>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
