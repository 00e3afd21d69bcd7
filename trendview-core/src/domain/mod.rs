//! Domain types for TrendView

pub mod point;

pub use point::{
    round_cents, ForecastPoint, PricePoint, SmoothedPoint, FORECAST_FLOOR, PRICE_FLOOR,
};

/// Symbol type alias
pub type Symbol = String;

/// Normalize user-entered symbol text: trimmed and uppercased.
///
/// Returns `None` when nothing is left after trimming.
pub fn normalize_symbol(raw: &str) -> Option<Symbol> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}
