//! Assistant replies.
//!
//! The dashboard talks to an [`AdvisoryResponder`]. The shipped
//! [`ScriptedResponder`] picks one of a fixed set of canned replies by
//! keyword; a model-backed responder can be dropped in behind the same trait.

use thiserror::Error;

use trendview_core::domain::Symbol;

use crate::format::format_price;

/// Shown when the responder fails. Never empty, never an error.
pub const FALLBACK_REPLY: &str =
    "The assistant is unavailable right now. Figures on this dashboard are simulated \
     and are not financial advice.";

const DISCLAIMER: &str = "This data is simulated and nothing here is financial advice.";

/// What the assistant may know about the dashboard when answering.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryContext {
    pub symbol: Symbol,
    pub last_price: Option<f64>,
}

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("responder unavailable: {0}")]
    Unavailable(String),

    #[error("responder produced an empty reply")]
    EmptyReply,
}

/// Produces a reply to one user message.
pub trait AdvisoryResponder: Send {
    fn respond(&self, text: &str, context: &AdvisoryContext) -> Result<String, AdvisoryError>;
}

/// Keyword topics the scripted responder recognizes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Forecast,
    Trade,
    Trend,
    Price,
    General,
}

impl Topic {
    /// First topic whose keywords appear in `text` (case-insensitive).
    pub fn classify(text: &str) -> Topic {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has = |keys: &[&str]| keys.iter().any(|k| words.contains(k));

        if has(&["forecast", "predict", "prediction", "future", "outlook", "target"]) {
            Topic::Forecast
        } else if has(&["buy", "sell", "invest", "hold", "short", "trade"]) {
            Topic::Trade
        } else if has(&["trend", "average", "ma", "moving", "momentum"]) {
            Topic::Trend
        } else if has(&["price", "quote", "worth", "cost", "value"]) {
            Topic::Price
        } else if has(&["hi", "hello", "hey", "help"]) {
            Topic::Greeting
        } else {
            Topic::General
        }
    }
}

/// Canned replies, lightly templated with the current symbol and price.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedResponder;

impl AdvisoryResponder for ScriptedResponder {
    fn respond(&self, text: &str, context: &AdvisoryContext) -> Result<String, AdvisoryError> {
        let symbol = context.symbol.as_str();
        let price = context
            .last_price
            .map(format_price)
            .unwrap_or_else(|| "unavailable".into());

        let reply = match Topic::classify(text) {
            Topic::Greeting => format!(
                "Hi! Ask me about {symbol}'s price, its moving average or the forecast tab. {DISCLAIMER}"
            ),
            Topic::Forecast => format!(
                "The forecast tab projects {symbol} a few months out from {price} with a random \
                 perturbation. It is a placeholder, not a prediction. {DISCLAIMER}"
            ),
            Topic::Trade => format!(
                "I can't tell you whether to buy or sell {symbol}. Please talk to a licensed \
                 advisor before making investment decisions. {DISCLAIMER}"
            ),
            Topic::Trend => format!(
                "The MA line smooths {symbol}'s daily moves with a trailing average. Price above \
                 the line means recent days ran hotter than the window average. {DISCLAIMER}"
            ),
            Topic::Price => format!("{symbol} last closed at {price} in this session. {DISCLAIMER}"),
            Topic::General => format!(
                "I only know what's on this dashboard for {symbol}. Try asking about the price, \
                 the trend or the forecast. {DISCLAIMER}"
            ),
        };
        Ok(reply)
    }
}
