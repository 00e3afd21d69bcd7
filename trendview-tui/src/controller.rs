//! Dashboard orchestration: owns the view state and drives the pipeline.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use trendview_core::clock::{Clock, SystemClock};
use trendview_core::config::DashboardConfig;
use trendview_core::domain::{normalize_symbol, Symbol};
use trendview_core::rng::{RandomSource, SeedHierarchy, StdRandom};
use trendview_core::{AnalyticsPipeline, PipelineError, SeriesSnapshot, SeriesSummary};

use crate::advisor::{
    AdvisoryContext, AdvisoryError, AdvisoryResponder, ScriptedResponder, FALLBACK_REPLY,
};
use crate::state::{ChatMessage, DashboardState, Role};

/// Where pipeline runs draw their randomness from.
pub enum Entropy {
    /// One source shared by every run, in call order.
    Shared(Box<dyn RandomSource>),
    /// A fresh source per `(symbol, generation)`, so each symbol's n-th
    /// series is the same whatever order symbols are visited in.
    Seeded {
        seeds: SeedHierarchy,
        generations: HashMap<Symbol, u64>,
    },
}

impl Entropy {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(master) => Self::seeded(master),
            None => Self::source(StdRandom::from_entropy()),
        }
    }

    pub fn seeded(master_seed: u64) -> Self {
        Self::Seeded {
            seeds: SeedHierarchy::new(master_seed),
            generations: HashMap::new(),
        }
    }

    pub fn source(source: impl RandomSource + 'static) -> Self {
        Self::Shared(Box::new(source))
    }

    fn run(
        &mut self,
        pipeline: &AnalyticsPipeline,
        symbol: &str,
        today: chrono::NaiveDate,
    ) -> Result<SeriesSnapshot, PipelineError> {
        match self {
            Entropy::Shared(rng) => pipeline.run(symbol, today, rng.as_mut()),
            Entropy::Seeded { seeds, generations } => {
                let generation = generations.entry(symbol.to_string()).or_insert(0);
                let mut rng = seeds.source_for(symbol, *generation);
                *generation += 1;
                pipeline.run(symbol, today, &mut rng)
            }
        }
    }
}

pub struct DashboardController {
    state: DashboardState,
    pipeline: AnalyticsPipeline,
    entropy: Entropy,
    clock: Box<dyn Clock>,
    responder: Box<dyn AdvisoryResponder>,
}

impl DashboardController {
    /// Build the controller and generate the default symbol's series.
    pub fn new(
        config: &DashboardConfig,
        clock: Box<dyn Clock>,
        entropy: Entropy,
        responder: Box<dyn AdvisoryResponder>,
    ) -> Result<Self, PipelineError> {
        let settings = &config.dashboard;
        let symbol = normalize_symbol(&settings.default_symbol)
            .ok_or_else(|| PipelineError::invalid("default_symbol", "must not be empty"))?;

        let mut controller = Self {
            state: DashboardState::new(&settings.watchlist, settings.max_messages),
            pipeline: AnalyticsPipeline::from_config(&config.pipeline)?,
            entropy,
            clock,
            responder,
        };
        let snapshot = controller.generate(&symbol)?;
        controller.transition(|state| state.on_symbol_change(snapshot));
        info!(symbol = %symbol, "dashboard ready");
        Ok(controller)
    }

    /// Production wiring: local clock, config seed (or entropy), scripted
    /// assistant.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, PipelineError> {
        Self::new(
            config,
            Box::new(SystemClock),
            Entropy::from_seed(config.dashboard.seed),
            Box::new(ScriptedResponder),
        )
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&SeriesSnapshot> {
        self.state.snapshot()
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        self.state.snapshot().and_then(SeriesSnapshot::summary)
    }

    /// Legend label of the smoothed line, e.g. `MA(14)`.
    pub fn ma_label(&self) -> &str {
        self.pipeline.filter().label()
    }

    /// Switch to `raw` (trimmed, uppercased) and regenerate.
    ///
    /// Returns `Ok(false)` for blank input or the symbol already shown.
    pub fn select_symbol(&mut self, raw: &str) -> Result<bool, PipelineError> {
        let Some(symbol) = normalize_symbol(raw) else {
            return Ok(false);
        };
        if symbol == self.state.symbol() {
            return Ok(false);
        }

        let snapshot = self.generate(&symbol)?;
        let previous = self.state.symbol().to_string();
        self.transition(|state| state.on_symbol_change(snapshot));
        info!(from = %previous, to = %symbol, "symbol changed");
        Ok(true)
    }

    /// Regenerate the current symbol.
    pub fn refresh(&mut self) -> Result<(), PipelineError> {
        let symbol = self.state.symbol().to_string();
        let snapshot = self.generate(&symbol)?;
        self.transition(|state| state.on_refresh(snapshot));
        debug!(symbol = %symbol, refreshes = self.state.refreshes(), "series refreshed");
        Ok(())
    }

    /// Returns `true` when the symbol was not already listed.
    pub fn add_to_watchlist(&mut self, raw: &str) -> bool {
        let before = self.state.watchlist().len();
        self.transition(|state| state.on_watchlist_add(raw));
        let added = self.state.watchlist().len() > before;
        if added {
            info!(symbol = raw.trim(), "watchlist add");
        }
        added
    }

    /// Returns `true` when the symbol was listed.
    pub fn remove_from_watchlist(&mut self, raw: &str) -> bool {
        let before = self.state.watchlist().len();
        self.transition(|state| state.on_watchlist_remove(raw));
        let removed = self.state.watchlist().len() < before;
        if removed {
            info!(symbol = raw.trim(), "watchlist remove");
        }
        removed
    }

    /// Log the user's message and the assistant's reply.
    ///
    /// Blank text is ignored. A failing responder yields [`FALLBACK_REPLY`].
    pub fn send_message(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.transition(|state| state.on_message_append(ChatMessage::new(Role::User, text)));

        let context = AdvisoryContext {
            symbol: self.state.symbol().to_string(),
            last_price: self.state.snapshot().and_then(SeriesSnapshot::last_price),
        };
        let reply = match self.responder.respond(text, &context) {
            Ok(reply) if !reply.trim().is_empty() => reply,
            Ok(_) => {
                warn!(error = %AdvisoryError::EmptyReply, "assistant fallback");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => {
                warn!(error = %e, "assistant fallback");
                FALLBACK_REPLY.to_string()
            }
        };
        self.transition(|state| state.on_message_append(ChatMessage::new(Role::Assistant, reply)));
        self.state.messages().back()
    }

    fn generate(&mut self, symbol: &str) -> Result<SeriesSnapshot, PipelineError> {
        let today = self.clock.today();
        self.entropy.run(&self.pipeline, symbol, today)
    }

    fn transition(&mut self, reduce: impl FnOnce(DashboardState) -> DashboardState) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trendview_core::clock::FixedClock;
    use trendview_core::config::PipelineConfig;
    use trendview_core::rng::ReplaySource;

    struct Unavailable;

    impl AdvisoryResponder for Unavailable {
        fn respond(&self, _: &str, _: &AdvisoryContext) -> Result<String, AdvisoryError> {
            Err(AdvisoryError::Unavailable("offline".into()))
        }
    }

    struct Echo;

    impl AdvisoryResponder for Echo {
        fn respond(&self, text: &str, ctx: &AdvisoryContext) -> Result<String, AdvisoryError> {
            Ok(format!("{}:{}:{:?}", ctx.symbol, text, ctx.last_price))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    fn config() -> DashboardConfig {
        let mut config = DashboardConfig::default();
        config.pipeline = PipelineConfig {
            length: 30,
            window: 5,
            horizon_months: 3,
        };
        config.dashboard.max_messages = 4;
        config
    }

    fn controller_with(entropy: Entropy, responder: Box<dyn AdvisoryResponder>) -> DashboardController {
        DashboardController::new(&config(), Box::new(FixedClock(today())), entropy, responder)
            .unwrap()
    }

    fn controller() -> DashboardController {
        controller_with(Entropy::source(ReplaySource::constant(0.5)), Box::new(Echo))
    }

    #[test]
    fn starts_on_default_symbol() {
        let c = controller();
        assert_eq!(c.state().symbol(), "AAPL");
        let snapshot = c.snapshot().unwrap();
        assert_eq!(snapshot.history.len(), 30);
        assert_eq!(snapshot.forecast.len(), 3);
        assert_eq!(snapshot.forecast[0].date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(c.ma_label(), "MA(5)");
        assert_eq!(c.state().watchlist().len(), 5);
    }

    #[test]
    fn select_symbol_normalizes_and_regenerates() {
        let mut c = controller();
        assert!(c.select_symbol("  msft ").unwrap());
        assert_eq!(c.state().symbol(), "MSFT");
        assert!(c.snapshot().unwrap().history.iter().all(|p| p.symbol == "MSFT"));
    }

    #[test]
    fn select_same_or_blank_is_noop() {
        let mut c = controller();
        let before = c.snapshot().unwrap().clone();
        assert!(!c.select_symbol("aapl").unwrap());
        assert!(!c.select_symbol("   ").unwrap());
        assert_eq!(c.snapshot().unwrap(), &before);
    }

    #[test]
    fn refresh_keeps_symbol_and_counts() {
        let mut c = controller_with(Entropy::seeded(7), Box::new(Echo));
        let first = c.snapshot().unwrap().clone();
        c.refresh().unwrap();
        assert_eq!(c.state().symbol(), "AAPL");
        assert_eq!(c.state().refreshes(), 1);
        assert_ne!(c.snapshot().unwrap(), &first);
    }

    #[test]
    fn seeded_sessions_are_order_independent() {
        let mut a = controller_with(Entropy::seeded(42), Box::new(Echo));
        a.select_symbol("MSFT").unwrap();
        let msft_a = a.snapshot().unwrap().clone();

        let mut b = controller_with(Entropy::seeded(42), Box::new(Echo));
        b.select_symbol("TSLA").unwrap();
        b.select_symbol("MSFT").unwrap();
        assert_eq!(b.snapshot().unwrap(), &msft_a);
    }

    #[test]
    fn watchlist_edits() {
        let mut c = controller();
        assert!(c.add_to_watchlist("nvda"));
        assert!(!c.add_to_watchlist("NVDA"));
        assert!(!c.add_to_watchlist(""));
        assert!(c.state().watchlist().contains(&"NVDA".to_string()));

        assert!(c.remove_from_watchlist("nvda"));
        assert!(!c.remove_from_watchlist("nvda"));
    }

    #[test]
    fn send_message_passes_context() {
        let mut c = controller();
        let last = c.snapshot().unwrap().last_price();
        let reply = c.send_message("  hello ").unwrap().clone();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.text, format!("AAPL:hello:{last:?}"));

        let log: Vec<Role> = c.state().messages().iter().map(|m| m.role).collect();
        assert_eq!(log, [Role::User, Role::Assistant]);
        assert_eq!(c.state().messages()[0].text, "hello");
    }

    #[test]
    fn blank_message_is_ignored() {
        let mut c = controller();
        assert!(c.send_message("   ").is_none());
        assert!(c.state().messages().is_empty());
    }

    #[test]
    fn failing_responder_falls_back() {
        let mut c = controller_with(Entropy::source(ReplaySource::constant(0.5)), Box::new(Unavailable));
        let reply = c.send_message("hello").unwrap();
        assert_eq!(reply.text, FALLBACK_REPLY);
    }

    #[test]
    fn message_log_is_capped() {
        let mut c = controller();
        for i in 0..5 {
            c.send_message(&format!("q{i}"));
        }
        assert_eq!(c.state().messages().len(), 4);
        assert_eq!(c.state().messages()[0].text, "q3");
    }

    #[test]
    fn summary_tracks_snapshot() {
        let c = controller();
        let summary = c.summary().unwrap();
        assert_eq!(Some(summary.last_price), c.snapshot().unwrap().last_price());
        assert_eq!(summary.next_forecast, Some(c.snapshot().unwrap().forecast[0].forecast));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = config();
        config.pipeline.window = 0;
        let result = DashboardController::new(
            &config,
            Box::new(FixedClock(today())),
            Entropy::seeded(1),
            Box::new(ScriptedResponder),
        );
        assert!(matches!(result, Err(PipelineError::InvalidArgument { name: "window", .. })));
    }
}
