//! A full dashboard session driven through the public API: timer ticks,
//! symbol switches, watchlist edits and the assistant.

use std::sync::mpsc;
use std::time::Duration;

use chrono::NaiveDate;
use trendview_core::clock::FixedClock;
use trendview_core::config::DashboardConfig;
use trendview_tui::advisor::FALLBACK_REPLY;
use trendview_tui::{
    AdvisoryContext, AdvisoryError, AdvisoryResponder, DashboardController, Entropy,
    RefreshTimer, Role, ScriptedResponder,
};

fn config() -> DashboardConfig {
    DashboardConfig::from_toml(
        r#"
        [pipeline]
        length = 60
        window = 10
        horizon_months = 4

        [dashboard]
        default_symbol = "msft"
        watchlist = ["MSFT", "AAPL"]
        max_messages = 6
        "#,
    )
    .unwrap()
}

fn controller(responder: Box<dyn AdvisoryResponder>) -> DashboardController {
    DashboardController::new(
        &config(),
        Box::new(FixedClock(NaiveDate::from_ymd_opt(2024, 8, 31).unwrap())),
        Entropy::seeded(2024),
        responder,
    )
    .unwrap()
}

#[test]
fn timer_ticks_drive_refreshes() {
    let mut dashboard = controller(Box::new(ScriptedResponder));
    let (tx, rx) = mpsc::channel();
    let mut timer = RefreshTimer::new(Duration::from_millis(10), tx);
    assert!(timer.start().unwrap());

    for _ in 0..3 {
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        dashboard.refresh().unwrap();
    }
    assert!(timer.stop());
    assert_eq!(dashboard.state().refreshes(), 3);
    assert_eq!(dashboard.state().symbol(), "MSFT");
}

#[test]
fn switching_symbols_replaces_everything() {
    let mut dashboard = controller(Box::new(ScriptedResponder));
    let msft = dashboard.snapshot().unwrap().clone();
    assert_eq!(msft.symbol, "MSFT");
    assert_eq!(msft.history.len(), 60);
    assert_eq!(msft.forecast.len(), 4);
    // 2024-08-31 + 1 month clamps to September's last day.
    assert_eq!(msft.forecast[0].date, NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());

    assert!(dashboard.select_symbol("aapl").unwrap());
    let aapl = dashboard.snapshot().unwrap();
    assert!(aapl.history.iter().all(|p| p.symbol == "AAPL"));
    assert_ne!(aapl.history, msft.history);
}

#[test]
fn assistant_conversation() {
    let mut dashboard = controller(Box::new(ScriptedResponder));
    for prompt in ["hello", "what's the price?", "forecast?", "should I buy?"] {
        let reply = dashboard.send_message(prompt).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.text.contains("MSFT"));
    }
    // Four exchanges, capped at six messages.
    let log = dashboard.state().messages();
    assert_eq!(log.len(), 6);
    assert_eq!(log[0].text, "what's the price?");
}

struct Broken;

impl AdvisoryResponder for Broken {
    fn respond(&self, _: &str, _: &AdvisoryContext) -> Result<String, AdvisoryError> {
        Ok("   ".into())
    }
}

#[test]
fn empty_reply_degrades_to_fallback() {
    let mut dashboard = controller(Box::new(Broken));
    assert_eq!(dashboard.send_message("hi").unwrap().text, FALLBACK_REPLY);
}

#[test]
fn watchlist_round_trip() {
    let mut dashboard = controller(Box::new(ScriptedResponder));
    assert!(dashboard.add_to_watchlist(" goog "));
    assert!(dashboard.remove_from_watchlist("MSFT"));
    assert_eq!(dashboard.state().watchlist(), ["AAPL", "GOOG"]);
}
