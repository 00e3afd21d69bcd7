//! Application state. Single owner, main thread only.
//!
//! Wraps the [`DashboardController`] with what only the terminal needs:
//! the active tab, the text input line, the watchlist cursor and the status
//! bar. The refresh timer talks to the loop via a channel.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use chrono::NaiveDateTime;
use tracing::warn;

use trendview_core::PipelineError;

use crate::controller::DashboardController;
use crate::refresh::RefreshTick;

/// Which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Forecast,
    Watchlist,
    Assistant,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Forecast,
        Tab::Watchlist,
        Tab::Assistant,
        Tab::Help,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Forecast => 1,
            Tab::Watchlist => 2,
            Tab::Assistant => 3,
            Tab::Help => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Forecast => "Forecast",
            Tab::Watchlist => "Watchlist",
            Tab::Assistant => "Assistant",
            Tab::Help => "Help",
        }
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the input line is collecting, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Symbol to show.
    LoadSymbol,
    /// Symbol to add to the watchlist.
    AddSymbol,
    /// Message for the assistant.
    Chat,
}

impl InputMode {
    pub fn prompt(self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::LoadSymbol => "Symbol: ",
            InputMode::AddSymbol => "Add to watchlist: ",
            InputMode::Chat => "Ask: ",
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

/// Top-level application state.
pub struct AppState {
    pub controller: DashboardController,
    pub ticks: Receiver<RefreshTick>,

    // Navigation
    pub active_tab: Tab,
    pub running: bool,
    pub watchlist_cursor: usize,

    // Input line
    pub input_mode: InputMode,
    pub input: String,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
}

impl AppState {
    pub fn new(controller: DashboardController, ticks: Receiver<RefreshTick>) -> Self {
        Self {
            controller,
            ticks,
            active_tab: Tab::Overview,
            running: true,
            watchlist_cursor: 0,
            input_mode: InputMode::Normal,
            input: String::new(),
            status_message: None,
            error_history: VecDeque::with_capacity(50),
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "dashboard error");
        self.error_history.push_front(ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
        });
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Drain pending timer ticks, regenerating once for the whole batch.
    pub fn drain_ticks(&mut self) {
        let mut pending = 0u64;
        while self.ticks.try_recv().is_ok() {
            pending += 1;
        }
        if pending > 0 {
            self.refresh();
        }
    }

    pub fn refresh(&mut self) {
        match self.controller.refresh() {
            Ok(()) => {
                let symbol = self.controller.state().symbol().to_string();
                self.set_status(format!("{symbol} refreshed"));
            }
            Err(e) => self.report(e),
        }
    }

    pub fn load_symbol(&mut self, raw: &str) {
        match self.controller.select_symbol(raw) {
            Ok(true) => {
                let symbol = self.controller.state().symbol().to_string();
                self.set_status(format!("Showing {symbol}"));
                self.active_tab = Tab::Overview;
            }
            Ok(false) if raw.trim().is_empty() => self.set_warning("No symbol entered"),
            Ok(false) => self.set_status("Already showing that symbol"),
            Err(e) => self.report(e),
        }
    }

    pub fn add_symbol(&mut self, raw: &str) {
        if self.controller.add_to_watchlist(raw) {
            self.set_status(format!("Added {} to watchlist", raw.trim().to_uppercase()));
        } else if raw.trim().is_empty() {
            self.set_warning("No symbol entered");
        } else {
            self.set_warning(format!("{} is already on the watchlist", raw.trim().to_uppercase()));
        }
    }

    /// Remove the symbol under the watchlist cursor.
    pub fn remove_selected(&mut self) {
        let Some(symbol) = self.selected_symbol().map(str::to_string) else {
            self.set_warning("Watchlist is empty");
            return;
        };
        self.controller.remove_from_watchlist(&symbol);
        self.clamp_cursor();
        self.set_status(format!("Removed {symbol}"));
    }

    pub fn load_selected(&mut self) {
        if let Some(symbol) = self.selected_symbol().map(str::to_string) {
            self.load_symbol(&symbol);
        }
    }

    pub fn send_chat(&mut self, text: &str) {
        if self.controller.send_message(text).is_none() {
            self.set_warning("Type a message first");
        }
    }

    pub fn selected_symbol(&self) -> Option<&str> {
        self.controller
            .state()
            .watchlist()
            .get(self.watchlist_cursor)
            .map(String::as_str)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.controller.state().watchlist().len();
        if len == 0 {
            self.watchlist_cursor = 0;
            return;
        }
        let next = self.watchlist_cursor as isize + delta;
        self.watchlist_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.controller.state().watchlist().len();
        self.watchlist_cursor = self.watchlist_cursor.min(len.saturating_sub(1));
    }

    fn report(&mut self, error: PipelineError) {
        self.push_error(error.to_string());
    }
}
