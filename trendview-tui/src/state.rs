//! Dashboard view state and its transitions.
//!
//! Each transition takes the state by value and returns the next one; the
//! controller is the only caller that owns a live state.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDateTime;

use trendview_core::domain::{normalize_symbol, Symbol};
use trendview_core::SeriesSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub sent_at: NaiveDateTime,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            sent_at: chrono::Local::now().naive_local(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    symbol: Symbol,
    snapshot: Option<Arc<SeriesSnapshot>>,
    watchlist: Vec<Symbol>,
    messages: VecDeque<ChatMessage>,
    max_messages: usize,
    refreshes: u64,
}

impl DashboardState {
    /// Empty state with a normalized, de-duplicated watchlist.
    pub fn new<S: AsRef<str>>(watchlist: &[S], max_messages: usize) -> Self {
        let state = Self {
            max_messages: max_messages.max(1),
            ..Self::default()
        };
        watchlist
            .iter()
            .fold(state, |state, symbol| state.on_watchlist_add(symbol.as_ref()))
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn snapshot(&self) -> Option<&SeriesSnapshot> {
        self.snapshot.as_deref()
    }

    pub fn watchlist(&self) -> &[Symbol] {
        &self.watchlist
    }

    pub fn messages(&self) -> &VecDeque<ChatMessage> {
        &self.messages
    }

    /// Timer-driven regenerations of the current symbol.
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// A freshly generated series for a (possibly) new symbol replaces the
    /// old one wholesale.
    pub fn on_symbol_change(self, snapshot: SeriesSnapshot) -> Self {
        Self {
            symbol: snapshot.symbol.clone(),
            snapshot: Some(Arc::new(snapshot)),
            refreshes: 0,
            ..self
        }
    }

    /// Replace the series of the current symbol. A snapshot generated for a
    /// symbol the user has since left is dropped.
    pub fn on_refresh(self, snapshot: SeriesSnapshot) -> Self {
        if snapshot.symbol != self.symbol {
            return self;
        }
        Self {
            snapshot: Some(Arc::new(snapshot)),
            refreshes: self.refreshes + 1,
            ..self
        }
    }

    pub fn on_watchlist_add(mut self, symbol: &str) -> Self {
        if let Some(symbol) = normalize_symbol(symbol) {
            if !self.watchlist.contains(&symbol) {
                self.watchlist.push(symbol);
            }
        }
        self
    }

    pub fn on_watchlist_remove(mut self, symbol: &str) -> Self {
        if let Some(symbol) = normalize_symbol(symbol) {
            self.watchlist.retain(|s| *s != symbol);
        }
        self
    }

    /// Append to the message log, dropping the oldest past capacity.
    pub fn on_message_append(mut self, message: ChatMessage) -> Self {
        self.messages.push_back(message);
        while self.messages.len() > self.max_messages {
            self.messages.pop_front();
        }
        self
    }
}
