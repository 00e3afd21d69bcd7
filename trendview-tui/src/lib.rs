//! TrendView terminal dashboard.
//!
//! - [`controller`]: drives the analytics pipeline and owns the view state
//! - [`state`]: view state and its transitions
//! - [`advisor`]: pluggable assistant replies
//! - [`refresh`]: cancelable periodic refresh timer
//! - [`app`], [`input`], [`ui`]: the ratatui front end

pub mod advisor;
pub mod app;
pub mod controller;
pub mod format;
pub mod input;
pub mod refresh;
pub mod state;
pub mod theme;
pub mod ui;

pub use advisor::{AdvisoryContext, AdvisoryError, AdvisoryResponder, ScriptedResponder};
pub use controller::{DashboardController, Entropy};
pub use refresh::{RefreshTick, RefreshTimer};
pub use state::{ChatMessage, DashboardState, Role};

#[cfg(test)]
mod tests {
    use super::*;

    /// The controller and its timer cross into the UI loop's thread.
    #[allow(dead_code)]
    fn assert_send() {
        fn require_send<T: Send>() {}

        require_send::<DashboardController>();
        require_send::<DashboardState>();
        require_send::<RefreshTimer>();
        require_send::<Box<dyn AdvisoryResponder>>();
    }
}
