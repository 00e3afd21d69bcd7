//! Top-level UI layout: tab bar over the active tab, status line at the bottom.

pub mod assistant_panel;
pub mod chart;
pub mod forecast_panel;
pub mod help_panel;
pub mod overview_panel;
pub mod status_bar;
pub mod watchlist_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::app::{AppState, Tab};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(Block::default().style(theme::background()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app);
    draw_tab(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .map(|tab| format!("{} {}", tab.index() + 1, tab.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::muted())
                .title(Span::styled(" TrendView ", theme::accent_bold())),
        )
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .select(app.active_tab.index());
    f.render_widget(tabs, area);
}

fn draw_tab(f: &mut Frame, area: Rect, app: &AppState) {
    let tab = app.active_tab;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} | {} ", tab.label(), app.controller.state().symbol()))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Overview => overview_panel::render(f, inner, app),
        Tab::Forecast => forecast_panel::render(f, inner, app),
        Tab::Watchlist => watchlist_panel::render(f, inner, app),
        Tab::Assistant => assistant_panel::render(f, inner, app),
        Tab::Help => help_panel::render(f, inner, app),
    }
}
