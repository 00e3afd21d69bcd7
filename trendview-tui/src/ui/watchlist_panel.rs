//! Tab 3, Watchlist: symbols to jump between.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let state = app.controller.state();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(format!("{} symbols", state.watchlist().len()), theme::accent()),
            Span::styled("  [j/k]move [Enter]load [a]dd [d]elete", theme::muted()),
        ]),
        Line::from(""),
    ];

    if state.watchlist().is_empty() {
        lines.push(Line::from(Span::styled(
            "Watchlist is empty. Press a to add a symbol.",
            theme::muted(),
        )));
    }

    for (i, symbol) in state.watchlist().iter().enumerate() {
        let is_cursor = i == app.watchlist_cursor;
        let is_current = symbol == state.symbol();

        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_current {
            theme::accent_bold()
        } else {
            theme::text()
        };
        let marker = if is_current { "●" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker} "), theme::positive()),
            Span::styled(format!("{symbol:<10}"), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
