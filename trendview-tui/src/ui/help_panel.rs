//! Tab 5, Help: keyboard shortcuts and the most recent errors.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

/// Errors listed under the shortcuts, newest first.
const RECENT_ERRORS: usize = 5;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-5", "Switch to tab by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle tabs forward / back");
    key(&mut lines, "s or /", "Show another symbol");
    key(&mut lines, "r", "Regenerate the current series");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Watchlist");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "Enter", "Show the symbol under the cursor");
    key(&mut lines, "a", "Add a symbol");
    key(&mut lines, "d", "Remove the symbol under the cursor");
    lines.push(Line::from(""));

    section(&mut lines, "Assistant");
    key(&mut lines, "Enter / i", "Start typing");
    key(&mut lines, "Enter", "Send");
    key(&mut lines, "Esc", "Stop typing");
    lines.push(Line::from(""));

    section(&mut lines, "About the data");
    lines.push(Line::from(Span::styled(
        format!(
            "  Prices are a simulated random walk. {} is a trailing average; the forecast is a \
             random perturbation of the last close. Nothing here is financial advice.",
            app.controller.ma_label()
        ),
        theme::muted(),
    )));
    lines.push(Line::from(""));

    section(&mut lines, "Recent errors");
    if app.error_history.is_empty() {
        lines.push(Line::from(Span::styled("  None this session.", theme::muted())));
    }
    for record in app.error_history.iter().take(RECENT_ERRORS) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", record.timestamp.format("%H:%M:%S")), theme::muted()),
            Span::styled(record.message.clone(), theme::negative()),
        ]));
    }
    if app.error_history.len() > RECENT_ERRORS {
        lines.push(Line::from(Span::styled(
            format!("  ...and {} earlier", app.error_history.len() - RECENT_ERRORS),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>16}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
