//! Bottom line: the open input prompt, or the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, InputMode, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    if app.input_mode != InputMode::Normal {
        spans.push(Span::styled(format!(" {}", app.input_mode.prompt()), theme::accent_bold()));
        spans.push(Span::styled(app.input.as_str(), theme::text()));
        spans.push(Span::styled("█", theme::accent()));
        spans.push(Span::styled("  [Enter] ok [Esc] cancel", theme::muted()));
        f.render_widget(Paragraph::new(Line::from(spans)), area);
        return;
    }

    spans.push(Span::styled(
        format!(" {} ", app.controller.state().symbol()),
        theme::accent_bold(),
    ));
    spans.push(Span::raw("| "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    } else {
        spans.push(Span::styled("r:refresh s:symbol q:quit", theme::muted()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
