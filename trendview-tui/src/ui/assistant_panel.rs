//! Tab 4, Assistant: message log, newest at the bottom.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, InputMode};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let messages = app.controller.state().messages();
    let mut lines: Vec<Line> = Vec::new();

    if messages.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask about the price, the trend or the forecast. Press Enter to type.",
            theme::muted(),
        )));
    }

    for message in messages {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", message.role.label()), theme::role_style(message.role)),
            Span::styled(message.sent_at.format("%H:%M").to_string(), theme::muted()),
        ]));
        lines.push(Line::from(Span::styled(message.text.as_str(), theme::text())));
        lines.push(Line::from(""));
    }

    if app.input_mode == InputMode::Chat {
        lines.push(Line::from(Span::styled("[Esc] stop typing", theme::muted())));
    }

    // Keep the newest lines in view. Wrapping can add rows, so this is a floor.
    let overflow = lines.len().saturating_sub(area.height as usize);
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((overflow.min(u16::MAX as usize) as u16, 0));
    f.render_widget(para, area);
}
