//! Tab 1, Overview: headline cards over the price and moving-average chart.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use trendview_core::SeriesSummary;

use crate::app::AppState;
use crate::format::{format_change, format_day, format_percent, format_price};
use crate::theme;
use crate::ui::chart;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(snapshot) = app.controller.snapshot() else {
        f.render_widget(Paragraph::new(Span::styled("No series loaded.", theme::muted())), area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    if let Some(summary) = snapshot.summary() {
        render_cards(f, rows[0], &summary, app.controller.ma_label());
    }

    let prices: Vec<(f64, f64)> = snapshot
        .history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();
    let averages: Vec<(f64, f64)> = snapshot
        .history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.moving_average))
        .collect();

    let history = &snapshot.history;
    let x_labels = match (history.first(), history.get(history.len() / 2), history.last()) {
        (Some(first), Some(mid), Some(last)) => {
            vec![format_day(first.date), format_day(mid.date), format_day(last.date)]
        }
        _ => Vec::new(),
    };

    chart::render(
        f,
        rows[1],
        &[
            chart::Line {
                name: snapshot.symbol.clone(),
                color: theme::ACCENT,
                points: &prices,
            },
            chart::Line {
                name: app.controller.ma_label().to_string(),
                color: theme::WARNING,
                points: &averages,
            },
        ],
        [0.0, history.len().saturating_sub(1).max(1) as f64],
        x_labels,
    );
}

fn render_cards(f: &mut Frame, area: Rect, summary: &SeriesSummary, ma_label: &str) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let change_style = theme::change_style(summary.change);
    let next = summary
        .next_forecast
        .map(format_price)
        .unwrap_or_else(|| "n/a".into());

    let cards = [
        (
            "Last Price",
            vec![
                Span::styled(format_price(summary.last_price), theme::accent_bold()),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "{} ({})",
                        format_change(summary.change),
                        format_percent(summary.change_pct)
                    ),
                    change_style,
                ),
            ],
        ),
        (
            ma_label,
            vec![Span::styled(format_price(summary.moving_average), theme::warning())],
        ),
        (
            "Period Range",
            vec![Span::styled(
                format!(
                    "{} - {}",
                    format_price(summary.period_low),
                    format_price(summary.period_high)
                ),
                theme::text(),
            )],
        ),
        ("Next Month", vec![Span::styled(next, theme::neutral())]),
    ];

    for ((title, spans), col) in cards.into_iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(Span::styled(format!(" {title} "), theme::muted()));
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), *col);
    }
}
