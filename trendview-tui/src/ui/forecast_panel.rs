//! Tab 2, Forecast: recent history joined to the monthly projection.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use trendview_core::SeriesSnapshot;

use crate::app::AppState;
use crate::format::{format_change, format_day, format_month, format_price};
use crate::theme;
use crate::ui::chart;

/// Trailing days of history drawn ahead of the projection.
const HISTORY_TAIL: usize = 30;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(snapshot) = app.controller.snapshot() else {
        f.render_widget(Paragraph::new(Span::styled("No series loaded.", theme::muted())), area);
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(32)])
        .split(area);

    render_chart(f, cols[0], snapshot);
    render_table(f, cols[1], snapshot);
}

/// Both series on one day-based x axis, with today at `HISTORY_TAIL - 1`.
fn chart_points(snapshot: &SeriesSnapshot) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let tail_start = snapshot.history.len().saturating_sub(HISTORY_TAIL);
    let tail = &snapshot.history[tail_start..];
    let today_x = tail.len().saturating_sub(1) as f64;

    let history: Vec<(f64, f64)> = tail
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();

    // The projection line starts from the last close.
    let mut forecast: Vec<(f64, f64)> = history.last().copied().into_iter().collect();
    forecast.extend(snapshot.forecast.iter().map(|p| {
        let days = (p.date - snapshot.generated_on).num_days() as f64;
        (today_x + days, p.forecast)
    }));
    (history, forecast)
}

fn render_chart(f: &mut Frame, area: Rect, snapshot: &SeriesSnapshot) {
    let (history, forecast) = chart_points(snapshot);
    let x_max = forecast
        .last()
        .or(history.last())
        .map(|p| p.0)
        .unwrap_or(1.0)
        .max(1.0);

    let mut x_labels = Vec::new();
    if let Some(first) = snapshot.history.len().checked_sub(history.len()) {
        if let Some(point) = snapshot.history.get(first) {
            x_labels.push(format_day(point.date));
        }
    }
    x_labels.push(format_day(snapshot.generated_on));
    if let Some(last) = snapshot.forecast.last() {
        x_labels.push(format_month(last.date));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(
            format!(" {} projection (illustrative) ", snapshot.symbol),
            theme::muted(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    chart::render(
        f,
        inner,
        &[
            chart::Line {
                name: "History".into(),
                color: theme::ACCENT,
                points: &history,
            },
            chart::Line {
                name: "Forecast".into(),
                color: theme::NEUTRAL,
                points: &forecast,
            },
        ],
        [0.0, x_max],
        x_labels,
    );
}

fn render_table(f: &mut Frame, area: Rect, snapshot: &SeriesSnapshot) {
    let last = snapshot.last_price().unwrap_or_default();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:<10} {:>10} {:>9}", "Month", "Forecast", "vs last"),
            theme::accent_bold(),
        )),
        Line::from(""),
    ];
    for point in &snapshot.forecast {
        let delta = point.forecast - last;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10} ", format_month(point.date)), theme::muted()),
            Span::styled(format!("{:>10} ", format_price(point.forecast)), theme::neutral()),
            Span::styled(format!("{:>9}", format_change(delta)), theme::change_style(delta)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Random perturbation of the last close.",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled("Not a prediction.", theme::muted())));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(" Monthly ", theme::muted()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
