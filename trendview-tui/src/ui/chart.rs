//! Shared line-chart rendering for the overview and forecast tabs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

use crate::theme;

/// One line on the chart.
pub struct Line<'a> {
    pub name: String,
    pub color: Color,
    pub points: &'a [(f64, f64)],
}

/// Y range covering every value, padded 5% each side.
///
/// A flat series still gets a visible band.
pub fn y_bounds(values: impl IntoIterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return [0.0, 1.0];
    }
    let padding = ((max - min) * 0.05).max(0.5);
    [min - padding, max + padding]
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    lines: &[Line<'_>],
    x_bounds: [f64; 2],
    x_labels: Vec<String>,
) {
    let y = y_bounds(lines.iter().flat_map(|l| l.points.iter().map(|p| p.1)));

    let datasets: Vec<Dataset> = lines
        .iter()
        .map(|line| {
            Dataset::default()
                .name(line.name.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(line.color))
                .graph_type(GraphType::Line)
                .data(line.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(x_bounds)
                .labels(
                    x_labels
                        .into_iter()
                        .map(|l| Span::styled(l, theme::muted()))
                        .collect::<Vec<_>>(),
                ),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(y)
                .labels(vec![
                    Span::styled(format!("{:.0}", y[0]), theme::muted()),
                    Span::styled(format!("{:.0}", (y[0] + y[1]) / 2.0), theme::muted()),
                    Span::styled(format!("{:.0}", y[1]), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_padded() {
        let [lo, hi] = y_bounds([100.0, 120.0, 110.0]);
        assert_eq!(lo, 99.0);
        assert_eq!(hi, 121.0);
    }

    #[test]
    fn flat_series_gets_band() {
        assert_eq!(y_bounds([50.0, 50.0]), [49.5, 50.5]);
    }

    #[test]
    fn empty_or_nan_falls_back() {
        assert_eq!(y_bounds(std::iter::empty()), [0.0, 1.0]);
        assert_eq!(y_bounds([f64::NAN]), [0.0, 1.0]);
    }
}
