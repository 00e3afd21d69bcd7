//! Number and date formatting for cards, tables and axis labels.

use chrono::NaiveDate;

/// Two decimals with thousands separators: `12345.678` → `12,345.68`.
///
/// Non-finite values render as `n/a`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".into();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Signed price delta: `+1.23`, `-0.50`, `0.00`.
pub fn format_change(change: f64) -> String {
    if change > 0.0 && format_price(change) != "0.00" {
        format!("+{}", format_price(change))
    } else {
        format_price(change)
    }
}

/// Signed percentage: `+0.52%`.
pub fn format_percent(pct: f64) -> String {
    format!("{}%", format_change(pct))
}

/// Short day label for the history axis: `Jul 10`.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Month label for forecast rows: `Aug 2025`.
pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
