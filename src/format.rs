//! Display Formatting
//!
//! Pure helpers turning raw metrics into compact display strings.

use chrono::NaiveDate;

/// Format a currency amount compactly: `$125k`, `$1.5M`
///
/// The amount is divided by 1000 and rounded to the nearest integer. Once
/// that reaches 1000 (so never `$1000k`) it switches to millions with one
/// decimal.
pub fn format_salary(amount: f64) -> String {
    let thousands = (amount / 1000.0).round();
    if thousands.abs() >= 1000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else {
        format!("${}k", thousands as i64)
    }
}

/// Format a count compactly: `45.2K` from 1000 up, plain integer below
pub fn format_number(value: u64) -> String {
    if value >= 1000 {
        format!("{:.1}K", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

/// Format a signed percentage with one decimal: `12.3%`, `-1.1%`
///
/// Positive values carry no sign; see [`format_signed_percentage`].
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Same as [`format_percentage`] with a leading `+` for positive values
pub fn format_signed_percentage(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_percentage(value))
    } else {
        format_percentage(value)
    }
}

/// Chart axis label for a trend sample: `Jan 05`
pub fn format_chart_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

/// Shorten a label to `max_chars` characters, appending `...` when cut
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let head: String = label.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}
