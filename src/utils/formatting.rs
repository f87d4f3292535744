//! Formatting helpers shared by the CLI, the widget and the social composer.

use crate::utils::time::format_time;
use chrono::NaiveTime;

/// Human label for a disruption's time window.
///
/// `All Day` for full-day records, `From HH:MM` when only the start is known.
pub fn time_label(is_full_day: bool, start: Option<NaiveTime>, end: Option<NaiveTime>) -> String {
    if is_full_day {
        return "All Day".to_string();
    }
    match (start, end) {
        (None, _) => String::new(),
        (Some(s), None) => format!("From {}", format_time(s)),
        (Some(s), Some(e)) => format!("{} - {}", format_time(s), format_time(e)),
    }
}

/// Joins labels the way the widget headline reads: `A`, `A and B`, `A, B, and C`.
pub fn join_labels(labels: &[String]) -> String {
    match labels {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Two decimals, thousands separated with commas: `1,234.50`.
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}
