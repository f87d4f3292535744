use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Widget / social label, e.g. `Sat, Jun 1`.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%a, %b %-d").to_string()
}

/// Analytics bucket label, e.g. `Jun 2024`.
pub fn month_label(d: NaiveDate) -> String {
    d.format("%b %Y").to_string()
}

/// Every day from `start` to `end`, both included. Empty when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Resolve a period expression into inclusive bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:` (`2024-06:2024-08`)
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, _) = single_period_bounds(start_raw.trim())?;
        let (_, end) = single_period_bounds(end_raw.trim())?;
        if end < start {
            return Err(AppError::InvalidRange { start, end });
        }
        return Ok((start, end));
    }

    single_period_bounds(p.trim())
}

fn single_period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("Invalid period: {p}"));

    match p.len() {
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        // YYYY-MM
        7 => {
            let first = parse_date(&format!("{p}-01")).ok_or_else(invalid)?;
            let last = month_last_day(first.year(), first.month()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        _ => Err(invalid()),
    }
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    single_period_bounds(&t.format("%Y-%m").to_string())
}

fn month_last_day(y: i32, m: u32) -> Option<NaiveDate> {
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
