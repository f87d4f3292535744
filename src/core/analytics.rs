//! Aggregations behind the `analytics` command.
//!
//! Buckets keep first-seen order for months and reasons (records arrive
//! sorted by date) and chronological order for years.

use crate::models::Disruption;
use crate::utils::date::month_label;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

const REASON_LABEL_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub full_day: usize,
    pub partial_day: usize,
    pub full_day_pct: u32,
    pub refund_count: usize,
    pub refund_pct: u32,
    pub total_refunds: f64,
    pub average_refund: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBucket {
    pub year: i32,
    pub count: usize,
    pub refunds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: Summary,
    pub monthly: Vec<Bucket>,
    pub yearly: Vec<YearBucket>,
    pub reasons: Vec<Bucket>,
}

fn pct(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

fn refund_of(d: &Disruption) -> f64 {
    if d.refund_provided { d.refund_amount } else { 0.0 }
}

pub fn summary(rows: &[Disruption]) -> Summary {
    let total = rows.len();
    let full_day = rows.iter().filter(|d| d.is_full_day).count();
    let refund_count = rows.iter().filter(|d| d.refund_provided).count();
    let total_refunds: f64 = rows.iter().map(refund_of).sum();

    // averaged over the disruptions that actually carried a refund
    let average_refund = if refund_count > 0 {
        total_refunds / refund_count as f64
    } else {
        0.0
    };

    Summary {
        total,
        full_day,
        partial_day: total - full_day,
        full_day_pct: pct(full_day, total),
        refund_count,
        refund_pct: pct(refund_count, total),
        total_refunds,
        average_refund,
    }
}

/// Per-month counts labelled `Jun 2024`.
pub fn monthly(rows: &[Disruption]) -> Vec<Bucket> {
    let mut out: Vec<Bucket> = Vec::new();
    for d in rows {
        let label = month_label(d.date);
        match out.iter_mut().find(|b| b.label == label) {
            Some(b) => b.count += 1,
            None => out.push(Bucket { label, count: 1 }),
        }
    }
    out
}

pub fn yearly(rows: &[Disruption]) -> Vec<YearBucket> {
    let mut by_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    for d in rows {
        let entry = by_year.entry(d.date.year()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += refund_of(d);
    }
    by_year
        .into_iter()
        .map(|(year, (count, refunds))| YearBucket {
            year,
            count,
            refunds,
        })
        .collect()
}

/// First 20 characters of a reason, with `...` when it was longer.
pub fn reason_label(reason: &str) -> String {
    let mut chars = reason.chars();
    let head: String = chars.by_ref().take(REASON_LABEL_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn reasons(rows: &[Disruption]) -> Vec<Bucket> {
    let mut out: Vec<Bucket> = Vec::new();
    for d in rows {
        let label = reason_label(&d.reason);
        match out.iter_mut().find(|b| b.label == label) {
            Some(b) => b.count += 1,
            None => out.push(Bucket { label, count: 1 }),
        }
    }
    out
}

pub fn report(rows: &[Disruption]) -> Report {
    Report {
        summary: summary(rows),
        monthly: monthly(rows),
        yearly: yearly(rows),
        reasons: reasons(rows),
    }
}
