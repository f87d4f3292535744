// src/export/model.rs

use crate::models::Disruption;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DisruptionExport {
    pub id: i64,
    pub date: String,
    pub is_full_day: bool,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    pub refund_provided: bool,
    pub refund_amount: f64,
    pub created_at: String,
    pub created_by_email: String,
}

impl From<&Disruption> for DisruptionExport {
    fn from(d: &Disruption) -> Self {
        Self {
            id: d.id,
            date: d.date_str(),
            is_full_day: d.is_full_day,
            start_time: d.start_time.map(format_time).unwrap_or_default(),
            end_time: d.end_time.map(format_time).unwrap_or_default(),
            reason: d.reason.clone(),
            refund_provided: d.refund_provided,
            refund_amount: if d.refund_provided { d.refund_amount } else { 0.0 },
            created_at: d.created_at.clone(),
            created_by_email: d.created_by_email.clone().unwrap_or_default(),
        }
    }
}
