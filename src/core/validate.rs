use crate::errors::{AppError, AppResult};
use crate::models::DisruptionFields;
use chrono::NaiveDate;

/// What the operator typed: a start date, an optional end date for a
/// range, and the shared fields.
#[derive(Debug, Clone)]
pub struct Submission {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub fields: DisruptionFields,
}

impl Submission {
    pub fn last_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}

/// Field rules shared by `add` and `update`.
pub fn validate_fields(f: &DisruptionFields) -> AppResult<()> {
    if f.reason.trim().is_empty() {
        return Err(AppError::MissingReason);
    }

    if !f.is_full_day && (f.start_time.is_none() || f.end_time.is_none()) {
        return Err(AppError::MissingTimes);
    }

    if f.refund_provided && (f.refund_amount <= 0.0 || !f.refund_amount.is_finite()) {
        return Err(AppError::InvalidRefund);
    }

    Ok(())
}

/// Checks run before any expansion or persistence call.
pub fn validate_submission(s: &Submission) -> AppResult<()> {
    if let Some(end) = s.end_date
        && end < s.start_date
    {
        return Err(AppError::InvalidRange {
            start: s.start_date,
            end,
        });
    }

    validate_fields(&s.fields)
}
