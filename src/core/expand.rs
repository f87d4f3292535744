//! Range expansion: one submission covering several days becomes one
//! creation request per calendar day.

use crate::db::DisruptionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Disruption, DisruptionFields, NewDisruption};
use crate::utils::date::days_between;
use chrono::NaiveDate;

/// Expand `[start, end]` (inclusive) into per-day requests sharing `fields`.
pub fn expand_range(
    start: NaiveDate,
    end: NaiveDate,
    fields: &DisruptionFields,
    created_by_email: Option<&str>,
) -> AppResult<Vec<NewDisruption>> {
    if end < start {
        return Err(AppError::InvalidRange { start, end });
    }

    Ok(days_between(start, end)
        .into_iter()
        .map(|date| NewDisruption {
            date,
            fields: fields.clone(),
            created_by_email: created_by_email.map(str::to_string),
        })
        .collect())
}

/// Issue the requests one after another.
///
/// There is no rollback: when day *k* fails, the days before it stay
/// persisted and the days after it are never attempted. The returned
/// `PartialCreate` error lists what was created.
pub fn create_sequentially(
    store: &mut dyn DisruptionStore,
    requests: Vec<NewDisruption>,
) -> AppResult<Vec<Disruption>> {
    let mut created = Vec::with_capacity(requests.len());

    for req in requests {
        match store.create_disruption(&req) {
            Ok(d) => created.push(d),
            Err(e) if created.is_empty() => return Err(e),
            Err(e) => {
                return Err(AppError::PartialCreate {
                    created: created.iter().map(|d: &Disruption| d.date).collect(),
                    failed_on: req.date,
                    source: Box::new(e),
                });
            }
        }
    }

    Ok(created)
}
