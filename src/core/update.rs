use crate::core::conflict::has_conflict;
use crate::core::state::AppState;
use crate::core::validate::validate_fields;
use crate::db::DisruptionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Disruption, DisruptionPatch};
use chrono::NaiveDate;

pub struct UpdateLogic;

#[derive(Debug)]
pub struct UpdateOutcome {
    pub disruption: Disruption,
    /// Set when the edited record now overlaps another one on its date.
    /// Updates are not blocked on overlap, only reported.
    pub overlaps_on: Option<NaiveDate>,
}

impl UpdateLogic {
    pub fn apply(
        store: &mut dyn DisruptionStore,
        state: &mut AppState,
        id: i64,
        patch: &DisruptionPatch,
    ) -> AppResult<UpdateOutcome> {
        let current = state.find(id).cloned().ok_or(AppError::NotFound(id))?;

        let (date, fields) = patch.apply(&current);
        let fields = fields.normalized();
        validate_fields(&fields)?;

        store.update_disruption(id, date, &fields)?;

        let mut updated = current;
        updated.date = date;
        updated.is_full_day = fields.is_full_day;
        updated.start_time = fields.start_time;
        updated.end_time = fields.end_time;
        updated.reason = fields.reason;
        updated.refund_provided = fields.refund_provided;
        updated.refund_amount = fields.refund_amount;

        let others: Vec<Disruption> = state
            .disruptions
            .iter()
            .filter(|d| d.id != id)
            .cloned()
            .collect();
        let overlaps_on = has_conflict(&updated.slot(), &others).then_some(date);

        state.replace(updated.clone());
        store.record(
            "edit",
            &updated.date_str(),
            &format!("#{} {} ({})", id, updated.reason, updated.time_label()),
        );

        Ok(UpdateOutcome {
            disruption: updated,
            overlaps_on,
        })
    }
}
