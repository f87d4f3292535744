use crate::core::state::AppState;
use crate::db::DisruptionStore;
use crate::errors::{AppError, AppResult};
use crate::models::Disruption;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single disruption by id and return what was removed.
    pub fn apply(
        store: &mut dyn DisruptionStore,
        state: &mut AppState,
        id: i64,
    ) -> AppResult<Disruption> {
        let target = state.find(id).cloned().ok_or(AppError::NotFound(id))?;

        store.delete_disruption(id)?;
        state.remove(id);

        store.record(
            "del",
            &target.date_str(),
            &format!("#{} {} ({})", target.id, target.reason, target.time_label()),
        );

        Ok(target)
    }
}
