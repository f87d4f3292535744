//! In-memory application state: a snapshot of the store that the pure
//! logic reads and that mutations reconcile into.

use crate::db::DisruptionStore;
use crate::errors::AppResult;
use crate::models::{Disruption, WidgetSettings};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub disruptions: Vec<Disruption>,
    pub widget_settings: WidgetSettings,
}

impl AppState {
    pub fn load(store: &mut dyn DisruptionStore) -> AppResult<Self> {
        let disruptions = store.list_disruptions()?;
        let widget_settings = store.get_widget_settings()?.unwrap_or_default();
        Ok(Self {
            disruptions,
            widget_settings,
        })
    }

    /// Disruptions dated today or later, earliest first.
    pub fn active(&self, today: NaiveDate) -> Vec<&Disruption> {
        let mut out: Vec<&Disruption> =
            self.disruptions.iter().filter(|d| d.date >= today).collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then(a.start_time.cmp(&b.start_time)));
        out
    }

    pub fn find(&self, id: i64) -> Option<&Disruption> {
        self.disruptions.iter().find(|d| d.id == id)
    }

    pub fn insert_created(&mut self, created: &[Disruption]) {
        self.disruptions.extend_from_slice(created);
        self.disruptions.sort_by_key(|d| (d.date, d.start_time, d.id));
    }

    pub fn remove(&mut self, id: i64) {
        self.disruptions.retain(|d| d.id != id);
    }

    pub fn replace(&mut self, updated: Disruption) {
        if let Some(slot) = self.disruptions.iter_mut().find(|d| d.id == updated.id) {
            *slot = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::memory::MemoryStore;

    fn row(id: i64, date: &str) -> Disruption {
        Disruption {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            is_full_day: true,
            start_time: None,
            end_time: None,
            reason: "Fog".into(),
            refund_provided: false,
            refund_amount: 0.0,
            created_at: String::new(),
            created_by_email: None,
        }
    }

    #[test]
    fn active_excludes_past_and_sorts() {
        let mut store =
            MemoryStore::with_rows(vec![row(1, "2024-06-10"), row(2, "2024-05-01"), row(3, "2024-06-02")]);
        let state = AppState::load(&mut store).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let ids: Vec<i64> = state.active(today).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn defaults_when_settings_missing() {
        let mut store = MemoryStore::default();
        let state = AppState::load(&mut store).unwrap();
        assert_eq!(state.widget_settings, WidgetSettings::default());
    }
}
