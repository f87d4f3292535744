//! Persistence seam used by the core logic.
//!
//! The core never talks to SQLite directly: it goes through
//! [`DisruptionStore`], which `DbPool` implements. Tests plug in an
//! in-memory store instead.

use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::AppResult;
use crate::models::{Disruption, DisruptionFields, NewDisruption, WidgetSettings};
use chrono::NaiveDate;

pub trait DisruptionStore {
    fn list_disruptions(&mut self) -> AppResult<Vec<Disruption>>;

    fn create_disruption(&mut self, new: &NewDisruption) -> AppResult<Disruption>;

    fn delete_disruption(&mut self, id: i64) -> AppResult<()>;

    fn update_disruption(
        &mut self,
        id: i64,
        date: NaiveDate,
        fields: &DisruptionFields,
    ) -> AppResult<()>;

    fn get_widget_settings(&mut self) -> AppResult<Option<WidgetSettings>>;

    fn set_widget_settings(&mut self, s: &WidgetSettings) -> AppResult<()>;

    /// Audit trail hook; stores without one ignore it.
    fn record(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

impl DisruptionStore for DbPool {
    fn list_disruptions(&mut self) -> AppResult<Vec<Disruption>> {
        queries::load_all(&self.conn)
    }

    fn create_disruption(&mut self, new: &NewDisruption) -> AppResult<Disruption> {
        queries::insert_disruption(&self.conn, new)
    }

    fn delete_disruption(&mut self, id: i64) -> AppResult<()> {
        queries::delete_disruption(&self.conn, id)
    }

    fn update_disruption(
        &mut self,
        id: i64,
        date: NaiveDate,
        fields: &DisruptionFields,
    ) -> AppResult<()> {
        queries::update_disruption(&self.conn, id, date, fields)
    }

    fn get_widget_settings(&mut self) -> AppResult<Option<WidgetSettings>> {
        settings::load_settings(&self.conn)
    }

    fn set_widget_settings(&mut self, s: &WidgetSettings) -> AppResult<()> {
        settings::save_settings(&self.conn, s)
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) {
        crate::db::log::audit_quiet(&self.conn, operation, target, message);
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory store with optional failure injection.

    use super::*;
    use crate::errors::AppError;

    #[derive(Default)]
    pub struct MemoryStore {
        pub rows: Vec<Disruption>,
        pub settings: Option<WidgetSettings>,
        pub create_calls: usize,
        /// Fail the n-th create call (1-based).
        pub fail_on_create: Option<usize>,
        pub fail_on_list: bool,
        pub next_id: i64,
        /// `(operation, target)` of every audit call.
        pub audits: Vec<(String, String)>,
    }

    impl MemoryStore {
        pub fn with_rows(rows: Vec<Disruption>) -> Self {
            let next_id = rows.iter().map(|d| d.id).max().unwrap_or(0);
            Self {
                rows,
                next_id,
                ..Default::default()
            }
        }
    }

    impl DisruptionStore for MemoryStore {
        fn list_disruptions(&mut self) -> AppResult<Vec<Disruption>> {
            if self.fail_on_list {
                return Err(AppError::Other("backend unavailable".into()));
            }
            Ok(self.rows.clone())
        }

        fn create_disruption(&mut self, new: &NewDisruption) -> AppResult<Disruption> {
            self.create_calls += 1;
            if self.fail_on_create == Some(self.create_calls) {
                return Err(AppError::Other("backend unavailable".into()));
            }
            self.next_id += 1;
            let d = new.clone().into_disruption(self.next_id);
            self.rows.push(d.clone());
            Ok(d)
        }

        fn delete_disruption(&mut self, id: i64) -> AppResult<()> {
            let before = self.rows.len();
            self.rows.retain(|d| d.id != id);
            if self.rows.len() == before {
                return Err(AppError::NotFound(id));
            }
            Ok(())
        }

        fn update_disruption(
            &mut self,
            id: i64,
            date: NaiveDate,
            fields: &DisruptionFields,
        ) -> AppResult<()> {
            let row = self
                .rows
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(AppError::NotFound(id))?;
            row.date = date;
            row.is_full_day = fields.is_full_day;
            row.start_time = fields.start_time;
            row.end_time = fields.end_time;
            row.reason = fields.reason.clone();
            row.refund_provided = fields.refund_provided;
            row.refund_amount = fields.refund_amount;
            Ok(())
        }

        fn get_widget_settings(&mut self) -> AppResult<Option<WidgetSettings>> {
            Ok(self.settings.clone())
        }

        fn set_widget_settings(&mut self, s: &WidgetSettings) -> AppResult<()> {
            self.settings = Some(s.clone());
            Ok(())
        }

        fn record(&mut self, operation: &str, target: &str, _message: &str) {
            self.audits.push((operation.to_string(), target.to_string()));
        }
    }
}
