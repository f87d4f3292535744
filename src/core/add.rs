use crate::core::conflict::first_conflict;
use crate::core::expand::{create_sequentially, expand_range};
use crate::core::state::AppState;
use crate::core::validate::{Submission, validate_submission};
use crate::db::DisruptionStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Disruption, Slot};
use crate::utils::time_label;

pub struct AddLogic;

impl AddLogic {
    /// Validate, expand, conflict-check, then create every day in order.
    ///
    /// Nothing is written unless every expanded day passes validation and
    /// the conflict check against `state`.
    pub fn apply(
        store: &mut dyn DisruptionStore,
        state: &mut AppState,
        submission: Submission,
        created_by_email: Option<&str>,
    ) -> AppResult<Vec<Disruption>> {
        //
        // 1. Field and range validation
        //
        validate_submission(&submission)?;

        //
        // 2. Expand into one request per day
        //
        let fields = submission.fields.clone().normalized();
        let requests = expand_range(
            submission.start_date,
            submission.last_date(),
            &fields,
            created_by_email,
        )?;

        //
        // 3. Conflict check against the current snapshot
        //
        let slots: Vec<Slot> = requests.iter().map(|r| r.slot()).collect();
        if let Some(date) = first_conflict(&slots, &state.disruptions) {
            return Err(AppError::Conflict(date));
        }

        //
        // 4. Sequential creation, reconciled into the state even on failure
        //
        let outcome = create_sequentially(store, requests);

        match &outcome {
            Ok(created) => {
                state.insert_created(created);
                for d in created {
                    store.record(
                        "add",
                        &d.date_str(),
                        &format!("#{} {} ({})", d.id, d.reason, d.time_label()),
                    );
                }
            }
            Err(AppError::PartialCreate {
                created, failed_on, ..
            }) => {
                for date in created {
                    store.record(
                        "add",
                        &date.format("%Y-%m-%d").to_string(),
                        &format!(
                            "{} ({}), range stopped at {failed_on}",
                            fields.reason,
                            time_label(fields.is_full_day, fields.start_time, fields.end_time)
                        ),
                    );
                }

                // what made it in is re-read rather than guessed
                match AppState::load(store) {
                    Ok(fresh) => *state = fresh,
                    Err(e) => tracing::warn!(error = %e, "state reload after partial create failed"),
                }
            }
            Err(_) => {}
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::memory::MemoryStore;
    use crate::models::DisruptionFields;
    use chrono::{NaiveDate, NaiveTime};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn partial(start: &str, end: &str) -> DisruptionFields {
        DisruptionFields {
            is_full_day: false,
            start_time: NaiveTime::parse_from_str(start, "%H:%M").ok(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").ok(),
            reason: "Strong wind".into(),
            refund_provided: false,
            refund_amount: 0.0,
        }
    }

    fn submit(
        store: &mut MemoryStore,
        start: &str,
        end: Option<&str>,
        fields: DisruptionFields,
    ) -> AppResult<Vec<Disruption>> {
        let mut state = AppState::load(store)?;
        AddLogic::apply(
            store,
            &mut state,
            Submission {
                start_date: d(start),
                end_date: end.map(d),
                fields,
            },
            Some("ops@example.com"),
        )
    }

    #[test]
    fn touching_interval_is_rejected() {
        let mut store = MemoryStore::default();
        submit(&mut store, "2024-06-01", None, partial("09:00", "12:00")).unwrap();

        let err = submit(&mut store, "2024-06-01", None, partial("12:00", "15:00")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(date) if date == d("2024-06-01")));
        assert_eq!(store.rows.len(), 1);
    }

    #[test]
    fn range_creates_one_row_per_day() {
        let mut store = MemoryStore::default();
        let created = submit(
            &mut store,
            "2024-06-01",
            Some("2024-06-03"),
            partial("13:00", "14:00"),
        )
        .unwrap();
        assert_eq!(created.len(), 3);
        assert!(created.iter().all(|c| c.reason == "Strong wind"
            && c.created_by_email.as_deref() == Some("ops@example.com")));
    }

    #[test]
    fn range_conflict_blocks_every_day() {
        let mut store = MemoryStore::default();
        submit(&mut store, "2024-06-02", None, partial("08:00", "09:00")).unwrap();

        let mut full = partial("00:00", "00:00");
        full.is_full_day = true;
        let err = submit(&mut store, "2024-06-01", Some("2024-06-03"), full).unwrap_err();
        assert!(matches!(err, AppError::Conflict(date) if date == d("2024-06-02")));
        // nothing from the rejected range was written
        assert_eq!(store.rows.len(), 1);
        assert_eq!(store.create_calls, 1);
    }

    #[test]
    fn reversed_range_issues_no_requests() {
        let mut store = MemoryStore::default();
        let err = submit(
            &mut store,
            "2024-06-03",
            Some("2024-06-01"),
            partial("09:00", "10:00"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidRange { .. }));
        assert_eq!(store.create_calls, 0);
    }

    #[test]
    fn full_day_drops_times_before_saving() {
        let mut store = MemoryStore::default();
        let mut f = partial("09:00", "10:00");
        f.is_full_day = true;
        let created = submit(&mut store, "2024-07-01", None, f).unwrap();
        assert_eq!(created[0].start_time, None);
        assert_eq!(created[0].time_label(), "All Day");
    }

    #[test]
    fn partial_failure_resyncs_state() {
        let mut store = MemoryStore {
            fail_on_create: Some(3),
            ..Default::default()
        };
        let mut state = AppState::default();
        let err = AddLogic::apply(
            &mut store,
            &mut state,
            Submission {
                start_date: d("2024-06-01"),
                end_date: Some(d("2024-06-04")),
                fields: partial("10:00", "11:00"),
            },
            None,
        )
        .unwrap_err();

        assert!(matches!(err, AppError::PartialCreate { .. }));
        assert_eq!(state.disruptions.len(), 2);
        assert_eq!(store.create_calls, 3);
    }

    #[test]
    fn partial_failure_audits_created_days() {
        let mut store = MemoryStore {
            fail_on_create: Some(3),
            ..Default::default()
        };
        let mut state = AppState::default();
        AddLogic::apply(
            &mut store,
            &mut state,
            Submission {
                start_date: d("2024-06-01"),
                end_date: Some(d("2024-06-04")),
                fields: partial("10:00", "11:00"),
            },
            None,
        )
        .unwrap_err();

        assert_eq!(store.rows.len(), 2);
        assert_eq!(
            store.audits,
            vec![
                ("add".to_string(), "2024-06-01".to_string()),
                ("add".to_string(), "2024-06-02".to_string()),
            ]
        );
    }

    #[test]
    fn partial_failure_survives_a_failed_reload() {
        let mut store = MemoryStore {
            fail_on_create: Some(2),
            fail_on_list: true,
            ..Default::default()
        };
        let mut state = AppState::default();
        let err = AddLogic::apply(
            &mut store,
            &mut state,
            Submission {
                start_date: d("2024-06-01"),
                end_date: Some(d("2024-06-03")),
                fields: partial("10:00", "11:00"),
            },
            None,
        )
        .unwrap_err();

        match err {
            AppError::PartialCreate {
                created, failed_on, ..
            } => {
                assert_eq!(created, vec![d("2024-06-01")]);
                assert_eq!(failed_on, d("2024-06-02"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(store.audits.len(), 1);
    }
}
