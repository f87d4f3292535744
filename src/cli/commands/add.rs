use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::state::AppState;
use crate::core::validate::Submission;
use crate::errors::{AppError, AppResult};
use crate::models::DisruptionFields;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Record a disruption, or one disruption per day for a range.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        to,
        full_day,
        start,
        end,
        reason,
        refund,
    } = cmd
    {
        //
        // 1. Parse dates
        //
        let start_date =
            date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let end_date = match to {
            Some(raw) => {
                Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?)
            }
            None => None,
        };

        //
        // 2. Parse times
        //
        let start_time = parse_optional_time(start.as_ref())?;
        let end_time = parse_optional_time(end.as_ref())?;

        let submission = Submission {
            start_date,
            end_date,
            fields: DisruptionFields {
                is_full_day: *full_day,
                start_time,
                end_time,
                reason: reason.clone().unwrap_or_default(),
                refund_provided: refund.is_some(),
                refund_amount: refund.unwrap_or(0.0),
            },
        };

        //
        // 3. Execute logic
        //
        let mut pool = open_pool(cfg)?;
        let mut state = AppState::load(&mut pool)?;

        match AddLogic::apply(
            &mut pool,
            &mut state,
            submission,
            cfg.operator_email.as_deref(),
        ) {
            Ok(created) => {
                for d in &created {
                    success(format!(
                        "Disruption #{} added for {} ({}): {}",
                        d.id,
                        d.date_str(),
                        d.time_label(),
                        d.reason
                    ));
                }
                if created.len() > 1 {
                    success(format!("{} disruptions created.", created.len()));
                }
            }
            Err(AppError::PartialCreate {
                created,
                failed_on,
                source,
            }) => {
                let days: Vec<String> = created.iter().map(|d| d.to_string()).collect();
                warning(format!("Created before the failure: {}", days.join(", ")));
                return Err(AppError::PartialCreate {
                    created,
                    failed_on,
                    source,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
