use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::core::update::UpdateLogic;
use crate::errors::{AppError, AppResult};
use crate::models::DisruptionPatch;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        date: new_date,
        full_day,
        partial,
        start,
        end,
        reason,
        refund,
        no_refund,
    } = cmd
    {
        let date = match new_date {
            Some(raw) => {
                Some(date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?)
            }
            None => None,
        };

        let is_full_day = if *full_day {
            Some(true)
        } else if *partial {
            Some(false)
        } else {
            None
        };

        let (refund_provided, refund_amount) = match (refund, no_refund) {
            (Some(amount), _) => (Some(true), Some(*amount)),
            (None, true) => (Some(false), Some(0.0)),
            (None, false) => (None, None),
        };

        let patch = DisruptionPatch {
            date,
            is_full_day,
            start_time: parse_optional_time(start.as_ref())?,
            end_time: parse_optional_time(end.as_ref())?,
            reason: reason.clone(),
            refund_provided,
            refund_amount,
        };

        if patch.is_empty() {
            info("Nothing to update.");
            return Ok(());
        }

        let mut pool = open_pool(cfg)?;
        let mut state = AppState::load(&mut pool)?;

        let outcome = UpdateLogic::apply(&mut pool, &mut state, *id, &patch)?;
        let d = &outcome.disruption;

        success(format!(
            "Disruption #{} updated: {} ({}): {}",
            d.id,
            d.date_str(),
            d.time_label(),
            d.reason
        ));

        if let Some(day) = outcome.overlaps_on {
            warning(format!("Disruption #{} now overlaps another one on {}", d.id, day));
        }
    }

    Ok(())
}
