use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::state::AppState;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = open_pool(cfg)?;
        let mut state = AppState::load(&mut pool)?;

        let removed = DeleteLogic::apply(&mut pool, &mut state, *id)?;

        success(format!(
            "Disruption #{} on {} deleted.",
            removed.id,
            removed.date_str()
        ));
    }

    Ok(())
}
