use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::social::{ApiKeys, PlatformResult, compose_message, publish};
use crate::core::state::AppState;
use crate::db::DisruptionStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

fn report(platform: &str, r: &PlatformResult) {
    if r.success {
        success(format!("{platform}: {}", r.message));
    } else {
        warning(format!("{platform}: {}", r.message));
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Social { id, preview } = cmd {
        let mut pool = open_pool(cfg)?;
        let state = AppState::load(&mut pool)?;
        let d = state.find(*id).ok_or(AppError::NotFound(*id))?;

        if *preview {
            println!(
                "{}",
                compose_message(&cfg.social.message, d, &cfg.social.hashtags)
            );
            return Ok(());
        }

        let outcome = publish(d, &cfg.social, &ApiKeys::from_env());

        println!("📣 Post for disruption #{}:\n", d.id);
        println!("{}\n", outcome.message);
        report("Facebook", &outcome.facebook);
        report("Instagram", &outcome.instagram);

        pool.record(
            "social",
            &d.date_str(),
            &format!(
                "#{} facebook={} instagram={}",
                d.id, outcome.facebook.message, outcome.instagram.message
            ),
        );
    }

    Ok(())
}
