use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Maintenance on the disruptions database. Flags combine and run in a
/// fixed order: migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            match run_pending_migrations(&pool.conn)? {
                0 => info("Schema is already up to date."),
                n => success(format!("{n} migration(s) applied.")),
            }
        }

        if *show_info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            let result = stats::integrity_check(&pool)?;
            if result == "ok" {
                success("Integrity check passed.");
            } else {
                warning(format!("Integrity check failed: {result}"));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success(format!("Database compacted: {}", cfg.database));
        }
    }

    Ok(())
}
