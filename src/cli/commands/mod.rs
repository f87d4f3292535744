pub mod add;
pub mod analytics;
pub mod config;
pub mod db;
pub mod del;
pub mod embed;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod serve;
pub mod social;
pub mod update;
pub mod widget;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database with the schema brought up to date.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
