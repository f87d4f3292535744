use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) RECORD COUNTS
    //
    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM disruptions", [], |row| row.get(0))?;
    let full_day: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM disruptions WHERE is_full_day = 1",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Disruptions:{} {}{}{} ({} full day, {} partial)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        full_day,
        total - full_day
    );

    //
    // 3) DATE RANGE
    //
    let range: Option<(Option<String>, Option<String>)> = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM disruptions", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?;

    let (first, last) = range.unwrap_or((None, None));
    let placeholder = format!("{GREY}--{RESET}");

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.unwrap_or(placeholder));

    //
    // 4) SCHEMA VERSION
    //
    let versions = applied_versions(&pool.conn)?;
    let latest = versions.last().cloned().unwrap_or_else(|| "--".into());
    println!(
        "{}• Migrations:{} {} applied (latest: {})",
        CYAN,
        RESET,
        versions.len(),
        latest
    );

    println!();
    Ok(())
}

/// `PRAGMA integrity_check`; `"ok"` when the file is sound.
pub fn integrity_check(pool: &DbPool) -> rusqlite::Result<String> {
    pool.conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))
}
