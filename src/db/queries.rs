use crate::errors::{AppError, AppResult};
use crate::models::{Disruption, DisruptionFields, NewDisruption};
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, date, is_full_day, start_time, end_time, reason,
        refund_provided, refund_amount, created_at, created_by_email
     FROM disruptions";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn map_time(raw: Option<String>) -> Result<Option<NaiveTime>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_time(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(AppError::InvalidTime(s))),
    }
}

pub fn map_row(row: &Row) -> Result<Disruption> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    let refund_provided = row.get::<_, i64>("refund_provided")? == 1;
    let refund_amount: Option<f64> = row.get("refund_amount")?;

    Ok(Disruption {
        id: row.get("id")?,
        date,
        is_full_day: row.get::<_, i64>("is_full_day")? == 1,
        start_time: map_time(row.get("start_time")?)?,
        end_time: map_time(row.get("end_time")?)?,
        reason: row.get("reason")?,
        refund_provided,
        refund_amount: if refund_provided {
            refund_amount.unwrap_or(0.0)
        } else {
            0.0
        },
        created_at: row.get("created_at")?,
        created_by_email: row.get("created_by_email")?,
    })
}

/// Keeps the rows that map cleanly. A stored date or time that no longer
/// parses drops that row (with a warning) instead of failing the listing.
fn collect_valid<I>(rows: I) -> AppResult<Vec<Disruption>>
where
    I: Iterator<Item = Result<Disruption>>,
{
    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(d) => out.push(d),
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, e)) => {
                tracing::warn!(error = %e, "skipping malformed disruption row");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(out)
}

/// All disruptions, ordered by date (then start time, full-day first).
pub fn load_all(conn: &Connection) -> AppResult<Vec<Disruption>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY date ASC, start_time ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    collect_valid(rows)
}

/// Disruptions whose date falls in `[from, to]`.
pub fn load_between(conn: &Connection, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Disruption>> {
    let sql = format!(
        "{SELECT_COLUMNS} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC, start_time ASC, id ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    collect_valid(rows)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<Disruption>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
    let found = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(found)
}

pub fn insert_disruption(conn: &Connection, new: &NewDisruption) -> AppResult<Disruption> {
    let created_at = chrono::Local::now().to_rfc3339();
    let f = &new.fields;

    conn.execute(
        "INSERT INTO disruptions (date, is_full_day, start_time, end_time, reason,
                                  refund_provided, refund_amount, created_at, created_by_email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            new.date.format("%Y-%m-%d").to_string(),
            f.is_full_day as i64,
            f.start_time.map(format_time),
            f.end_time.map(format_time),
            f.reason,
            f.refund_provided as i64,
            if f.refund_provided {
                Some(f.refund_amount)
            } else {
                None
            },
            created_at,
            new.created_by_email,
        ],
    )?;

    let id = conn.last_insert_rowid();
    load_by_id(conn, id)?.ok_or(AppError::NotFound(id))
}

pub fn update_disruption(
    conn: &Connection,
    id: i64,
    date: NaiveDate,
    f: &DisruptionFields,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE disruptions
            SET date = ?1, is_full_day = ?2, start_time = ?3, end_time = ?4, reason = ?5,
                refund_provided = ?6, refund_amount = ?7
          WHERE id = ?8",
        params![
            date.format("%Y-%m-%d").to_string(),
            f.is_full_day as i64,
            f.start_time.map(format_time),
            f.end_time.map(format_time),
            f.reason,
            f.refund_provided as i64,
            if f.refund_provided {
                Some(f.refund_amount)
            } else {
                None
            },
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn delete_disruption(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM disruptions WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}
