//! Persistence of the singleton widget appearance record.

use crate::errors::{AppError, AppResult};
use crate::models::WidgetSettings;
use crate::models::widget_settings::{
    Animation, BorderRadius, BorderWidth, FontStyle, Layout, Shadow,
};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn bad_value(column: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::InvalidSetting(format!(
            "unknown {column} '{value}' in widget_settings"
        ))),
    )
}

fn enum_col<T>(row: &Row, column: &str, parse: fn(&str) -> Option<T>) -> rusqlite::Result<T> {
    let raw: String = row.get(column)?;
    parse(&raw).ok_or_else(|| bad_value(column, &raw))
}

fn map_row(row: &Row) -> rusqlite::Result<WidgetSettings> {
    Ok(WidgetSettings {
        title: row.get("title")?,
        description: row.get("description")?,
        primary_color: row.get("primary_color")?,
        accent_color: row.get("accent_color")?,
        show_dates: row.get::<_, i64>("show_dates")? == 1,
        show_times: row.get::<_, i64>("show_times")? == 1,
        show_icon: row.get::<_, i64>("show_icon")? == 1,
        animation: enum_col(row, "animation", Animation::from_db_str)?,
        border_radius: enum_col(row, "border_radius", BorderRadius::from_db_str)?,
        shadow: enum_col(row, "shadow", Shadow::from_db_str)?,
        font_style: enum_col(row, "font_style", FontStyle::from_db_str)?,
        layout: enum_col(row, "layout", Layout::from_db_str)?,
        border_width: enum_col(row, "border_width", BorderWidth::from_db_str)?,
    })
}

/// The stored settings, or `None` when nothing was saved yet.
pub fn load_settings(conn: &Connection) -> AppResult<Option<WidgetSettings>> {
    let found = conn
        .query_row(
            "SELECT * FROM widget_settings ORDER BY id ASC LIMIT 1",
            [],
            map_row,
        )
        .optional()?;
    Ok(found)
}

/// Update the first row, or insert one when the table is empty.
pub fn save_settings(conn: &Connection, s: &WidgetSettings) -> AppResult<()> {
    let now = chrono::Local::now().to_rfc3339();
    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM widget_settings ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match existing {
        Some(id) => {
            conn.execute(
                "UPDATE widget_settings
                    SET title = ?1, description = ?2, primary_color = ?3, accent_color = ?4,
                        show_dates = ?5, show_times = ?6, show_icon = ?7, animation = ?8,
                        border_radius = ?9, shadow = ?10, font_style = ?11, layout = ?12,
                        border_width = ?13, updated_at = ?14
                  WHERE id = ?15",
                params![
                    s.title,
                    s.description,
                    s.primary_color,
                    s.accent_color,
                    s.show_dates as i64,
                    s.show_times as i64,
                    s.show_icon as i64,
                    s.animation.to_db_str(),
                    s.border_radius.to_db_str(),
                    s.shadow.to_db_str(),
                    s.font_style.to_db_str(),
                    s.layout.to_db_str(),
                    s.border_width.to_db_str(),
                    now,
                    id,
                ],
            )?;
        }
        None => {
            conn.execute(
                "INSERT INTO widget_settings (title, description, primary_color, accent_color,
                        show_dates, show_times, show_icon, animation, border_radius, shadow,
                        font_style, layout, border_width, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                params![
                    s.title,
                    s.description,
                    s.primary_color,
                    s.accent_color,
                    s.show_dates as i64,
                    s.show_times as i64,
                    s.show_icon as i64,
                    s.animation.to_db_str(),
                    s.border_radius.to_db_str(),
                    s.shadow.to_db_str(),
                    s.font_style.to_db_str(),
                    s.layout.to_db_str(),
                    s.border_width.to_db_str(),
                    now,
                ],
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrate::run_pending_migrations;

    #[test]
    fn upsert_keeps_a_single_row() {
        let c = Connection::open_in_memory().unwrap();
        run_pending_migrations(&c).unwrap();

        assert_eq!(load_settings(&c).unwrap(), None);

        let mut s = WidgetSettings::default();
        save_settings(&c, &s).unwrap();
        s.title = "Harbour closed".into();
        s.shadow = Shadow::Large;
        save_settings(&c, &s).unwrap();

        let count: i64 = c
            .query_row("SELECT COUNT(*) FROM widget_settings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(load_settings(&c).unwrap(), Some(s));
    }
}
