use crate::db::migrate::run_pending_migrations;
use crate::db::settings::{load_settings, save_settings};
use crate::errors::AppResult;
use crate::models::WidgetSettings;
use rusqlite::Connection;

/// Bring the schema up to date and make sure the singleton widget
/// settings row exists, so the server never serves an unsaved default.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    if load_settings(conn)?.is_none() {
        save_settings(conn, &WidgetSettings::default())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_default_widget_settings_once() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        init_db(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM widget_settings", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(load_settings(&conn).unwrap(), Some(WidgetSettings::default()));
    }
}
