use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Every other migration records
/// itself there, so this one always runs first.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_disruptions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS disruptions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            is_full_day     INTEGER NOT NULL DEFAULT 1 CHECK(is_full_day IN (0,1)),
            start_time      TEXT,
            end_time        TEXT,
            reason          TEXT NOT NULL,
            refund_provided INTEGER NOT NULL DEFAULT 0 CHECK(refund_provided IN (0,1)),
            refund_amount   REAL,
            created_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_disruptions_date ON disruptions(date);
        "#,
    )?;
    Ok(())
}

fn create_widget_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS widget_settings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            title          TEXT NOT NULL,
            description    TEXT NOT NULL,
            primary_color  TEXT NOT NULL,
            accent_color   TEXT NOT NULL,
            show_dates     INTEGER NOT NULL DEFAULT 1,
            show_times     INTEGER NOT NULL DEFAULT 1,
            show_icon      INTEGER NOT NULL DEFAULT 1,
            animation      TEXT NOT NULL DEFAULT 'wave',
            border_radius  TEXT NOT NULL DEFAULT 'medium',
            shadow         TEXT NOT NULL DEFAULT 'medium',
            font_style     TEXT NOT NULL DEFAULT 'default',
            layout         TEXT NOT NULL DEFAULT 'standard',
            border_width   TEXT NOT NULL DEFAULT 'thin',
            updated_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn add_created_by_email(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info('disruptions')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for c in cols {
        if c? == "created_by_email" {
            return Ok(());
        }
    }

    conn.execute_batch("ALTER TABLE disruptions ADD COLUMN created_by_email TEXT;")?;
    Ok(())
}

type MigrationFn = fn(&Connection) -> Result<()>;

/// Ordered list of schema migrations: (version, description, step).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    (
        "20240501_0001_create_disruptions",
        "Created disruptions table",
        create_disruptions_table,
    ),
    (
        "20240501_0002_create_widget_settings",
        "Created widget_settings table",
        create_widget_settings_table,
    ),
    (
        "20240620_0003_add_created_by_email",
        "Added created_by_email to disruptions",
        add_created_by_email,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already recorded in the `log` table.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations, each inside its own
/// transaction together with its `log` marker.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let outcome = step(conn).and_then(|_| {
            conn.execute(
                "INSERT INTO log (date, operation, target, message)
                 VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
                [version, description],
            )
        });

        match outcome {
            Ok(_) => {
                conn.execute_batch("COMMIT;")?;
                success(format!("Migration applied: {version}"));
                applied += 1;
            }
            Err(e) => {
                conn.execute_batch("ROLLBACK;")?;
                return Err(e);
            }
        }
    }

    Ok(applied)
}
