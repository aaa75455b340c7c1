use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

/// Check if the `log` table has a `week` column.
fn log_has_week_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('log')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "week" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add the `week` column (A1 letters of the roster week a row refers to).
fn migrate_add_week_to_log(conn: &Connection) -> Result<()> {
    if log_has_week_column(conn)? {
        return Ok(());
    }
    conn.execute_batch("ALTER TABLE log ADD COLUMN week TEXT DEFAULT '';")?;
    Ok(())
}

/// Bring the audit database to the current schema. Safe to run on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_add_week_to_log(conn)?;
    Ok(())
}

/// True when the `log` table is present.
pub fn log_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='log'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
