use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(
    conn: &Connection,
    operation: &str,
    target: &str,
    week: &str,
    message: &str,
) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, week, message)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;

    stmt.execute(params![now, operation, target, week, message])?;

    Ok(())
}

/// Record a roster mutation in the audit log.
///
/// Never fails the calling command: the sheet write already happened, so a
/// broken audit database is only reported.
pub fn audit(cfg: &Config, operation: &str, target: &str, week: &str, message: &str) {
    let result = DbPool::open(&cfg.database)
        .and_then(|pool| ttlog(&pool.conn, operation, target, week, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
