use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::log_table_exists;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const OP_WIDTH: usize = 40;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// Colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "rollcall" => Colour::Cyan,
        "add" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open(&cfg.database)?;
        print_log(&pool)?;
    }

    Ok(())
}

fn print_log(pool: &DbPool) -> AppResult<()> {
    if !log_table_exists(&pool.conn)? {
        info("The internal log is empty.");
        return Ok(());
    }

    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, target, week, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: Option<String> = row.get(3)?;
        let week: Option<String> = row.get(4)?;
        let message: String = row.get(5)?;
        Ok((
            id,
            raw_date,
            operation,
            target.unwrap_or_default(),
            week.unwrap_or_default(),
            message,
        ))
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    if entries.is_empty() {
        info("The internal log is empty.");
        return Ok(());
    }

    let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;
    let id_w = entries
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);

    println!("📜 Internal log:\n");

    for (id, raw_date, operation, target, week, message) in entries {
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%F %T").to_string())
            .unwrap_or(raw_date);

        let mut label = color_for_operation(&operation)
            .paint(operation.as_str())
            .to_string();
        if !target.is_empty() {
            label.push_str(&format!(" ({})", target));
        }
        if !week.is_empty() {
            label.push_str(&format!(" [{}]", week));
        }

        let visible = strip_ansi(&ansi, &label).chars().count();
        let padding = " ".repeat(OP_WIDTH.saturating_sub(visible));

        println!(
            "{:>id_w$}: {} | {}{} => {}",
            id,
            date,
            label,
            padding,
            message,
            id_w = id_w
        );
    }

    Ok(())
}
