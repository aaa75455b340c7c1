use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::layout::{MONTH_ROW, WEEK_ROW};
use chrono::NaiveDate;

/// Print the roster column resolved for today.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if matches!(cmd, Commands::Week) {
        let engine = open_engine(cfg, today)?;
        let week = engine.week();
        let snapshot = engine.snapshot();

        // Month headers only sit above each month's first week.
        let month = (0..=week.index())
            .rev()
            .map(|col| snapshot.cell(MONTH_ROW, col))
            .find(|m| !m.is_empty())
            .unwrap_or("");

        println!(
            "📅 {} net, {}: week column {} (index {}), {} {}",
            cfg.net_name,
            today,
            week,
            week.index(),
            month,
            snapshot.cell(WEEK_ROW, week.index())
        );
    }

    Ok(())
}
