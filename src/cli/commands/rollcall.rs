use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::operator::normalize_callsign;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Take the roll call for this week and save it in one range write.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Rollcall { present } = cmd {
        let mut engine = open_engine(cfg, today)?;
        let week = engine.week();
        let entries = engine.roll_call(week)?;

        if entries.is_empty() {
            info("The active roster is empty, nothing to call.");
            return Ok(());
        }

        let selected: HashSet<String> = match present {
            Some(list) => list
                .iter()
                .map(|c| normalize_callsign(c))
                .filter(|c| !c.is_empty())
                .collect(),
            None => {
                header(format!("Roll Call, week {}", week));
                let mut here = HashSet::new();
                for entry in &entries {
                    if prompt::confirm(&entry.display, entry.present)? {
                        here.insert(entry.callsign.clone());
                    }
                }
                here
            }
        };

        let summary = engine.bulk_reconcile(week, &selected)?;

        success(format!(
            "Roll call saved for week {}: {} present, {} cleared.",
            week, summary.present, summary.cleared
        ));
        audit(
            cfg,
            "rollcall",
            &today.to_string(),
            &week.letters(),
            &format!(
                "{} rows written, {} present, {} cleared",
                summary.rows_written, summary.present, summary.cleared
            ),
        );
    }

    Ok(())
}
