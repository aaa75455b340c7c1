use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::operator::Mark;
use crate::store::address::sheet_row;
use crate::utils::table::Table;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct OperatorStatus {
    row: u32,
    callsign: String,
    name: String,
    position: Option<String>,
    present: bool,
}

#[derive(Serialize)]
struct RosterStatus {
    date: String,
    week: String,
    operators: Vec<OperatorStatus>,
}

/// List the active roster with this week's marks.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let engine = open_engine(cfg, today)?;
        let week = engine.week();

        let operators: Vec<OperatorStatus> = engine
            .snapshot()
            .active_operators()
            .into_iter()
            .map(|op| OperatorStatus {
                row: sheet_row(op.row),
                present: op.mark_at(week.index()) == Mark::Present,
                callsign: op.callsign.to_uppercase(),
                name: op.name,
                position: op.position,
            })
            .collect();

        if *json {
            let status = RosterStatus {
                date: today.to_string(),
                week: week.letters(),
                operators,
            };
            let out = serde_json::to_string_pretty(&status)
                .map_err(|e| AppError::Other(format!("JSON serialization failed: {}", e)))?;
            println!("{}", out);
            return Ok(());
        }

        let mut table = Table::new(&["Row", "Callsign", "Name", "Position", "Week"]);
        for op in &operators {
            table.add_row(vec![
                op.row.to_string(),
                op.callsign.clone(),
                op.name.clone(),
                op.position.clone().unwrap_or_default(),
                if op.present { "✔".to_string() } else { String::new() },
            ]);
        }

        println!("📋 Active roster, week {} ({})\n", week, today);
        print!("{}", table.render());
        let here = operators.iter().filter(|op| op.present).count();
        println!("\n{} of {} checked in.", here, operators.len());
    }

    Ok(())
}
