use crate::cli::commands::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckinEngine;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::operator::normalize_callsign;
use crate::store::RosterStore;
use crate::store::address::sheet_row;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Register a new operator directly.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Add { callsign, name } = cmd {
        let callsign = normalize_callsign(callsign);
        if callsign.is_empty() {
            return Err(AppError::Validation("Please enter a call sign.".to_string()));
        }
        if name.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter the operator's name.".to_string(),
            ));
        }

        let mut engine = open_engine(cfg, today)?;
        register(&mut engine, cfg, name.trim(), &callsign)?;
    }

    Ok(())
}

/// Insert the operator, report it and record it in the audit log.
pub(crate) fn register<S: RosterStore>(
    engine: &mut CheckinEngine<S>,
    cfg: &Config,
    name: &str,
    callsign: &str,
) -> AppResult<()> {
    let registration = engine.register_new_operator(name, callsign)?;
    let week = engine.week().letters();

    success(format!("Added {} ({}) to the log", name, callsign));
    audit(
        cfg,
        "add",
        callsign,
        &week,
        &format!(
            "{} registered at row {}",
            registration.display,
            sheet_row(registration.row)
        ),
    );
    Ok(())
}
