use crate::cli::commands::{add, open_engine};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CheckinEngine;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::operator::normalize_callsign;
use crate::models::outcome::LookupOutcome;
use crate::store::RosterStore;
use crate::store::address::sheet_row;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt;
use chrono::NaiveDate;

/// Early check-in: look the call sign up, check it in, or offer to
/// register it when it is not on the roster.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Checkin {
        callsign,
        name,
        no_add,
    } = cmd
    {
        let callsign = normalize_callsign(callsign);
        if callsign.is_empty() {
            return Err(AppError::Validation("Please enter a call sign.".to_string()));
        }

        let mut engine = open_engine(cfg, today)?;
        let week = engine.week().letters();

        match engine.check_in_by_lookup(&callsign)? {
            LookupOutcome::CheckedIn { display } => {
                success(format!("{} checked in.", display));
                audit(cfg, "checkin", &callsign, &week, &format!("{} checked in", display));
            }
            LookupOutcome::AlreadyCheckedIn { display } => {
                info(format!("{} is already checked in this week.", display));
            }
            LookupOutcome::Ambiguous { callsign, rows } => {
                let rows: Vec<String> = rows.iter().map(|r| sheet_row(*r).to_string()).collect();
                warning(format!(
                    "{} appears on rows {}. Fix the roster sheet, nothing was checked in.",
                    callsign,
                    rows.join(", ")
                ));
            }
            LookupOutcome::NotFound { callsign } => {
                offer_registration(&mut engine, cfg, &callsign, name.as_deref(), *no_add)?;
            }
        }
    }

    Ok(())
}

fn offer_registration<S: RosterStore>(
    engine: &mut CheckinEngine<S>,
    cfg: &Config,
    callsign: &str,
    name: Option<&str>,
    no_add: bool,
) -> AppResult<()> {
    let name = match name {
        Some(n) => n.trim().to_string(),
        None if no_add => {
            warning(format!("{} not found on the roster.", callsign));
            return Ok(());
        }
        None => {
            let add_new = prompt::confirm(
                &format!(
                    "{} not found. Would you like to add them as a new operator?",
                    callsign
                ),
                false,
            )?;
            if !add_new {
                info(format!("{} was not added.", callsign));
                return Ok(());
            }
            prompt::ask("Name")?
        }
    };

    if name.is_empty() {
        return Err(AppError::Validation(
            "Please enter the operator's name.".to_string(),
        ));
    }

    add::register(engine, cfg, &name, callsign)
}
