pub mod add;
pub mod checkin;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod rollcall;
pub mod week;

use crate::config::Config;
use crate::core::CheckinEngine;
use crate::errors::{AppError, AppResult};
use crate::models::layout::RosterLayout;
use crate::store::CsvRosterStore;
use chrono::{Datelike, NaiveDate};

/// Open this year's roster sheet and resolve the current week.
pub(crate) fn open_engine(cfg: &Config, today: NaiveDate) -> AppResult<CheckinEngine<CsvRosterStore>> {
    let path = cfg.roster_path(today.year());
    if !path.exists() {
        return Err(AppError::Config(format!(
            "roster sheet '{}' not found (run `netbuddy init`)",
            path.display()
        )));
    }

    CheckinEngine::open(
        CsvRosterStore::new(&path),
        RosterLayout::from_config(cfg),
        today,
    )
}
