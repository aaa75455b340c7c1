use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::template::build_roster_template;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::layout::{FIRST_WEEK_COL, RosterLayout, WEEK_ROW};
use crate::store::CsvRosterStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_weekday;
use chrono::{Datelike, NaiveDate};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the audit database and its migrations
///  - a blank roster sheet for the year, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Init { year } = &cli.command {
        let year = year.unwrap_or_else(|| today.year());
        let roster = cfg.roster_path(year);

        println!("⚙️  Initializing netbuddy…");
        cfg.init_all(cli.test)?;
        println!("📋 Roster      : {}", roster.display());

        let pool = DbPool::open(&cfg.database)?;

        if roster.exists() {
            info(format!(
                "Roster sheet for {} already exists, left untouched.",
                year
            ));
        } else {
            let net_day = parse_weekday(&cfg.net_weekday)?;
            let rows = build_roster_template(year, net_day, &RosterLayout::from_config(cfg))?;
            CsvRosterStore::create(&roster, &rows)?;
            success(format!(
                "Created the {} roster with {} weekly nets on {}",
                year,
                rows[WEEK_ROW].len() - FIRST_WEEK_COL,
                net_day
            ));
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "init",
            &year.to_string(),
            "",
            &format!("Initialized with roster {}", roster.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        println!("🎉 netbuddy initialization completed!");
    }

    Ok(())
}
