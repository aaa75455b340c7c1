//! netbuddy library root.
//! Exposes the CLI parser, the high-level run() function and the roster
//! check-in engine with its store boundary.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg, today),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Week => cli::commands::week::handle(&cli.command, cfg, today),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg, today),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, today),
        Commands::Rollcall { .. } => cli::commands::rollcall::handle(&cli.command, cfg, today),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, today),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_roster) = &cli.roster {
        cfg.roster = custom_roster.clone();
    }

    let today = utils::date::effective_date(cli.date.as_deref())?;

    dispatch(&cli, &cfg, today)
}
