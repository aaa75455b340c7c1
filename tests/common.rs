#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use netbuddy::core::CheckinEngine;
use netbuddy::models::layout::RosterLayout;
use netbuddy::store::{CsvRosterStore, MemoryStore};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Week column of the "22 March" net in [`roster_rows`].
pub const MARCH_22_COL: usize = 8;

pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("netbuddy");
    cmd.env("HOME", env::temp_dir().join("netbuddy_test_home"));
    cmd
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn row(cells: &[&str]) -> Vec<String> {
    let mut r: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
    r.resize(13, String::new());
    r
}

/// A small roster: February to April, three active operators, a sentinel,
/// one inactive operator and a totals row.
pub fn roster_rows() -> Vec<Vec<String>> {
    vec![
        row(&[
            "Name", "Position", "Callsign", "February", "", "March", "", "", "", "April", "", "",
            "",
        ]),
        row(&[
            "", "", "", "15", "22", "1", "8", "15", "22", "1", "8", "15", "22",
        ]),
        row(&[
            "Alice Adams", "Net Control", "W7ABC", "X", "", "X", "", "X", "X",
        ]),
        row(&["Bob Brown", "", "K7BOB", "", "X"]),
        row(&["Carol Chen", "Alternate NCS", "N7CC", "X", "X", "X"]),
        row(&["-- Do not announce --"]),
        row(&["Dan Dormant", "", "W7OLD"]),
        row(&["Total"]),
    ]
}

pub fn memory_store() -> MemoryStore {
    MemoryStore::new(roster_rows())
}

/// Engine over [`roster_rows`] on 20 March, which resolves to the 22 March column.
pub fn engine() -> CheckinEngine<MemoryStore> {
    engine_with(roster_rows())
}

pub fn engine_with(rows: Vec<Vec<String>>) -> CheckinEngine<MemoryStore> {
    CheckinEngine::open(
        MemoryStore::new(rows),
        RosterLayout::default(),
        date(2026, 3, 20),
    )
    .expect("engine opens")
}

/// Write [`roster_rows`] to a fresh CSV file in the temp dir.
pub fn setup_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_netbuddy_roster.csv", name));
    fs::remove_file(&path).ok();
    CsvRosterStore::create(&path, &roster_rows()).expect("create roster");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_netbuddy.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}
