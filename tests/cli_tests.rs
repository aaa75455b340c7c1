use netbuddy::store::{CsvRosterStore, RosterStore};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{MARCH_22_COL, rti, setup_roster, setup_test_db};

const TODAY: &str = "2026-03-20";

fn roster_cell(path: &str, row: usize, col: usize) -> String {
    let rows = CsvRosterStore::new(path).fetch_all_rows().expect("read roster");
    rows.get(row)
        .and_then(|r| r.get(col))
        .cloned()
        .unwrap_or_default()
}

fn args<'a>(db: &'a str, roster: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut v = vec!["--db", db, "--roster", roster, "--date", TODAY];
    v.extend_from_slice(rest);
    v
}

#[test]
fn test_week_prints_resolved_column() {
    let db = setup_test_db("cli_week");
    let roster = setup_roster("cli_week");

    rti()
        .args(args(&db, &roster, &["week"]))
        .assert()
        .success()
        .stdout(contains("W7AW net, 2026-03-20"))
        .stdout(contains("week column I (index 8)"))
        .stdout(contains("March 22"));
}

#[test]
fn test_checkin_known_operator() {
    let db = setup_test_db("cli_checkin");
    let roster = setup_roster("cli_checkin");

    rti()
        .args(args(&db, &roster, &["checkin", "k7bob"]))
        .assert()
        .success()
        .stdout(contains("K7BOB - Bob Brown checked in."));

    assert_eq!(roster_cell(&roster, 3, MARCH_22_COL), "X");

    rti()
        .args(args(&db, &roster, &["checkin", "K7BOB"]))
        .assert()
        .success()
        .stdout(contains("already checked in"));

    rti()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("checkin"))
        .stdout(contains("K7BOB - Bob Brown checked in"));
}

#[test]
fn test_checkin_unknown_without_adding() {
    let db = setup_test_db("cli_unknown");
    let roster = setup_roster("cli_unknown");
    let before = fs::read_to_string(&roster).unwrap();

    rti()
        .args(args(&db, &roster, &["checkin", "W7ZZZ", "--no-add"]))
        .assert()
        .success()
        .stdout(contains("W7ZZZ not found"));

    rti()
        .args(args(&db, &roster, &["checkin", "W7ZZZ"]))
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("W7ZZZ was not added"));

    assert_eq!(fs::read_to_string(&roster).unwrap(), before);
}

#[test]
fn test_checkin_unknown_registers_operator() {
    let db = setup_test_db("cli_register");
    let roster = setup_roster("cli_register");

    rti()
        .args(args(&db, &roster, &["checkin", "w7zzz"]))
        .write_stdin("y\nJane Doe\n")
        .assert()
        .success()
        .stdout(contains("Added Jane Doe (W7ZZZ) to the log"));

    assert_eq!(roster_cell(&roster, 5, 0), "Jane Doe");
    assert_eq!(roster_cell(&roster, 5, 2), "W7ZZZ");
    assert_eq!(roster_cell(&roster, 5, MARCH_22_COL), "X");
    assert!(roster_cell(&roster, 6, 0).contains("Do not announce"));

    rti()
        .args(args(&db, &roster, &["list", "--json"]))
        .assert()
        .success()
        .stdout(contains("\"callsign\": \"W7ZZZ\""))
        .stdout(contains("\"week\": \"I\""));
}

#[test]
fn test_add_command_and_duplicate() {
    let db = setup_test_db("cli_add");
    let roster = setup_roster("cli_add");

    rti()
        .args(args(&db, &roster, &["add", "W7NEW", "--name", "Nia New"]))
        .assert()
        .success()
        .stdout(contains("Added Nia New (W7NEW)"));

    rti()
        .args(args(&db, &roster, &["add", "w7new", "--name", "Nia New"]))
        .assert()
        .failure()
        .stderr(contains("already on the roster"));
}

#[test]
fn test_rollcall_with_present_list() {
    let db = setup_test_db("cli_rollcall");
    let roster = setup_roster("cli_rollcall");

    rti()
        .args(args(&db, &roster, &["rollcall", "--present", "K7BOB,n7cc"]))
        .assert()
        .success()
        .stdout(contains("2 present, 1 cleared"));

    assert_eq!(roster_cell(&roster, 2, MARCH_22_COL), "");
    assert_eq!(roster_cell(&roster, 3, MARCH_22_COL), "X");
    assert_eq!(roster_cell(&roster, 4, MARCH_22_COL), "X");
}

#[test]
fn test_rollcall_interactive_defaults_to_current_state() {
    let db = setup_test_db("cli_rollcall_prompt");
    let roster = setup_roster("cli_rollcall_prompt");

    // Enter keeps Alice present, Bob says yes, Carol keeps her default (absent).
    rti()
        .args(args(&db, &roster, &["rollcall"]))
        .write_stdin("\ny\n\n")
        .assert()
        .success()
        .stdout(contains("Roll Call"))
        .stdout(contains("2 present, 1 cleared"));

    assert_eq!(roster_cell(&roster, 2, MARCH_22_COL), "X");
    assert_eq!(roster_cell(&roster, 3, MARCH_22_COL), "X");
    assert_eq!(roster_cell(&roster, 4, MARCH_22_COL), "");
}

#[test]
fn test_rollcall_rejects_inactive_operator() {
    let db = setup_test_db("cli_rollcall_bad");
    let roster = setup_roster("cli_rollcall_bad");

    rti()
        .args(args(&db, &roster, &["rollcall", "--present", "W7OLD"]))
        .assert()
        .failure()
        .stderr(contains("Not on the active roster: W7OLD"));

    assert_eq!(roster_cell(&roster, 2, MARCH_22_COL), "X");
}

#[test]
fn test_list_table() {
    let db = setup_test_db("cli_list");
    let roster = setup_roster("cli_list");

    rti()
        .args(args(&db, &roster, &["list"]))
        .assert()
        .success()
        .stdout(contains("Alice Adams"))
        .stdout(contains("Carol Chen"))
        .stdout(contains("Dan Dormant").not())
        .stdout(contains("1 of 3 checked in."));
}

#[test]
fn test_blank_callsign_is_rejected() {
    let db = setup_test_db("cli_blank");
    let roster = setup_roster("cli_blank");

    rti()
        .args(args(&db, &roster, &["checkin", "  "]))
        .assert()
        .failure()
        .stderr(contains("Please enter a call sign."));
}

#[test]
fn test_unresolvable_week_is_fatal() {
    let db = setup_test_db("cli_fatal");
    let roster = setup_roster("cli_fatal");

    rti()
        .args([
            "--db", &db, "--roster", &roster, "--date", "2026-07-04", "checkin", "K7BOB",
        ])
        .assert()
        .failure()
        .stderr(contains("Cannot determine current week column"));
}

#[test]
fn test_missing_roster_points_to_init() {
    let db = setup_test_db("cli_missing");
    let mut path = env::temp_dir();
    path.push("cli_missing_netbuddy_roster.csv");
    fs::remove_file(&path).ok();
    let roster = path.to_string_lossy().to_string();

    rti()
        .args(args(&db, &roster, &["week"]))
        .assert()
        .failure()
        .stderr(contains("netbuddy init"));
}

#[test]
fn test_init_creates_year_roster() {
    let db = setup_test_db("cli_init");
    let mut dir = env::temp_dir();
    dir.push("cli_init_netbuddy");
    fs::remove_dir_all(&dir).ok();
    let template = dir.join("roster-{year}.csv").to_string_lossy().to_string();

    rti()
        .args(["--db", &db, "--roster", &template, "--test", "init", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("Created the 2026 roster with 53 weekly nets on Thu"));

    assert!(dir.join("roster-2026.csv").exists());

    rti()
        .args(["--db", &db, "--roster", &template, "--date", "2026-10-18", "week"])
        .assert()
        .success()
        .stdout(contains("October 22"));

    rti()
        .args(["--db", &db, "--roster", &template, "--test", "init", "--year", "2026"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}
