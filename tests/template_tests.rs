use chrono::Weekday;
use netbuddy::core::template::build_roster_template;
use netbuddy::core::{CheckinEngine, RosterSnapshot};
use netbuddy::models::layout::{MONTH_ROW, RosterLayout, WEEK_ROW};
use netbuddy::store::MemoryStore;

mod common;
use common::date;

#[test]
fn test_template_has_one_column_per_net() {
    let rows = build_roster_template(2026, Weekday::Thu, &RosterLayout::default()).unwrap();

    // 2026 starts on a Thursday, so it has 53 of them.
    assert_eq!(rows[WEEK_ROW].len(), 3 + 53);
    assert_eq!(rows[MONTH_ROW][3], "January");
    assert_eq!(rows[WEEK_ROW][3], "1");
    assert_eq!(rows[MONTH_ROW][4], "");
    assert_eq!(rows[MONTH_ROW][8], "February");
    assert_eq!(rows[WEEK_ROW][8], "5");
    assert!(rows[2][0].contains("Do not announce"));

    let snap = RosterSnapshot::from_rows(RosterLayout::default(), rows);
    snap.validate().unwrap();
}

#[test]
fn test_template_week_resolution() {
    let rows = build_roster_template(2026, Weekday::Thu, &RosterLayout::default()).unwrap();
    let engine = CheckinEngine::open(
        MemoryStore::new(rows),
        RosterLayout::default(),
        date(2026, 10, 18),
    )
    .unwrap();

    let week = engine.week().index();
    let snap = engine.snapshot();
    assert_eq!(snap.cell(WEEK_ROW, week), "22");
    assert_eq!(snap.cell(MONTH_ROW, week - 3), "October");
}

#[test]
fn test_template_for_other_weekday() {
    let rows = build_roster_template(2026, Weekday::Mon, &RosterLayout::default()).unwrap();
    assert_eq!(rows[WEEK_ROW][3], "5");
    assert_eq!(rows[WEEK_ROW].len(), 3 + 52);
}
