use netbuddy::store::address::{column_letters, row_index, sheet_row};
use netbuddy::store::{CsvRosterStore, RosterStore, SheetPos, StoreError};
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::roster_rows;

fn temp_roster(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_netbuddy_store.csv", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_address_translation() {
    assert_eq!(column_letters(0), "A");
    assert_eq!(column_letters(25), "Z");
    assert_eq!(column_letters(26), "AA");
    assert_eq!(column_letters(27), "AB");

    let pos = SheetPos::from_index(4, 3);
    assert_eq!((pos.row, pos.col), (5, 4));
    assert_eq!(pos.a1(), "D5");
    assert_eq!((pos.row_index(), pos.col_index()), (4, 3));

    assert_eq!(sheet_row(0), 1);
    assert_eq!(row_index(1), 0);
}

#[test]
fn test_csv_store_reads_and_finds() {
    let path = temp_roster("reads");
    let store = CsvRosterStore::create(&path, &roster_rows()).unwrap();

    let rows = store.fetch_all_rows().unwrap();
    assert_eq!(rows, roster_rows());

    assert_eq!(store.find_row("K7BOB").unwrap(), Some(4));
    assert_eq!(store.find_row("Carol Chen").unwrap(), Some(5));
    assert_eq!(store.find_row("K7").unwrap(), None);

    assert_eq!(store.read_cell(SheetPos { row: 3, col: 3 }).unwrap(), "W7ABC");
    assert_eq!(store.read_cell(SheetPos { row: 99, col: 1 }).unwrap(), "");
}

#[test]
fn test_csv_store_create_refuses_existing_file() {
    let path = temp_roster("exists");
    CsvRosterStore::create(&path, &roster_rows()).unwrap();

    let again = CsvRosterStore::create(&path, &roster_rows());
    assert!(matches!(again, Err(StoreError::Rejected(_))));
}

#[test]
fn test_csv_store_writes_persist() {
    let path = temp_roster("writes");
    let mut store = CsvRosterStore::create(&path, &roster_rows()).unwrap();

    store.write_cell(SheetPos::from_index(3, 8), "X").unwrap();
    store.write_cell(SheetPos::from_index(3, 20), "late").unwrap();

    let reopened = CsvRosterStore::new(&path);
    let rows = reopened.fetch_all_rows().unwrap();
    assert_eq!(rows[3][8], "X");
    assert_eq!(rows[3].len(), 21);
    assert_eq!(rows[3][20], "late");
}

#[test]
fn test_csv_store_write_range_checks_shape() {
    let path = temp_roster("range");
    let mut store = CsvRosterStore::create(&path, &roster_rows()).unwrap();

    let start = SheetPos::from_index(2, 8);
    let end = SheetPos::from_index(4, 8);
    let bad = vec![vec!["X".to_string()], vec![String::new()]];
    assert!(matches!(
        store.write_range(start, end, &bad),
        Err(StoreError::Shape { .. })
    ));

    let good = vec![vec![String::new()], vec!["X".to_string()], vec!["X".to_string()]];
    store.write_range(start, end, &good).unwrap();

    let rows = store.fetch_all_rows().unwrap();
    assert_eq!(rows[2][8], "");
    assert_eq!(rows[3][8], "X");
    assert_eq!(rows[4][8], "X");
}

#[test]
fn test_csv_store_insert_and_copy_row() {
    let path = temp_roster("insert");
    let mut store = CsvRosterStore::create(&path, &roster_rows()).unwrap();

    store.insert_row(6, 5).unwrap();
    store.copy_row_range(5, 6).unwrap();

    let rows = store.fetch_all_rows().unwrap();
    assert_eq!(rows.len(), roster_rows().len() + 1);
    assert_eq!(rows[5].len(), rows[4].len());
    assert!(rows[5].iter().all(String::is_empty));
    assert!(rows[6][0].contains("Do not announce"));

    assert!(matches!(
        store.insert_row(0, 1),
        Err(StoreError::OutOfRange(_))
    ));
}
