//! Roster store boundary.
//!
//! The roster lives in an external sheet. The engine only needs the handful
//! of operations in [`RosterStore`]; everything is addressed with 1-based
//! [`SheetPos`] values.

pub mod address;
pub mod csv_store;
pub mod memory;

pub use address::SheetPos;
pub use csv_store::CsvRosterStore;
pub use memory::MemoryStore;

use std::io;
use thiserror::Error;

/// Failure reported by a roster store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on roster sheet: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cell {0} is outside the sheet")]
    OutOfRange(String),

    #[error("range {start}:{end} does not match the {rows}x{cols} values supplied")]
    Shape {
        start: String,
        end: String,
        rows: usize,
        cols: usize,
    },

    #[error("request rejected: {0}")]
    Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the check-in engine consumes from the roster sheet.
pub trait RosterStore {
    /// Every row of the sheet, top to bottom. Rows may have different lengths.
    fn fetch_all_rows(&self) -> StoreResult<Vec<Vec<String>>>;

    /// First row (1-based, scanning row by row, left to right) holding a
    /// cell exactly equal to `value`.
    fn find_row(&self, value: &str) -> StoreResult<Option<u32>>;

    /// Current value of a cell; cells past the end of a row read as empty.
    fn read_cell(&self, at: SheetPos) -> StoreResult<String>;

    fn write_cell(&mut self, at: SheetPos, value: &str) -> StoreResult<()>;

    /// Write a rectangle of values spanning `start..=end`.
    fn write_range(
        &mut self,
        start: SheetPos,
        end: SheetPos,
        values: &[Vec<String>],
    ) -> StoreResult<()>;

    /// Insert an empty row at `row`, shifting it and everything below down.
    /// The new row takes its shape from `inherit_from` (pre-insert numbering).
    fn insert_row(&mut self, row: u32, inherit_from: u32) -> StoreResult<()>;

    /// Copy the formatting of row `from` onto row `to`.
    fn copy_row_range(&mut self, from: u32, to: u32) -> StoreResult<()>;
}

/// Check that `values` is exactly the rectangle `start..=end`.
pub(crate) fn check_shape(start: SheetPos, end: SheetPos, values: &[Vec<String>]) -> StoreResult<()> {
    let rows = (end.row + 1).saturating_sub(start.row) as usize;
    let cols = (end.col + 1).saturating_sub(start.col) as usize;

    let fits = rows > 0
        && cols > 0
        && values.len() == rows
        && values.iter().all(|r| r.len() == cols);

    if fits {
        Ok(())
    } else {
        Err(StoreError::Shape {
            start: start.a1(),
            end: end.a1(),
            rows: values.len(),
            cols: values.first().map(Vec::len).unwrap_or(0),
        })
    }
}

/// Apply a rectangle write to an in-memory grid, growing rows as needed.
pub(crate) fn apply_range(grid: &mut Vec<Vec<String>>, start: SheetPos, values: &[Vec<String>]) {
    for (dr, row_values) in values.iter().enumerate() {
        let r = start.row_index() + dr;
        if grid.len() <= r {
            grid.resize_with(r + 1, Vec::new);
        }
        let row = &mut grid[r];
        for (dc, value) in row_values.iter().enumerate() {
            let c = start.col_index() + dc;
            if row.len() <= c {
                row.resize(c + 1, String::new());
            }
            row[c] = value.clone();
        }
    }
}

/// Find the first row holding `value` in any cell.
pub(crate) fn find_in_grid(grid: &[Vec<String>], value: &str) -> Option<u32> {
    grid.iter()
        .position(|row| row.iter().any(|cell| cell == value))
        .map(address::sheet_row)
}

/// Insert an empty row shaped like `inherit_from` at `row`.
pub(crate) fn insert_into_grid(grid: &mut Vec<Vec<String>>, row: u32, inherit_from: u32) -> StoreResult<()> {
    let at = address::row_index(row);
    if row == 0 || at > grid.len() {
        return Err(StoreError::OutOfRange(format!("row {}", row)));
    }
    let width = grid
        .get(address::row_index(inherit_from))
        .map(Vec::len)
        .unwrap_or(0);
    grid.insert(at, vec![String::new(); width]);
    Ok(())
}
