//! In-process roster store.
//!
//! Keeps the sheet in memory and records each mutating call, which makes it
//! the store of choice for exercising the engine without touching disk.

use super::{
    RosterStore, SheetPos, StoreError, StoreResult, address, apply_range, check_shape,
    find_in_grid, insert_into_grid,
};

/// A mutating call received by a [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreWrite {
    Cell { at: SheetPos, value: String },
    Range { start: SheetPos, end: SheetPos, values: Vec<Vec<String>> },
    InsertRow { row: u32, inherit_from: u32 },
    CopyRow { from: u32, to: u32 },
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Vec<String>>,
    writes: Vec<StoreWrite>,
    reject_writes: Option<String>,
    writes_before_reject: usize,
}

impl MemoryStore {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Build a store from string slices, handy for literal fixtures.
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Value of a 0-based cell, empty when past the end of the row.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Every mutating call received so far, oldest first.
    pub fn writes(&self) -> &[StoreWrite] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Make every following write fail with `reason` (e.g. a quota message).
    pub fn reject_writes(&mut self, reason: &str) {
        self.reject_writes_after(0, reason);
    }

    /// Accept `count` more writes, then fail every following one with `reason`.
    pub fn reject_writes_after(&mut self, count: usize, reason: &str) {
        self.reject_writes = Some(reason.to_string());
        self.writes_before_reject = count;
    }

    /// Change a cell without recording it, as another session would.
    pub fn edit_out_of_band(&mut self, row: usize, col: usize, value: &str) {
        apply_range(&mut self.rows, SheetPos::from_index(row, col), &[vec![value.to_string()]]);
    }

    fn accept(&mut self, write: StoreWrite) -> StoreResult<()> {
        if let Some(reason) = &self.reject_writes {
            if self.writes_before_reject == 0 {
                return Err(StoreError::Rejected(reason.clone()));
            }
            self.writes_before_reject -= 1;
        }
        self.writes.push(write);
        Ok(())
    }
}

impl RosterStore for MemoryStore {
    fn fetch_all_rows(&self) -> StoreResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn find_row(&self, value: &str) -> StoreResult<Option<u32>> {
        Ok(find_in_grid(&self.rows, value))
    }

    fn read_cell(&self, at: SheetPos) -> StoreResult<String> {
        Ok(self.cell(at.row_index(), at.col_index()).to_string())
    }

    fn write_cell(&mut self, at: SheetPos, value: &str) -> StoreResult<()> {
        if at.row == 0 || at.col == 0 {
            return Err(StoreError::OutOfRange(format!("R{}C{}", at.row, at.col)));
        }
        self.accept(StoreWrite::Cell {
            at,
            value: value.to_string(),
        })?;
        apply_range(&mut self.rows, at, &[vec![value.to_string()]]);
        Ok(())
    }

    fn write_range(
        &mut self,
        start: SheetPos,
        end: SheetPos,
        values: &[Vec<String>],
    ) -> StoreResult<()> {
        check_shape(start, end, values)?;
        self.accept(StoreWrite::Range {
            start,
            end,
            values: values.to_vec(),
        })?;
        apply_range(&mut self.rows, start, values);
        Ok(())
    }

    fn insert_row(&mut self, row: u32, inherit_from: u32) -> StoreResult<()> {
        self.accept(StoreWrite::InsertRow { row, inherit_from })?;
        insert_into_grid(&mut self.rows, row, inherit_from)
    }

    fn copy_row_range(&mut self, from: u32, to: u32) -> StoreResult<()> {
        if address::row_index(from) >= self.rows.len() || address::row_index(to) >= self.rows.len() {
            return Err(StoreError::OutOfRange(format!("rows {}:{}", from, to)));
        }
        self.accept(StoreWrite::CopyRow { from, to })
    }
}
