//! Roster sheet kept as a local CSV file.
//!
//! Every call re-reads the file and every write rewrites it, so the store
//! never serves a cached view: edits made to the file between two calls are
//! always seen.

use super::{
    RosterStore, SheetPos, StoreError, StoreResult, address, apply_range, check_shape,
    find_in_grid, insert_into_grid,
};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

pub struct CsvRosterStore {
    path: PathBuf,
}

impl CsvRosterStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with the given rows. Fails if it already exists.
    pub fn create(path: &Path, rows: &[Vec<String>]) -> StoreResult<Self> {
        if path.exists() {
            return Err(StoreError::Rejected(format!(
                "roster file '{}' already exists",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store = Self::new(path);
        store.save(rows)?;
        Ok(store)
    }

    fn load(&self) -> StoreResult<Vec<Vec<String>>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(rows)
    }

    fn save(&self, rows: &[Vec<String>]) -> StoreResult<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn modify<F>(&mut self, func: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Vec<Vec<String>>) -> StoreResult<()>,
    {
        let mut rows = self.load()?;
        func(&mut rows)?;
        self.save(&rows)
    }
}

impl RosterStore for CsvRosterStore {
    fn fetch_all_rows(&self) -> StoreResult<Vec<Vec<String>>> {
        self.load()
    }

    fn find_row(&self, value: &str) -> StoreResult<Option<u32>> {
        Ok(find_in_grid(&self.load()?, value))
    }

    fn read_cell(&self, at: SheetPos) -> StoreResult<String> {
        let rows = self.load()?;
        Ok(rows
            .get(at.row_index())
            .and_then(|r| r.get(at.col_index()))
            .cloned()
            .unwrap_or_default())
    }

    fn write_cell(&mut self, at: SheetPos, value: &str) -> StoreResult<()> {
        if at.row == 0 || at.col == 0 {
            return Err(StoreError::OutOfRange(format!("R{}C{}", at.row, at.col)));
        }
        self.modify(|rows| {
            apply_range(rows, at, &[vec![value.to_string()]]);
            Ok(())
        })
    }

    fn write_range(
        &mut self,
        start: SheetPos,
        end: SheetPos,
        values: &[Vec<String>],
    ) -> StoreResult<()> {
        check_shape(start, end, values)?;
        self.modify(|rows| {
            apply_range(rows, start, values);
            Ok(())
        })
    }

    fn insert_row(&mut self, row: u32, inherit_from: u32) -> StoreResult<()> {
        self.modify(|rows| insert_into_grid(rows, row, inherit_from))
    }

    /// CSV carries no formatting; the target row only takes the source row's width.
    fn copy_row_range(&mut self, from: u32, to: u32) -> StoreResult<()> {
        self.modify(|rows| {
            let width = rows
                .get(address::row_index(from))
                .map(Vec::len)
                .ok_or_else(|| StoreError::OutOfRange(format!("row {}", from)))?;
            let target = rows
                .get_mut(address::row_index(to))
                .ok_or_else(|| StoreError::OutOfRange(format!("row {}", to)))?;
            if target.len() < width {
                target.resize(width, String::new());
            }
            Ok(())
        })
    }
}
