//! In-memory copy of the roster sheet.
//!
//! A snapshot is only as fresh as its last [`RosterSnapshot::refresh`]. It
//! never writes to the store; the engine patches it after its own writes so
//! the cache keeps matching what was just sent.

use crate::errors::{AppError, AppResult};
use crate::models::layout::{
    CALLSIGN_COL, FIRST_OPERATOR_ROW, FIRST_WEEK_COL, MONTH_ROW, NAME_COL, RosterLayout, WEEK_ROW,
};
use crate::models::operator::OperatorRecord;
use crate::store::RosterStore;
use crate::store::address::sheet_row;
use std::collections::HashMap;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    layout: RosterLayout,
    rows: Vec<Vec<String>>,
    by_callsign: HashMap<String, usize>,
}

impl RosterSnapshot {
    pub fn new(layout: RosterLayout) -> Self {
        Self {
            layout,
            rows: Vec::new(),
            by_callsign: HashMap::new(),
        }
    }

    pub fn from_rows(layout: RosterLayout, rows: Vec<Vec<String>>) -> Self {
        let mut snapshot = Self::new(layout);
        snapshot.replace(rows);
        snapshot
    }

    /// Re-fetch every row from the store, replacing the cached copy.
    pub fn refresh<S: RosterStore>(&mut self, store: &S) -> AppResult<&[Vec<String>]> {
        let rows = store.fetch_all_rows()?;
        self.replace(rows);
        Ok(&self.rows)
    }

    fn replace(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        self.by_callsign.clear();
        for (idx, row) in self.rows.iter().enumerate().skip(FIRST_OPERATOR_ROW) {
            let callsign = row.get(CALLSIGN_COL).map(|c| c.trim()).unwrap_or("");
            if !callsign.is_empty() {
                self.by_callsign.entry(callsign.to_string()).or_insert(idx);
            }
        }
    }

    pub fn layout(&self) -> &RosterLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Record a value the engine just wrote to the store.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        if let Some(r) = self.rows.get_mut(row) {
            if r.len() <= col {
                r.resize(col + 1, String::new());
            }
            r[col] = value.to_string();
        }
    }

    pub fn month_row(&self) -> &[String] {
        self.rows.get(MONTH_ROW).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn week_row(&self) -> &[String] {
        self.rows.get(WEEK_ROW).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn row_index_of(&self, callsign: &str) -> Option<usize> {
        self.by_callsign.get(callsign).copied()
    }

    pub fn find_by_callsign(&self, callsign: &str) -> Option<OperatorRecord> {
        self.row_index_of(callsign)
            .map(|row| OperatorRecord::from_row(row, &self.rows[row], &self.layout))
    }

    /// Every operator row holding exactly `callsign`.
    pub fn rows_with_callsign(&self, callsign: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .skip(FIRST_OPERATOR_ROW)
            .filter(|(_, row)| row.get(CALLSIGN_COL).is_some_and(|c| c.trim() == callsign))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn is_checked_in(&self, callsign: &str, week: usize) -> bool {
        self.row_index_of(callsign)
            .is_some_and(|row| self.layout.is_present(self.cell(row, week)))
    }

    /// First row whose name holds the sentinel marker.
    pub fn sentinel_row(&self) -> Option<usize> {
        (FIRST_OPERATOR_ROW..self.rows.len())
            .find(|&row| self.layout.is_sentinel(self.cell(row, NAME_COL)))
    }

    /// Rows that can hold active operators: from the first operator row up to
    /// the sentinel, or to the end of the sheet when there is none.
    pub fn active_rows(&self) -> std::ops::Range<usize> {
        let end = self.sentinel_row().unwrap_or(self.rows.len());
        FIRST_OPERATOR_ROW..end.max(FIRST_OPERATOR_ROW)
    }

    /// Active operators in row order; rows without a callsign are skipped.
    pub fn active_operators(&self) -> Vec<OperatorRecord> {
        self.active_rows()
            .filter(|&row| !self.cell(row, CALLSIGN_COL).trim().is_empty())
            .map(|row| OperatorRecord::from_row(row, &self.rows[row], &self.layout))
            .collect()
    }

    /// Row where a new operator goes: right after the last active operator.
    pub fn insertion_row(&self) -> AppResult<usize> {
        let sentinel = self.sentinel_row().ok_or_else(|| {
            AppError::Structure(format!(
                "no row containing '{}' ends the roster",
                self.layout.sentinel_marker
            ))
        })?;

        let blank = |row: usize| self.cell(row, NAME_COL).trim().is_empty();
        let Some(last) = (FIRST_OPERATOR_ROW..sentinel).rev().find(|&row| !blank(row)) else {
            return Ok(FIRST_OPERATOR_ROW);
        };

        if let Some(gap) = (FIRST_OPERATOR_ROW..last).find(|&row| blank(row)) {
            return Err(AppError::Structure(format!(
                "row {} has no operator name but sits inside the active roster",
                sheet_row(gap)
            )));
        }

        Ok(last + 1)
    }

    /// Check the header contract: month names over integer week days, and a sentinel row.
    pub fn validate(&self) -> AppResult<()> {
        if self.rows.len() <= WEEK_ROW {
            return Err(AppError::Structure(format!(
                "expected at least {} header rows, found {}",
                WEEK_ROW + 1,
                self.rows.len()
            )));
        }

        let month_cols: Vec<usize> = self
            .month_row()
            .iter()
            .enumerate()
            .filter(|(_, cell)| MONTHS.contains(&cell.as_str()))
            .map(|(col, _)| col)
            .collect();

        if month_cols.is_empty() {
            return Err(AppError::Structure(
                "the first row holds no month names".to_string(),
            ));
        }

        for col in month_cols {
            if col < FIRST_WEEK_COL {
                return Err(AppError::Structure(format!(
                    "month '{}' overlaps the name/position/callsign columns",
                    self.cell(MONTH_ROW, col)
                )));
            }
            let day = self.cell(WEEK_ROW, col).trim();
            if !day.parse::<u32>().is_ok_and(|d| (1..=31).contains(&d)) {
                return Err(AppError::Structure(format!(
                    "week row under '{}' holds '{}', expected a day of month",
                    self.cell(MONTH_ROW, col),
                    day
                )));
            }
        }

        if self.sentinel_row().is_none() {
            return Err(AppError::Structure(format!(
                "no row containing '{}' ends the roster",
                self.layout.sentinel_marker
            )));
        }

        Ok(())
    }
}
