//! Check-in business logic.
//!
//! The engine owns the roster snapshot and is the only place deciding which
//! cell of the sheet gets written. Reads that guard a write always go back to
//! the store, so a stale snapshot can never turn a check-in into a silent no-op.

use crate::core::snapshot::RosterSnapshot;
use crate::core::week::{WeekColumn, resolve_week_column};
use crate::errors::{AppError, AppResult};
use crate::models::layout::{CALLSIGN_COL, FIRST_OPERATOR_ROW, FIRST_WEEK_COL, RosterLayout};
use crate::models::operator::{Mark, normalize_callsign};
use crate::models::outcome::{
    CheckinStatus, LookupOutcome, ReconcileSummary, Registration, RollCallEntry,
};
use crate::store::address::{row_index, sheet_row};
use crate::store::{RosterStore, SheetPos};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::HashSet;

pub struct CheckinEngine<S: RosterStore> {
    store: S,
    snapshot: RosterSnapshot,
    week: WeekColumn,
}

impl<S: RosterStore> CheckinEngine<S> {
    /// Load the roster, check its layout and resolve this week's column.
    ///
    /// Fails when the week cannot be resolved: nothing that marks attendance
    /// can run without it.
    pub fn open(store: S, layout: RosterLayout, today: NaiveDate) -> AppResult<Self> {
        let mut snapshot = RosterSnapshot::new(layout);
        snapshot.refresh(&store)?;
        snapshot.validate()?;
        let week = resolve_week_column(today, snapshot.month_row(), snapshot.week_row())?;

        Ok(Self {
            store,
            snapshot,
            week,
        })
    }

    pub fn week(&self) -> WeekColumn {
        self.week
    }

    pub fn snapshot(&self) -> &RosterSnapshot {
        &self.snapshot
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn refresh(&mut self) -> AppResult<()> {
        self.snapshot.refresh(&self.store)?;
        self.snapshot.validate()
    }

    pub fn member_display_name(&self, callsign: &str) -> Option<String> {
        self.snapshot
            .find_by_callsign(&normalize_callsign(callsign))
            .map(|op| op.display_name())
    }

    /// Mark `callsign` present in `week`. Writes nothing if the store already
    /// holds the present marker there.
    pub fn check_in(&mut self, callsign: &str, week: WeekColumn) -> AppResult<CheckinStatus> {
        let callsign = required_callsign(callsign)?;
        check_week(week)?;

        let row = self
            .locate(&callsign)?
            .ok_or_else(|| AppError::NotFound(callsign.clone()))?;
        self.mark_present(row, week)
    }

    /// Check in for the current week, searching the whole roster. The first
    /// matching row wins; only a callsign repeated among active rows is
    /// ambiguous.
    pub fn check_in_by_lookup(&mut self, callsign: &str) -> AppResult<LookupOutcome> {
        let callsign = required_callsign(callsign)?;

        let active = self.snapshot.active_rows();
        let rows: Vec<usize> = self
            .snapshot
            .rows_with_callsign(&callsign)
            .into_iter()
            .filter(|row| active.contains(row))
            .collect();
        if rows.len() > 1 {
            return Ok(LookupOutcome::Ambiguous { callsign, rows });
        }

        let Some(row) = self.locate(&callsign)? else {
            return Ok(LookupOutcome::NotFound { callsign });
        };

        let status = self.mark_present(row, self.week)?;
        let display = self
            .member_display_name(&callsign)
            .unwrap_or_else(|| callsign.clone());

        Ok(match status {
            CheckinStatus::CheckedIn => LookupOutcome::CheckedIn { display },
            CheckinStatus::AlreadyCheckedIn => LookupOutcome::AlreadyCheckedIn { display },
        })
    }

    /// Start a roll call: refresh, then list the active operators with their
    /// current mark for `week`. A following [`Self::bulk_reconcile`] decides
    /// from this same snapshot.
    pub fn roll_call(&mut self, week: WeekColumn) -> AppResult<Vec<RollCallEntry>> {
        check_week(week)?;
        self.refresh()?;

        Ok(self
            .snapshot
            .active_operators()
            .into_iter()
            .map(|op| RollCallEntry {
                row: op.row,
                present: op.mark_at(week.index()) == Mark::Present,
                display: op.display_name(),
                callsign: op.callsign,
            })
            .collect())
    }

    /// Overwrite `week` for every active row in one range write: the present
    /// marker for callsigns in `present`, empty for everyone else. Rows of the
    /// range without a callsign keep their value.
    pub fn bulk_reconcile(
        &mut self,
        week: WeekColumn,
        present: &HashSet<String>,
    ) -> AppResult<ReconcileSummary> {
        check_week(week)?;

        let wanted: HashSet<String> = present.iter().map(|c| normalize_callsign(c)).collect();
        let known: HashSet<String> = self
            .snapshot
            .active_operators()
            .iter()
            .map(|op| normalize_callsign(&op.callsign))
            .collect();

        let mut unknown: Vec<&String> = wanted.difference(&known).collect();
        if !unknown.is_empty() {
            unknown.sort();
            let list: Vec<&str> = unknown.iter().map(|c| c.as_str()).collect();
            return Err(AppError::Validation(format!(
                "Not on the active roster: {}",
                list.join(", ")
            )));
        }

        let range = self.snapshot.active_rows();
        if range.is_empty() {
            return Ok(ReconcileSummary::default());
        }

        let marker = self.snapshot.layout().present_marker.clone();
        let mut summary = ReconcileSummary::default();
        let mut values = Vec::with_capacity(range.len());

        for row in range.clone() {
            let callsign = normalize_callsign(self.snapshot.cell(row, CALLSIGN_COL));
            let value = if callsign.is_empty() {
                self.snapshot.cell(row, week.index()).to_string()
            } else if wanted.contains(&callsign) {
                summary.present += 1;
                marker.clone()
            } else {
                summary.cleared += 1;
                String::new()
            };
            values.push(vec![value]);
        }

        let start = SheetPos::from_index(range.start, week.index());
        let end = SheetPos::from_index(range.end - 1, week.index());
        self.store.write_range(start, end, &values)?;

        for (row, value) in range.zip(values.iter()) {
            self.snapshot.set_cell(row, week.index(), &value[0]);
        }
        summary.rows_written = values.len();

        Ok(summary)
    }

    /// Insert a new operator right after the last active one, marked present
    /// for the current week and blank for every earlier week.
    pub fn register_new_operator(&mut self, name: &str, callsign: &str) -> AppResult<Registration> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Please enter the operator's name.".to_string(),
            ));
        }
        let callsign = required_callsign(callsign)?;

        self.refresh()?;

        if let Some(op) = self
            .snapshot
            .active_operators()
            .into_iter()
            .find(|op| normalize_callsign(&op.callsign) == callsign)
        {
            return Err(AppError::Validation(format!(
                "{} is already on the roster (row {})",
                op.display_name(),
                sheet_row(op.row)
            )));
        }

        let row = self.snapshot.insertion_row()?;
        let previous = row - 1;
        let week = self.week.index();
        let marker = self.snapshot.layout().present_marker.clone();

        self.store.insert_row(sheet_row(row), sheet_row(previous))?;
        if previous >= FIRST_OPERATOR_ROW {
            self.store.copy_row_range(sheet_row(previous), sheet_row(row))?;
        }

        let mut values = vec![name.to_string(), String::new(), callsign.clone()];
        values.resize(week, String::new());
        values.push(marker);

        if let Err(e) = self.store.write_range(
            SheetPos::from_index(row, 0),
            SheetPos::from_index(row, week),
            &[values],
        ) {
            warning(format!(
                "Row {} was inserted but not filled in, remove it from the roster sheet.",
                sheet_row(row)
            ));
            return Err(e.into());
        }

        self.refresh()?;
        let display = self
            .member_display_name(&callsign)
            .unwrap_or_else(|| format!("{} - {}", callsign, name));

        Ok(Registration { row, display })
    }

    /// Row holding `callsign`, confirmed against the store. The snapshot is
    /// tried first; if it is stale the store is searched and the snapshot
    /// refreshed.
    fn locate(&mut self, callsign: &str) -> AppResult<Option<usize>> {
        if let Some(row) = self.snapshot.row_index_of(callsign) {
            let stored = self.store.read_cell(SheetPos::from_index(row, CALLSIGN_COL))?;
            if stored.trim() == callsign {
                return Ok(Some(row));
            }
        }

        let Some(found) = self.store.find_row(callsign)? else {
            return Ok(None);
        };
        let row = row_index(found);
        if row < FIRST_OPERATOR_ROW {
            return Ok(None);
        }
        let stored = self.store.read_cell(SheetPos::from_index(row, CALLSIGN_COL))?;
        if stored.trim() != callsign {
            return Ok(None);
        }

        self.snapshot.refresh(&self.store)?;
        Ok(Some(row))
    }

    fn mark_present(&mut self, row: usize, week: WeekColumn) -> AppResult<CheckinStatus> {
        let at = SheetPos::from_index(row, week.index());
        let marker = self.snapshot.layout().present_marker.clone();

        let current = self.store.read_cell(at)?;
        if current == marker {
            self.snapshot.set_cell(row, week.index(), &current);
            return Ok(CheckinStatus::AlreadyCheckedIn);
        }

        self.store.write_cell(at, &marker)?;
        self.snapshot.set_cell(row, week.index(), &marker);
        Ok(CheckinStatus::CheckedIn)
    }
}

fn required_callsign(input: &str) -> AppResult<String> {
    let callsign = normalize_callsign(input);
    if callsign.is_empty() {
        return Err(AppError::Validation("Please enter a call sign.".to_string()));
    }
    Ok(callsign)
}

fn check_week(week: WeekColumn) -> AppResult<()> {
    if week.index() < FIRST_WEEK_COL {
        return Err(AppError::Validation(format!(
            "column {} is not a week column",
            week.letters()
        )));
    }
    Ok(())
}
