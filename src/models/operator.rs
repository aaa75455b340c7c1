use crate::models::layout::{CALLSIGN_COL, FIRST_WEEK_COL, NAME_COL, POSITION_COL, RosterLayout};
use serde::Serialize;

/// Attendance mark for one operator in one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Present,
    Absent,
}

/// One operator row of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorRecord {
    /// 0-based row index in the sheet.
    pub row: usize,
    pub name: String,
    pub position: Option<String>,
    pub callsign: String,
    /// One mark per week column, starting at `FIRST_WEEK_COL`.
    pub checkins: Vec<Mark>,
}

impl OperatorRecord {
    pub fn from_row(row: usize, cells: &[String], layout: &RosterLayout) -> Self {
        let cell = |c: usize| cells.get(c).map(|s| s.trim().to_string()).unwrap_or_default();
        let position = cell(POSITION_COL);

        Self {
            row,
            name: cell(NAME_COL),
            position: if position.is_empty() { None } else { Some(position) },
            callsign: cell(CALLSIGN_COL),
            checkins: cells
                .iter()
                .skip(FIRST_WEEK_COL)
                .map(|v| {
                    if layout.is_present(v) {
                        Mark::Present
                    } else {
                        Mark::Absent
                    }
                })
                .collect(),
        }
    }

    /// Mark held in a given (0-based) sheet column.
    pub fn mark_at(&self, col: usize) -> Mark {
        col.checked_sub(FIRST_WEEK_COL)
            .and_then(|i| self.checkins.get(i).copied())
            .unwrap_or(Mark::Absent)
    }

    /// `CALLSIGN - Name (Position)`, or `CALLSIGN - Name` without a position.
    pub fn display_name(&self) -> String {
        match &self.position {
            Some(pos) => format!("{} - {} ({})", self.callsign.to_uppercase(), self.name, pos),
            None => format!("{} - {}", self.callsign.to_uppercase(), self.name),
        }
    }
}

/// Canonical form of a typed callsign: trimmed and upper-cased.
pub fn normalize_callsign(input: &str) -> String {
    input.trim().to_uppercase()
}
