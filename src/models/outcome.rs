//! Results handed back to the command layer.

use serde::Serialize;

/// Result of marking a located operator present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinStatus {
    /// The present marker was written.
    CheckedIn,
    /// The cell already held the present marker; nothing was written.
    AlreadyCheckedIn,
}

/// Result of a check-in by callsign lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    CheckedIn { display: String },
    AlreadyCheckedIn { display: String },
    /// Not on the roster; nothing was written.
    NotFound { callsign: String },
    /// The callsign sits on several rows (0-based); nothing was written.
    Ambiguous { callsign: String, rows: Vec<usize> },
}

/// One line of a roll call, taken from the snapshot at the start of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollCallEntry {
    pub row: usize,
    pub callsign: String,
    pub display: String,
    pub present: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    /// Cells covered by the range write.
    pub rows_written: usize,
    pub present: usize,
    pub cleared: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// 0-based row the operator was inserted at.
    pub row: usize,
    pub display: String,
}
