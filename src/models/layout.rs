//! Fixed shape of the roster sheet.

use crate::config::Config;

/// Row holding month names above each month's first week column.
pub const MONTH_ROW: usize = 0;
/// Row holding the day-of-month of each week column.
pub const WEEK_ROW: usize = 1;
/// First row that can hold an operator.
pub const FIRST_OPERATOR_ROW: usize = 2;

pub const NAME_COL: usize = 0;
pub const POSITION_COL: usize = 1;
pub const CALLSIGN_COL: usize = 2;
/// First column that can be a week column.
pub const FIRST_WEEK_COL: usize = 3;

/// The configurable markers of a roster sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLayout {
    /// Cell value meaning "checked in"; an empty cell means absent.
    pub present_marker: String,
    /// Substring of the name cell that ends the active roster.
    pub sentinel_marker: String,
}

impl RosterLayout {
    pub fn new(present_marker: &str, sentinel_marker: &str) -> Self {
        Self {
            present_marker: present_marker.to_string(),
            sentinel_marker: sentinel_marker.to_string(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.present_marker, &cfg.sentinel_marker)
    }

    pub fn is_present(&self, cell: &str) -> bool {
        cell == self.present_marker
    }

    pub fn is_sentinel(&self, name: &str) -> bool {
        name.contains(&self.sentinel_marker)
    }
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self::new("X", "Do not announce")
    }
}
