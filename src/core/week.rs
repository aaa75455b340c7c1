use crate::errors::ResolutionError;
use crate::store::address::column_letters;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// 0-based sheet column holding one week's attendance marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekColumn(pub usize);

impl WeekColumn {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn letters(&self) -> String {
        column_letters(self.0)
    }
}

impl fmt::Display for WeekColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

/// Column of the week `today` belongs to.
///
/// Finds the column whose month header equals today's full month name, then
/// scans forward for the first week whose day-of-month is on or after today.
/// Week cells that are not integers are skipped. There is no wraparound past
/// the last column.
pub fn resolve_week_column(
    today: NaiveDate,
    month_row: &[String],
    week_row: &[String],
) -> Result<WeekColumn, ResolutionError> {
    let month = today.format("%B").to_string();
    let start = month_row
        .iter()
        .position(|cell| *cell == month)
        .ok_or_else(|| ResolutionError::MonthNotFound(month.clone()))?;

    (start..week_row.len())
        .find(|&col| {
            week_row[col]
                .trim()
                .parse::<u32>()
                .is_ok_and(|day| day >= today.day())
        })
        .map(WeekColumn)
        .ok_or(ResolutionError::NoWeekOnOrAfter {
            month,
            day: today.day(),
        })
}
