//! Blank roster sheet for a new year.

use crate::errors::{AppError, AppResult};
use crate::models::layout::{FIRST_WEEK_COL, NAME_COL, RosterLayout};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Header rows for every `net_day` of `year`, followed by the sentinel row.
///
/// The month name sits above that month's first net; the second row holds
/// the day of month of each net.
pub fn build_roster_template(
    year: i32,
    net_day: Weekday,
    layout: &RosterLayout,
) -> AppResult<Vec<Vec<String>>> {
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("year {}", year)))?;

    let offset = (7 + net_day.num_days_from_monday() - jan_first.weekday().num_days_from_monday()) % 7;
    let mut next = jan_first.checked_add_days(Days::new(u64::from(offset)));

    let mut months = vec![
        "Name".to_string(),
        "Position".to_string(),
        "Callsign".to_string(),
    ];
    let mut days = vec![String::new(); FIRST_WEEK_COL];
    let mut last_month = 0;

    while let Some(date) = next.filter(|d| d.year() == year) {
        if date.month() != last_month {
            months.push(date.format("%B").to_string());
            last_month = date.month();
        } else {
            months.push(String::new());
        }
        days.push(date.day().to_string());
        next = date.checked_add_days(Days::new(7));
    }

    let mut sentinel = vec![String::new(); months.len()];
    sentinel[NAME_COL] = format!("-- {} --", layout.sentinel_marker);

    Ok(vec![months, days, sentinel])
}
