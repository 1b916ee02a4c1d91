// Date utility functions
// Formatting and the day sets behind the week and month grids

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Template used when callers do not supply one.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";

/// Number of cells in the month grid (five rows of seven days).
pub const MONTH_GRID_CELLS: usize = 35;

/// Format a date by substituting the `yyyy`, `MM` and `dd` tokens.
///
/// Each token is replaced once, in that order, with the four-digit year and
/// the zero-padded month and day. Any other text in the template is copied
/// through untouched; there is no escaping and no other tokens.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let year = format!("{:04}", date.year());
    let month = format!("{:02}", date.month());
    let day = format!("{:02}", date.day());

    format
        .replacen("yyyy", &year, 1)
        .replacen("MM", &month, 1)
        .replacen("dd", &day, 1)
}

/// Format a date as `yyyy-MM-dd`.
pub fn format_date_default(date: NaiveDate) -> String {
    format_date(date, DEFAULT_DATE_FORMAT)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// A column header in the week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    /// Short weekday name ("Mon", "Tue", ...)
    pub name: String,
    /// Day of month as displayed ("18")
    pub number: String,
    pub date: NaiveDate,
}

impl Day {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            name: date.format("%a").to_string(),
            number: date.day().to_string(),
            date,
        }
    }
}

/// The seven days of the week containing `date`.
pub fn week_days(date: NaiveDate, first_day_of_week: u8) -> Vec<Day> {
    let start = week_start(date, first_day_of_week);
    (0..7)
        .map(|offset| Day::from_date(start + Duration::days(offset)))
        .collect()
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from adjacent months
    pub in_month: bool,
}

/// Build the 35-cell month grid, starting on the Monday on or before the 1st.
///
/// Returns `None` for an invalid year/month pair.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<MonthCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = first.weekday().num_days_from_monday() as i64;
    let grid_start = first - Duration::days(offset);

    Some(
        (0..MONTH_GRID_CELLS as i64)
            .map(|i| {
                let date = grid_start + Duration::days(i);
                MonthCell {
                    date,
                    in_month: date.month() == month && date.year() == year,
                }
            })
            .collect(),
    )
}
