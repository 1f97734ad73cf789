//! Calendar alignment
//!
//! Maps grid cells onto real dates. The grid covers 52 weeks ending in the
//! current week, so cell (0, 0) lands on the Sunday 51 full weeks before
//! the most recent Sunday.

use chrono::{Datelike, Days, Local, NaiveDate};

const WEEKS_BACK: u64 = 51;

/// The date drawn at cell (0, 0), derived from today's local date.
pub fn start_sunday() -> NaiveDate {
    start_sunday_from(Local::now().date_naive())
}

/// Steps back to the most recent Sunday (a no-op on Sundays), then back
/// another 51 weeks.
pub fn start_sunday_from(today: NaiveDate) -> NaiveDate {
    let days_since_sunday = u64::from(today.weekday().num_days_from_sunday());
    today - Days::new(days_since_sunday + WEEKS_BACK * 7)
}

/// The date a cell maps to: columns advance a week, rows a day.
pub fn cell_date(start: NaiveDate, column: usize, row: usize) -> NaiveDate {
    start + Days::new((column * 7 + row) as u64)
}
