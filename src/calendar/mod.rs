use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::WeekError;
use crate::week::{WeekConfig, WeekInterval};

/// A month grid never needs more than six rows.
const MAX_ROWS: usize = 6;

/// Returns the full weeks a month-grid picker shows for `year-month`.
/// Rows start on the configured first weekday, so the first and last rows
/// usually carry padding days from the neighbouring months.
pub fn month_weeks(year: i32, month: u32, config: WeekConfig) -> Result<Vec<WeekInterval>, WeekError> {
    let invalid = || WeekError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let last  = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month).ok_or_else(invalid)?)
        .ok_or_else(invalid)?;

    let mut weeks = Vec::with_capacity(MAX_ROWS);
    let mut week  = WeekInterval::containing(first, config);
    while weeks.len() < MAX_ROWS && week.start() <= last {
        weeks.push(week);
        let next = week.shift(1);
        // Past the last representable date the shift saturates instead of advancing
        if (next.start() - week.start()).num_days() != 7 { break; }
        week = next;
    }
    Ok(weeks)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)
    };
    match next {
        Some(next) => Some((next - first).num_days() as u32),
        // December of the last representable year
        None => Some(31),
    }
}

/// True if `date` lies in `year-month`.
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Column headers in display order: Mo Tu We Th Fr Sa Su for Monday-start.
pub fn weekday_headers(config: WeekConfig) -> [&'static str; 7] {
    config.weekdays().map(short_name)
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
