//! Per-day highlight flags for a month-grid week picker.
//!
//! The picker decides how each cell looks; this module only answers which
//! of the selected week's properties the cell's date has.
use chrono::NaiveDate;

use crate::calendar::in_month;
use crate::week::{is_interval_end, is_interval_start, is_within_week, WeekInterval};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayHighlight {
    /// Inside the selected week.
    pub within:           bool,
    /// First day of the selected week.
    pub first:            bool,
    /// Last day of the selected week.
    pub last:             bool,
    /// Inside the month the grid is showing.
    pub in_current_month: bool,
}

impl DayHighlight {
    /// Padding day from a neighbouring month that is still part of the week.
    pub fn outside_month_within_week(&self) -> bool {
        !self.in_current_month && self.within
    }
}

/// Classifies `day` against the selected week while the grid shows
/// `year-month`. Without a selection only `in_current_month` can be set.
pub fn classify_day(
    day: NaiveDate,
    selection: Option<&WeekInterval>,
    year: i32,
    month: u32,
) -> DayHighlight {
    let in_current_month = in_month(day, year, month);
    match selection {
        Some(week) => DayHighlight {
            within: is_within_week(day, week),
            first:  is_interval_start(day, week),
            last:   is_interval_end(day, week),
            in_current_month,
        },
        None => DayHighlight { in_current_month, ..DayHighlight::default() },
    }
}
