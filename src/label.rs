use chrono::{Datelike, NaiveDate};

use crate::error::WeekError;
use crate::week::{week_start, WeekConfig};

/// Input format accepted by [`format_week_label_str`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `1st`, `2nd`, `3rd`, `4th`, ... with the 11-13 teens taking `th`.
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _)       => "st",
        (2, _)       => "nd",
        (3, _)       => "rd",
        _            => "th",
    };
    format!("{n}{suffix}")
}

/// `"Week of Jun 12th"` for the week containing `date`.
pub fn try_format_week_label(
    date: Option<NaiveDate>,
    config: WeekConfig,
) -> Result<String, WeekError> {
    let start = week_start(date.ok_or(WeekError::InvalidDate)?, config);
    Ok(format!("Week of {} {}", start.format("%b"), ordinal(start.day())))
}

/// Like [`try_format_week_label`], but an absent date yields `invalid_label`.
pub fn format_week_label(
    date: Option<NaiveDate>,
    config: WeekConfig,
    invalid_label: &str,
) -> String {
    try_format_week_label(date, config).unwrap_or_else(|e| {
        tracing::debug!("week label fallback: {e}");
        invalid_label.to_owned()
    })
}

/// Parses `input` as `YYYY-MM-DD` first; anything unparseable yields
/// `invalid_label`.
pub fn format_week_label_str(input: &str, config: WeekConfig, invalid_label: &str) -> String {
    format_week_label(parse_date(input).ok(), config, invalid_label)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, WeekError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| WeekError::InvalidDate)
}
