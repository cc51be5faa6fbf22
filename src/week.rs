//! Week boundaries under a configurable first weekday.
//!
//! All arithmetic is on calendar dates. Timestamps go through
//! [`ToCalendarDate`] first so time-of-day can never shift a result by a day.
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::WeekError;

/// Weekdays indexed the way `first_day_of_week` counts them: 0 = Sunday.
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
    Weekday::Thu, Weekday::Fri, Weekday::Sat,
];

// ─── Config ───────────────────────────────────────────────────────────────────

/// Which weekday begins a week. Serialised as its index (0 = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekConfig {
    first_day: Weekday,
}

impl WeekConfig {
    pub const MONDAY: Self = Self { first_day: Weekday::Mon };
    pub const SUNDAY: Self = Self { first_day: Weekday::Sun };

    pub fn new(first_day: Weekday) -> Self { Self { first_day } }

    pub fn from_index(index: u8) -> Result<Self, WeekError> {
        SUNDAY_FIRST.get(index as usize)
            .map(|&first_day| Self { first_day })
            .ok_or(WeekError::InvalidFirstDay(index))
    }

    pub fn first_day(&self) -> Weekday { self.first_day }

    pub fn index(&self) -> u8 { self.first_day.num_days_from_sunday() as u8 }

    /// The seven weekdays in display order, starting with the first day.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut out = [self.first_day; 7];
        for i in 1..7 {
            out[i] = out[i - 1].succ();
        }
        out
    }
}

impl Default for WeekConfig {
    fn default() -> Self { Self::MONDAY }
}

impl TryFrom<u8> for WeekConfig {
    type Error = WeekError;
    fn try_from(index: u8) -> Result<Self, Self::Error> { Self::from_index(index) }
}

impl From<WeekConfig> for u8 {
    fn from(config: WeekConfig) -> u8 { config.index() }
}

// ─── Date normalisation ───────────────────────────────────────────────────────

/// Anything that names a calendar day, with time-of-day dropped.
pub trait ToCalendarDate {
    fn to_calendar_date(&self) -> NaiveDate;
}

impl ToCalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> NaiveDate { *self }
}

impl ToCalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> NaiveDate { self.date() }
}

impl<Tz: TimeZone> ToCalendarDate for DateTime<Tz> {
    /// The date in the value's own timezone, not UTC.
    fn to_calendar_date(&self) -> NaiveDate { self.date_naive() }
}

// ─── Boundaries ───────────────────────────────────────────────────────────────

/// Days between the week's first day and `date`, in `0..=6`.
fn days_into_week(date: NaiveDate, config: WeekConfig) -> u64 {
    let weekday = date.weekday().num_days_from_sunday();
    let first   = config.first_day.num_days_from_sunday();
    ((weekday + 7 - first) % 7) as u64
}

fn minus_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN)
}

fn plus_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX)
}

/// First day of the week containing `date`. Equal to `date` when it already
/// falls on the configured first weekday.
pub fn week_start(date: impl ToCalendarDate, config: WeekConfig) -> NaiveDate {
    let date = date.to_calendar_date();
    minus_days(date, days_into_week(date, config))
}

/// Last day of the week containing `date`: `week_start + 6 days`.
pub fn week_end(date: impl ToCalendarDate, config: WeekConfig) -> NaiveDate {
    plus_days(week_start(date, config), 6)
}

pub fn is_within_week(date: NaiveDate, interval: &WeekInterval) -> bool {
    interval.contains(date)
}

pub fn is_interval_start(date: NaiveDate, interval: &WeekInterval) -> bool {
    date == interval.start
}

pub fn is_interval_end(date: NaiveDate, interval: &WeekInterval) -> bool {
    date == interval.end
}

// ─── Interval ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WeekPosition { Before, Within, After }

/// Inclusive 7-day range `[start, end]`. Deserialises from `start` alone;
/// any serialised `end` is ignored and rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IntervalStart")]
pub struct WeekInterval {
    start: NaiveDate,
    end:   NaiveDate,
}

#[derive(Deserialize)]
struct IntervalStart {
    start: NaiveDate,
}

impl From<IntervalStart> for WeekInterval {
    fn from(raw: IntervalStart) -> Self { Self::from_start(raw.start) }
}

impl WeekInterval {
    pub fn containing(date: impl ToCalendarDate, config: WeekConfig) -> Self {
        Self::from_start(week_start(date, config))
    }

    fn from_start(start: NaiveDate) -> Self {
        Self { start, end: plus_days(start, 6) }
    }

    pub fn start(&self) -> NaiveDate { self.start }
    pub fn end(&self)   -> NaiveDate { self.end }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn position(&self, date: NaiveDate) -> WeekPosition {
        if date < self.start      { WeekPosition::Before }
        else if date > self.end   { WeekPosition::After }
        else                      { WeekPosition::Within }
    }

    /// The week `weeks` weeks later (or earlier when negative).
    pub fn shift(&self, weeks: i64) -> Self {
        let n = weeks.unsigned_abs().saturating_mul(7);
        if weeks >= 0 {
            Self::from_start(plus_days(self.start, n))
        } else {
            Self::from_start(minus_days(self.start, n))
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end).take(7)
    }
}
