//! Week-range arithmetic for week pickers: the week containing a date under
//! a configurable first weekday, highlight flags for the days of a month
//! grid, and `"Week of Jun 12th"` labels.
pub mod calendar;
pub mod config;
pub mod error;
pub mod highlight;
pub mod label;
pub mod selection;
pub mod week;

pub use error::WeekError;
pub use highlight::{classify_day, DayHighlight};
pub use label::{format_week_label, format_week_label_str, try_format_week_label};
pub use selection::WeekSelection;
pub use week::{
    is_interval_end, is_interval_start, is_within_week, week_end, week_start,
    ToCalendarDate, WeekConfig, WeekInterval, WeekPosition,
};
