use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    /// No date, or a string that is not a calendar date.
    #[error("invalid date")]
    InvalidDate,

    #[error("first day of week must be in 0..=6 (0 = Sunday), got {0}")]
    InvalidFirstDay(u8),

    #[error("invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}
