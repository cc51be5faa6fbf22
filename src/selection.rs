use chrono::NaiveDate;

use crate::highlight::{classify_day, DayHighlight};
use crate::label::format_week_label;
use crate::week::{week_start, WeekConfig, WeekInterval};

/// The week a picker currently has selected. Stored as the week's first day;
/// `None` once the picker is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSelection {
    config: WeekConfig,
    start:  Option<NaiveDate>,
}

impl WeekSelection {
    pub fn new(config: WeekConfig) -> Self {
        Self { config, start: None }
    }

    pub fn with_date(config: WeekConfig, date: NaiveDate) -> Self {
        let mut s = Self::new(config);
        s.select(Some(date));
        s
    }

    /// Any date picks its whole week; `None` clears the selection.
    pub fn select(&mut self, date: Option<NaiveDate>) {
        self.start = date.map(|d| week_start(d, self.config));
        tracing::trace!(start = ?self.start, "week selection changed");
    }

    pub fn clear(&mut self) { self.select(None); }

    pub fn config(&self) -> WeekConfig { self.config }

    pub fn start(&self) -> Option<NaiveDate> { self.start }

    pub fn interval(&self) -> Option<WeekInterval> {
        self.start.map(|d| WeekInterval::containing(d, self.config))
    }

    pub fn label(&self, invalid_label: &str) -> String {
        format_week_label(self.start, self.config, invalid_label)
    }

    pub fn classify(&self, day: NaiveDate, year: i32, month: u32) -> DayHighlight {
        classify_day(day, self.interval().as_ref(), year, month)
    }

    /// Moves the selection by whole weeks. Does nothing when cleared.
    pub fn shift_weeks(&mut self, weeks: i64) {
        if let Some(week) = self.interval() {
            self.start = Some(week.shift(weeks).start());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn select_snaps_to_week_start() {
        let mut s = WeekSelection::new(WeekConfig::MONDAY);
        assert_eq!(s.start(), None);
        s.select(Some(date(2023, 6, 14)));
        assert_eq!(s.start(), Some(date(2023, 6, 12)));
        assert_eq!(s.interval().map(|w| w.end()), Some(date(2023, 6, 18)));
        assert_eq!(s.label("N/A"), "Week of Jun 12th");
    }

    #[test]
    fn clearing_drops_highlight_and_label() {
        let mut s = WeekSelection::with_date(WeekConfig::MONDAY, date(2023, 6, 14));
        s.clear();
        assert_eq!(s.interval(), None);
        assert_eq!(s.label("N/A"), "N/A");
        assert!(!s.classify(date(2023, 6, 14), 2023, 6).within);
    }

    #[test]
    fn shift_follows_weeks() {
        let mut s = WeekSelection::with_date(WeekConfig::SUNDAY, date(2023, 12, 28));
        assert_eq!(s.start(), Some(date(2023, 12, 24)));
        s.shift_weeks(1);
        assert_eq!(s.start(), Some(date(2023, 12, 31)));
        assert_eq!(s.label("N/A"), "Week of Dec 31st");
        s.shift_weeks(-2);
        assert_eq!(s.start(), Some(date(2023, 12, 17)));

        let mut empty = WeekSelection::new(WeekConfig::SUNDAY);
        empty.shift_weeks(3);
        assert_eq!(empty.start(), None);
    }

    #[test]
    fn classify_uses_selected_week() {
        let s = WeekSelection::with_date(WeekConfig::MONDAY, date(2023, 6, 14));
        let h = s.classify(date(2023, 6, 12), 2023, 6);
        assert!(h.first && h.within);
        assert_eq!(s.config(), WeekConfig::MONDAY);
    }
}
