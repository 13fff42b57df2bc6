//! Reporting periods
//!
//! A reporting period is a derived `(start, end)` date pair, never stored:
//! the calendar year around a focal date for the income statement, a single
//! month for the trial balance, or an arbitrary range.

use crate::types::LedgerError;
use chrono::{Datelike, Months, NaiveDate};

/// Inclusive date range a report aggregates over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// The calendar year containing `focal`: January 1 through December 31
    pub fn calendar_year(focal: NaiveDate) -> Self {
        // Jan 1 / Dec 31 exist for every year chrono can represent.
        let start = NaiveDate::from_ymd_opt(focal.year(), 1, 1).unwrap_or(focal);
        let end = NaiveDate::from_ymd_opt(focal.year(), 12, 31).unwrap_or(focal);
        ReportingPeriod { start, end }
    }

    /// A single month: the first day through the last day
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidMonth`] when `month` is not 1-12.
    pub fn month(year: i32, month: u32) -> Result<Self, LedgerError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(LedgerError::InvalidMonth { year, month })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(LedgerError::InvalidMonth { year, month })?;
        Ok(ReportingPeriod { start, end })
    }

    /// An explicit range
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidPeriod`] when `start` is after `end`.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidPeriod { start, end });
        }
        Ok(ReportingPeriod { start, end })
    }

    /// Whether `date` falls inside the period (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_calendar_year_spans_january_through_december() {
        let period = ReportingPeriod::calendar_year(d(2024, 6, 30));
        assert_eq!(period.start, d(2024, 1, 1));
        assert_eq!(period.end, d(2024, 12, 31));
    }

    #[rstest]
    #[case::thirty_one_days(2024, 3, 31)]
    #[case::thirty_days(2024, 4, 30)]
    #[case::leap_february(2024, 2, 29)]
    #[case::plain_february(2023, 2, 28)]
    #[case::december(2024, 12, 31)]
    fn test_month_last_day(#[case] year: i32, #[case] month: u32, #[case] last_day: u32) {
        let period = ReportingPeriod::month(year, month).unwrap();
        assert_eq!(period.start, d(year, month, 1));
        assert_eq!(period.end, d(year, month, last_day));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_month_rejects_invalid_month(#[case] month: u32) {
        let result = ReportingPeriod::month(2024, month);
        assert!(matches!(result, Err(LedgerError::InvalidMonth { .. })));
    }

    #[test]
    fn test_custom_rejects_inverted_range() {
        let result = ReportingPeriod::custom(d(2024, 5, 1), d(2024, 4, 1));
        assert!(matches!(result, Err(LedgerError::InvalidPeriod { .. })));
    }

    #[rstest]
    #[case::start(d(2024, 3, 1), true)]
    #[case::inside(d(2024, 3, 15), true)]
    #[case::end(d(2024, 3, 31), true)]
    #[case::before(d(2024, 2, 29), false)]
    #[case::after(d(2024, 4, 1), false)]
    fn test_contains(#[case] date: NaiveDate, #[case] expected: bool) {
        let period = ReportingPeriod::month(2024, 3).unwrap();
        assert_eq!(period.contains(date), expected);
    }
}
