//! Holiday calendar and date exclusion.
//!
//! A date is excluded from scheduling when it is a weekend or a
//! holiday flagged `exclude_from_scheduling`. Excluded dates get no
//! assignments at all; the loop skips them without producing a daily
//! schedule entry.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Holiday classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    /// National or statutory holiday.
    National,
    /// A weekend day recorded explicitly (e.g. a make-up workday's
    /// counterpart).
    Weekend,
}

/// A tagged calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    /// Display name (e.g. "中秋節").
    pub name: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Classification.
    pub kind: HolidayKind,
    /// When true, no shifts are scheduled on this date.
    pub exclude_from_scheduling: bool,
}

impl Holiday {
    /// Creates a national holiday that excludes scheduling.
    pub fn national(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            kind: HolidayKind::National,
            exclude_from_scheduling: true,
        }
    }

    /// Creates a holiday entry that does not block scheduling.
    pub fn non_blocking(name: impl Into<String>, date: NaiveDate, kind: HolidayKind) -> Self {
        Self {
            name: name.into(),
            date,
            kind,
            exclude_from_scheduling: false,
        }
    }
}

/// Lookup over the loaded holiday list.
///
/// Weekends are always excluded, independent of the holiday list.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    by_date: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Builds a calendar from a holiday snapshot.
    ///
    /// Later entries win on duplicate dates; the validation pass
    /// reports duplicates to the caller.
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            by_date: holidays.into_iter().map(|h| (h.date, h)).collect(),
        }
    }

    /// Holiday entry for a date, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.by_date.get(&date)
    }

    /// Whether no shifts may be scheduled on this date.
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        self.holiday_on(date)
            .map(|h| h.exclude_from_scheduling)
            .unwrap_or(false)
    }

    /// Number of holiday entries.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Whether the calendar holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_weekends_always_excluded() {
        let cal = HolidayCalendar::default();
        assert!(cal.is_excluded(date("2025-03-15"))); // Saturday
        assert!(cal.is_excluded(date("2025-03-16"))); // Sunday
        assert!(!cal.is_excluded(date("2025-03-17"))); // Monday
    }

    #[test]
    fn test_blocking_holiday_excluded() {
        let cal = HolidayCalendar::new([Holiday::national("端午節", date("2025-05-30"))]);
        assert!(cal.is_excluded(date("2025-05-30"))); // Friday, but holiday
        assert!(!cal.is_excluded(date("2025-05-29")));
    }

    #[test]
    fn test_non_blocking_holiday_not_excluded() {
        let cal = HolidayCalendar::new([Holiday::non_blocking(
            "補班日",
            date("2025-02-07"),
            HolidayKind::National,
        )]);
        assert!(!cal.is_excluded(date("2025-02-07"))); // Friday, holiday does not block
    }

    #[test]
    fn test_holiday_lookup() {
        let cal = HolidayCalendar::new([Holiday::national("元旦", date("2025-01-01"))]);
        assert_eq!(cal.holiday_on(date("2025-01-01")).unwrap().name, "元旦");
        assert!(cal.holiday_on(date("2025-01-02")).is_none());
        assert_eq!(cal.len(), 1);
    }
}
