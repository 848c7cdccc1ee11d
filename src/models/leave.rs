//! Approved leave records.
//!
//! The caller normalizes approved leave applications down to
//! (employee, start, end) spans before loading them; the engine does
//! not know about leave types or approval status.
//!
//! # Overlap Semantics
//! A record spanning exact day boundaries (00:00 to 23:59) blocks every
//! shift on each covered day. A record with finer-grained times blocks
//! only shifts whose fixed time window overlaps the record's
//! time-of-day span.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::{MinuteWindow, Shift};

/// One approved leave span for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Employee on leave.
    pub employee_id: String,
    /// Leave start.
    pub start: NaiveDateTime,
    /// Leave end (inclusive at day granularity).
    pub end: NaiveDateTime,
}

impl LeaveRecord {
    /// Creates a leave record.
    pub fn new(employee_id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.into(),
            start,
            end,
        }
    }

    /// Creates a full-day record covering `start..=end` calendar days.
    pub fn full_days(employee_id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);
        Self::new(
            employee_id,
            start.and_time(NaiveTime::MIN),
            end.and_time(end_of_day),
        )
    }

    /// Whether the record spans exact day boundaries (00:00–23:59),
    /// meaning it blocks all shifts rather than a time-of-day slice.
    pub fn is_full_day(&self) -> bool {
        self.start.hour() == 0
            && self.start.minute() == 0
            && self.end.hour() == 23
            && self.end.minute() == 59
    }

    /// Whether the record covers a calendar day at day granularity.
    pub fn covers_day(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && date <= self.end.date()
    }

    /// Time-of-day span of the record, in minutes since midnight.
    fn minute_span(&self) -> MinuteWindow {
        MinuteWindow::new(
            self.start.hour() * 60 + self.start.minute(),
            self.end.hour() * 60 + self.end.minute(),
        )
    }

    /// Whether this record blocks the given shift on the given date.
    pub fn blocks_shift(&self, date: NaiveDate, shift: Shift) -> bool {
        if !self.covers_day(date) {
            return false;
        }
        if self.is_full_day() {
            return true;
        }
        shift.time_window().overlaps(&self.minute_span())
    }
}

/// Whether any record blocks the employee from a shift on a date.
pub fn is_on_leave_for_shift(
    leaves: &[LeaveRecord],
    employee_id: &str,
    date: NaiveDate,
    shift: Shift,
) -> bool {
    leaves
        .iter()
        .filter(|l| l.employee_id == employee_id)
        .any(|l| l.blocks_shift(date, shift))
}
