//! Constraint evaluation: is an employee eligible for a shift on a date?
//!
//! The evaluator borrows the loaded snapshot and the schedules
//! committed so far in the current run, and applies the hard
//! constraints in a fixed order, short-circuiting on the first
//! failure. There is no scoring here; ranking eligible candidates is
//! the ranker's job.
//!
//! # Check Order
//! 1. Active and certified for the shift
//! 2. Not on an explicit blackout date
//! 3. Not blocked by approved leave
//! 4. Not already assigned to any shift that day
//! 5. Weekday allowed for this shift
//! 6. Minimum interval since the last assignment of this shift
//! 7. Maximum consecutive-day run not exceeded
//! 8. Weekly cap not reached (when configured)

use chrono::{Datelike, NaiveDate};

use crate::models::{
    is_on_leave_for_shift, DailySchedule, Employee, HolidayCalendar, LeaveRecord, Shift,
};

/// Eligibility checks over the loaded snapshot.
///
/// History-dependent checks (interval, consecutive run, weekly cap)
/// search both the persisted schedules loaded for the lookback window
/// and the days already committed earlier in this run.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    calendar: &'a HolidayCalendar,
    leaves: &'a [LeaveRecord],
    existing: &'a [DailySchedule],
}

impl<'a> ConstraintEvaluator<'a> {
    /// Creates an evaluator over a loaded snapshot.
    pub fn new(
        calendar: &'a HolidayCalendar,
        leaves: &'a [LeaveRecord],
        existing: &'a [DailySchedule],
    ) -> Self {
        Self {
            calendar,
            leaves,
            existing,
        }
    }

    /// Whether the date is a weekend or a blocking holiday.
    pub fn is_excluded_date(&self, date: NaiveDate) -> bool {
        self.calendar.is_excluded(date)
    }

    /// Whether the employee may be assigned this shift on this date.
    pub fn is_eligible(
        &self,
        employee: &Employee,
        shift: Shift,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> bool {
        if !employee.is_active || !employee.has_role(shift) {
            return false;
        }
        if employee.constraints.unavailable_dates.contains(&date) {
            return false;
        }
        if is_on_leave_for_shift(self.leaves, &employee.id, date, shift) {
            return false;
        }
        if self.is_assigned_on(&employee.id, date, in_progress) {
            return false;
        }

        let constraints = employee.constraints.resolve(shift);
        if !constraints.allows_weekday(date) {
            return false;
        }

        if let Some(last) = self.last_assignment_before(&employee.id, shift, date, in_progress) {
            let elapsed = (date - last).num_days();
            if elapsed < i64::from(constraints.min_interval_days) {
                return false;
            }
        }

        let run_with_today = self.consecutive_run_before(&employee.id, shift, date, in_progress) + 1;
        if run_with_today > constraints.max_consecutive_days {
            return false;
        }

        if let Some(cap) = constraints.max_weekly_shifts {
            if self.count_in_week(&employee.id, shift, date, in_progress) >= cap {
                return false;
            }
        }

        true
    }

    /// Whether the employee already holds any shift on the date, in
    /// either the persisted schedules or the run's committed days.
    pub fn is_assigned_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> bool {
        self.days(in_progress)
            .any(|day| day.date == date && day.has_employee(employee_id))
    }

    /// Most recent date strictly before `date` on which the employee
    /// held this shift.
    fn last_assignment_before(
        &self,
        employee_id: &str,
        shift: Shift,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> Option<NaiveDate> {
        self.days(in_progress)
            .filter(|day| day.date < date && day.employee_for(shift) == Some(employee_id))
            .map(|day| day.date)
            .max()
    }

    /// Length of the consecutive run of days immediately before `date`
    /// on which the employee held this shift.
    fn consecutive_run_before(
        &self,
        employee_id: &str,
        shift: Shift,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> u32 {
        let mut run = 0;
        let mut cursor = date.pred_opt();
        while let Some(day) = cursor {
            let held = self
                .days(in_progress)
                .any(|s| s.date == day && s.employee_for(shift) == Some(employee_id));
            if !held {
                break;
            }
            run += 1;
            cursor = day.pred_opt();
        }
        run
    }

    /// Assignments of this shift to the employee within `date`'s ISO week.
    fn count_in_week(
        &self,
        employee_id: &str,
        shift: Shift,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> u32 {
        let week = date.iso_week();
        self.days(in_progress)
            .filter(|day| day.date.iso_week() == week)
            .filter(|day| day.employee_for(shift) == Some(employee_id))
            .count() as u32
    }

    fn days<'b>(
        &'b self,
        in_progress: &'b [DailySchedule],
    ) -> impl Iterator<Item = &'b DailySchedule> + 'b {
        self.existing.iter().chain(in_progress.iter())
    }
}
