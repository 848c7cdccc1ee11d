//! Daily schedule (roster output) model.
//!
//! A run produces one [`DailySchedule`] per non-excluded day. A shift
//! with no assignment entry is vacant; vacancy is a normal outcome,
//! not an error.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Shift;

/// One employee holding one shift on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Assigned employee.
    pub employee_id: String,
    /// When the assignment was made.
    pub assigned_at: NaiveDateTime,
    /// True for human-edited assignments, false for engine output.
    /// Informational only; does not affect future eligibility.
    pub is_manual: bool,
}

impl ShiftAssignment {
    /// Creates an engine-produced assignment.
    pub fn generated(employee_id: impl Into<String>, assigned_at: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.into(),
            assigned_at,
            is_manual: false,
        }
    }

    /// Creates a human-edited assignment.
    pub fn manual(employee_id: impl Into<String>, assigned_at: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.into(),
            assigned_at,
            is_manual: true,
        }
    }
}

/// The roster for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    /// Calendar date.
    pub date: NaiveDate,
    /// Shift → assignment. Absent shifts are vacant.
    pub shifts: BTreeMap<Shift, ShiftAssignment>,
}

impl DailySchedule {
    /// Creates an empty (all-vacant) daily schedule.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            shifts: BTreeMap::new(),
        }
    }

    /// Records an assignment for a shift.
    pub fn assign(&mut self, shift: Shift, assignment: ShiftAssignment) {
        self.shifts.insert(shift, assignment);
    }

    /// Assignment for a shift, if any.
    pub fn assignment_for(&self, shift: Shift) -> Option<&ShiftAssignment> {
        self.shifts.get(&shift)
    }

    /// Employee holding a shift, if any.
    pub fn employee_for(&self, shift: Shift) -> Option<&str> {
        self.shifts.get(&shift).map(|a| a.employee_id.as_str())
    }

    /// Whether the employee holds any shift on this day.
    pub fn has_employee(&self, employee_id: &str) -> bool {
        self.shifts.values().any(|a| a.employee_id == employee_id)
    }

    /// Employee ids holding shifts on this day, in shift order.
    pub fn assigned_employees(&self) -> Vec<&str> {
        self.shifts.values().map(|a| a.employee_id.as_str()).collect()
    }

    /// Shifts left vacant, in scheduling order.
    pub fn vacancies(&self) -> Vec<Shift> {
        Shift::SCHEDULING_ORDER
            .into_iter()
            .filter(|s| !self.shifts.contains_key(s))
            .collect()
    }

    /// Number of filled shifts.
    pub fn assignment_count(&self) -> usize {
        self.shifts.len()
    }
}

/// Finds the schedule entry for a date, if any.
pub fn schedule_for(schedules: &[DailySchedule], date: NaiveDate) -> Option<&DailySchedule> {
    schedules.iter().find(|s| s.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stamp() -> NaiveDateTime {
        date("2025-03-01").and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn test_assign_and_lookup() {
        let mut day = DailySchedule::new(date("2025-03-10"));
        day.assign(Shift::Noon, ShiftAssignment::generated("e1", stamp()));
        day.assign(Shift::Phone, ShiftAssignment::manual("e2", stamp()));

        assert_eq!(day.employee_for(Shift::Noon), Some("e1"));
        assert_eq!(day.employee_for(Shift::Morning), None);
        assert!(day.has_employee("e2"));
        assert!(!day.has_employee("e3"));
        assert!(day.assignment_for(Shift::Phone).unwrap().is_manual);
        assert!(!day.assignment_for(Shift::Noon).unwrap().is_manual);
        assert_eq!(day.assignment_count(), 2);
    }

    #[test]
    fn test_vacancies() {
        let mut day = DailySchedule::new(date("2025-03-10"));
        assert_eq!(day.vacancies().len(), Shift::ALL.len());

        day.assign(Shift::Noon, ShiftAssignment::generated("e1", stamp()));
        let vacant = day.vacancies();
        assert!(!vacant.contains(&Shift::Noon));
        assert!(vacant.contains(&Shift::Phone));
    }

    #[test]
    fn test_schedule_for() {
        let days = vec![
            DailySchedule::new(date("2025-03-10")),
            DailySchedule::new(date("2025-03-11")),
        ];
        assert!(schedule_for(&days, date("2025-03-11")).is_some());
        assert!(schedule_for(&days, date("2025-03-12")).is_none());
    }

    #[test]
    fn test_daily_schedule_serde_round_trip() {
        let mut day = DailySchedule::new(date("2025-03-10"));
        day.assign(Shift::Noon, ShiftAssignment::generated("e1", stamp()));

        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"noon\""));
        assert!(json.contains("2025-03-10"));
        let back: DailySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }
}
