//! Run quality metrics.
//!
//! Summarizes the output of a scheduling run: how many shifts were
//! filled, where the vacancies are, and how the load spread across
//! employees. Display formatting belongs to the caller; this module
//! only counts.

use std::collections::BTreeMap;

use crate::models::{DailySchedule, Shift};

/// Aggregate counters over one run's output.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Non-excluded days the run produced.
    pub days_scheduled: usize,
    /// Total filled shifts.
    pub assignment_count: usize,
    /// Total vacant shifts.
    pub vacancy_count: usize,
    /// Filled / (filled + vacant). 1.0 for an empty run.
    pub fill_rate: f64,
    /// Filled shifts per shift kind.
    pub assignments_by_shift: BTreeMap<Shift, usize>,
    /// Vacancies per shift kind.
    pub vacancies_by_shift: BTreeMap<Shift, usize>,
    /// Filled shifts per employee.
    pub assignments_by_employee: BTreeMap<String, usize>,
}

impl RunSummary {
    /// Computes the summary for a run's output.
    pub fn calculate(schedules: &[DailySchedule]) -> Self {
        let mut assignments_by_shift: BTreeMap<Shift, usize> = BTreeMap::new();
        let mut vacancies_by_shift: BTreeMap<Shift, usize> = BTreeMap::new();
        let mut assignments_by_employee: BTreeMap<String, usize> = BTreeMap::new();
        let mut assignment_count = 0;
        let mut vacancy_count = 0;

        for day in schedules {
            for shift in Shift::SCHEDULING_ORDER {
                match day.assignment_for(shift) {
                    Some(assignment) => {
                        assignment_count += 1;
                        *assignments_by_shift.entry(shift).or_insert(0) += 1;
                        *assignments_by_employee
                            .entry(assignment.employee_id.clone())
                            .or_insert(0) += 1;
                    }
                    None => {
                        vacancy_count += 1;
                        *vacancies_by_shift.entry(shift).or_insert(0) += 1;
                    }
                }
            }
        }

        let slots = assignment_count + vacancy_count;
        let fill_rate = if slots == 0 {
            1.0
        } else {
            assignment_count as f64 / slots as f64
        };

        Self {
            days_scheduled: schedules.len(),
            assignment_count,
            vacancy_count,
            fill_rate,
            assignments_by_shift,
            vacancies_by_shift,
            assignments_by_employee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftAssignment;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn day(date_s: &str, filled: &[(Shift, &str)]) -> DailySchedule {
        let d = date(date_s);
        let mut day = DailySchedule::new(d);
        for (shift, id) in filled {
            day.assign(
                *shift,
                ShiftAssignment::generated(*id, d.and_hms_opt(0, 0, 0).unwrap()),
            );
        }
        day
    }

    #[test]
    fn test_summary_counts() {
        let schedules = vec![
            day("2025-03-10", &[(Shift::Noon, "a"), (Shift::Phone, "b")]),
            day("2025-03-11", &[(Shift::Noon, "a")]),
        ];
        let summary = RunSummary::calculate(&schedules);

        assert_eq!(summary.days_scheduled, 2);
        assert_eq!(summary.assignment_count, 3);
        assert_eq!(summary.vacancy_count, 2 * Shift::ALL.len() - 3);
        assert_eq!(summary.assignments_by_shift[&Shift::Noon], 2);
        assert_eq!(summary.assignments_by_shift[&Shift::Phone], 1);
        assert_eq!(summary.vacancies_by_shift[&Shift::Morning], 2);
        assert_eq!(summary.assignments_by_employee["a"], 2);
        assert_eq!(summary.assignments_by_employee["b"], 1);
    }

    #[test]
    fn test_fill_rate() {
        let schedules = vec![day(
            "2025-03-10",
            &[
                (Shift::Noon, "a"),
                (Shift::Phone, "b"),
                (Shift::Morning, "c"),
            ],
        )];
        let summary = RunSummary::calculate(&schedules);
        assert!((summary.fill_rate - 0.5).abs() < 1e-10); // 3 of 6 slots
    }

    #[test]
    fn test_empty_run() {
        let summary = RunSummary::calculate(&[]);
        assert_eq!(summary.days_scheduled, 0);
        assert_eq!(summary.assignment_count, 0);
        assert!((summary.fill_rate - 1.0).abs() < 1e-10);
    }
}
