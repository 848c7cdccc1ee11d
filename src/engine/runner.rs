//! The scheduling loop and its run state.
//!
//! # Algorithm
//!
//! 1. Walk each calendar day from start to end, inclusive.
//! 2. Skip excluded days (weekends, blocking holidays) entirely.
//! 3. For each shift in priority order, filter the roster through the
//!    constraint evaluator, drop anyone already assigned earlier that
//!    day, rank the rest, and commit the best candidate.
//! 4. Bump the fairness counters so later shifts and days see the
//!    updated load.
//!
//! Unfillable shifts are left vacant, never raised as errors.
//!
//! # Run State
//! All state lives in the [`SchedulingEngine`] value. Embedders should
//! build one engine per scheduling request rather than sharing a
//! singleton, so concurrent requests cannot contaminate each other's
//! current-run counters.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use super::{CandidateRanker, ConstraintEvaluator, ShiftCounts, StatsLedger};
use crate::models::{
    DailySchedule, Employee, Holiday, HolidayCalendar, LeaveRecord, Shift, ShiftAssignment,
};

/// Input container for one load+run cycle.
#[derive(Debug, Clone, Default)]
pub struct RosterInput {
    /// Employee roster snapshot.
    pub employees: Vec<Employee>,
    /// Holiday list.
    pub holidays: Vec<Holiday>,
    /// Approved leave records, pre-filtered by the caller.
    pub leaves: Vec<LeaveRecord>,
    /// Persisted schedules for the lookback window, so interval and
    /// consecutive-day checks span the run boundary. Callers should
    /// include at least `max_consecutive_days + min_interval_days`
    /// days of history before the run start.
    pub existing_schedules: Vec<DailySchedule>,
}

impl RosterInput {
    /// Creates an input with just a roster.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            ..Default::default()
        }
    }

    /// Sets the holiday list.
    pub fn with_holidays(mut self, holidays: Vec<Holiday>) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the approved leave records.
    pub fn with_leaves(mut self, leaves: Vec<LeaveRecord>) -> Self {
        self.leaves = leaves;
        self
    }

    /// Sets the lookback schedules.
    pub fn with_existing_schedules(mut self, schedules: Vec<DailySchedule>) -> Self {
        self.existing_schedules = schedules;
        self
    }
}

/// The shift assignment engine.
///
/// Owns the loaded snapshot and the fairness counters for one
/// load+run cycle. Purely CPU-bound and synchronous; performs no I/O.
///
/// Calling [`run`](Self::run) twice without reloading is supported for
/// iterative scheduling: the second call sees the first call's output
/// as prior history and its counters carry over. Call
/// [`load_data`](Self::load_data) (or build a fresh engine) for an
/// independent run.
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    employees: Vec<Employee>,
    calendar: HolidayCalendar,
    leaves: Vec<LeaveRecord>,
    existing: Vec<DailySchedule>,
    stats: StatsLedger,
}

impl SchedulingEngine {
    /// Creates an engine with no data loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from an input container.
    pub fn from_input(input: RosterInput) -> Self {
        let mut engine = Self::new();
        engine.load_data(
            input.employees,
            input.holidays,
            input.leaves,
            input.existing_schedules,
        );
        engine
    }

    /// Loads a fresh snapshot, resetting all run state.
    ///
    /// Current-run counters go back to zero; historical counters are
    /// re-seeded from the employees' persisted counts.
    pub fn load_data(
        &mut self,
        employees: Vec<Employee>,
        holidays: Vec<Holiday>,
        leaves: Vec<LeaveRecord>,
        existing_schedules: Vec<DailySchedule>,
    ) {
        self.stats = StatsLedger::seeded_from(&employees);
        self.employees = employees;
        self.calendar = HolidayCalendar::new(holidays);
        self.leaves = leaves;
        self.existing = existing_schedules;
    }

    /// Eligible candidates for a (shift, date) pair.
    ///
    /// Empty when the date is excluded. `in_progress` carries the days
    /// already committed by an ongoing run; pass `&[]` outside a run.
    pub fn candidates(
        &self,
        shift: Shift,
        date: NaiveDate,
        in_progress: &[DailySchedule],
    ) -> Vec<&Employee> {
        if self.calendar.is_excluded(date) {
            return Vec::new();
        }
        let evaluator = self.evaluator();
        self.employees
            .iter()
            .filter(|emp| evaluator.is_eligible(emp, shift, date, in_progress))
            .collect()
    }

    /// Candidates for replacing an existing assignment via manual edit.
    ///
    /// The incumbent is always included, first, even when they no
    /// longer pass eligibility, so an editor is never blocked from
    /// confirming the current assignment.
    pub fn replacement_candidates(
        &self,
        shift: Shift,
        date: NaiveDate,
        current_assignee: Option<&str>,
    ) -> Vec<&Employee> {
        let mut candidates = self.candidates(shift, date, &[]);
        if let Some(id) = current_assignee {
            if !candidates.iter().any(|c| c.id == id) {
                if let Some(incumbent) = self.employees.iter().find(|e| e.id == id) {
                    candidates.insert(0, incumbent);
                }
            }
        }
        candidates
    }

    /// Produces daily schedules for every non-excluded day in
    /// `[start, end]`, inclusive of both endpoints.
    ///
    /// Excluded days produce no entry. Unfillable shifts are left
    /// vacant. The committed days are retained by the engine so a
    /// subsequent `run` treats them as prior history.
    pub fn run(&mut self, start: NaiveDate, end: NaiveDate) -> Vec<DailySchedule> {
        info!(%start, %end, "scheduling run started");
        let mut results: Vec<DailySchedule> = Vec::new();
        let mut date = start;

        while date <= end {
            if self.calendar.is_excluded(date) {
                debug!(%date, "excluded date, skipping");
            } else {
                let day = self.schedule_day(date, &results);
                results.push(day);
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        self.existing.extend(results.iter().cloned());
        info!(
            days = results.len(),
            assignments = results.iter().map(DailySchedule::assignment_count).sum::<usize>(),
            "scheduling run complete"
        );
        results
    }

    /// Fills one day's shifts in priority order.
    fn schedule_day(&mut self, date: NaiveDate, committed: &[DailySchedule]) -> DailySchedule {
        let mut day = DailySchedule::new(date);

        for shift in Shift::SCHEDULING_ORDER {
            let selected = {
                let mut candidates = self.candidates(shift, date, committed);
                // Hard same-day exclusivity against this day's partial
                // schedule, independent of the evaluator.
                candidates.retain(|c| !day.has_employee(&c.id));
                CandidateRanker::new(&self.stats)
                    .select_best(candidates, shift, date)
                    .map(|emp| emp.id.clone())
            };

            match selected {
                Some(employee_id) => {
                    debug!(%date, shift = shift.key(), employee = %employee_id, "assigned");
                    day.assign(
                        shift,
                        ShiftAssignment::generated(
                            employee_id.as_str(),
                            date.and_time(NaiveTime::MIN),
                        ),
                    );
                    self.stats.record(&employee_id, shift);
                }
                None => {
                    debug!(%date, shift = shift.key(), "no eligible candidate, left vacant");
                }
            }
        }

        day
    }

    /// Counts accrued during this run.
    pub fn current_stats(&self) -> &ShiftCounts {
        self.stats.current()
    }

    /// Cumulative counts including this run's in-memory increments.
    /// Nothing is persisted here; callers apply [`stats_delta`]
    /// (Self::stats_delta) durably after accepting the output.
    pub fn historical_stats(&self) -> &ShiftCounts {
        self.stats.historical()
    }

    /// The per-employee per-shift counts this run added.
    pub fn stats_delta(&self) -> ShiftCounts {
        self.stats.delta()
    }

    /// Clears current-run counters without reloading the snapshot.
    pub fn reset_current_stats(&mut self) {
        self.stats.reset_current();
    }

    fn evaluator(&self) -> ConstraintEvaluator<'_> {
        ConstraintEvaluator::new(&self.calendar, &self.leaves, &self.existing)
    }
}
