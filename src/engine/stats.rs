//! Run-local assignment statistics.
//!
//! Two counters drive fairness: the current-run counts (reset on every
//! load, balancing load within one batch) and the historical counts
//! (seeded from persisted employee snapshots, bumped in memory as the
//! run proceeds). The engine never persists either; the caller reads
//! [`StatsLedger::delta`] after accepting a run and applies it durably
//! exactly once.

use std::collections::BTreeMap;

use crate::models::{Employee, Shift};

/// Per-employee, per-shift assignment counts.
pub type ShiftCounts = BTreeMap<String, BTreeMap<Shift, u32>>;

/// Mutable fairness counters for one load+run cycle.
#[derive(Debug, Clone, Default)]
pub struct StatsLedger {
    current: ShiftCounts,
    historical: ShiftCounts,
}

impl StatsLedger {
    /// Creates a ledger seeded from the employees' persisted counts.
    /// Current-run counts start at zero.
    pub fn seeded_from(employees: &[Employee]) -> Self {
        let historical = employees
            .iter()
            .map(|e| (e.id.clone(), e.historical_stats.clone()))
            .collect();
        Self {
            current: ShiftCounts::new(),
            historical,
        }
    }

    /// Records one assignment, bumping both counters.
    pub fn record(&mut self, employee_id: &str, shift: Shift) {
        *self
            .current
            .entry(employee_id.to_string())
            .or_default()
            .entry(shift)
            .or_insert(0) += 1;
        *self
            .historical
            .entry(employee_id.to_string())
            .or_default()
            .entry(shift)
            .or_insert(0) += 1;
    }

    /// Assignments of a shift to an employee within this run.
    pub fn current_count(&self, employee_id: &str, shift: Shift) -> u32 {
        count(&self.current, employee_id, shift)
    }

    /// Cumulative assignments of a shift to an employee, including
    /// this run's in-memory increments.
    pub fn historical_count(&self, employee_id: &str, shift: Shift) -> u32 {
        count(&self.historical, employee_id, shift)
    }

    /// Current-run counts.
    pub fn current(&self) -> &ShiftCounts {
        &self.current
    }

    /// Historical counts including this run's increments.
    pub fn historical(&self) -> &ShiftCounts {
        &self.historical
    }

    /// The counts accrued during this run.
    ///
    /// This is the single hand-off contract for durable stats: one
    /// external component adds the delta to each employee's persisted
    /// counts after the run's output is accepted.
    pub fn delta(&self) -> ShiftCounts {
        self.current.clone()
    }

    /// Clears the current-run counts, keeping historical ones.
    pub fn reset_current(&mut self) {
        self.current.clear();
    }
}

fn count(counts: &ShiftCounts, employee_id: &str, shift: Shift) -> u32 {
    counts
        .get(employee_id)
        .and_then(|per_shift| per_shift.get(&shift))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;

    #[test]
    fn test_seeding_from_employees() {
        let employees = vec![
            Employee::new("e1", "Alice").with_historical(Shift::Noon, 5),
            Employee::new("e2", "Bob"),
        ];
        let ledger = StatsLedger::seeded_from(&employees);

        assert_eq!(ledger.historical_count("e1", Shift::Noon), 5);
        assert_eq!(ledger.historical_count("e2", Shift::Noon), 0);
        assert_eq!(ledger.current_count("e1", Shift::Noon), 0);
    }

    #[test]
    fn test_record_bumps_both_counters() {
        let mut ledger = StatsLedger::default();
        ledger.record("e1", Shift::Phone);
        ledger.record("e1", Shift::Phone);
        ledger.record("e1", Shift::Noon);

        assert_eq!(ledger.current_count("e1", Shift::Phone), 2);
        assert_eq!(ledger.historical_count("e1", Shift::Phone), 2);
        assert_eq!(ledger.current_count("e1", Shift::Noon), 1);
        assert_eq!(ledger.current_count("e2", Shift::Noon), 0);
    }

    #[test]
    fn test_delta_is_current_run_only() {
        let employees = vec![Employee::new("e1", "Alice").with_historical(Shift::Noon, 5)];
        let mut ledger = StatsLedger::seeded_from(&employees);
        ledger.record("e1", Shift::Noon);

        let delta = ledger.delta();
        assert_eq!(delta["e1"][&Shift::Noon], 1);
        // Historical reflects seed + delta.
        assert_eq!(ledger.historical_count("e1", Shift::Noon), 6);
    }

    #[test]
    fn test_reset_current_keeps_historical() {
        let mut ledger = StatsLedger::default();
        ledger.record("e1", Shift::Noon);
        ledger.reset_current();

        assert_eq!(ledger.current_count("e1", Shift::Noon), 0);
        assert_eq!(ledger.historical_count("e1", Shift::Noon), 1);
    }
}
