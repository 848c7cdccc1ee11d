//! Employee model and per-shift constraints.
//!
//! An employee snapshot carries everything the engine needs to decide
//! eligibility: certified shift roles, personal constraints, and the
//! persisted historical assignment counts used for long-term fairness.
//! The engine only reads these snapshots; creating and editing
//! employees is the persistence layer's job.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use super::Shift;

/// Constraints that apply to one shift an employee is certified for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerShiftConstraints {
    /// Cap on assignments of this shift within one ISO week.
    /// `None` = unlimited.
    pub max_weekly_shifts: Option<u32>,
    /// Minimum days between two assignments of this shift.
    pub min_interval_days: u32,
    /// Weekdays this shift may be assigned (1=Mon .. 7=Sun).
    pub available_days: BTreeSet<u8>,
    /// Longest permitted run of consecutive calendar days on this shift.
    pub max_consecutive_days: u32,
}

impl PerShiftConstraints {
    /// The documented default, applied whenever an employee holds a
    /// role but has no explicit constraint entry for it: weekdays
    /// only, at most one day in a row, no weekly cap.
    ///
    /// This is the single defaulting site; constraint reads go through
    /// [`EmployeeConstraints::resolve`].
    pub fn weekday_default() -> Self {
        Self {
            max_weekly_shifts: None,
            min_interval_days: 1,
            available_days: (1..=5).collect(),
            max_consecutive_days: 1,
        }
    }

    /// Sets the weekly cap.
    pub fn with_weekly_cap(mut self, max: u32) -> Self {
        self.max_weekly_shifts = Some(max);
        self
    }

    /// Sets the minimum interval in days.
    pub fn with_min_interval(mut self, days: u32) -> Self {
        self.min_interval_days = days;
        self
    }

    /// Sets the allowed weekdays (1=Mon .. 7=Sun).
    pub fn with_available_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.available_days = days.into_iter().collect();
        self
    }

    /// Sets the maximum consecutive-day run length.
    pub fn with_max_consecutive(mut self, days: u32) -> Self {
        self.max_consecutive_days = days;
        self
    }

    /// Whether this shift may be assigned on the given date's weekday.
    pub fn allows_weekday(&self, date: NaiveDate) -> bool {
        use chrono::Datelike;
        self.available_days
            .contains(&(date.weekday().number_from_monday() as u8))
    }
}

impl Default for PerShiftConstraints {
    fn default() -> Self {
        Self::weekday_default()
    }
}

/// Personal constraints, global plus per-shift.
///
/// The at-most-one-shift-per-day rule is a hard invariant of the
/// scheduling loop itself and is not configurable here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeConstraints {
    /// Explicit blackout dates on which no shift may be assigned.
    pub unavailable_dates: BTreeSet<NaiveDate>,
    /// Per-shift constraint entries. Missing entries fall back to
    /// [`PerShiftConstraints::weekday_default`].
    pub by_shift: BTreeMap<Shift, PerShiftConstraints>,
}

impl EmployeeConstraints {
    /// Resolves the effective constraints for a shift.
    ///
    /// Returns the explicit entry if one exists, otherwise the
    /// documented default. Every constraint read in the engine goes
    /// through here so the default cannot drift between call sites.
    pub fn resolve(&self, shift: Shift) -> PerShiftConstraints {
        self.by_shift
            .get(&shift)
            .cloned()
            .unwrap_or_else(PerShiftConstraints::weekday_default)
    }
}

/// An employee roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (document key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// External employee code (badge number).
    pub employee_code: String,
    /// Shifts this employee is certified for.
    pub roles: BTreeSet<Shift>,
    /// Personal constraints.
    pub constraints: EmployeeConstraints,
    /// Cumulative persisted assignment counts per shift. Read-only to
    /// the engine; updated durably only after a run is accepted.
    pub historical_stats: BTreeMap<Shift, u32>,
    /// Inactive employees are never eligible.
    pub is_active: bool,
}

impl Employee {
    /// Creates an active employee with no roles or history.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            employee_code: String::new(),
            roles: BTreeSet::new(),
            constraints: EmployeeConstraints::default(),
            historical_stats: BTreeMap::new(),
            is_active: true,
        }
    }

    /// Sets the external employee code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.employee_code = code.into();
        self
    }

    /// Adds a certified shift role.
    pub fn with_role(mut self, shift: Shift) -> Self {
        self.roles.insert(shift);
        self
    }

    /// Sets the per-shift constraints for one shift.
    pub fn with_shift_constraints(mut self, shift: Shift, c: PerShiftConstraints) -> Self {
        self.constraints.by_shift.insert(shift, c);
        self
    }

    /// Adds a blackout date.
    pub fn with_unavailable_date(mut self, date: NaiveDate) -> Self {
        self.constraints.unavailable_dates.insert(date);
        self
    }

    /// Seeds the persisted historical count for one shift.
    pub fn with_historical(mut self, shift: Shift, count: u32) -> Self {
        self.historical_stats.insert(shift, count);
        self
    }

    /// Marks the employee inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether the employee is certified for a shift.
    pub fn has_role(&self, shift: Shift) -> bool {
        self.roles.contains(&shift)
    }

    /// Persisted historical count for a shift (0 if absent).
    pub fn historical_count(&self, shift: Shift) -> u32 {
        self.historical_stats.get(&shift).copied().unwrap_or(0)
    }
}
