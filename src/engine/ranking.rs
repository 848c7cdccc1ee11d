//! Fairness ranking and deterministic tie-breaking.
//!
//! Eligible candidates are ordered by three ascending keys, first
//! difference wins:
//!
//! 1. Assignments of this shift in the current run (batch balancing)
//! 2. Cumulative historical assignments of this shift (long-term fairness)
//! 3. A stable hash of the employee id salted with a date+shift seed
//!
//! The hash key makes full ties reproducible for a given (roster,
//! date, shift) without a fixed alphabetical bias: the same inputs
//! always produce the same winner, but the winner varies across dates.

use chrono::NaiveDate;

use super::StatsLedger;
use crate::models::{Employee, Shift};

/// Orders candidates by run load, historical load, then salted hash.
#[derive(Debug, Clone, Copy)]
pub struct CandidateRanker<'a> {
    stats: &'a StatsLedger,
}

impl<'a> CandidateRanker<'a> {
    /// Creates a ranker over the run's fairness counters.
    pub fn new(stats: &'a StatsLedger) -> Self {
        Self { stats }
    }

    /// Sorts candidates in place, best first.
    pub fn sort(&self, candidates: &mut [&Employee], shift: Shift, date: NaiveDate) {
        let seed = tiebreak_seed(date, shift);
        candidates.sort_by_key(|emp| {
            (
                self.stats.current_count(&emp.id, shift),
                self.stats.historical_count(&emp.id, shift),
                stable_hash(&format!("{}-{seed}", emp.id)),
            )
        });
    }

    /// Picks the best candidate, or `None` for an empty list (the
    /// shift stays vacant).
    pub fn select_best<'e>(
        &self,
        mut candidates: Vec<&'e Employee>,
        shift: Shift,
        date: NaiveDate,
    ) -> Option<&'e Employee> {
        self.sort(&mut candidates, shift, date);
        candidates.first().copied()
    }
}

/// Seed string mixed into the tiebreak hash: `"YYYY-MM-DD-shift"`.
fn tiebreak_seed(date: NaiveDate, shift: Shift) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), shift.key())
}

/// 32-bit string hash (`h = h*31 + ch`, wrapping), absolute value.
///
/// Kept bit-compatible with the hash previously used for stored
/// rosters so a re-run over historical inputs reproduces the same
/// tie-break order.
fn stable_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in s.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}
