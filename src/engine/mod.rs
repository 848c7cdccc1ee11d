//! The shift assignment engine.
//!
//! A single-pass, deterministic greedy allocator. Four pieces:
//!
//! - **`eligibility`**: hard-constraint evaluation per (employee,
//!   shift, date)
//! - **`ranking`**: fairness ordering with a deterministic hash
//!   tiebreak
//! - **`stats`**: run-local fairness counters and the stats-delta
//!   hand-off
//! - **`runner`**: the day-by-day scheduling loop and its run state
//!
//! The engine never backtracks and never errors: a shift with no
//! eligible candidate stays vacant.
//!
//! # Usage
//!
//! ```
//! use shift_roster::engine::{RosterInput, SchedulingEngine};
//! use shift_roster::models::{Employee, Shift};
//!
//! let roster = vec![
//!     Employee::new("e1", "Alice").with_role(Shift::Noon),
//!     Employee::new("e2", "Bob").with_role(Shift::Noon),
//! ];
//! let mut engine = SchedulingEngine::from_input(RosterInput::new(roster));
//!
//! let start = "2025-03-10".parse().unwrap();
//! let end = "2025-03-14".parse().unwrap();
//! let schedules = engine.run(start, end);
//! assert_eq!(schedules.len(), 5); // Monday through Friday
//! ```

mod eligibility;
mod kpi;
mod ranking;
mod runner;
mod stats;

pub use eligibility::ConstraintEvaluator;
pub use kpi::RunSummary;
pub use ranking::CandidateRanker;
pub use runner::{RosterInput, SchedulingEngine};
pub use stats::{ShiftCounts, StatsLedger};
