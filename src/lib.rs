//! Shift rostering engine.
//!
//! Assigns employees to named daily shifts over a date range,
//! honoring hard constraints (roles, blackout dates, leave, interval
//! and consecutive-day limits) and balancing workload with
//! deterministic tie-breaking. A single-pass greedy allocator: no
//! backtracking, no optimality guarantee, and shifts with no eligible
//! candidate are left vacant rather than raised as errors.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Shift`, `Employee`, `Holiday`,
//!   `LeaveRecord`, `DailySchedule`
//! - **`engine`**: The allocator: `SchedulingEngine`,
//!   `ConstraintEvaluator`, `CandidateRanker`, `StatsLedger`,
//!   `RunSummary`
//! - **`validation`**: Snapshot integrity checks (duplicate ids,
//!   inverted leave spans, unusable constraints)
//!
//! # Architecture
//!
//! This crate is the algorithmic core of a shift-management
//! application. Persistence, authentication, swap workflows, and UI
//! live in the surrounding application; the engine consumes read-only
//! snapshots from them and hands back daily schedules plus a stats
//! delta for the caller to persist.

pub mod engine;
pub mod models;
pub mod validation;

pub use engine::{RosterInput, RunSummary, SchedulingEngine};
pub use models::{DailySchedule, Employee, Holiday, LeaveRecord, Shift, ShiftAssignment};
