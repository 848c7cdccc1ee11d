//! Rostering domain models.
//!
//! Core data types for the shift assignment engine: the closed shift
//! enumeration, employee roster entries with per-shift constraints,
//! the holiday exclusion calendar, normalized leave records, and the
//! daily schedule output.
//!
//! All of these are snapshots supplied by the surrounding application;
//! the engine reads them and produces [`DailySchedule`] values, and
//! nothing here performs I/O.

mod calendar;
mod employee;
mod leave;
mod schedule;
mod shift;

pub use calendar::{Holiday, HolidayCalendar, HolidayKind};
pub use employee::{Employee, EmployeeConstraints, PerShiftConstraints};
pub use leave::{is_on_leave_for_shift, LeaveRecord};
pub use schedule::{schedule_for, DailySchedule, ShiftAssignment};
pub use shift::{MinuteWindow, Shift};
