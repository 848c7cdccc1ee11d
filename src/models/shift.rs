//! Shift kinds and their fixed time windows.
//!
//! The roster has a closed set of daily shifts. Every function that
//! branches on shift kind matches exhaustively, so an unknown shift
//! string coming in from storage fails at deserialization instead of
//! being silently skipped.
//!
//! # Time Model
//! Shift windows are minutes since midnight, half-open. They exist for
//! one purpose: deciding whether a partial-day leave record overlaps a
//! shift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named daily shift slot.
///
/// Variants are ordered by assignment priority: when the scheduling
/// loop fills a day it walks [`Shift::SCHEDULING_ORDER`], so the noon
/// desk is staffed before the support shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Noon consultation desk (12:30–13:30).
    Noon,
    /// Consultation phone line (09:00–18:00).
    Phone,
    /// Morning support (09:00–12:30).
    Morning,
    /// Afternoon support (13:30–18:00).
    Afternoon,
    /// Prescription verification, primary (09:00–18:00).
    Verify1,
    /// Prescription verification, secondary (09:00–18:00).
    Verify2,
}

impl Shift {
    /// Every shift kind.
    pub const ALL: [Shift; 6] = [
        Shift::Noon,
        Shift::Phone,
        Shift::Morning,
        Shift::Afternoon,
        Shift::Verify1,
        Shift::Verify2,
    ];

    /// Fixed priority order used by the scheduling loop.
    pub const SCHEDULING_ORDER: [Shift; 6] = [
        Shift::Noon,
        Shift::Phone,
        Shift::Morning,
        Shift::Afternoon,
        Shift::Verify1,
        Shift::Verify2,
    ];

    /// Stable identifier used in stored documents and tiebreak seeds.
    pub fn key(&self) -> &'static str {
        match self {
            Shift::Noon => "noon",
            Shift::Phone => "phone",
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Verify1 => "verify1",
            Shift::Verify2 => "verify2",
        }
    }

    /// Display name shown on the roster.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Noon => "諮詢台值午",
            Shift::Phone => "諮詢電話",
            Shift::Morning => "上午支援",
            Shift::Afternoon => "下午支援",
            Shift::Verify1 => "處方審核(主)",
            Shift::Verify2 => "處方審核(輔)",
        }
    }

    /// Fixed time-of-day window, for leave-overlap checks.
    ///
    /// Verification shifts span the whole working day: they have no
    /// narrower slot of their own, so any working-hours leave
    /// conflicts with them.
    pub fn time_window(&self) -> MinuteWindow {
        match self {
            Shift::Noon => MinuteWindow::new(12 * 60 + 30, 13 * 60 + 30),
            Shift::Phone => MinuteWindow::new(9 * 60, 18 * 60),
            Shift::Morning => MinuteWindow::new(9 * 60, 12 * 60 + 30),
            Shift::Afternoon => MinuteWindow::new(13 * 60 + 30, 18 * 60),
            Shift::Verify1 => MinuteWindow::new(9 * 60, 18 * 60),
            Shift::Verify2 => MinuteWindow::new(9 * 60, 18 * 60),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A time-of-day interval [start, end) in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteWindow {
    /// Interval start (inclusive).
    pub start_min: u32,
    /// Interval end (exclusive).
    pub end_min: u32,
}

impl MinuteWindow {
    /// Creates a new window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduling_order_starts_with_noon() {
        assert_eq!(Shift::SCHEDULING_ORDER[0], Shift::Noon);
        assert_eq!(Shift::SCHEDULING_ORDER[1], Shift::Phone);
        assert_eq!(Shift::SCHEDULING_ORDER.len(), Shift::ALL.len());
    }

    #[test]
    fn test_serde_keys_match_stored_strings() {
        for shift in Shift::ALL {
            let json = serde_json::to_string(&shift).unwrap();
            assert_eq!(json, format!("\"{}\"", shift.key()));
            let back: Shift = serde_json::from_str(&json).unwrap();
            assert_eq!(back, shift);
        }
    }

    #[test]
    fn test_unknown_shift_string_rejected() {
        // The pre-migration undifferentiated "verify" form must not parse.
        assert!(serde_json::from_str::<Shift>("\"verify\"").is_err());
    }

    #[test]
    fn test_time_windows() {
        let noon = Shift::Noon.time_window();
        assert_eq!(noon.start_min, 750);
        assert_eq!(noon.end_min, 810);

        // Morning and afternoon partition the phone window.
        let morning = Shift::Morning.time_window();
        let afternoon = Shift::Afternoon.time_window();
        assert!(!morning.overlaps(&afternoon));
        assert!(morning.overlaps(&Shift::Phone.time_window()));
        assert!(afternoon.overlaps(&Shift::Phone.time_window()));
    }

    #[test]
    fn test_window_overlap_touching_is_disjoint() {
        let a = MinuteWindow::new(540, 750);
        let b = MinuteWindow::new(750, 810);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}
