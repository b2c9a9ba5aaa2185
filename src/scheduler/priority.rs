//! Candidate priority for contested shifts.
//!
//! # Ordering
//!
//! | Level | Key | Direction |
//! |-------|-----|-----------|
//! | 1 | Distance from hour goal | Descending |
//! | 2 | Flexibility (available slots per week) | Ascending |
//! | 3 | Roster position | Stable (input order) |
//!
//! Level 3 is not part of [`CandidatePriority`]; it comes from sorting with a
//! stable sort. `Ordering::Less` means "picked earlier".

use std::cmp::Ordering;

/// Sort keys for one candidate at one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePriority {
    /// `|ledger hours - goal|`, 0 for unbounded goals.
    pub distance_from_goal: i32,
    /// Available (day, shift) pairs across the whole week.
    pub flexibility: usize,
}

impl CandidatePriority {
    /// Creates a priority from its two keys.
    pub fn new(distance_from_goal: i32, flexibility: usize) -> Self {
        Self {
            distance_from_goal,
            flexibility,
        }
    }
}

impl Ord for CandidatePriority {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance_from_goal
            .cmp(&self.distance_from_goal)
            .then_with(|| self.flexibility.cmp(&other.flexibility))
    }
}

impl PartialOrd for CandidatePriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable-sorts `(roster index, priority)` pairs, highest priority first.
///
/// Equal priorities keep their incoming (roster) order.
pub fn rank_candidates(candidates: &mut [(usize, CandidatePriority)]) {
    candidates.sort_by(|a, b| a.1.cmp(&b.1));
}
