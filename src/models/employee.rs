//! Employee model.
//!
//! Employees are identified by name. Each carries a weekly availability map
//! (day → shift names they are willing to work), display-only role flags,
//! and an hour goal.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::Day;

/// Display-only role flag. Roles never influence assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Insider,
    Driver,
}

/// Weekly hour target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourGoal {
    /// Target weekly hours.
    Target(i32),
    /// No upper comfort target; never capped by the overtime filter.
    Unbounded,
}

impl HourGoal {
    /// Target hours, or `None` if unbounded.
    pub fn hours(&self) -> Option<i32> {
        match self {
            HourGoal::Target(h) => Some(*h),
            HourGoal::Unbounded => None,
        }
    }

    /// Whether the goal is unbounded.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, HourGoal::Unbounded)
    }

    /// Absolute distance between scheduled hours and the target.
    ///
    /// Always 0 for an unbounded goal.
    pub fn distance_from(&self, scheduled_hours: i32) -> i32 {
        match self {
            HourGoal::Target(goal) => scheduled_hours.saturating_sub(*goal).saturating_abs(),
            HourGoal::Unbounded => 0,
        }
    }

    /// Whether `projected_hours` stays within `goal + overtime_buffer`.
    pub fn admits(&self, projected_hours: i32, overtime_buffer: i32) -> bool {
        match self {
            HourGoal::Target(goal) => projected_hours <= goal.saturating_add(overtime_buffer),
            HourGoal::Unbounded => true,
        }
    }
}

/// A rosterable employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name (identity key, case-sensitive).
    pub name: String,
    /// Day → names of shift types the employee will work that day.
    pub availability: BTreeMap<Day, BTreeSet<String>>,
    /// Display grouping flags.
    pub roles: BTreeSet<Role>,
    /// Weekly hour goal.
    pub hour_goal: HourGoal,
}

impl Employee {
    /// Creates an employee with no availability, no roles, and the given goal.
    pub fn new(name: impl Into<String>, hour_goal: HourGoal) -> Self {
        Self {
            name: name.into(),
            availability: BTreeMap::new(),
            roles: BTreeSet::new(),
            hour_goal,
        }
    }

    /// Marks the employee available for a shift on a day.
    pub fn with_availability(mut self, day: Day, shift: impl Into<String>) -> Self {
        self.availability.entry(day).or_default().insert(shift.into());
        self
    }

    /// Marks the employee available for a shift on every given day.
    pub fn with_availability_on(mut self, days: &[Day], shift: &str) -> Self {
        for &day in days {
            self.availability
                .entry(day)
                .or_default()
                .insert(shift.to_string());
        }
        self
    }

    /// Adds a role flag.
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    /// Whether the employee is available for `shift` on `day`.
    pub fn is_available(&self, day: Day, shift: &str) -> bool {
        self.availability
            .get(&day)
            .is_some_and(|shifts| shifts.contains(shift))
    }

    /// Number of (day, shift) pairs marked available across the whole week.
    ///
    /// Static for a given availability map; fewer means fewer chances to be
    /// scheduled.
    pub fn flexibility(&self) -> usize {
        self.availability.values().map(BTreeSet::len).sum()
    }

    /// Whether the employee carries the role flag.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Employees carrying `role`, in roster order.
pub fn employees_with_role(roster: &[Employee], role: Role) -> Vec<&Employee> {
    roster.iter().filter(|e| e.has_role(role)).collect()
}
