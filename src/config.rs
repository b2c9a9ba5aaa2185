//! Build configuration.
//!
//! Fixed constants the builder depends on, all overridable. Deserializes
//! with per-field defaults, so a partial document only overrides the fields
//! it names.

use serde::{Deserialize, Serialize};

use crate::models::HourGoal;

/// Overtime and hour-goal settings for a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Extra hours above an employee's goal still assignable (hours).
    pub overtime_buffer: i32,
    /// Goal applied when an employee specifies none (hours).
    pub default_hour_goal: i32,
    /// Stored goal value meaning "no upper comfort target".
    pub unbounded_goal_sentinel: i32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            overtime_buffer: 8,
            default_hour_goal: 40,
            unbounded_goal_sentinel: 999,
        }
    }
}

impl RosterConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overtime buffer.
    pub fn with_overtime_buffer(mut self, hours: i32) -> Self {
        self.overtime_buffer = hours;
        self
    }

    /// Sets the default hour goal.
    pub fn with_default_hour_goal(mut self, hours: i32) -> Self {
        self.default_hour_goal = hours;
        self
    }

    /// Sets the unbounded-goal sentinel.
    pub fn with_unbounded_goal_sentinel(mut self, value: i32) -> Self {
        self.unbounded_goal_sentinel = value;
        self
    }

    /// Maps a stored goal to an [`HourGoal`].
    ///
    /// `None` becomes the default goal; the sentinel becomes
    /// [`HourGoal::Unbounded`].
    pub fn resolve_goal(&self, stored: Option<i32>) -> HourGoal {
        match stored {
            None => HourGoal::Target(self.default_hour_goal),
            Some(v) if v == self.unbounded_goal_sentinel => HourGoal::Unbounded,
            Some(v) => HourGoal::Target(v),
        }
    }
}
