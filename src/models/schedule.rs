//! Assignment table (solution) model.
//!
//! The table maps every (day, shift type) slot of the roster week to at most
//! one employee. It is rebuilt from scratch by every build and never patched
//! incrementally.
//!
//! # Invariant
//! Within one day, an employee name appears in at most one slot.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftCatalogue};

/// One (day, shift type) cell of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Shift type name.
    pub shift: String,
    /// Shift duration (hours), copied from the catalogue at build time.
    pub duration_hours: i32,
    /// Assigned employee name; `None` when the slot is unassigned.
    pub employee: Option<String>,
}

impl Slot {
    /// Whether an employee is assigned.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.employee.is_some()
    }

    /// Whether the slot is held by `name`.
    #[inline]
    pub fn is_held_by(&self, name: &str) -> bool {
        self.employee.as_deref() == Some(name)
    }
}

/// All slots of one day, in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The day.
    pub day: Day,
    /// Slots in catalogue order.
    pub slots: Vec<Slot>,
}

impl DaySchedule {
    /// Creates a day with every catalogue shift unassigned.
    pub fn unassigned(day: Day, catalogue: &ShiftCatalogue) -> Self {
        Self {
            day,
            slots: catalogue
                .iter()
                .map(|s| Slot {
                    shift: s.name.clone(),
                    duration_hours: s.duration_hours,
                    employee: None,
                })
                .collect(),
        }
    }

    /// Whether `name` already holds a slot on this day.
    pub fn is_booked(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.is_held_by(name))
    }

    /// Finds the slot for a shift name.
    pub fn slot(&self, shift: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.shift == shift)
    }
}

/// Day × shift-type assignment table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTable {
    /// Days in processing order.
    pub days: Vec<DaySchedule>,
}

impl AssignmentTable {
    /// Creates a table with every (day, shift) slot unassigned.
    pub fn unassigned(catalogue: &ShiftCatalogue, days: &[Day]) -> Self {
        Self {
            days: days
                .iter()
                .map(|&d| DaySchedule::unassigned(d, catalogue))
                .collect(),
        }
    }

    /// The schedule for a day, if the day is part of the table.
    pub fn day(&self, day: Day) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Employee assigned to (day, shift), if any.
    pub fn employee_at(&self, day: Day, shift: &str) -> Option<&str> {
        self.day(day)?.slot(shift)?.employee.as_deref()
    }

    /// All (day, slot) pairs held by `name`, in table order.
    pub fn assignments_for_employee(&self, name: &str) -> Vec<(Day, &Slot)> {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter().map(move |s| (d.day, s)))
            .filter(|(_, s)| s.is_held_by(name))
            .collect()
    }

    /// All unassigned (day, shift name) pairs, in table order.
    pub fn unassigned_slots(&self) -> Vec<(Day, &str)> {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter().map(move |s| (d.day, s)))
            .filter(|(_, s)| !s.is_filled())
            .map(|(day, s)| (day, s.shift.as_str()))
            .collect()
    }

    /// Total number of slots.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.len()).sum()
    }

    /// Number of assigned slots.
    pub fn filled_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .filter(|s| s.is_filled())
            .count()
    }

    /// Sum of shift durations over every slot held by `name`, saturating at
    /// `i32::MAX`.
    pub fn scheduled_hours(&self, name: &str) -> i32 {
        self.days
            .iter()
            .flat_map(|d| d.slots.iter())
            .filter(|s| s.is_held_by(name))
            .map(|s| s.duration_hours)
            .fold(0, i32::saturating_add)
    }
}

/// Scheduled hours for `employee_name` in a finalized table.
///
/// Equal to the builder's internal ledger total for the same build.
pub fn scheduled_hours(table: &AssignmentTable, employee_name: &str) -> i32 {
    table.scheduled_hours(employee_name)
}
