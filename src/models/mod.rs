//! Rostering domain models.
//!
//! Provides the data types for a weekly shift roster: the days and shift
//! types that make up the grid, the employees being scheduled, and the
//! assignment table produced by a build.
//!
//! # Domain Mappings
//!
//! | u-roster | Retail | Warehouse | Clinic |
//! |----------|--------|-----------|--------|
//! | ShiftType | Opening/Closing | Pick shift | Morning clinic |
//! | Employee | Associate | Picker | Nurse |
//! | AssignmentTable | Weekly rota | Shift board | Duty roster |

mod day;
mod employee;
mod schedule;
mod shift;

pub use day::Day;
pub use employee::{employees_with_role, Employee, HourGoal, Role};
pub use schedule::{scheduled_hours, AssignmentTable, DaySchedule, Slot};
pub use shift::{ShiftCatalogue, ShiftType};
