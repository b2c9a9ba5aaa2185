//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Assigns a roster of employees to a fixed weekly grid of named shifts,
//! respecting availability, capping overtime relative to each employee's
//! hour goal, and never booking one employee twice on the same day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `ShiftType`, `ShiftCatalogue`,
//!   `Employee`, `HourGoal`, `Role`, `AssignmentTable`
//! - **`config`**: `RosterConfig` (overtime buffer, default goal, unbounded sentinel)
//! - **`validation`**: Input integrity checks (duplicate names, unknown shifts, durations)
//! - **`scheduler`**: `ScheduleBuilder` greedy assignment and `HoursReport`
//! - **`error`**: `BuildError`
//!
//! # Example
//!
//! ```
//! use u_roster::models::{scheduled_hours, Day, Employee, HourGoal, ShiftCatalogue};
//! use u_roster::scheduler::ScheduleBuilder;
//!
//! let roster = vec![
//!     Employee::new("Alice", HourGoal::Target(40)).with_availability_on(&Day::ALL, "Opening"),
//! ];
//! let table = ScheduleBuilder::new()
//!     .build(&roster, &ShiftCatalogue::standard(), &Day::week())
//!     .unwrap();
//!
//! // 40h goal + 8h overtime buffer = 6 eight-hour shifts
//! assert_eq!(scheduled_hours(&table, "Alice"), 48);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::RosterConfig;
pub use error::BuildError;
