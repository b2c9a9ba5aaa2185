//! Greedy roster builder and weekly hours report.
//!
//! Provides the single-pass shift assignment algorithm and an export-ready
//! summary of its output.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` fills the week slot by slot (days in order, shift types
//! in catalogue order), choosing among available employees under an
//! overtime cap by distance from hour goal, then by scarcity of their
//! availability. It is not optimal, but it is fully deterministic.
//!
//! # Report
//!
//! `HoursReport` lays the table out as one row per employee with per-day
//! shifts and total hours, plus slot coverage.

mod builder;
mod ledger;
mod priority;
mod report;

pub use builder::{ScheduleBuilder, ScheduleRequest};
pub use priority::{rank_candidates, CandidatePriority};
pub use report::{HoursReport, ReportRow};
