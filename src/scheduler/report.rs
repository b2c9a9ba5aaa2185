//! Weekly hours report.
//!
//! Tabulates a finished assignment table for export: one row per employee
//! with the shift held each day and total hours, plus slot coverage. The
//! report is format-agnostic; rendering to a spreadsheet or CSV is the
//! caller's concern.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total hours | Sum of durations of slots held by the employee |
//! | Hours over goal | max(0, total - goal); 0 for unbounded goals |
//! | Coverage rate | Filled slots / total slots (1.0 for an empty table) |

use serde::Serialize;

use crate::models::{AssignmentTable, Day, Employee, HourGoal};

/// One employee's week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Employee name.
    pub employee: String,
    /// Shift held on each report day (`None` = off), aligned with
    /// [`HoursReport::days`].
    pub shifts: Vec<Option<String>>,
    /// Total scheduled hours.
    pub total_hours: i32,
    /// The employee's hour goal.
    pub hour_goal: HourGoal,
    /// Hours scheduled beyond the goal.
    pub hours_over_goal: i32,
}

/// Export-ready summary of an assignment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursReport {
    /// Column days, in table order.
    pub days: Vec<Day>,
    /// One row per roster employee, in roster order.
    pub rows: Vec<ReportRow>,
    /// Number of assigned slots.
    pub filled_slots: usize,
    /// Number of unassigned slots.
    pub unfilled_slots: usize,
    /// Fraction of slots assigned (0.0..1.0).
    pub coverage_rate: f64,
}

impl HoursReport {
    /// Builds the report for `roster` from a finished table.
    ///
    /// Employees with no assignments still get a row with zero hours.
    pub fn calculate(table: &AssignmentTable, roster: &[Employee]) -> Self {
        let days: Vec<Day> = table.days.iter().map(|d| d.day).collect();

        let rows = roster
            .iter()
            .map(|employee| {
                let shifts = table
                    .days
                    .iter()
                    .map(|d| {
                        d.slots
                            .iter()
                            .find(|s| s.is_held_by(&employee.name))
                            .map(|s| s.shift.clone())
                    })
                    .collect();
                let total_hours = table.scheduled_hours(&employee.name);
                let hours_over_goal = match employee.hour_goal {
                    HourGoal::Target(goal) => total_hours.saturating_sub(goal).max(0),
                    HourGoal::Unbounded => 0,
                };
                ReportRow {
                    employee: employee.name.clone(),
                    shifts,
                    total_hours,
                    hour_goal: employee.hour_goal,
                    hours_over_goal,
                }
            })
            .collect();

        let total = table.slot_count();
        let filled = table.filled_count();
        let coverage_rate = if total == 0 {
            1.0
        } else {
            filled as f64 / total as f64
        };

        Self {
            days,
            rows,
            filled_slots: filled,
            unfilled_slots: total - filled,
            coverage_rate,
        }
    }

    /// Finds the row for an employee.
    pub fn row(&self, employee: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.employee == employee)
    }

    /// Total hours scheduled across all rows.
    pub fn total_hours(&self) -> i32 {
        self.rows
            .iter()
            .map(|r| r.total_hours)
            .fold(0, i32::saturating_add)
    }
}
