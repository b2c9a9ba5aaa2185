//! Input validation for roster builds.
//!
//! Checks structural integrity of the roster, shift catalogue, and day list
//! before any assignment work begins. Detects:
//! - Duplicate employee names, shift names, or days
//! - Empty employee names
//! - Non-positive hour goals
//! - Non-positive shift durations
//! - Availability referencing shift types absent from the catalogue
//!
//! All problems are collected rather than stopping at the first.

use crate::models::{Day, Employee, HourGoal, ShiftCatalogue};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two employees share the same name.
    DuplicateEmployee,
    /// An employee has an empty name.
    EmptyEmployeeName,
    /// Two catalogue entries share the same shift name.
    DuplicateShiftType,
    /// A shift type has a zero or negative duration.
    InvalidDuration,
    /// Availability references a shift type not in the catalogue.
    UnknownShiftType,
    /// The day list names a day more than once.
    DuplicateDay,
    /// An employee's target hour goal is zero or negative.
    InvalidHourGoal,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a roster build.
///
/// Checks:
/// 1. No duplicate shift names in the catalogue
/// 2. All shift durations are positive
/// 3. No duplicate days in the day list
/// 4. No empty or duplicate employee names
/// 5. Every target hour goal is positive
/// 6. Every availability entry names a catalogue shift
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    roster: &[Employee],
    catalogue: &ShiftCatalogue,
    days: &[Day],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut shift_names = HashSet::new();
    for shift in catalogue {
        if !shift_names.insert(shift.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateShiftType,
                format!("Duplicate shift type: {}", shift.name),
            ));
        }
        if shift.duration_hours <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Shift type '{}' has non-positive duration {}",
                    shift.name, shift.duration_hours
                ),
            ));
        }
    }

    let mut seen_days = HashSet::new();
    for day in days {
        if !seen_days.insert(*day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("Duplicate day in day list: {day}"),
            ));
        }
    }

    let mut names = HashSet::new();
    for employee in roster {
        if employee.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyEmployeeName,
                "Employee with empty name",
            ));
        } else if !names.insert(employee.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmployee,
                format!("Duplicate employee name: {}", employee.name),
            ));
        }

        if let HourGoal::Target(goal) = employee.hour_goal {
            if goal <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidHourGoal,
                    format!(
                        "Employee '{}' has non-positive hour goal {}",
                        employee.name, goal
                    ),
                ));
            }
        }

        for (day, shifts) in &employee.availability {
            for shift in shifts {
                if !shift_names.contains(shift.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownShiftType,
                        format!(
                            "Employee '{}' is available for unknown shift type '{}' on {}",
                            employee.name, shift, day
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
