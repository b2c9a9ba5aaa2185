//! Greedy weekly roster builder.
//!
//! # Algorithm
//!
//! 1. Validate the roster, catalogue, and day list.
//! 2. Walk days in the given order and, within a day, shift types in
//!    catalogue order.
//! 3. For each slot, keep employees available for it whose hours after the
//!    shift stay within `goal + overtime_buffer`.
//! 4. Rank them by [`CandidatePriority`] (farthest from goal first, least
//!    flexible next, roster order last).
//! 5. Assign the first ranked employee not already working that day and
//!    add the shift's hours to their ledger.
//!
//! Single pass, no backtracking. A slot left empty is never revisited.
//!
//! # Complexity
//! O(d * s * e log e) where d=days, s=shift types, e=employees.

use log::{debug, trace};

use super::ledger::HourLedger;
use super::priority::{rank_candidates, CandidatePriority};
use crate::config::RosterConfig;
use crate::error::BuildError;
use crate::models::{AssignmentTable, Day, DaySchedule, Employee, ShiftCatalogue, ShiftType};
use crate::validation::validate_input;

/// Input container for a roster build.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Employees to schedule, in priority tie-break order.
    pub roster: Vec<Employee>,
    /// Shift types offered each day.
    pub catalogue: ShiftCatalogue,
    /// Days to schedule, in processing order.
    pub days: Vec<Day>,
}

impl ScheduleRequest {
    /// Creates a request for the standard catalogue over the full week.
    pub fn new(roster: Vec<Employee>) -> Self {
        Self {
            roster,
            catalogue: ShiftCatalogue::standard(),
            days: Day::week(),
        }
    }

    /// Sets the shift catalogue.
    pub fn with_catalogue(mut self, catalogue: ShiftCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Sets the day list.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }
}

/// Greedy roster builder.
///
/// Stateless between builds; one builder may be shared across threads.
///
/// # Example
///
/// ```
/// use u_roster::models::{Day, Employee, HourGoal, ShiftCatalogue};
/// use u_roster::scheduler::ScheduleBuilder;
///
/// let roster = vec![
///     Employee::new("Alice", HourGoal::Target(8))
///         .with_availability(Day::Monday, "Opening")
///         .with_availability(Day::Monday, "Closing"),
///     Employee::new("Bob", HourGoal::Target(8)).with_availability(Day::Monday, "Opening"),
/// ];
///
/// let table = ScheduleBuilder::new()
///     .build(&roster, &ShiftCatalogue::standard(), &[Day::Monday])
///     .unwrap();
/// assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Bob"));
/// assert_eq!(table.employee_at(Day::Monday, "Closing"), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    config: RosterConfig,
}

impl ScheduleBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Builds the assignment table for a week.
    ///
    /// # Errors
    /// [`BuildError::InvalidInput`] if validation fails. No assignment work
    /// is done in that case. Rejected input:
    /// - duplicate or empty employee names
    /// - non-positive hour goals
    /// - availability naming a shift type absent from the catalogue
    /// - duplicate shift type names or non-positive durations
    /// - duplicate days in `days`
    pub fn build(
        &self,
        roster: &[Employee],
        catalogue: &ShiftCatalogue,
        days: &[Day],
    ) -> Result<AssignmentTable, BuildError> {
        validate_input(roster, catalogue, days)?;
        let (table, _) = self.assign(roster, catalogue, days);
        Ok(table)
    }

    /// Builds from a request.
    pub fn build_request(&self, request: &ScheduleRequest) -> Result<AssignmentTable, BuildError> {
        self.build(&request.roster, &request.catalogue, &request.days)
    }

    /// Runs the assignment pass on validated input.
    fn assign<'a>(
        &self,
        roster: &'a [Employee],
        catalogue: &ShiftCatalogue,
        days: &[Day],
    ) -> (AssignmentTable, HourLedger<'a>) {
        let flexibility: Vec<usize> = roster.iter().map(Employee::flexibility).collect();
        let mut ledger = HourLedger::new();
        let mut table = AssignmentTable {
            days: Vec::with_capacity(days.len()),
        };

        for &day in days {
            let mut schedule = DaySchedule::unassigned(day, catalogue);

            for (slot_idx, shift) in catalogue.iter().enumerate() {
                let Some(idx) = self.select(roster, &flexibility, &ledger, &schedule, shift)
                else {
                    continue;
                };

                let employee = &roster[idx];
                schedule.slots[slot_idx].employee = Some(employee.name.clone());
                ledger.record(&employee.name, shift.duration_hours);
                debug!(
                    "{day} {}: assigned {} ({}h total)",
                    shift.name,
                    employee.name,
                    ledger.hours(&employee.name)
                );
            }

            table.days.push(schedule);
        }

        debug!(
            "roster built: {}/{} slots filled for {} employees",
            table.filled_count(),
            table.slot_count(),
            roster.len()
        );

        (table, ledger)
    }

    /// Picks the roster index for one slot, or `None` to leave it empty.
    fn select(
        &self,
        roster: &[Employee],
        flexibility: &[usize],
        ledger: &HourLedger<'_>,
        schedule: &DaySchedule,
        shift: &ShiftType,
    ) -> Option<usize> {
        let day = schedule.day;
        let eligible: Vec<usize> = roster
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_available(day, &shift.name))
            .map(|(i, _)| i)
            .collect();

        if eligible.is_empty() {
            trace!("{day} {}: no available employees", shift.name);
            return None;
        }

        let mut candidates: Vec<(usize, CandidatePriority)> = eligible
            .into_iter()
            .filter_map(|i| {
                let employee = &roster[i];
                let current = ledger.hours(&employee.name);
                let projected = current.saturating_add(shift.duration_hours);
                if !employee
                    .hour_goal
                    .admits(projected, self.config.overtime_buffer)
                {
                    trace!(
                        "{day} {}: {} over cap at {projected}h",
                        shift.name,
                        employee.name
                    );
                    return None;
                }
                let priority =
                    CandidatePriority::new(employee.hour_goal.distance_from(current), flexibility[i]);
                Some((i, priority))
            })
            .collect();

        if candidates.is_empty() {
            trace!("{day} {}: every available employee is over cap", shift.name);
            return None;
        }

        rank_candidates(&mut candidates);

        let pick = candidates
            .iter()
            .map(|&(i, _)| i)
            .find(|&i| !schedule.is_booked(&roster[i].name));

        if pick.is_none() {
            trace!(
                "{day} {}: every candidate already works this day",
                shift.name
            );
        }
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{scheduled_hours, HourGoal};
    use crate::validation::ValidationErrorKind;

    const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_roster() -> Vec<Employee> {
        vec![
            Employee::new("Alice", HourGoal::Target(40))
                .with_availability_on(&Day::ALL, "Opening")
                .with_availability_on(&WEEKDAYS, "Closing"),
            Employee::new("Bob", HourGoal::Target(24))
                .with_availability_on(&WEEKDAYS, "Opening")
                .with_availability_on(&WEEKDAYS, "Midday"),
            Employee::new("Carol", HourGoal::Target(16))
                .with_availability_on(&[Day::Saturday, Day::Sunday], "Opening")
                .with_availability_on(&[Day::Saturday, Day::Sunday], "Closing"),
            Employee::new("Dana", HourGoal::Unbounded)
                .with_availability_on(&Day::ALL, "Closing")
                .with_availability_on(&Day::ALL, "Midday"),
            Employee::new("Eli", HourGoal::Target(8))
                .with_availability_on(&Day::ALL, "Opening")
                .with_availability_on(&Day::ALL, "Midday")
                .with_availability_on(&Day::ALL, "Closing"),
        ]
    }

    fn assert_table_invariants(table: &AssignmentTable, roster: &[Employee], config: &RosterConfig) {
        for day in &table.days {
            let mut seen = std::collections::HashSet::new();
            for slot in &day.slots {
                if let Some(name) = &slot.employee {
                    assert!(seen.insert(name.clone()), "{name} double-booked on {}", day.day);
                    let employee = roster.iter().find(|e| &e.name == name).unwrap();
                    assert!(employee.is_available(day.day, &slot.shift));
                }
            }
        }
        for employee in roster {
            if let Some(goal) = employee.hour_goal.hours() {
                assert!(scheduled_hours(table, &employee.name) <= goal + config.overtime_buffer);
            }
        }
    }

    #[test]
    fn test_two_employee_tie_break() {
        init_logging();
        let roster = vec![
            Employee::new("Alice", HourGoal::Target(8))
                .with_availability(Day::Monday, "Opening")
                .with_availability(Day::Monday, "Closing"),
            Employee::new("Bob", HourGoal::Target(8)).with_availability(Day::Monday, "Opening"),
        ];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &[Day::Monday])
            .unwrap();

        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Bob"));
        assert_eq!(table.employee_at(Day::Monday, "Midday"), None);
        assert_eq!(table.employee_at(Day::Monday, "Closing"), Some("Alice"));
        assert_eq!(scheduled_hours(&table, "Alice"), 8);
        assert_eq!(scheduled_hours(&table, "Bob"), 8);
    }

    #[test]
    fn test_same_day_exclusivity() {
        let roster = vec![Employee::new("Alice", HourGoal::Target(40))
            .with_availability(Day::Monday, "Opening")
            .with_availability(Day::Monday, "Closing")];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();

        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Alice"));
        assert_eq!(table.employee_at(Day::Monday, "Closing"), None);
        assert_eq!(scheduled_hours(&table, "Alice"), 8);
    }

    #[test]
    fn test_unbounded_goal_never_capped() {
        let full_week = |name: &str, goal| {
            Employee::new(name, goal).with_availability_on(&Day::ALL, "Opening")
        };
        let catalogue = ShiftCatalogue::new().with_shift(ShiftType::new("Opening", 8));
        let builder = ScheduleBuilder::new();

        let capped = builder
            .build(&[full_week("Capped", HourGoal::Target(8))], &catalogue, &Day::week())
            .unwrap();
        assert_eq!(scheduled_hours(&capped, "Capped"), 16);

        let free = builder
            .build(&[full_week("Free", HourGoal::Unbounded)], &catalogue, &Day::week())
            .unwrap();
        assert_eq!(scheduled_hours(&free, "Free"), 56);
        assert_eq!(free.filled_count(), 7);
    }

    #[test]
    fn test_farther_from_goal_wins() {
        let roster = vec![
            Employee::new("Short", HourGoal::Target(8))
                .with_availability_on(&[Day::Monday, Day::Tuesday], "Opening"),
            Employee::new("Long", HourGoal::Target(40))
                .with_availability_on(&[Day::Monday, Day::Tuesday], "Opening"),
        ];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();

        // Long stays farther from goal (40, then 32) than Short (8).
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Long"));
        assert_eq!(table.employee_at(Day::Tuesday, "Opening"), Some("Long"));
        assert_eq!(scheduled_hours(&table, "Short"), 0);
    }

    #[test]
    fn test_over_goal_counts_as_distance() {
        // By Tuesday, Over sits 8h past its goal and Under 4h short of it.
        let catalogue = ShiftCatalogue::new()
            .with_shift(ShiftType::new("Double", 16))
            .with_shift(ShiftType::new("Short", 4));
        let roster = vec![
            Employee::new("Over", HourGoal::Target(8))
                .with_availability(Day::Monday, "Double")
                .with_availability(Day::Tuesday, "Short"),
            Employee::new("Under", HourGoal::Target(4)).with_availability(Day::Tuesday, "Short"),
        ];
        let config = RosterConfig::new().with_overtime_buffer(16);
        let table = ScheduleBuilder::new()
            .with_config(config.clone())
            .build(&roster, &catalogue, &[Day::Monday, Day::Tuesday])
            .unwrap();

        assert_eq!(table.employee_at(Day::Monday, "Double"), Some("Over"));
        assert_eq!(table.employee_at(Day::Tuesday, "Short"), Some("Over"));
        assert_eq!(scheduled_hours(&table, "Over"), 20);

        // With the default buffer Over is capped out and Under takes the slot.
        let table = ScheduleBuilder::new()
            .build(&roster, &catalogue, &[Day::Monday, Day::Tuesday])
            .unwrap();
        assert_eq!(table.employee_at(Day::Tuesday, "Short"), Some("Under"));
        assert_table_invariants(&table, &roster, &RosterConfig::default());
        assert_table_invariants(&table, &roster, &config);
    }

    #[test]
    fn test_roster_order_breaks_full_ties() {
        let roster = vec![
            Employee::new("First", HourGoal::Target(40)).with_availability(Day::Monday, "Opening"),
            Employee::new("Second", HourGoal::Target(40)).with_availability(Day::Monday, "Opening"),
        ];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &[Day::Monday])
            .unwrap();
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("First"));

        let reversed: Vec<Employee> = roster.into_iter().rev().collect();
        let table = ScheduleBuilder::new()
            .build(&reversed, &ShiftCatalogue::standard(), &[Day::Monday])
            .unwrap();
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Second"));
    }

    #[test]
    fn test_all_candidates_booked_leaves_slot_empty() {
        let roster = vec![
            Employee::new("Rigid", HourGoal::Target(40))
                .with_availability(Day::Monday, "Opening")
                .with_availability(Day::Monday, "Closing"),
            Employee::new("Loose", HourGoal::Target(40))
                .with_availability(Day::Monday, "Closing")
                .with_availability_on(&WEEKDAYS, "Midday"),
        ];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &[Day::Monday])
            .unwrap();
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Rigid"));
        assert_eq!(table.employee_at(Day::Monday, "Midday"), Some("Loose"));
        // Loose already works Midday, Rigid already works Opening.
        assert_eq!(table.employee_at(Day::Monday, "Closing"), None);
    }

    #[test]
    fn test_booked_top_candidate_falls_through() {
        // After Opening both sit 40h from goal; Rigid is less flexible so it
        // ranks first for Closing, but already works Monday.
        let roster = vec![
            Employee::new("Rigid", HourGoal::Target(48))
                .with_availability(Day::Monday, "Opening")
                .with_availability(Day::Monday, "Closing"),
            Employee::new("Loose", HourGoal::Target(40))
                .with_availability_on(&[Day::Monday, Day::Tuesday, Day::Wednesday], "Closing"),
        ];
        let table = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &[Day::Monday])
            .unwrap();
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Rigid"));
        assert_eq!(table.employee_at(Day::Monday, "Closing"), Some("Loose"));
        assert_eq!(scheduled_hours(&table, "Rigid"), 8);
        assert_eq!(scheduled_hours(&table, "Loose"), 8);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let half = i32::MAX / 2 + 1;
        let catalogue = ShiftCatalogue::new().with_shift(ShiftType::new("Marathon", half));
        let roster = vec![Employee::new("Tireless", HourGoal::Unbounded)
            .with_availability_on(&[Day::Monday, Day::Tuesday], "Marathon")];
        let builder = ScheduleBuilder::new();

        let table = builder
            .build(&roster, &catalogue, &[Day::Monday, Day::Tuesday])
            .unwrap();
        assert_eq!(table.filled_count(), 2);
        assert_eq!(scheduled_hours(&table, "Tireless"), i32::MAX);

        let (table, ledger) = builder.assign(&roster, &catalogue, &[Day::Monday, Day::Tuesday]);
        assert_eq!(ledger.hours("Tireless"), scheduled_hours(&table, "Tireless"));
    }

    #[test]
    fn test_custom_overtime_buffer() {
        let roster = vec![Employee::new("Alice", HourGoal::Target(8))
            .with_availability_on(&[Day::Monday, Day::Tuesday], "Opening")];
        let builder = ScheduleBuilder::new().with_config(RosterConfig::new().with_overtime_buffer(0));
        let table = builder
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();
        assert_eq!(table.employee_at(Day::Monday, "Opening"), Some("Alice"));
        assert_eq!(table.employee_at(Day::Tuesday, "Opening"), None);
        assert_eq!(builder.config().overtime_buffer, 0);
    }

    #[test]
    fn test_day_order_is_processing_order() {
        let roster = vec![Employee::new("Alice", HourGoal::Target(8))
            .with_availability_on(&[Day::Monday, Day::Tuesday], "Opening")];
        let builder = ScheduleBuilder::new().with_config(RosterConfig::new().with_overtime_buffer(0));
        let table = builder
            .build(&roster, &ShiftCatalogue::standard(), &[Day::Tuesday, Day::Monday])
            .unwrap();
        assert_eq!(table.days[0].day, Day::Tuesday);
        assert_eq!(table.employee_at(Day::Tuesday, "Opening"), Some("Alice"));
        assert_eq!(table.employee_at(Day::Monday, "Opening"), None);
    }

    #[test]
    fn test_empty_roster() {
        let table = ScheduleBuilder::new()
            .build(&[], &ShiftCatalogue::standard(), &Day::week())
            .unwrap();
        assert_eq!(table.days.len(), 7);
        assert_eq!(table.slot_count(), 21);
        assert_eq!(table.filled_count(), 0);
    }

    #[test]
    fn test_invariants_hold() {
        init_logging();
        let roster = sample_roster();
        let builder = ScheduleBuilder::new();
        let table = builder
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();
        assert_table_invariants(&table, &roster, builder.config());
        assert!(table.filled_count() > 0);
    }

    #[test]
    fn test_ledger_matches_table() {
        let roster = sample_roster();
        let catalogue = ShiftCatalogue::standard();
        let builder = ScheduleBuilder::new();
        validate_input(&roster, &catalogue, &Day::week()).unwrap();

        let (table, ledger) = builder.assign(&roster, &catalogue, &Day::week());
        for employee in &roster {
            assert_eq!(
                ledger.hours(&employee.name),
                scheduled_hours(&table, &employee.name),
                "ledger mismatch for {}",
                employee.name
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let roster = sample_roster();
        let builder = ScheduleBuilder::new();
        let a = builder
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();
        let b = builder
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_invalid_input_rejected() {
        let roster = vec![
            Employee::new("Alice", HourGoal::Target(40)),
            Employee::new("Alice", HourGoal::Target(40)).with_availability(Day::Monday, "Brunch"),
        ];
        let err = ScheduleBuilder::new()
            .build(&roster, &ShiftCatalogue::standard(), &Day::week())
            .unwrap_err();

        let kinds: Vec<&ValidationErrorKind> =
            err.validation_errors().iter().map(|e| &e.kind).collect();
        assert!(kinds.contains(&&ValidationErrorKind::DuplicateEmployee));
        assert!(kinds.contains(&&ValidationErrorKind::UnknownShiftType));
        assert!(err.to_string().starts_with("invalid roster input: "));
    }

    #[test]
    fn test_schedule_request() {
        let request = ScheduleRequest::new(vec![
            Employee::new("Alice", HourGoal::Target(40)).with_availability(Day::Sunday, "Late")
        ])
        .with_catalogue(ShiftCatalogue::new().with_shift(ShiftType::new("Late", 5)))
        .with_days(vec![Day::Saturday, Day::Sunday]);

        let table = ScheduleBuilder::new().build_request(&request).unwrap();
        assert_eq!(table.slot_count(), 2);
        assert_eq!(table.employee_at(Day::Sunday, "Late"), Some("Alice"));
        assert_eq!(scheduled_hours(&table, "Alice"), 5);
    }

    #[test]
    fn test_concurrent_builds() {
        let builder = std::sync::Arc::new(ScheduleBuilder::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let builder = builder.clone();
                std::thread::spawn(move || {
                    builder
                        .build(&sample_roster(), &ShiftCatalogue::standard(), &Day::week())
                        .unwrap()
                })
            })
            .collect();
        let tables: Vec<AssignmentTable> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(tables.windows(2).all(|w| w[0] == w[1]));
    }
}
