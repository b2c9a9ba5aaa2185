//! Shift type and shift catalogue models.
//!
//! A shift type is a named, fixed-duration work period that occurs at most
//! once per day. The catalogue is the ordered list of shift types offered
//! every day of the week; catalogue order is the processing order within a
//! day.

use serde::{Deserialize, Serialize};

/// A named work period with a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Shift name (e.g., "Opening"). Unique within a catalogue.
    pub name: String,
    /// Display time range (e.g., "6:00 AM - 2:00 PM"). Not interpreted.
    pub time_range: String,
    /// Duration in whole hours. Must be positive.
    pub duration_hours: i32,
}

impl ShiftType {
    /// Creates a shift type with no display time range.
    pub fn new(name: impl Into<String>, duration_hours: i32) -> Self {
        Self {
            name: name.into(),
            time_range: String::new(),
            duration_hours,
        }
    }

    /// Sets the display time range.
    pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = time_range.into();
        self
    }
}

/// Ordered list of shift types offered each day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftCatalogue {
    shifts: Vec<ShiftType>,
}

impl ShiftCatalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference three-shift catalogue: Opening (8h), Midday (6h),
    /// Closing (8h).
    pub fn standard() -> Self {
        Self::new()
            .with_shift(ShiftType::new("Opening", 8).with_time_range("6:00 AM - 2:00 PM"))
            .with_shift(ShiftType::new("Midday", 6).with_time_range("10:00 AM - 4:00 PM"))
            .with_shift(ShiftType::new("Closing", 8).with_time_range("2:00 PM - 10:00 PM"))
    }

    /// Appends a shift type.
    pub fn with_shift(mut self, shift: ShiftType) -> Self {
        self.shifts.push(shift);
        self
    }

    /// Shift types in catalogue order.
    pub fn shifts(&self) -> &[ShiftType] {
        &self.shifts
    }

    /// Iterates shift types in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShiftType> {
        self.shifts.iter()
    }

    /// Finds a shift type by name.
    pub fn get(&self, name: &str) -> Option<&ShiftType> {
        self.shifts.iter().find(|s| s.name == name)
    }

    /// Whether the catalogue contains a shift with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Duration of the named shift, if it exists.
    pub fn duration_of(&self, name: &str) -> Option<i32> {
        self.get(name).map(|s| s.duration_hours)
    }

    /// Number of shift types.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the catalogue has no shift types.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl From<Vec<ShiftType>> for ShiftCatalogue {
    fn from(shifts: Vec<ShiftType>) -> Self {
        Self { shifts }
    }
}

impl<'a> IntoIterator for &'a ShiftCatalogue {
    type Item = &'a ShiftType;
    type IntoIter = std::slice::Iter<'a, ShiftType>;

    fn into_iter(self) -> Self::IntoIter {
        self.shifts.iter()
    }
}
