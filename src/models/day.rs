//! Day-of-week model.
//!
//! A roster week is a fixed, ordered set of seven day labels. Days do not
//! interact during a build except through cumulative hour totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the roster week.
///
/// Variant order is the canonical week order (Monday first), which is also
/// the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days, Monday through Sunday.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The full week as an owned list, in canonical order.
    pub fn week() -> Vec<Day> {
        Self::ALL.to_vec()
    }

    /// Display label (e.g., "Monday").
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
