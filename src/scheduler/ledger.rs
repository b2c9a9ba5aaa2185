//! Build-local hour ledger.

use std::collections::HashMap;

/// Cumulative hours assigned per employee during one build pass.
///
/// Borrowed from the roster for the lifetime of the build and dropped with
/// it; nothing carries over between builds.
#[derive(Debug, Default)]
pub(crate) struct HourLedger<'a> {
    hours: HashMap<&'a str, i32>,
}

impl<'a> HourLedger<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Hours assigned so far (0 if never assigned).
    pub(crate) fn hours(&self, name: &str) -> i32 {
        self.hours.get(name).copied().unwrap_or(0)
    }

    /// Adds hours, saturating at `i32::MAX`.
    pub(crate) fn record(&mut self, name: &'a str, hours: i32) {
        let total = self.hours.entry(name).or_insert(0);
        *total = total.saturating_add(hours);
    }
}
