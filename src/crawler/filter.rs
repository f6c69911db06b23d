//! Weekday filtering of slot entries

use std::collections::HashSet;

use crate::models::SlotEntry;

/// Capitalize the first letter and lowercase the rest ("fRIDAY" -> "Friday")
pub fn normalize_weekday(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Set of requested weekday names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayFilter {
    days: HashSet<String>,
}

impl WeekdayFilter {
    /// Build a filter from raw weekday names
    ///
    /// Returns `None` when nothing usable was requested, meaning "keep everything".
    pub fn new<I, S>(weekdays: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days: HashSet<String> = weekdays
            .into_iter()
            .map(|w| normalize_weekday(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        (!days.is_empty()).then_some(Self { days })
    }

    /// Build a filter from an optional request
    pub fn from_request(weekdays: Option<&[String]>) -> Option<Self> {
        weekdays.and_then(Self::new)
    }

    pub fn matches(&self, entry: &SlotEntry) -> bool {
        self.days.contains(&entry.weekday)
    }

    /// Keep only entries falling on a requested weekday, preserving order
    pub fn apply(&self, mut entries: Vec<SlotEntry>) -> Vec<SlotEntry> {
        entries.retain(|e| self.matches(e));
        entries
    }
}
