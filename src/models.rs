// Core data structures for campwatch

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used for dates and weekdays that could not be recovered from a label
pub const UNKNOWN: &str = "Unknown";

/// Default number of available entries copied into a summary
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Error reported when every attempt came back empty without a message
pub const RETRY_EXHAUSTED_MESSAGE: &str = "Timeout: no slots detected after retries.";

/// Availability of a single site/date cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    Available,
    Reserved,
}

impl SlotStatus {
    /// Classify a raw accessibility label
    ///
    /// Any label containing "available" (case-insensitive) counts as available.
    pub fn from_label(label: &str) -> Self {
        if label.to_lowercase().contains("available") {
            Self::Available
        } else {
            Self::Reserved
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Reserved => "Reserved",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar-date cell for one campsite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub site: String,
    pub date: String,    // "Oct 30, 2025" or "Unknown"
    pub weekday: String, // "Thursday" or "Unknown"
    pub status: SlotStatus,
    pub label: String, // raw aria-label, kept for diagnostics
}

/// Result of one scrape attempt or one retry cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeSummary {
    pub url: String,
    pub weekdays: Option<Vec<String>>,
    pub total_entries: usize,
    pub available_slots: usize,
    pub unavailable_slots: usize,
    pub has_available: bool,
    pub available_samples: Vec<SlotEntry>,
    pub success: bool,
    pub attempt: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeSummary {
    /// Build a successful summary from the (already filtered) entries
    pub fn from_entries(
        url: impl Into<String>,
        weekdays: Option<Vec<String>>,
        entries: &[SlotEntry],
        sample_limit: usize,
    ) -> Self {
        let (available, unavailable): (Vec<&SlotEntry>, Vec<&SlotEntry>) =
            entries.iter().partition(|e| e.status.is_available());

        Self {
            url: url.into(),
            weekdays,
            total_entries: entries.len(),
            available_slots: available.len(),
            unavailable_slots: unavailable.len(),
            has_available: !available.is_empty(),
            available_samples: available.into_iter().take(sample_limit).cloned().collect(),
            success: true,
            attempt: 1,
            error: None,
        }
    }

    /// Build a failed summary carrying an error message
    pub fn failure(
        url: impl Into<String>,
        weekdays: Option<Vec<String>>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            weekdays,
            total_entries: 0,
            available_slots: 0,
            unavailable_slots: 0,
            has_available: false,
            available_samples: Vec::new(),
            success: false,
            attempt: 1,
            error: Some(error.into()),
        }
    }

    /// Number of entries the parser produced, available or not
    pub fn parsed_entries(&self) -> usize {
        self.available_slots + self.unavailable_slots
    }

    /// A scrape worth returning: no error and at least one parsed entry
    pub fn is_usable(&self) -> bool {
        self.success && self.parsed_entries() > 0
    }

    /// Mark this summary as the final answer of an exhausted retry cycle
    pub fn into_exhausted(mut self, attempts: u32) -> Self {
        self.success = false;
        self.attempt = attempts;
        if self.error.is_none() {
            self.error = Some(RETRY_EXHAUSTED_MESSAGE.to_string());
        }
        self
    }
}
