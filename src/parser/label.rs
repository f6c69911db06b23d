//! Accessibility label parsing
//!
//! A typical label reads `"Oct 30, 2025 - Site 001 is available"`. The date,
//! weekday and status of a slot are all recovered from that one string.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

use crate::models::{SlotEntry, SlotStatus, UNKNOWN};

/// Date format used by the calendar labels ("Oct 30, 2025")
pub const LABEL_DATE_FORMAT: &str = "%b %d, %Y";

fn date_regex() -> &'static Regex {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    DATE_RE.get_or_init(|| {
        Regex::new(r"([A-Za-z]{3} \d{1,2}, \d{4})").expect("Invalid regex pattern")
    })
}

/// Extract the first "Mon D, YYYY" substring from a label
pub fn extract_date(label: &str) -> Option<&str> {
    date_regex()
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Full English weekday name of a label date, if it is a real calendar date
pub fn weekday_of(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, LABEL_DATE_FORMAT)
        .ok()
        .map(|d| d.format("%A").to_string())
}

/// Build a slot entry from a site name and the raw label of one button
///
/// Malformed dates never fail the entry; they become `"Unknown"`.
pub fn parse_label(site: &str, label: &str) -> SlotEntry {
    let date = extract_date(label);
    let weekday = date.and_then(weekday_of);

    SlotEntry {
        site: site.to_string(),
        date: date.unwrap_or(UNKNOWN).to_string(),
        weekday: weekday.unwrap_or_else(|| UNKNOWN.to_string()),
        status: SlotStatus::from_label(label),
        label: label.to_string(),
    }
}
