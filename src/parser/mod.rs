//! HTML parsing and data extraction
//!
//! This module turns a rendered reservation-calendar page into structured
//! slot entries.

pub mod calendar;
pub mod label;
pub mod selectors;

// Re-export main parser and public types
pub use calendar::{CalendarExtraction, CalendarParser};
pub use label::{extract_date, parse_label, weekday_of};
pub use selectors::AVAILABILITY_BUTTON;
