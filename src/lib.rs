//! campwatch - Campground reservation slot watcher
//!
//! Drives a headless browser to a reservation calendar, reads the availability
//! label of every site/date cell, and reports open slots on the requested
//! weekdays.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Browser session, single-attempt scraper and retrying checker
//! - [`parser`] - Calendar HTML extraction and label parsing
//! - [`models`] - Slot entries and scrape summaries
//! - [`server`] - HTTP API around the checker
//! - [`utils`] - Retry loop, errors and text helpers
//!
//! # Example
//!
//! ```no_run
//! use campwatch::config::Config;
//! use campwatch::crawler::SlotChecker;
//!
//! let config = Config::from_env().unwrap();
//! let checker = SlotChecker::with_chrome(&config);
//! let weekdays = vec!["Friday".to_string(), "Saturday".to_string()];
//! let summary = checker.check_slots(
//!     "https://www.recreation.gov/camping/campgrounds/232447",
//!     Some(weekdays.as_slice()),
//! );
//! println!("{} available", summary.available_slots);
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod parser;
pub mod server;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{check_slots, PageLoader, SlotChecker};
    pub use crate::error::{Classify, Error, ErrorCategory, Result};
    pub use crate::models::{ScrapeSummary, SlotEntry, SlotStatus};
    pub use crate::utils::error::ScrapeError;
}

// Direct re-exports for convenience
pub use models::{ScrapeSummary, SlotEntry, SlotStatus};
