//! Browser-driven slot scraping
//!
//! This module implements the scrape-and-retry pipeline:
//!
//! - [`browser`] - Chrome session and the production [`PageLoader`]
//! - [`page`] - one scrape attempt, from rendered HTML to a
//!   [`ScrapeSummary`](crate::models::ScrapeSummary)
//! - [`filter`] - weekday filtering
//! - [`checker`] - bounded retries around the page scraper

pub mod browser;
pub mod checker;
pub mod filter;
pub mod page;

use crate::utils::error::ScrapeError;

pub use browser::{BrowserSession, ChromeLoader};
pub use checker::{check_slots, SlotChecker};
pub use filter::{normalize_weekday, WeekdayFilter};
pub use page::PageScraper;

/// Source of rendered reservation-calendar pages
///
/// Implementations return the page HTML once availability controls have
/// rendered, or the error that prevented it. Calls block until done.
pub trait PageLoader: Send + Sync {
    fn load(&self, url: &str) -> Result<String, ScrapeError>;
}
