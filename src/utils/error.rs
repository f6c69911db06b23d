//! Error types for the slot scraper
//!
//! This module defines the errors a single scrape attempt can fail with.

use std::time::Duration;
use thiserror::Error;

/// Errors that abort the current scrape attempt
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Page unreachable or not loaded within the timeout
    #[error("Navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    /// Availability controls never appeared on the page
    #[error("Timed out after {}s waiting for selector '{selector}'", .timeout.as_secs())]
    SelectorTimeout { selector: String, timeout: Duration },

    /// Browser could not be launched or driven
    #[error("Browser error: {0}")]
    Browser(String),

    /// Rejected before any browser was launched
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ScrapeError {
    /// Check if another attempt could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Navigation { .. } | Self::SelectorTimeout { .. } | Self::Browser(_) => true,
            Self::InvalidRequest(_) => false,
        }
    }

    pub fn navigation(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Navigation {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn browser(reason: impl std::fmt::Display) -> Self {
        Self::Browser(reason.to_string())
    }
}
