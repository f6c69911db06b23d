//! Slot checking with a bounded retry budget
//!
//! A reservation page sometimes renders nothing usable before the timeout. The
//! checker re-runs the whole scrape a fixed number of times, with a fixed pause
//! in between, and settles on the first attempt that parsed any entries.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::crawler::browser::ChromeLoader;
use crate::crawler::page::PageScraper;
use crate::crawler::PageLoader;
use crate::models::ScrapeSummary;
use crate::utils::error::ScrapeError;
use crate::utils::retry::{retry_until, RetryPolicy};

/// Retrying front end to [`PageScraper`]
pub struct SlotChecker {
    scraper: PageScraper,
    policy: RetryPolicy,
}

impl SlotChecker {
    /// Create a checker over any page loader
    pub fn new(loader: Arc<dyn PageLoader>, config: &Config) -> Self {
        Self {
            scraper: PageScraper::with_sample_limit(loader, config.scrape.sample_limit),
            policy: config.retry.policy(),
        }
    }

    /// Create a checker that launches Chrome for every attempt
    pub fn with_chrome(config: &Config) -> Self {
        let loader = ChromeLoader::new(config.browser.clone(), config.scrape.clone());
        Self::new(Arc::new(loader), config)
    }

    /// Default retry policy of this checker
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Check `url` using the configured retry policy
    pub fn check_slots(&self, url: &str, weekdays: Option<&[String]>) -> ScrapeSummary {
        self.check_slots_with(url, weekdays, self.policy)
    }

    /// Check `url`, trying up to `policy.max_attempts` times
    ///
    /// Always returns a summary. Blocks the calling thread for the whole
    /// duration, pauses included.
    pub fn check_slots_with(
        &self,
        url: &str,
        weekdays: Option<&[String]>,
        policy: RetryPolicy,
    ) -> ScrapeSummary {
        if url.trim().is_empty() {
            return rejected(
                url,
                weekdays,
                ScrapeError::InvalidRequest("url must not be empty".into()),
            );
        }

        let outcome = retry_until(
            &policy,
            |attempt| {
                info!(
                    url,
                    attempt,
                    max_attempts = policy.max_attempts,
                    "Checking campground slots"
                );
                let mut summary = self.scraper.scrape(url, weekdays);
                summary.attempt = attempt;
                summary
            },
            ScrapeSummary::is_usable,
        );

        let Some(outcome) = outcome else {
            return rejected(
                url,
                weekdays,
                ScrapeError::InvalidRequest("retries must be at least 1".into()),
            );
        };

        if outcome.accepted {
            info!(
                attempt = outcome.attempt,
                available = outcome.value.available_slots,
                "Slot check succeeded"
            );
            return outcome.value;
        }

        warn!(url, attempts = policy.max_attempts, "No slots detected after retries");
        outcome.value.into_exhausted(policy.max_attempts)
    }
}

/// Failure summary for a request refused before any attempt ran
fn rejected(url: &str, weekdays: Option<&[String]>, error: ScrapeError) -> ScrapeSummary {
    warn!(url, error = %error, "Slot check rejected");
    let mut summary =
        ScrapeSummary::failure(url, weekdays.map(<[String]>::to_vec), error.to_string());
    summary.attempt = 0;
    summary
}

/// Check `url` with a default Chrome-backed checker
///
/// `retries` is the total number of attempts and `delay` the pause between them.
pub fn check_slots(
    url: &str,
    weekdays: Option<&[String]>,
    retries: u32,
    delay: Duration,
) -> ScrapeSummary {
    SlotChecker::with_chrome(&Config::default()).check_slots_with(
        url,
        weekdays,
        RetryPolicy::new(retries, delay),
    )
}
