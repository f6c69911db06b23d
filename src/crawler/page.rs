//! Single-attempt page scraping
//!
//! Loads one calendar page, extracts every slot, applies the weekday filter
//! and summarizes. Failures never escape: they come back as a summary with
//! `success: false`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::crawler::filter::WeekdayFilter;
use crate::crawler::PageLoader;
use crate::error::Classify;
use crate::models::{ScrapeSummary, DEFAULT_SAMPLE_LIMIT};
use crate::parser::CalendarParser;
use crate::utils::error::ScrapeError;

/// Scrapes one reservation calendar page per call
pub struct PageScraper {
    loader: Arc<dyn PageLoader>,
    parser: CalendarParser,
    sample_limit: usize,
}

impl PageScraper {
    pub fn new(loader: Arc<dyn PageLoader>) -> Self {
        Self::with_sample_limit(loader, DEFAULT_SAMPLE_LIMIT)
    }

    pub fn with_sample_limit(loader: Arc<dyn PageLoader>, sample_limit: usize) -> Self {
        Self {
            loader,
            parser: CalendarParser::new(),
            sample_limit,
        }
    }

    /// Scrape `url` once and summarize the slots on requested weekdays
    pub fn scrape(&self, url: &str, weekdays: Option<&[String]>) -> ScrapeSummary {
        match self.try_scrape(url, weekdays) {
            Ok(summary) => summary,
            Err(e) => {
                warn!(
                    url,
                    error = %e,
                    category = ?e.category(),
                    recoverable = e.is_recoverable(),
                    "Scrape attempt failed"
                );
                ScrapeSummary::failure(url, weekdays.map(<[String]>::to_vec), e.to_string())
            }
        }
    }

    fn try_scrape(
        &self,
        url: &str,
        weekdays: Option<&[String]>,
    ) -> Result<ScrapeSummary, ScrapeError> {
        let html = self.loader.load(url)?;
        let extraction = self.parser.parse(&html);

        info!(
            rows = extraction.rows,
            buttons = extraction.buttons,
            "Calendar table located"
        );

        // Filter once, after every row has been collected.
        let entries = match WeekdayFilter::from_request(weekdays) {
            Some(filter) => filter.apply(extraction.entries),
            None => extraction.entries,
        };

        let summary = ScrapeSummary::from_entries(
            url,
            weekdays.map(<[String]>::to_vec),
            &entries,
            self.sample_limit,
        );

        info!(
            total = summary.total_entries,
            available = summary.available_slots,
            "Parsed calendar entries"
        );

        Ok(summary)
    }
}
