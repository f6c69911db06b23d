//! Availability calendar extraction
//!
//! Works on the rendered HTML snapshot taken from the browser once the
//! availability buttons are present.

use scraper::{ElementRef, Html};

use crate::models::SlotEntry;
use crate::parser::label::parse_label;
use crate::parser::selectors::{CalendarSelectors, LABEL_ATTR};

/// Everything pulled out of one calendar snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarExtraction {
    /// Entries in row order, then button order within a row
    pub entries: Vec<SlotEntry>,

    /// Number of site rows seen
    pub rows: usize,

    /// Number of availability buttons on the whole page
    pub buttons: usize,
}

/// Availability calendar parser
pub struct CalendarParser {
    selectors: CalendarSelectors,
}

impl CalendarParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selectors: CalendarSelectors::new(),
        }
    }

    /// Extract every site/date cell from a rendered page
    pub fn parse(&self, html: &str) -> CalendarExtraction {
        let document = Html::parse_document(html);
        let buttons = document.select(self.selectors.button).count();

        let mut rows = 0;
        let mut entries = Vec::new();

        for (index, row) in document.select(self.selectors.row).enumerate() {
            rows += 1;
            let site = self.site_name(&row, index);

            for button in row.select(self.selectors.button) {
                let label = button.value().attr(LABEL_ATTR).unwrap_or_default();
                entries.push(parse_label(&site, label));
            }
        }

        CalendarExtraction {
            entries,
            rows,
            buttons,
        }
    }

    /// Site display name, or `Site-N` for the 1-based row position
    fn site_name(&self, row: &ElementRef<'_>, index: usize) -> String {
        match row.select(self.selectors.site_name).next() {
            Some(anchor) => anchor.text().collect::<String>().trim().to_string(),
            None => format!("Site-{}", index + 1),
        }
    }
}

impl Default for CalendarParser {
    fn default() -> Self {
        Self::new()
    }
}
