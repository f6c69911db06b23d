//! CSS selectors for the reservation calendar markup
//!
//! The calendar renders one table row per campsite. Each row carries an `id`
//! attribute, a header cell whose first anchor holds the site name, and one
//! availability button per visible date.

use lazy_static::lazy_static;
use scraper::Selector;

/// Availability buttons, also the element the browser waits for
pub const AVAILABILITY_BUTTON: &str = "button.rec-availability-date";

/// Site rows
pub const SITE_ROW: &str = "tr[id]";

/// Site name anchor inside a row's header cell
pub const SITE_NAME: &str = "th a";

/// Attribute holding the human-readable date and availability phrase
pub const LABEL_ATTR: &str = "aria-label";

// Invalid CSS in the constants above is a programming error
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", stringify!($s)))
    };
}

lazy_static! {
    static ref ROW: Selector = parse_selector!(SITE_ROW);
    static ref NAME: Selector = parse_selector!(SITE_NAME);
    static ref BUTTON: Selector = parse_selector!(AVAILABILITY_BUTTON);
}

/// Selectors for the availability calendar table
pub struct CalendarSelectors {
    pub row: &'static Selector,
    pub site_name: &'static Selector,
    pub button: &'static Selector,
}

impl CalendarSelectors {
    pub fn new() -> Self {
        Self {
            row: &ROW,
            site_name: &NAME,
            button: &BUTTON,
        }
    }
}

impl Default for CalendarSelectors {
    fn default() -> Self {
        Self::new()
    }
}
