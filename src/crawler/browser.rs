//! Chrome-backed page loader
//!
//! Each load launches its own Chrome process over the DevTools protocol, opens
//! one tab, and tears everything down when the session goes out of scope.
//! Nothing is shared between loads.

use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use tracing::{debug, info, warn, Level};

use crate::config::{BrowserConfig, ScrapeConfig};
use crate::crawler::PageLoader;
use crate::parser::AVAILABILITY_BUTTON;
use crate::utils::error::ScrapeError;
use crate::utils::truncate_text;

/// Characters of rendered HTML echoed to the debug log
const SNAPSHOT_CHARS: usize = 2000;

/// One isolated browser process with a single tab
///
/// Dropping the session closes the tab and terminates the process.
pub struct BrowserSession {
    tab: Arc<Tab>,
    _browser: Browser,
}

impl BrowserSession {
    /// Launch a fresh browser and open a tab
    pub fn launch(config: &BrowserConfig) -> Result<Self, ScrapeError> {
        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(config.sandbox)
            .window_size(Some((config.window_width, config.window_height)))
            .idle_browser_timeout(Duration::from_secs(config.idle_timeout_secs))
            .path(config.chrome_path.clone())
            .build()
            .map_err(ScrapeError::browser)?;

        let browser = Browser::new(options).map_err(ScrapeError::browser)?;
        let tab = browser.new_tab().map_err(ScrapeError::browser)?;

        debug!(headless = config.headless, "Browser session started");

        Ok(Self {
            tab,
            _browser: browser,
        })
    }

    /// Navigate and wait for the page to finish loading
    pub fn navigate(&self, url: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab.set_default_timeout(timeout);
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ScrapeError::navigation(url, e))?;
        Ok(())
    }

    /// Scroll down `iterations` times, pausing after each step
    ///
    /// Runs the full sequence even when nothing new renders.
    pub fn trigger_lazy_load(
        &self,
        iterations: u32,
        step_px: u32,
        pause: Duration,
    ) -> Result<(), ScrapeError> {
        let script = format!("window.scrollBy(0, {step_px})");
        for _ in 0..iterations {
            self.tab
                .evaluate(&script, false)
                .map_err(ScrapeError::browser)?;
            std::thread::sleep(pause);
        }
        Ok(())
    }

    /// Wait until at least one element matches `selector`
    pub fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map(|_| ())
            .map_err(|e| {
                debug!(error = %e, selector, "Selector wait failed");
                ScrapeError::SelectorTimeout {
                    selector: selector.to_string(),
                    timeout,
                }
            })
    }

    /// Rendered HTML of the current document
    pub fn content(&self) -> Result<String, ScrapeError> {
        self.tab.get_content().map_err(ScrapeError::browser)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            warn!(error = %e, "Failed to close tab cleanly");
        }
        debug!("Browser session released");
    }
}

/// Page loader that drives a real Chrome instance
#[derive(Debug, Clone, Default)]
pub struct ChromeLoader {
    browser: BrowserConfig,
    scrape: ScrapeConfig,
}

impl ChromeLoader {
    pub fn new(browser: BrowserConfig, scrape: ScrapeConfig) -> Self {
        Self { browser, scrape }
    }
}

impl PageLoader for ChromeLoader {
    fn load(&self, url: &str) -> Result<String, ScrapeError> {
        let session = BrowserSession::launch(&self.browser)?;
        let timeout = self.scrape.page_timeout();

        info!(url, "Visiting campground page");
        session.navigate(url, timeout)?;

        session.trigger_lazy_load(
            self.scrape.scroll_iterations,
            self.scrape.scroll_step_px,
            self.scrape.scroll_pause(),
        )?;

        if tracing::enabled!(Level::DEBUG) {
            if let Ok(snapshot) = session.content() {
                debug!(
                    snapshot = %truncate_text(&snapshot, SNAPSHOT_CHARS),
                    "Page HTML snapshot"
                );
            }
        }

        session.wait_for_selector(AVAILABILITY_BUTTON, timeout)?;
        session.content()
    }
}
