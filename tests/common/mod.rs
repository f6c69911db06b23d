//! Common test utilities

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use campwatch::crawler::PageLoader;
use campwatch::utils::error::ScrapeError;

/// Test fixture paths
pub const FIXTURES_DIR: &str = "tests/fixtures/html";

pub fn load_fixture(filename: &str) -> String {
    let path = format!("{FIXTURES_DIR}/{filename}");
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Build a minimal calendar page: one row per `(site, labels)` pair
pub fn calendar_page(rows: &[(&str, &[&str])]) -> String {
    let mut html = String::from("<html><body><table><tbody>");
    for (i, (site, labels)) in rows.iter().enumerate() {
        html.push_str(&format!(r##"<tr id="row-{i}"><th><a href="#">{site}</a></th>"##));
        for label in labels.iter() {
            html.push_str(&format!(
                r#"<td><button class="rec-availability-date" aria-label="{label}">x</button></td>"#
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

/// Page with `count` available Friday slots on a single site
pub fn page_with_slots(count: usize) -> String {
    let labels: Vec<String> = (0..count)
        .map(|_| "Oct 31, 2025 - Site 001 is available".to_string())
        .collect();
    let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
    calendar_page(&[("001", labels.as_slice())])
}

/// One scripted response of a [`ScriptedLoader`]
pub enum Step {
    Page(String),
    NavigationFailure(&'static str),
    SelectorTimeout,
}

/// Page loader that replays a fixed script, one step per call
///
/// Once the script runs out, every further call fails with a browser error.
pub struct ScriptedLoader {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicU32,
}

impl ScriptedLoader {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageLoader for ScriptedLoader {
    fn load(&self, url: &str) -> Result<String, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().unwrap().pop_front();

        match step {
            Some(Step::Page(html)) => Ok(html),
            Some(Step::NavigationFailure(reason)) => Err(ScrapeError::navigation(url, reason)),
            Some(Step::SelectorTimeout) => Err(ScrapeError::SelectorTimeout {
                selector: "button.rec-availability-date".to_string(),
                timeout: Duration::from_secs(90),
            }),
            None => Err(ScrapeError::browser("script exhausted")),
        }
    }
}

/// Page loader that always serves the same HTML
pub struct StaticLoader(pub String);

impl PageLoader for StaticLoader {
    fn load(&self, _url: &str) -> Result<String, ScrapeError> {
        Ok(self.0.clone())
    }
}
