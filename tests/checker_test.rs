//! Integration tests for the retrying slot checker

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use campwatch::config::Config;
use campwatch::crawler::{PageScraper, SlotChecker};
use campwatch::models::RETRY_EXHAUSTED_MESSAGE;
use campwatch::utils::retry::RetryPolicy;
use common::{load_fixture, page_with_slots, ScriptedLoader, StaticLoader, Step};

const URL: &str = "https://www.recreation.gov/camping/campgrounds/232447";

fn weekdays(days: &[&str]) -> Vec<String> {
    days.iter().map(|d| d.to_string()).collect()
}

fn checker(loader: Arc<ScriptedLoader>) -> SlotChecker {
    SlotChecker::new(loader, &Config::default())
}

#[test]
fn test_succeeds_on_third_attempt() {
    let loader = Arc::new(ScriptedLoader::new(vec![
        Step::NavigationFailure("net::ERR_TIMED_OUT"),
        Step::SelectorTimeout,
        Step::Page(load_fixture("calendar.html")),
    ]));
    let summary = checker(loader.clone()).check_slots_with(
        URL,
        None,
        RetryPolicy::new(3, Duration::ZERO),
    );

    assert!(summary.success);
    assert_eq!(summary.attempt, 3);
    assert_eq!(summary.total_entries, 10);
    assert_eq!(summary.available_slots, 5);
    assert!(summary.error.is_none());
    assert_eq!(loader.calls(), 3);
}

#[test]
fn test_empty_pages_exhaust_retries() {
    let loader = Arc::new(ScriptedLoader::new(vec![
        Step::Page(page_with_slots(0)),
        Step::Page(page_with_slots(0)),
        Step::Page(page_with_slots(0)),
    ]));
    let summary = checker(loader.clone()).check_slots_with(
        URL,
        None,
        RetryPolicy::new(2, Duration::ZERO),
    );

    assert!(!summary.success);
    assert_eq!(summary.attempt, 2);
    assert_eq!(summary.total_entries, 0);
    assert_eq!(summary.error.as_deref(), Some(RETRY_EXHAUSTED_MESSAGE));
    assert_eq!(loader.calls(), 2);
}

#[test]
fn test_filtered_out_entries_count_as_unusable() {
    // Every parsed entry is on a Friday, so a Monday filter leaves nothing
    let loader = Arc::new(ScriptedLoader::new(vec![
        Step::Page(page_with_slots(3)),
        Step::Page(page_with_slots(3)),
    ]));
    let monday = weekdays(&["Monday"]);
    let summary = checker(loader.clone()).check_slots_with(
        URL,
        Some(monday.as_slice()),
        RetryPolicy::new(2, Duration::ZERO),
    );

    assert!(!summary.success);
    assert_eq!(summary.attempt, 2);
    assert_eq!(summary.total_entries, 0);
    assert!(!summary.has_available);
    assert_eq!(summary.error.as_deref(), Some(RETRY_EXHAUSTED_MESSAGE));
    assert_eq!(loader.calls(), 2);
}

#[test]
fn test_weekday_filter_on_fixture() {
    let loader = Arc::new(ScriptedLoader::new(vec![Step::Page(load_fixture("calendar.html"))]));
    let days = weekdays(&["friday", " Saturday "]);
    let summary = checker(loader).check_slots(URL, Some(days.as_slice()));

    assert!(summary.success);
    assert_eq!(summary.total_entries, 6);
    assert_eq!(summary.available_slots, 4);
    assert_eq!(summary.unavailable_slots, 2);
    assert_eq!(summary.weekdays, Some(days));

    let samples: Vec<(&str, &str)> = summary
        .available_samples
        .iter()
        .map(|e| (e.site.as_str(), e.date.as_str()))
        .collect();
    assert_eq!(
        samples,
        vec![
            ("001", "Nov 1, 2025"),
            ("002", "Oct 31, 2025"),
            ("002", "Nov 1, 2025"),
            ("Site-3", "Oct 31, 2025"),
        ]
    );
}

#[test]
fn test_samples_capped() {
    let scraper = PageScraper::new(Arc::new(StaticLoader(page_with_slots(12))));
    let summary = scraper.scrape(URL, None);

    assert_eq!(summary.available_slots, 12);
    assert_eq!(summary.available_samples.len(), 5);
    assert!(summary.has_available);
}

#[test]
fn test_custom_sample_limit() {
    let mut config = Config::default();
    config.scrape.sample_limit = 2;
    let loader = Arc::new(StaticLoader(page_with_slots(4)));
    let summary = SlotChecker::new(loader, &config).check_slots(URL, None);

    assert_eq!(summary.available_samples.len(), 2);
    assert_eq!(summary.available_slots, 4);
}

#[test]
fn test_zero_retries_rejected() {
    let loader = Arc::new(ScriptedLoader::new(vec![Step::Page(page_with_slots(1))]));
    let summary = checker(loader.clone()).check_slots_with(
        URL,
        None,
        RetryPolicy::new(0, Duration::ZERO),
    );

    assert!(!summary.success);
    assert_eq!(summary.attempt, 0);
    assert!(summary.error.is_some());
    assert_eq!(loader.calls(), 0);
}

#[test]
fn test_delay_only_between_attempts() {
    let loader = Arc::new(ScriptedLoader::new(vec![
        Step::SelectorTimeout,
        Step::Page(page_with_slots(1)),
    ]));
    let started = Instant::now();
    let summary = checker(loader).check_slots_with(
        URL,
        None,
        RetryPolicy::new(2, Duration::from_millis(50)),
    );
    let elapsed = started.elapsed();

    assert!(summary.success);
    assert_eq!(summary.attempt, 2);
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_secs(5));
}

#[test]
fn test_last_error_reported_when_exhausted() {
    let loader = Arc::new(ScriptedLoader::new(vec![
        Step::Page(page_with_slots(0)),
        Step::SelectorTimeout,
    ]));
    let summary = checker(loader).check_slots_with(
        URL,
        None,
        RetryPolicy::new(2, Duration::ZERO),
    );

    assert!(!summary.success);
    assert_eq!(summary.attempt, 2);
    let error = summary.error.unwrap();
    assert!(error.contains("button.rec-availability-date"), "{error}");
}
