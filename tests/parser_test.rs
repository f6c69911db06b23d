//! Integration tests for the calendar parser

mod common;

use campwatch::models::{SlotStatus, UNKNOWN};
use campwatch::parser::{extract_date, parse_label, weekday_of, CalendarParser};
use common::{calendar_page, load_fixture};

#[test]
fn test_parse_fixture_counts() {
    let html = load_fixture("calendar.html");
    let extraction = CalendarParser::new().parse(&html);

    assert_eq!(extraction.rows, 3);
    // The legend button sits outside the table and has no row
    assert_eq!(extraction.buttons, 11);
    assert_eq!(extraction.entries.len(), 10);
}

#[test]
fn test_parse_fixture_row_order() {
    let html = load_fixture("calendar.html");
    let entries = CalendarParser::new().parse(&html).entries;

    let sites: Vec<&str> = entries.iter().map(|e| e.site.as_str()).collect();
    assert_eq!(
        sites,
        vec!["001", "001", "001", "001", "002", "002", "002", "002", "Site-3", "Site-3"]
    );

    let dates: Vec<&str> = entries[..4].iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["Oct 30, 2025", "Oct 31, 2025", "Nov 1, 2025", "Nov 2, 2025"]);

    let weekdays: Vec<&str> = entries[..4].iter().map(|e| e.weekday.as_str()).collect();
    assert_eq!(weekdays, vec!["Thursday", "Friday", "Saturday", "Sunday"]);
}

#[test]
fn test_parse_fixture_statuses() {
    let html = load_fixture("calendar.html");
    let entries = CalendarParser::new().parse(&html).entries;

    let available = entries.iter().filter(|e| e.status.is_available()).count();
    assert_eq!(available, 5);
    assert_eq!(entries.len() - available, 5);

    // Upper-case label still counts
    assert_eq!(entries[5].label, "Oct 31, 2025 - Site 002 is AVAILABLE");
    assert_eq!(entries[5].status, SlotStatus::Available);

    // Walk-up cell has a date but no availability wording
    let walk_up = &entries[9];
    assert_eq!(walk_up.site, "Site-3");
    assert_eq!(walk_up.date, "Nov 1, 2025");
    assert_eq!(walk_up.weekday, "Saturday");
    assert_eq!(walk_up.status, SlotStatus::Reserved);
}

#[test]
fn test_parse_page_without_rows() {
    let html = r#"<html><body>
        <button class="rec-availability-date" aria-label="Available">A</button>
        </body></html>"#;
    let extraction = CalendarParser::new().parse(html);

    assert_eq!(extraction.rows, 0);
    assert_eq!(extraction.buttons, 1);
    assert!(extraction.entries.is_empty());
}

#[test]
fn test_parse_empty_document() {
    let extraction = CalendarParser::new().parse("");
    assert!(extraction.entries.is_empty());
    assert_eq!(extraction.rows, 0);
}

#[test]
fn test_parse_generated_page() {
    let html = calendar_page(&[
        ("Site A", &["Oct 30, 2025 - Site A is available"][..]),
        ("Site B", &["garbage", "Oct 31, 2025 - Site B is reserved"][..]),
    ]);
    let entries = CalendarParser::new().parse(&html).entries;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].site, "Site B");
    assert_eq!(entries[1].date, UNKNOWN);
    assert_eq!(entries[1].weekday, UNKNOWN);
    assert_eq!(entries[1].status, SlotStatus::Reserved);
}

#[test]
fn test_label_examples() {
    let entry = parse_label("Site A", "Oct 30, 2025 - Site A is available");
    assert_eq!(entry.date, "Oct 30, 2025");
    assert_eq!(entry.weekday, "Thursday");
    assert_eq!(entry.status, SlotStatus::Available);

    let entry = parse_label("Site B", "Nov 1, 2025 - reserved");
    assert_eq!(entry.date, "Nov 1, 2025");
    assert_eq!(entry.weekday, "Saturday");
    assert_eq!(entry.status, SlotStatus::Reserved);

    let entry = parse_label("Site A", "Site A is available");
    assert_eq!(entry.date, UNKNOWN);
    assert_eq!(entry.weekday, UNKNOWN);
    assert_eq!(entry.status, SlotStatus::Available);

    let entry = parse_label("Site C", "no date here");
    assert_eq!(entry.date, UNKNOWN);
    assert_eq!(entry.weekday, UNKNOWN);
    assert_eq!(entry.status, SlotStatus::Reserved);
}

#[test]
fn test_unavailable_counts_as_available() {
    let entry = parse_label("Site D", "Oct 30, 2025 - Site D is unavailable");
    assert_eq!(entry.status, SlotStatus::Available);
}

#[test]
fn test_date_helpers() {
    assert_eq!(extract_date("Dec 25, 2025 - open"), Some("Dec 25, 2025"));
    assert_eq!(extract_date("December 25 2025"), None);
    assert_eq!(weekday_of("Dec 25, 2025"), Some("Thursday".to_string()));
    assert_eq!(weekday_of("Feb 30, 2025"), None);
}
