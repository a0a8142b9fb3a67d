//! Tests for prompt template generation

use super::*;
use crate::event::types::{Event, EventKind};
use chrono::NaiveDate;

fn sample_event() -> Event {
    Event {
        id: "evt-test".to_string(),
        name: "Sam & Alex".to_string(),
        kind: EventKind::Wedding,
        date: NaiveDate::from_ymd_opt(2027, 6, 12).unwrap(),
        venue: Some("Maple Barn".to_string()),
        guest_count: 120,
        budget_cents: 2_500_000,
    }
}

#[test]
fn test_prompt_includes_event_details() {
    let prompt = build_suggestion_prompt(&sample_event());

    assert!(prompt.contains("wedding"));
    assert!(prompt.contains("Sam & Alex"));
    assert!(prompt.contains("June 12, 2027"));
    assert!(prompt.contains("120 guests"));
    assert!(prompt.contains("Maple Barn"));
    assert!(prompt.contains("$25000.00"));
}

#[test]
fn test_prompt_requests_segmentable_markdown() {
    let prompt = build_suggestion_prompt(&sample_event());

    // The format request must match what the primary pass parses
    assert!(prompt.contains("## "));
    assert!(prompt.contains("- "));
    for category in FALLBACK_CATEGORIES {
        assert!(prompt.contains(category), "missing category {category}");
    }
}

#[test]
fn test_prompt_omits_missing_venue() {
    let mut event = sample_event();
    event.venue = None;

    let prompt = build_suggestion_prompt(&event);
    assert!(!prompt.contains(" at "));
}

#[test]
fn test_prompt_mentions_kind_label() {
    let mut event = sample_event();
    event.kind = EventKind::Corporate;

    let prompt = build_suggestion_prompt(&event);
    assert!(prompt.contains("corporate event"));
}
