//! Tests for the event store pass-through

use super::*;
use crate::event::types::EventKind;
use chrono::NaiveDate;

fn sample_event(id: &str, name: &str) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        kind: EventKind::Birthday,
        date: NaiveDate::from_ymd_opt(2027, 3, 14).unwrap(),
        venue: Some("Back garden".to_string()),
        guest_count: 25,
        budget_cents: 150_000,
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let mut store = EventStore::new(MemoryStore::new());
    let event = sample_event("evt-1", "Pi day party");

    store.save(&event).unwrap();
    let loaded = store.load("evt-1").unwrap().unwrap();
    assert_eq!(loaded, event);
}

#[test]
fn test_load_missing_event_is_none() {
    let store = EventStore::new(MemoryStore::new());
    assert!(store.load("evt-unknown").unwrap().is_none());
}

#[test]
fn test_save_overwrites_existing() {
    let mut store = EventStore::new(MemoryStore::new());
    store.save(&sample_event("evt-1", "Old name")).unwrap();
    store.save(&sample_event("evt-1", "New name")).unwrap();

    let loaded = store.load("evt-1").unwrap().unwrap();
    assert_eq!(loaded.name, "New name");
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_remove_reports_whether_present() {
    let mut store = EventStore::new(MemoryStore::new());
    store.save(&sample_event("evt-1", "Party")).unwrap();

    assert!(store.remove("evt-1").unwrap());
    assert!(!store.remove("evt-1").unwrap());
    assert!(store.load("evt-1").unwrap().is_none());
}

#[test]
fn test_list_is_ordered_by_id() {
    let mut store = EventStore::new(MemoryStore::new());
    store.save(&sample_event("evt-c", "Third")).unwrap();
    store.save(&sample_event("evt-a", "First")).unwrap();
    store.save(&sample_event("evt-b", "Second")).unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["evt-a", "evt-b", "evt-c"]);
}

#[test]
fn test_collections_are_isolated() {
    let mut raw = MemoryStore::new();
    raw.put("vendors", "v1", serde_json::json!({"name": "Florist"}))
        .unwrap();

    let store = EventStore::new(raw);
    assert!(store.list().unwrap().is_empty());
}
