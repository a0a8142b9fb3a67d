//! Document-store pass-through for events
//!
//! The real backend is an external document database; this module models it
//! as the [`DocumentStore`] trait and layers typed event CRUD on top. The
//! in-memory implementation backs tests and offline use. Listen/subscribe
//! semantics of the real backend are out of scope.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;
use thiserror::Error;

use super::types::Event;

const EVENTS_COLLECTION: &str = "events";

/// Errors from the store pass-through
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Backend-reported failure (network, permissions, quota)
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Opaque remote document store: CRUD over JSON documents keyed by
/// collection and id
pub trait DocumentStore {
    fn put(&mut self, collection: &str, id: &str, document: Value) -> Result<(), StoreError>;
    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;
    /// Returns whether a document was actually removed
    fn delete(&mut self, collection: &str, id: &str) -> Result<bool, StoreError>;
    /// All documents in a collection, ordered by id
    fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;
}

/// In-memory document store
///
/// BTreeMap per collection keeps `list` order deterministic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn put(&mut self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    fn delete(&mut self, collection: &str, id: &str) -> Result<bool, StoreError> {
        Ok(self
            .collections
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(id).is_some()))
    }

    fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }
}

/// Typed event CRUD over any [`DocumentStore`]
#[derive(Debug)]
pub struct EventStore<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> EventStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&mut self, event: &Event) -> Result<(), StoreError> {
        let document = serde_json::to_value(event)?;
        self.store.put(EVENTS_COLLECTION, &event.id, document)
    }

    pub fn load(&self, id: &str) -> Result<Option<Event>, StoreError> {
        match self.store.get(EVENTS_COLLECTION, id)? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        self.store.delete(EVENTS_COLLECTION, id)
    }

    pub fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.store
            .list(EVENTS_COLLECTION)?
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(StoreError::from))
            .collect()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
