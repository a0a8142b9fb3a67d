//! Event model and creation flow
//!
//! Celebrations are created through a multi-step wizard and persisted
//! through a document-store pass-through. The store itself is an external
//! collaborator; this module only layers typed CRUD over it.

pub mod store;
pub mod types;
pub mod wizard;

// Re-export public types
pub use store::{DocumentStore, EventStore, MemoryStore, StoreError};
pub use types::{Event, EventKind};
pub use wizard::{Wizard, WizardError, WizardStep};
