// Event type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of celebration being planned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Wedding,
    Birthday,
    Corporate,
    Anniversary,
    Other,
}

impl EventKind {
    /// Human-readable label for prompts and card output
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Wedding => "wedding",
            EventKind::Birthday => "birthday party",
            EventKind::Corporate => "corporate event",
            EventKind::Anniversary => "anniversary celebration",
            EventKind::Other => "celebration",
        }
    }
}

/// A planned celebration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub venue: Option<String>,
    pub guest_count: u32,
    /// Budget in cents to avoid floating-point money
    pub budget_cents: i64,
}
