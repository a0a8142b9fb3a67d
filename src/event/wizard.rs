//! Multi-step event creation wizard
//!
//! An explicit state machine: Basics -> Schedule -> GuestsAndBudget ->
//! Review -> Complete. Each step validates its own fields and steps cannot
//! be skipped forward; `back` walks one step toward Basics until the wizard
//! has completed. The wizard holds no persistence of its own - the caller
//! decides what to do with the finished [`Event`].

use chrono::NaiveDate;
use thiserror::Error;

use super::types::{Event, EventKind};

/// Errors from wizard validation and step ordering
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("wizard is at the {actual:?} step, not {expected:?}")]
    OutOfOrder {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("event name cannot be empty")]
    EmptyName,

    #[error("guest count must be at least 1")]
    NoGuests,

    #[error("budget cannot be negative")]
    NegativeBudget,
}

/// Steps of the creation flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Basics,
    Schedule,
    GuestsAndBudget,
    Review,
    Complete,
}

/// In-progress event data, filled in step by step
#[derive(Debug, Clone, Default)]
struct Draft {
    name: String,
    kind: Option<EventKind>,
    date: Option<NaiveDate>,
    venue: Option<String>,
    guest_count: u32,
    budget_cents: i64,
}

/// The event creation wizard
#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    draft: Draft,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Wizard {
            step: WizardStep::Basics,
            draft: Draft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        let actual = self.step;
        if actual == expected {
            Ok(())
        } else {
            Err(WizardError::OutOfOrder { expected, actual })
        }
    }

    /// Step 1: name and kind
    pub fn basics(&mut self, name: &str, kind: EventKind) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Basics)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::EmptyName);
        }
        self.draft.name = name.to_string();
        self.draft.kind = Some(kind);
        self.step = WizardStep::Schedule;
        Ok(())
    }

    /// Step 2: date and optional venue
    pub fn schedule(&mut self, date: NaiveDate, venue: Option<&str>) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Schedule)?;
        self.draft.date = Some(date);
        self.draft.venue = venue
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        self.step = WizardStep::GuestsAndBudget;
        Ok(())
    }

    /// Step 3: headcount and budget
    pub fn guests_and_budget(
        &mut self,
        guest_count: u32,
        budget_cents: i64,
    ) -> Result<(), WizardError> {
        self.expect_step(WizardStep::GuestsAndBudget)?;
        if guest_count == 0 {
            return Err(WizardError::NoGuests);
        }
        if budget_cents < 0 {
            return Err(WizardError::NegativeBudget);
        }
        self.draft.guest_count = guest_count;
        self.draft.budget_cents = budget_cents;
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Walk one step back toward Basics; no-op at Basics and after Complete
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Basics | WizardStep::Complete => return,
            WizardStep::Schedule => WizardStep::Basics,
            WizardStep::GuestsAndBudget => WizardStep::Schedule,
            WizardStep::Review => WizardStep::GuestsAndBudget,
        };
    }

    /// Finalize the draft into an [`Event`]
    ///
    /// Only valid at Review. Earlier steps guarantee the draft fields are
    /// populated by the time Review is reachable.
    pub fn finish(&mut self) -> Result<Event, WizardError> {
        self.expect_step(WizardStep::Review)?;

        let (Some(kind), Some(date)) = (self.draft.kind, self.draft.date) else {
            // Unreachable through the public API: Review requires both steps
            return Err(WizardError::OutOfOrder {
                expected: WizardStep::Basics,
                actual: WizardStep::Review,
            });
        };

        self.step = WizardStep::Complete;
        Ok(Event {
            id: new_event_id(&self.draft.name),
            name: self.draft.name.clone(),
            kind,
            date,
            venue: self.draft.venue.clone(),
            guest_count: self.draft.guest_count,
            budget_cents: self.draft.budget_cents,
        })
    }
}

/// Build an event id from a name slug and a timestamp suffix
fn new_event_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .take(24)
        .collect();
    format!("evt-{}-{}", slug, chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
#[path = "wizard_tests.rs"]
mod wizard_tests;
