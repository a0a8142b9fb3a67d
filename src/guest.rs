//! Guests and invitations
//!
//! Composes invitation records for an event. Actual delivery (email, SMS)
//! is an external collaborator's job; this module only builds the message
//! and tracks RSVP state.

use serde::{Deserialize, Serialize};

use crate::event::types::Event;

/// Someone invited to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub email: String,
}

/// Where a guest stands on attending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// An invitation ready to hand to the delivery collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invitation {
    pub event_id: String,
    pub guest: Guest,
    pub message: String,
    pub status: RsvpStatus,
}

/// Build the invitation for one guest
pub fn compose_invitation(event: &Event, guest: &Guest) -> Invitation {
    let mut message = format!(
        "Hi {},\n\nYou're invited to {} on {}",
        guest.name,
        event.name,
        event.date.format("%B %-d, %Y"),
    );
    if let Some(venue) = &event.venue {
        message.push_str(&format!(" at {venue}"));
    }
    message.push_str(".\n\nWe'd love to see you there - please reply to let us know!");

    Invitation {
        event_id: event.id.clone(),
        guest: guest.clone(),
        message,
        status: RsvpStatus::Pending,
    }
}

#[cfg(test)]
#[path = "guest_tests.rs"]
mod guest_tests;
