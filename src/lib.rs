//! Eventide: AI-assisted event planning toolkit
//!
//! Users plan celebrations (weddings, birthdays, corporate events), ask an
//! AI provider for ideas, browse vendors, invite guests, and run mock
//! payments. The interesting piece is [`suggestion::segment`], which turns
//! one block of free-form AI response text into ordered, categorized
//! suggestion cards; everything else is thin orchestration around external
//! collaborators.

pub mod ai;
pub mod cards;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod guest;
pub mod payment;
pub mod suggestion;
pub mod vendor;

pub use error::EventideError;
pub use suggestion::{Suggestion, segment};
