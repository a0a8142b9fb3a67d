//! AI integration for suggestion generation
//!
//! Builds the planning prompt, calls the configured chat-completion
//! provider, and hands the raw response text to the suggestion segmenter.
//! The provider is opaque text-in/text-out; everything downstream of the
//! response is handled by [`crate::suggestion`].

pub mod prompt;
pub mod provider;

pub use prompt::build_suggestion_prompt;
pub use provider::{AiError, AiProvider};
