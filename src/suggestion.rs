//! Suggestion module for AI-generated planning ideas
//!
//! This module provides the suggestion record type and the segmentation
//! logic that turns one block of AI response text into discrete cards.

pub mod segmenter;

// Re-export main types
pub use segmenter::{FALLBACK_CATEGORIES, Suggestion, segment};
