//! Prompt template for suggestion generation
//!
//! Asks the model for markdown suggestions under `## ` level-2 headers,
//! which is exactly the shape the segmenter's primary pass consumes. The
//! model is under no obligation to comply; the segmenter's fallback pass
//! covers responses that ignore the format.

use crate::event::types::Event;
use crate::suggestion::FALLBACK_CATEGORIES;

/// Suggestions requested per category; keeps cards scannable
const ITEMS_PER_CATEGORY: usize = 3;

/// Build the suggestion prompt for one event
pub fn build_suggestion_prompt(event: &Event) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are helping plan a {} called \"{}\" on {} for {} guests",
        event.kind.label(),
        event.name,
        event.date.format("%B %-d, %Y"),
        event.guest_count,
    ));
    if let Some(venue) = &event.venue {
        prompt.push_str(&format!(" at {venue}"));
    }
    prompt.push_str(&format!(
        ". The total budget is ${:.2}.\n\n",
        event.budget_cents as f64 / 100.0
    ));

    prompt.push_str("Suggest creative, practical ideas the hosts can act on.\n\n");
    prompt.push_str(&format!(
        "Format your answer in markdown with one `## ` level-2 header per category, \
         in this order: {}. Under each header give {} short suggestions as `- ` \
         bullet points. No introduction or closing text.",
        FALLBACK_CATEGORIES.join(", "),
        ITEMS_PER_CATEGORY,
    ));

    prompt
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
