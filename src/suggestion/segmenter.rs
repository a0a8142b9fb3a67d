//! Segmentation of AI responses into categorized suggestions
//!
//! The prompt asks the model for markdown suggestions under `## ` headers,
//! but the response format is not contractually guaranteed. Segmentation is
//! therefore a two-tier heuristic: a primary pass over markdown structure,
//! and a looser delimiter-based fallback when the markdown pass finds too
//! little. Both passes are pure functions of the input text; the worst case
//! is generic round-robin category labels, never an error.

use serde::Serialize;

// =========================================================================
// Tunable thresholds
// =========================================================================

// These values were reverse-engineered from observed model output, not
// derived from any format the provider guarantees.

/// Minimum suggestion count the markdown pass must produce to be trusted.
/// A single well-formed section is not evidence of genuine structure: many
/// unstructured responses coincidentally contain one header-like line.
pub const MIN_STRUCTURED_SUGGESTIONS: usize = 2;

/// A colon appearing within this many characters of a segment's start is
/// treated as a "Label: text" category prefix.
pub const COLON_LABEL_WINDOW: usize = 20;

/// An all-caps segment shorter than this is treated as a bare category
/// header for the segments that follow it.
///
/// Known limitation: this misfires on genuine suggestion text that happens
/// to be short and capitalized (e.g. an acronym-heavy sentence). That is a
/// tradeoff inherited from observed model output, kept rather than guessed
/// around.
pub const BARE_HEADER_MAX_LEN: usize = 30;

/// Categories cycled through when a segment carries no category signal.
pub const FALLBACK_CATEGORIES: [&str; 5] =
    ["Theme", "Décor", "Food", "Entertainment", "Special Touch"];

// =========================================================================
// Suggestion record
// =========================================================================

/// A single categorized suggestion, displayed as one card
///
/// `id` is unique within one segmentation result only; it is regenerated on
/// every call and carries no stability guarantee across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub category: String,
    pub text: String,
}

// =========================================================================
// Segmentation
// =========================================================================

/// Segment one block of AI response text into ordered suggestions
///
/// Total over all string inputs: never panics, never errors. An input with
/// no meaningful content yields an empty vec. Suggestions preserve the
/// order of their source segments, and no emitted suggestion has an empty
/// post-trim category or text.
pub fn segment(response: &str) -> Vec<Suggestion> {
    let structured = segment_markdown(response);
    if structured.len() >= MIN_STRUCTURED_SUGGESTIONS {
        return structured;
    }
    // Too little markdown structure - discard and reparse from the raw text
    segment_loose(response)
}

// =========================================================================
// Primary pass: markdown sections
// =========================================================================

/// Split the response at `## ` headers and emit per-section suggestions
///
/// Text before the first header carries no category and is dropped here;
/// the fallback pass sees it again if this pass is rejected. A section
/// whose body is empty after header removal is skipped.
fn segment_markdown(response: &str) -> Vec<Suggestion> {
    let mut sections: Vec<(String, Vec<&str>)> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in response.lines() {
        if let Some(header) = line.strip_prefix("## ") {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some((header.trim().to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }

    let mut suggestions = Vec::new();
    for (section_idx, (category, body_lines)) in sections.into_iter().enumerate() {
        if category.is_empty() {
            continue;
        }
        let body = body_lines.join("\n");
        let items = split_list_items(&body);

        if items.len() >= 2 {
            for (item_idx, text) in items.into_iter().enumerate() {
                suggestions.push(Suggestion {
                    id: format!("{section_idx}-{item_idx}"),
                    category: category.clone(),
                    text,
                });
            }
        } else {
            // No real list inside the section: the whole body is one card
            let text = body.trim();
            if !text.is_empty() {
                suggestions.push(Suggestion {
                    id: format!("{section_idx}-0"),
                    category,
                    text: text.to_string(),
                });
            }
        }
    }

    suggestions
}

/// Split a section body on bullet (`- `, `* `) or numbered (`N. `) markers
///
/// Lines before the first marker form an item of their own; marker-less
/// lines after a marker are continuations of the current item. Returns only
/// non-empty trimmed items.
fn split_list_items(body: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(rest) = strip_list_marker(trimmed) {
            push_nonempty(&mut items, &mut current);
            current.push_str(rest.trim());
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(trimmed);
        }
    }
    push_nonempty(&mut items, &mut current);

    items
}

/// Strip a leading `- `, `* `, or `N. ` list marker, if present
fn strip_list_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(rest);
    }
    numbered_marker_rest(line)
}

/// For a line starting with `N. `, return the text after the marker
fn numbered_marker_rest(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

fn push_nonempty(items: &mut Vec<String>, current: &mut String) {
    let text = current.trim();
    if !text.is_empty() {
        items.push(text.to_string());
    }
    current.clear();
}

// =========================================================================
// Fallback pass: loose delimiters
// =========================================================================

/// Segment unstructured text at numbered markers, dash bullets, and blank
/// lines, then infer a category for each segment
///
/// The "current category" remembered from a bare all-caps header is an
/// explicit accumulator threaded through the loop, so the pass stays a pure
/// function of its input.
fn segment_loose(response: &str) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut current_category: Option<String> = None;

    for (position, segment) in split_loose_segments(response).into_iter().enumerate() {
        if is_bare_header(&segment) {
            current_category = Some(segment);
            continue;
        }

        if let Some((category, text)) = split_colon_label(&segment) {
            suggestions.push(Suggestion {
                id: format!("f{position}"),
                category,
                text,
            });
            continue;
        }

        let category = match &current_category {
            Some(category) => category.clone(),
            None => FALLBACK_CATEGORIES[position % FALLBACK_CATEGORIES.len()].to_string(),
        };
        suggestions.push(Suggestion {
            id: format!("f{position}"),
            category,
            text: segment,
        });
    }

    suggestions
}

/// Split raw text into trimmed non-empty segments
///
/// A segment boundary is a blank line, a line-start single-dash bullet
/// (`- `), or a line-start numbered marker (`N. `). Marker-less lines are
/// joined onto the current segment with a single space.
fn split_loose_segments(response: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in response.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            push_nonempty(&mut segments, &mut current);
            continue;
        }
        let rest = if let Some(rest) = trimmed.strip_prefix("- ") {
            push_nonempty(&mut segments, &mut current);
            rest
        } else if let Some(rest) = numbered_marker_rest(trimmed) {
            push_nonempty(&mut segments, &mut current);
            rest
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            trimmed
        };
        current.push_str(rest.trim());
    }
    push_nonempty(&mut segments, &mut current);

    segments
}

/// An all-caps segment shorter than [`BARE_HEADER_MAX_LEN`] is a category
/// header for the segments that follow it
fn is_bare_header(segment: &str) -> bool {
    segment.chars().count() < BARE_HEADER_MAX_LEN
        && segment.chars().any(|c| c.is_alphabetic())
        && !segment.chars().any(|c| c.is_lowercase())
}

/// Split a `Label: text` segment into category and text
///
/// The colon must fall within the first [`COLON_LABEL_WINDOW`] characters,
/// and both halves must be non-empty after trimming; a degenerate split
/// (empty label or empty remainder) falls through to the other rules so no
/// blank suggestion is ever emitted.
fn split_colon_label(segment: &str) -> Option<(String, String)> {
    for (chars_seen, (byte_idx, ch)) in segment.char_indices().enumerate() {
        if chars_seen >= COLON_LABEL_WINDOW {
            break;
        }
        if ch == ':' {
            let category = segment[..byte_idx].trim();
            let text = segment[byte_idx + 1..].trim();
            if category.is_empty() || text.is_empty() {
                return None;
            }
            return Some((category.to_string(), text.to_string()));
        }
    }
    None
}

#[cfg(test)]
#[path = "segmenter_tests.rs"]
mod segmenter_tests;
