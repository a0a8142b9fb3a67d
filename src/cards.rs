//! Plain-text card rendering for suggestions
//!
//! Draws each suggestion as a bordered card labeled with its category.
//! Widths are computed with `unicode-width` so CJK and emoji content keeps
//! the borders aligned.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::suggestion::Suggestion;

/// Inner text width of a rendered card
const CARD_WIDTH: usize = 56;

/// Render an ordered list of suggestions as bordered text cards
pub fn render_cards(suggestions: &[Suggestion]) -> String {
    let mut out = String::new();
    for suggestion in suggestions {
        if !out.is_empty() {
            out.push('\n');
        }
        render_card(&mut out, suggestion);
    }
    out
}

fn render_card(out: &mut String, suggestion: &Suggestion) {
    // Top border carries the category label: ┌─ Label ──────┐
    let label = truncate_to_width(&suggestion.category, CARD_WIDTH.saturating_sub(4));
    let fill = CARD_WIDTH.saturating_sub(label.width() + 3);
    out.push_str("┌─ ");
    out.push_str(&label);
    out.push(' ');
    out.push_str(&"─".repeat(fill));
    out.push_str("┐\n");

    for line in wrap_to_width(&suggestion.text, CARD_WIDTH.saturating_sub(2)) {
        let pad = CARD_WIDTH.saturating_sub(line.width() + 2);
        out.push_str("│ ");
        out.push_str(&line);
        out.push_str(&" ".repeat(pad));
        out.push_str(" │\n");
    }

    out.push('└');
    out.push_str(&"─".repeat(CARD_WIDTH));
    out.push_str("┘\n");
}

/// Greedy word wrap by display width
///
/// Words wider than the limit are hard-split so a single long token cannot
/// break the card border.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        for piece in split_oversized(word, width) {
            let needed = if line.is_empty() {
                piece.width()
            } else {
                line.width() + 1 + piece.width()
            };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&piece);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Split one word into pieces that each fit within `width` columns
fn split_oversized(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Truncate a label to at most `width` display columns
fn truncate_to_width(label: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

#[cfg(test)]
#[path = "cards_tests.rs"]
mod cards_tests;
