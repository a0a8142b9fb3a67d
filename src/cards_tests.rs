//! Tests for card rendering

use super::*;
use crate::suggestion::Suggestion;
use unicode_width::UnicodeWidthStr;

fn sample(category: &str, text: &str) -> Suggestion {
    Suggestion {
        id: "0-0".to_string(),
        category: category.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn test_render_single_card_contains_label_and_text() {
    let output = render_cards(&[sample("Theme", "Rustic outdoor wedding")]);

    assert!(output.contains("┌─ Theme "));
    assert!(output.contains("│ Rustic outdoor wedding"));
    assert!(output.starts_with('┌'));
    assert!(output.ends_with("┘\n"));
}

#[test]
fn test_render_cards_preserves_order() {
    let output = render_cards(&[sample("Theme", "first"), sample("Food", "second")]);

    let theme_pos = output.find("Theme").unwrap();
    let food_pos = output.find("Food").unwrap();
    assert!(theme_pos < food_pos);
}

#[test]
fn test_render_no_suggestions_is_empty() {
    assert_eq!(render_cards(&[]), "");
}

#[test]
fn test_render_borders_are_aligned() {
    let text = "A fairly long suggestion that will definitely wrap across several lines of the card body";
    let output = render_cards(&[sample("Entertainment", text)]);

    let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
    assert!(widths.len() > 3, "long text should wrap");
    assert!(
        widths.iter().all(|w| *w == widths[0]),
        "all card lines share one width: {widths:?}"
    );
}

#[test]
fn test_render_wide_characters_stay_aligned() {
    let output = render_cards(&[sample("Décor", "紙提灯と木のテーブル, plus fairy lights")]);

    let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}

#[test]
fn test_render_oversized_word_does_not_break_border() {
    let long_word = "x".repeat(200);
    let output = render_cards(&[sample("Theme", &long_word)]);

    let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}

#[test]
fn test_render_long_category_is_truncated() {
    let long_label = "C".repeat(120);
    let output = render_cards(&[sample(&long_label, "body")]);

    let widths: Vec<usize> = output.lines().map(|l| l.width()).collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}
