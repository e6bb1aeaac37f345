//! Property-based tests for the text layout engine.
//!
//! Invariants validated:
//! 1. Packed lines fit the width budget (hyphen heads under the
//!    reservation measure, everything else at full size)
//! 2. No characters are lost or reordered by wrapping
//! 3. Newlines split into independently wrapped paragraphs
//! 4. Over-wide words hyphenate into dash-terminated fragments
//! 5. The line budget produces at most `max + 1` lines, ellipsis last

use comicframe::layout::{format_lines, wrap, TextMeasure, ELLIPSIS};
use proptest::prelude::*;

// ===== Helper Metrics =====

/// Half-advance monospaced metrics: `chars * size / 2` pixels.
struct FixedMetrics;

impl TextMeasure for FixedMetrics {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        text.chars().count() as u32 * (size / 2).max(1)
    }
}

// ===== Property 1: Lines Fit The Budget =====

proptest! {
    #[test]
    fn wrapped_lines_fit_the_budget(
        text in "[a-z ]{0,80}",
        width in 20u32..300,
        size in 4u32..40,
    ) {
        // width >= the glyph advance, so single characters always fit
        // and no line is irreducible.
        let lines = wrap(&text, width, size, &FixedMetrics);

        for line in &lines {
            if let Some(head) = line.strip_suffix('-') {
                // Hyphen fragments were measured at size - 1 to reserve
                // room for the dash; that is the guarantee they carry.
                prop_assert!(
                    FixedMetrics.text_width(head, size.saturating_sub(1)) <= width,
                    "hyphen head {head:?} over budget at width {width}"
                );
            } else {
                prop_assert!(
                    FixedMetrics.text_width(line, size) <= width,
                    "line {line:?} over budget at width {width}"
                );
            }
        }
    }
}

// ===== Property 2: Characters Are Preserved =====

proptest! {
    #[test]
    fn wrapping_preserves_characters(
        text in "[a-z ]{0,80}",
        width in 20u32..300,
        size in 4u32..40,
    ) {
        // The alphabet has no dashes, so every dash in the output is an
        // inserted hyphen; spaces are either kept or consumed at line
        // breaks. Everything else must survive in order.
        let lines = wrap(&text, width, size, &FixedMetrics);

        let output: String = lines.join("").replace(['-', ' '], "");
        let input: String = text.replace(' ', "");
        prop_assert_eq!(output, input);
    }
}

// ===== Property 3: Newlines Split Paragraphs =====

proptest! {
    #[test]
    fn newline_always_breaks(
        first in "[a-z ]{0,40}",
        second in "[a-z ]{0,40}",
        width in 20u32..300,
    ) {
        let joined = format!("{first}\n{second}");
        let lines = wrap(&joined, width, 20, &FixedMetrics);

        let mut expected = wrap(&first, width, 20, &FixedMetrics);
        expected.extend(wrap(&second, width, 20, &FixedMetrics));

        prop_assert_eq!(lines, expected,
            "paragraphs must wrap independently and concatenate");
    }
}

#[test]
fn empty_text_is_one_empty_line() {
    assert_eq!(wrap("", 140, 20, &FixedMetrics), vec![String::new()]);
}

#[test]
fn newline_breaks_even_when_everything_fits() {
    let lines = wrap("a\nb", 1000, 20, &FixedMetrics);
    assert_eq!(lines, vec!["a", "b"]);
}

// ===== Property 4: Over-wide Words Hyphenate =====

proptest! {
    #[test]
    fn overwide_words_split_into_dash_fragments(
        word in "[a-z]{20,60}",
        size in 8u32..32,
    ) {
        // Budget fits ~8 characters, far less than the word.
        let width = (size / 2).max(1) * 8;
        let lines = wrap(&word, width, size, &FixedMetrics);

        prop_assert!(lines.len() >= 2, "word must split: {lines:?}");
        for fragment in &lines[..lines.len() - 1] {
            prop_assert!(fragment.ends_with('-'),
                "non-final fragment {fragment:?} must end in a hyphen");
        }
        prop_assert!(!lines[lines.len() - 1].ends_with('-'));
    }
}

// ===== Property 5: Line Budget =====

proptest! {
    #[test]
    fn budget_never_exceeds_max_plus_one(
        count in 0usize..20,
        max_lines in 1usize..10,
    ) {
        let lines: Vec<String> = (0..count).map(|i| format!("l{i}")).collect();
        let block = format_lines(lines, max_lines, 240, 20);

        prop_assert!(block.lines.len() <= max_lines + 1);
        if count > max_lines {
            prop_assert_eq!(block.lines.len(), max_lines + 1);
            prop_assert_eq!(block.lines.last().map(String::as_str), Some(ELLIPSIS));
        } else {
            prop_assert_eq!(block.lines.len(), count);
        }
    }
}

proptest! {
    #[test]
    fn offset_is_integer_centering(
        count in 0usize..20,
        box_height in 100u32..400,
        size in 8u32..40,
    ) {
        let lines: Vec<String> = (0..count).map(|i| format!("l{i}")).collect();
        let block = format_lines(lines, 50, box_height, size);

        let expected = (box_height as i32 - size as i32 * count as i32) / 2;
        prop_assert_eq!(block.offset, expected);
    }
}
