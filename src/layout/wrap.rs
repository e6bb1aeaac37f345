//! Greedy word wrap with mid-word hyphenation.

use crate::layout::TextMeasure;

/// Wrap `text` into lines measuring at most `max_width` pixels at `size`.
///
/// Newlines always force a break, even under budget; each paragraph wraps
/// independently and contributes at least one (possibly empty) line, so
/// line-count semantics stay stable for blank titles. Within a paragraph,
/// words are packed greedily: the candidate is the current line plus the
/// next word, and a candidate measuring strictly over budget emits the
/// current line (trailing space trimmed) and starts a new one with the
/// word. A word that measures exactly the budget fits.
///
/// Words too wide for any line are hyphenated: the candidate is stripped
/// from the tail (measured at `size - 1` to reserve room for the trailing
/// hyphen glyph) until the head fits, the head is emitted with a `-`, and
/// the leftover continues as the start of a new word. A single character
/// wider than the budget is irreducible and is emitted as-is.
pub fn wrap<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: u32,
    size: u32,
    measure: &M,
) -> Vec<String> {
    let mut lines = Vec::new();
    let hyphen_size = size.saturating_sub(1);

    for paragraph in text.split('\n') {
        let mut line = String::new();

        for word in paragraph.split(' ') {
            let mut word = word.to_string();
            let mut candidate = format!("{line}{word}");

            while measure.text_width(&word, size) > max_width && word.chars().count() > 1 {
                let (head, rest) = break_word(&candidate, max_width, hyphen_size, measure);
                if rest.chars().count() >= word.chars().count() {
                    // The packed prefix leaves no room to split the word;
                    // flush the line and split against an empty one.
                    lines.push(line.trim_end().to_string());
                    line.clear();
                    candidate = word.clone();
                    continue;
                }
                lines.push(format!("{head}-"));
                word = rest.clone();
                candidate = rest;
            }

            if measure.text_width(&candidate, size) > max_width {
                lines.push(line.trim_end().to_string());
                line = format!("{word} ");
            } else {
                line = format!("{candidate} ");
            }
        }

        lines.push(line.trim_end().to_string());
    }

    lines
}

/// Strip trailing characters until the head fits, keeping at least one.
fn break_word<M: TextMeasure + ?Sized>(
    word: &str,
    max_width: u32,
    size: u32,
    measure: &M,
) -> (String, String) {
    let mut head = word.to_string();
    let mut rest = String::new();

    while measure.text_width(&head, size) > max_width && head.chars().count() > 1 {
        let tail = head.pop().unwrap_or_default();
        rest.insert(0, tail);
    }

    (head, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedMetrics;

    // FixedMetrics measures `cells * size / 2`, so at size 20 each ASCII
    // character is 10px wide.
    const SIZE: u32 = 20;

    fn wrap_fixed(text: &str, width: u32) -> Vec<String> {
        wrap(text, width, SIZE, &FixedMetrics)
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        assert_eq!(wrap_fixed("", 100), vec![String::new()]);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_fixed("hello", 100), vec!["hello".to_string()]);
    }

    #[test]
    fn words_pack_greedily() {
        // 140px budget = 14 chars; "one two three" is 13.
        assert_eq!(wrap_fixed("one two three", 140), vec!["one two three"]);
    }

    #[test]
    fn overflowing_word_starts_a_new_line() {
        // "aaaa bbbb" candidate is 9 chars = 90px > 80.
        assert_eq!(wrap_fixed("aaaa bbbb", 80), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn word_exactly_at_budget_fits() {
        // 8 chars at 10px each = 80px, boundary is strictly greater-than.
        assert_eq!(wrap_fixed("12345678", 80), vec!["12345678"]);
    }

    #[test]
    fn newline_forces_break_even_under_budget() {
        assert_eq!(wrap_fixed("a\nb", 500), vec!["a", "b"]);
    }

    #[test]
    fn trailing_newline_contributes_empty_line() {
        assert_eq!(wrap_fixed("a\n", 500), vec!["a", ""]);
    }

    #[test]
    fn blank_paragraph_between_text_is_kept() {
        assert_eq!(wrap_fixed("a\n\nb", 500), vec!["a", "", "b"]);
    }

    #[test]
    fn overlong_word_is_hyphenated() {
        // 12 chars at 10px vs a 60px budget. Heads are measured at
        // size-1 (9px/char), so 6 chars fit per hyphen head.
        let lines = wrap_fixed("abcdefghijkl", 60);
        assert!(lines.len() >= 2, "must split: {lines:?}");
        for line in &lines[..lines.len() - 1] {
            assert!(line.ends_with('-'), "non-final fragment {line:?}");
        }
        assert!(!lines.last().expect("nonempty").ends_with('-'));
        let joined: String = lines.join("").replace('-', "");
        assert_eq!(joined, "abcdefghijkl", "no characters lost");
    }

    #[test]
    fn hyphenated_word_absorbs_packed_prefix() {
        // The candidate (line + word) is broken, so the first hyphen
        // fragment carries the words already packed on the line.
        let lines = wrap_fixed("on extraordinarily", 100);
        assert!(
            lines[0].starts_with("on ") && lines[0].ends_with('-'),
            "first fragment keeps the packed prefix: {lines:?}"
        );
    }

    #[test]
    fn single_wide_character_is_irreducible() {
        // One char at 10px against a 5px budget: emitted as-is, no
        // hyphen, no infinite loop. The (empty) current line is still
        // flushed first.
        let lines = wrap_fixed("x", 5);
        assert_eq!(lines, vec!["", "x"]);
    }

    #[test]
    fn wide_characters_inside_text_do_not_loop() {
        let lines = wrap_fixed("a b c", 5);
        assert_eq!(lines, vec!["", "a", "b", "c"]);
    }

    #[test]
    fn break_word_keeps_at_least_one_char() {
        let (head, rest) = break_word("abc", 0, SIZE, &FixedMetrics);
        assert_eq!(head, "a");
        assert_eq!(rest, "bc");
    }

    #[test]
    fn packed_lines_fit_the_budget() {
        let lines = wrap_fixed("the quick brown fox jumps over the lazy dog", 140);
        for line in &lines {
            assert!(
                FixedMetrics.text_width(line, SIZE) <= 140,
                "{line:?} exceeds budget"
            );
        }
    }
}
