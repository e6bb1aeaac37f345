//! Glyph metrics and font selection for the mono-font backend.

use crate::layout::TextMeasure;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_7X13};
use embedded_graphics::mono_font::MonoFont;
use unicode_width::UnicodeWidthStr;

/// Fixed-advance text metrics.
///
/// Width is `display cells × size / 2`: the classic half-height advance of
/// a monospaced face, with wide (CJK) glyphs counting two cells via
/// `unicode-width`. Measurement scales linearly with size, which is what
/// the wrap engine's `size - 1` hyphen reservation relies on; the drawn
/// font (see [`font_for`]) is the nearest builtin face.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoMetrics;

impl TextMeasure for MonoMetrics {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        text.width() as u32 * glyph_advance(size)
    }
}

/// Horizontal advance per display cell at `size`.
pub(crate) fn glyph_advance(size: u32) -> u32 {
    (size / 2).max(1)
}

/// The builtin mono font closest to the requested pixel size.
pub(crate) fn font_for(size: u32) -> &'static MonoFont<'static> {
    if size >= 17 {
        &FONT_10X20
    } else if size >= 12 {
        &FONT_7X13
    } else {
        &FONT_6X10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_length_and_size() {
        let m = MonoMetrics;
        assert_eq!(m.text_width("abcd", 20), 4 * 10);
        assert_eq!(m.text_width("abcd", 10), 4 * 5);
        assert_eq!(m.text_width("", 20), 0);
    }

    #[test]
    fn size_minus_one_measures_narrower() {
        // The hyphen reservation in the wrap engine depends on this.
        let m = MonoMetrics;
        assert!(m.text_width("abcdefgh", 19) < m.text_width("abcdefgh", 20));
    }

    #[test]
    fn wide_glyphs_count_two_cells() {
        let m = MonoMetrics;
        assert_eq!(m.text_width("試", 20), 2 * 10);
    }

    #[test]
    fn tiny_sizes_still_advance() {
        let m = MonoMetrics;
        assert_eq!(m.text_width("ab", 1), 2);
    }

    #[test]
    fn font_buckets_cover_common_sizes() {
        assert_eq!(font_for(20).character_size.height, 20);
        assert_eq!(font_for(13).character_size.height, 13);
        assert_eq!(font_for(8).character_size.height, 10);
    }
}
