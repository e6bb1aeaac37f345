//! Line budget and vertical centering.

/// The literal line appended when a title is truncated.
pub const ELLIPSIS: &str = "...";

/// A formatted block of display lines with its centering offset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBlock {
    /// Lines to draw, top to bottom.
    pub lines: Vec<String>,
    /// Vertical pixel offset centering the block in the configured box.
    /// Negative when the block overflows the box; never clamped.
    pub offset: i32,
}

/// Apply the line budget and compute the centering offset.
///
/// A sequence longer than `max_lines` keeps its first `max_lines` entries
/// and gains one literal [`ELLIPSIS`] line: `max_lines + 1` lines total
/// in the truncated case, not a replacement of the last line.
///
/// The offset is `(box_height - size * line_count) / 2` in integer
/// arithmetic and may go negative; overflowing content renders above and
/// below the nominal box.
pub fn format_lines(mut lines: Vec<String>, max_lines: usize, box_height: u32, size: u32) -> LineBlock {
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        lines.push(ELLIPSIS.to_string());
    }

    let offset = (box_height as i32 - size as i32 * lines.len() as i32) / 2;

    LineBlock { lines, offset }
}
