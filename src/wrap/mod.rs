//! Greedy word wrapping and display-width helpers.
//!
//! Width calculations rely on `UnicodeWidthStr::width` from the
//! `unicode-width` crate, so wide glyphs take two columns. For plain ASCII
//! this is the character count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod line_buffer;

use line_buffer::LineBuffer;

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` whose display width does not exceed `width`.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Truncate `text` to `width` columns and right-pad it with spaces to exactly
/// that width.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let head = truncate_to_width(text, width);
    let fill = width.saturating_sub(display_width(head));
    let mut out = String::with_capacity(head.len() + fill);
    out.push_str(head);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Cut a word into pieces no wider than `width`.
///
/// Each piece holds at least one character, so a glyph wider than `width`
/// still makes progress.
fn hard_split(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width && idx > start {
            pieces.push(&word[start..idx]);
            start = idx;
            used = 0;
        }
        used += w;
    }
    pieces.push(&word[start..]);
    pieces
}

/// Greedily wrap `text` to `width` columns.
///
/// Words are the whitespace-delimited tokens of `text` and are rejoined with
/// single spaces. A word wider than `width` is hard-sliced into
/// `width`-sized pieces, each packed as if it were its own word. The result
/// always holds at least one line. A `width` of one or less keeps only the
/// first character.
///
/// # Examples
///
/// ```
/// use wiretext::wrap;
///
/// assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
/// assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// assert_eq!(wrap("", 10), vec![""]);
/// ```
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    if width <= 1 {
        return vec![text.chars().take(1).collect()];
    }

    let mut lines = Vec::new();
    let mut buffer = LineBuffer::new();
    for word in text.split_whitespace() {
        for piece in hard_split(word, width) {
            if !buffer.fits(piece, width) {
                buffer.flush_into(&mut lines);
            }
            buffer.push_word(piece);
        }
    }
    buffer.flush_into(&mut lines);

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
