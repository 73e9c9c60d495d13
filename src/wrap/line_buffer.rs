//! Line buffer used by [`wrap`](super::wrap).
//!
//! Accumulates words into the current output line while tracking its display
//! width so the packing check never re-measures the whole line.

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    text: String,
    width: usize,
}

impl LineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `word` fits on the current line, counting the joining space.
    pub(crate) fn fits(&self, word: &str, limit: usize) -> bool {
        let word_width = UnicodeWidthStr::width(word);
        if self.is_empty() {
            word_width <= limit
        } else {
            self.width + 1 + word_width <= limit
        }
    }

    pub(crate) fn push_word(&mut self, word: &str) {
        if !self.is_empty() {
            self.text.push(' ');
            self.width += 1;
        }
        self.text.push_str(word);
        self.width += UnicodeWidthStr::width(word);
    }

    pub(crate) fn flush_into(&mut self, lines: &mut Vec<String>) {
        if self.text.is_empty() {
            return;
        }
        lines.push(std::mem::take(&mut self.text));
        self.width = 0;
    }
}
