//! Topic input buffer with grapheme-aware cursor movement.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line input state. The cursor is a byte offset kept on grapheme
/// boundaries.
#[derive(Debug, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Display columns before the cursor (for terminal cursor placement).
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.buffer.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Consumes the buffer as a submission.
    ///
    /// Returns the trimmed topic and clears the buffer. A buffer that is
    /// empty after trimming returns `None` and the buffer is left untouched,
    /// making an empty submit a complete no-op.
    pub fn take_submission(&mut self) -> Option<String> {
        let topic = self.buffer.trim();
        if topic.is_empty() {
            return None;
        }
        let topic = topic.to_string();
        self.buffer.clear();
        self.cursor = 0;
        Some(topic)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputState {
        let mut input = InputState::default();
        for c in text.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn inserts_at_cursor() {
        let mut input = typed("hllo");
        input.move_home();
        input.move_right();
        input.insert_char('e');
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = typed("ae\u{301}"); // 'a' + 'é' (combining accent)
        input.backspace();
        assert_eq!(input.text(), "a");
        input.backspace();
        assert!(input.is_empty());
        // Backspace on empty buffer is a no-op.
        input.backspace();
        assert!(input.is_empty());
    }

    #[test]
    fn cursor_movement_clamps_at_ends() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor_column(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor_column(), 0);
        input.move_end();
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn submission_trims_and_clears() {
        let mut input = typed("  Photosynthesis  ");
        let topic = input.take_submission();
        assert_eq!(topic.as_deref(), Some("Photosynthesis"));
        assert!(input.is_empty());
    }

    #[test]
    fn whitespace_only_submission_is_none() {
        let mut input = typed("   ");
        assert!(input.take_submission().is_none());
        // Buffer untouched so nothing visible changes.
        assert_eq!(input.text(), "   ");
    }
}
