/// Editable text with a cursor
///
/// The cursor is a char offset into the text, so edits never split a
/// multi-byte character. Lines are separated by `\n`; a trailing newline
/// yields an empty last line the cursor can sit on.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a char offset
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    // Editing

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the char before the cursor; returns false at the start
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Remove the char under the cursor; returns false at the end
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    // Cursor movement

    /// Cursor position as (row, col), both in chars
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// Convert (row, col) to a char offset, clamping col to the line length
    pub fn offset_for(&self, row: usize, col: usize) -> usize {
        let mut offset = 0;
        for (i, line) in self.text.split('\n').enumerate() {
            let len = line.chars().count();
            if i == row {
                return offset + col.min(len);
            }
            offset += len + 1;
        }
        self.char_len()
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row > 0 {
            self.cursor = self.offset_for(row - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 < self.line_count() {
            self.cursor = self.offset_for(row + 1, col);
        }
    }

    pub fn move_home(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = self.offset_for(row, 0);
    }

    pub fn move_end(&mut self) {
        let (row, _) = self.cursor_row_col();
        self.cursor = self.offset_for(row, usize::MAX);
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut buffer = TextBuffer::new();
        for c in "héllo".chars() {
            buffer.insert_char(c);
        }
        assert_eq!(buffer.text(), "héllo");

        buffer.move_left();
        buffer.move_left();
        buffer.move_left();
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "hllo");
        assert_eq!(buffer.cursor(), 1);

        assert!(buffer.delete());
        assert_eq!(buffer.text(), "hlo");
    }

    #[test]
    fn test_edges_are_noops() {
        let mut buffer = TextBuffer::new();
        assert!(!buffer.backspace());
        assert!(!buffer.delete());
        buffer.move_left();
        buffer.move_right();
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buffer = TextBuffer::new();
        buffer.set_text("Hello\nHi\nWorld");
        assert_eq!(buffer.cursor_row_col(), (2, 5));

        buffer.move_up();
        assert_eq!(buffer.cursor_row_col(), (1, 2));

        buffer.move_up();
        assert_eq!(buffer.cursor_row_col(), (0, 2));

        buffer.move_end();
        assert_eq!(buffer.cursor_row_col(), (0, 5));

        buffer.move_down();
        buffer.move_home();
        assert_eq!(buffer.cursor_row_col(), (1, 0));
        assert_eq!(buffer.cursor(), 6);
    }

    #[test]
    fn test_trailing_newline_adds_a_line() {
        let mut buffer = TextBuffer::new();
        buffer.set_text("one");
        buffer.insert_newline();

        assert_eq!(buffer.lines(), vec!["one", ""]);
        assert_eq!(buffer.cursor_row_col(), (1, 0));
    }
}
