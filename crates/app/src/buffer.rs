//! Editable text buffers for the input area and the custom delimiter field.
//!
//! Text is stored in a rope built without CR/Unicode line-break support, so
//! only `\n` starts a new line. That keeps cursor rows in step with the line
//! numbers derived by `LineMetadata`.

use ropey::Rope;

use crate::action::EditOp;

/// Rope-backed text buffer with a single cursor.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    /// Cursor position as a char index into `rope`
    cursor: usize,
    /// Whether `\n` may be inserted
    multiline: bool,
    /// Column to return to when moving vertically through shorter lines
    preferred_column: Option<usize>,
}

impl TextBuffer {
    /// Create an empty multi-line buffer
    pub fn multiline() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
            multiline: true,
            preferred_column: None,
        }
    }

    /// Create a single-line buffer holding `text`
    pub fn single_line(text: &str) -> Self {
        let mut buffer = Self {
            rope: Rope::new(),
            cursor: 0,
            multiline: false,
            preferred_column: None,
        };
        buffer.set_text(text);
        buffer
    }

    /// Replace the whole content; the cursor moves to the end.
    ///
    /// Single-line buffers drop line breaks from `text`.
    pub fn set_text(&mut self, text: &str) {
        self.rope = if self.multiline {
            Rope::from_str(text)
        } else {
            Rope::from_str(&text.replace(['\r', '\n'], ""))
        };
        self.cursor = self.rope.len_chars();
        self.preferred_column = None;
    }

    /// Remove all text
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.cursor = 0;
        self.preferred_column = None;
    }

    /// Full text content
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Cursor char index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor as (line, column), both zero-based and counted in chars
    pub fn cursor_position(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    /// Number of `\n`-separated lines (at least 1)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line content without its trailing line break
    pub fn line(&self, index: usize) -> String {
        if index >= self.rope.len_lines() {
            return String::new();
        }
        let line = self.rope.line(index).to_string();
        line.strip_suffix('\n').unwrap_or(&line).to_string()
    }

    /// Apply an edit or cursor movement.
    ///
    /// Returns true if the text changed.
    pub fn apply(&mut self, op: &EditOp) -> bool {
        let vertical = matches!(op, EditOp::Up | EditOp::Down);
        let changed = match op {
            EditOp::Insert(ch) => self.insert_str(&ch.to_string()),
            EditOp::InsertText(text) => self.insert_str(text),
            EditOp::Newline => self.multiline && self.insert_str("\n"),
            EditOp::Backspace => self.backspace(),
            EditOp::Delete => self.delete(),
            EditOp::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            EditOp::Right => {
                self.cursor = (self.cursor + 1).min(self.rope.len_chars());
                false
            }
            EditOp::Up => {
                self.move_vertical(-1);
                false
            }
            EditOp::Down => {
                self.move_vertical(1);
                false
            }
            EditOp::Home => {
                let (line, _) = self.cursor_position();
                self.cursor = self.rope.line_to_char(line);
                false
            }
            EditOp::End => {
                let (line, _) = self.cursor_position();
                self.cursor = self.rope.line_to_char(line) + self.line_len(line);
                false
            }
            EditOp::DocStart => {
                self.cursor = 0;
                false
            }
            EditOp::DocEnd => {
                self.cursor = self.rope.len_chars();
                false
            }
        };

        if !vertical {
            self.preferred_column = None;
        }
        changed
    }

    fn insert_str(&mut self, text: &str) -> bool {
        let text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], "")
        };
        if text.is_empty() {
            return false;
        }
        self.rope.insert(self.cursor, &text);
        self.cursor += text.chars().count();
        true
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        // Remove a CRLF pair as one break
        let start = if self.cursor >= 2
            && self.rope.char(self.cursor - 1) == '\n'
            && self.rope.char(self.cursor - 2) == '\r'
        {
            self.cursor - 2
        } else {
            self.cursor - 1
        };
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        true
    }

    fn delete(&mut self) -> bool {
        let len = self.rope.len_chars();
        if self.cursor >= len {
            return false;
        }
        let end = if self.rope.char(self.cursor) == '\r'
            && self.cursor + 1 < len
            && self.rope.char(self.cursor + 1) == '\n'
        {
            self.cursor + 2
        } else {
            self.cursor + 1
        };
        self.rope.remove(self.cursor..end);
        true
    }

    /// Line length in chars, excluding `\n` and a preceding `\r`
    fn line_len(&self, line: usize) -> usize {
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
            if len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        len
    }

    fn move_vertical(&mut self, delta: isize) {
        let (line, column) = self.cursor_position();
        let target = line as isize + delta;
        if target < 0 || target as usize >= self.rope.len_lines() {
            return;
        }
        let target = target as usize;
        let column = *self.preferred_column.get_or_insert(column);
        self.cursor = self.rope.line_to_char(target) + column.min(self.line_len(target));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::multiline();
        for ch in text.chars() {
            let op = if ch == '\n' {
                EditOp::Newline
            } else {
                EditOp::Insert(ch)
            };
            buffer.apply(&op);
        }
        buffer
    }

    #[test]
    fn test_typing_and_position() {
        let buffer = typed("ab\ncd");
        assert_eq!(buffer.text(), "ab\ncd");
        assert_eq!(buffer.cursor_position(), (1, 2));
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = typed("ab\n");
        assert!(buffer.apply(&EditOp::Backspace));
        assert_eq!(buffer.text(), "ab");
        assert!(!buffer.apply(&EditOp::DocStart));
        assert!(!buffer.apply(&EditOp::Backspace));
    }

    #[test]
    fn test_crlf_removed_as_one_break() {
        let mut buffer = TextBuffer::multiline();
        buffer.set_text("a\r\nb");
        buffer.apply(&EditOp::Left);
        assert!(buffer.apply(&EditOp::Backspace));
        assert_eq!(buffer.text(), "ab");

        buffer.set_text("a\r\nb");
        buffer.apply(&EditOp::DocStart);
        buffer.apply(&EditOp::Right);
        assert!(buffer.apply(&EditOp::Delete));
        assert_eq!(buffer.text(), "ab");
    }

    #[test]
    fn test_lone_cr_is_not_a_line_break() {
        let mut buffer = TextBuffer::multiline();
        buffer.set_text("a\rb\nc");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), "a\rb");
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut buffer = TextBuffer::multiline();
        buffer.set_text("long line\nab\nanother");
        buffer.apply(&EditOp::DocStart);
        buffer.apply(&EditOp::End);
        assert_eq!(buffer.cursor_position(), (0, 9));

        buffer.apply(&EditOp::Down);
        assert_eq!(buffer.cursor_position(), (1, 2));
        buffer.apply(&EditOp::Down);
        assert_eq!(buffer.cursor_position(), (2, 7));
        buffer.apply(&EditOp::Up);
        buffer.apply(&EditOp::Up);
        assert_eq!(buffer.cursor_position(), (0, 9));
    }

    #[test]
    fn test_home_end() {
        let mut buffer = TextBuffer::multiline();
        buffer.set_text("abc\r\ndef");
        buffer.apply(&EditOp::DocStart);
        buffer.apply(&EditOp::End);
        assert_eq!(buffer.cursor_position(), (0, 3));
        buffer.apply(&EditOp::Home);
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_single_line_rejects_breaks() {
        let mut field = TextBuffer::single_line("a\nb");
        assert_eq!(field.text(), "ab");
        assert!(!field.apply(&EditOp::Newline));
        field.apply(&EditOp::InsertText("c\r\nd".to_string()));
        assert_eq!(field.text(), "abcd");
        assert_eq!(field.line_count(), 1);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buffer = TextBuffer::multiline();
        buffer.set_text("ac");
        buffer.apply(&EditOp::Left);
        buffer.apply(&EditOp::Insert('b'));
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 2);
    }
}
