//! Editing state for the name field.
//!
//! Plain text plus a byte cursor kept on a char boundary. The form has a
//! single short field, so there is no history or selection; submit takes
//! the text and clears the field.

#[derive(Debug, Default)]
pub struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte index of the char boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    /// Byte index of the char boundary after the cursor.
    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.text.len(), |c| self.cursor + c.len_utf8())
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    /// Delete back to the start of the previous word.
    pub fn delete_word_back(&mut self) {
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end();
        let start = trimmed
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Return the current text and reset the field.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputState {
        let mut input = InputState::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_insert_and_take() {
        let mut input = typed("Alice");
        assert_eq!(input.text(), "Alice");
        assert_eq!(input.take_text(), "Alice");
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back(); // removes 'h'
        assert_eq!(input.text(), "éllo");
        input.delete_forward(); // removes 'é'
        assert_eq!(input.text(), "llo");
        input.insert_char('💤');
        assert_eq!(input.text(), "💤llo");
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = typed("Alice Bobbins  ");
        input.delete_word_back();
        assert_eq!(input.text(), "Alice ");
        input.delete_word_back();
        assert_eq!(input.text(), "");
        // no-op at the start
        input.delete_word_back();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_cursor_clamped_at_edges() {
        let mut input = typed("ab");
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.delete_forward();
        assert_eq!(input.text(), "ab");
    }
}
