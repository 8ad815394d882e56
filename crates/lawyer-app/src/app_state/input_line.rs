//! Single-line text buffer with a cursor.

/// Editable line. The cursor is a char index, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text left of the cursor, for placing the terminal cursor.
    pub(crate) fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index()]
    }

    pub(crate) fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text; line breaks become spaces.
    pub(crate) fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => self.insert(' '),
                c if c.is_control() => {}
                c => self.insert(c),
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> InputLine {
        let mut l = InputLine::default();
        l.insert_str(s);
        l
    }

    #[test]
    fn insert_at_cursor() {
        let mut l = line("tort");
        l.move_home();
        l.insert('a');
        l.insert(' ');
        assert_eq!(l.text(), "a tort");
        assert_eq!(l.cursor(), 2);
        assert_eq!(l.before_cursor(), "a ");
    }

    #[test]
    fn backspace_and_delete() {
        let mut l = line("lease");
        l.backspace();
        assert_eq!(l.text(), "leas");
        l.move_home();
        l.delete();
        assert_eq!(l.text(), "eas");
        l.move_end();
        l.delete();
        assert_eq!(l.text(), "eas");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut l = line("x");
        l.move_home();
        l.backspace();
        assert_eq!(l.text(), "x");
    }

    #[test]
    fn multibyte_chars() {
        let mut l = line("§ 12");
        l.move_home();
        l.move_right();
        l.insert('!');
        assert_eq!(l.text(), "§! 12");
        l.backspace();
        l.backspace();
        assert_eq!(l.text(), " 12");
    }

    #[test]
    fn paste_flattens_newlines() {
        let l = line("line one\r\nline two\tend");
        assert_eq!(l.text(), "line one line two end");
    }

    #[test]
    fn clear_empties() {
        let mut l = line("question");
        l.clear();
        assert!(l.is_empty());
        assert_eq!(l.cursor(), 0);
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut l = line("ab");
        l.move_right();
        assert_eq!(l.cursor(), 2);
        l.move_home();
        l.move_left();
        assert_eq!(l.cursor(), 0);
    }
}
