use super::escape::is_escaped_at;

/// A cursor for character-by-character inline scanning.
///
/// Positions are byte offsets into `s` and always sit on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at byte offset `start` of `s`.
    pub fn new(s: &'a str, start: usize) -> Self {
        Self { s, i: start }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// The char just before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.s.get(..self.i)?.chars().next_back()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Length of the run of `c` starting at the cursor, in bytes.
    pub fn run_of(&self, c: char) -> usize {
        self.s
            .get(self.i..)
            .map_or(0, |rest| rest.len() - rest.trim_start_matches(c).len())
    }

    /// True if the char under the cursor is backslash-escaped.
    pub fn is_escaped(&self) -> bool {
        is_escaped_at(self.s, self.i)
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Moves to byte offset `pos`.
    pub fn jump(&mut self, pos: usize) {
        self.i = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("héllo", 0);
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.bump(), Some('é'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.prev(), Some('é'));
        assert_eq!(cur.peek(), Some('l'));
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with("**"));
        assert!(!cur.starts_with("__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn runs_count_repeated_chars() {
        let cur = Cursor::new("a***b", 1);
        assert_eq!(cur.run_of('*'), 3);
        assert_eq!(cur.run_of('_'), 0);
    }

    #[test]
    fn escape_under_cursor() {
        let mut cur = Cursor::new(r"\*a", 0);
        assert!(!cur.is_escaped());
        cur.bump();
        assert!(cur.is_escaped());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x", 0);
        assert_eq!(cur.bump(), Some('x'));
        assert_eq!(cur.bump(), None);
        assert!(cur.eof());
    }

    #[test]
    fn jump_moves_to_offset() {
        let mut cur = Cursor::new("abc", 0);
        cur.jump(2);
        assert_eq!(cur.peek(), Some('c'));
    }
}
