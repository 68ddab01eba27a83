/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the recognizers.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one blockquote marker from a line.
    ///
    /// Accepts up to three spaces of indentation, the `>` prefix and one
    /// optional following space or tab. Nested markers are left in place;
    /// they are handled when the quote's content is re-parsed.
    pub fn strip_marker(s: &str) -> Option<&str> {
        let b = s.as_bytes();
        let mut i = 0usize;
        while i < b.len() && i < 3 && b[i] == b' ' {
            i += 1;
        }
        if b.get(i) != Some(&(Self::PREFIX as u8)) {
            return None;
        }
        i += 1;
        if matches!(b.get(i), Some(b' ') | Some(b'\t')) {
            i += 1;
        }
        Some(&s[i..])
    }

    pub fn is_marker(s: &str) -> bool {
        Self::strip_marker(s).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_marker("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_marker("> hello"), Some("hello"));
    }

    #[test]
    fn strip_keeps_nested_marker() {
        assert_eq!(BlockQuote::strip_marker("> > hello"), Some("> hello"));
        assert_eq!(BlockQuote::strip_marker(">> hello"), Some("> hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_marker(">hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_marker(">"), Some(""));
    }

    #[test]
    fn too_much_indent_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_marker("   > ok"), Some("ok"));
        assert_eq!(BlockQuote::strip_marker("    > code"), None);
    }
}
