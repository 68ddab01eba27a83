use super::ThematicBreak;

/// List marker at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `1.`, `2.` ... with the parsed number.
    Ordered(u32),
    /// `-`, `*` or `+`.
    Bullet(char),
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListMarker::Ordered(_))
    }
}

/// A recognized list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub marker: ListMarker,
    /// Columns of whitespace before the marker.
    pub indent: usize,
    /// Item text after the marker and its separating whitespace.
    pub rest: &'a str,
}

/// List syntax knowledge: item markers and indentation.
pub struct List;

impl List {
    pub const BULLETS: [char; 3] = ['-', '*', '+'];
    pub const ORDERED_DELIM: char = '.';
    /// An ordered list only opens on a line starting with exactly this.
    pub const ORDERED_OPENER: &'static str = "1. ";
    const MAX_DIGITS: usize = 9;

    /// Parses a list item marker.
    ///
    /// The marker must be followed by a space or tab. A line that is a
    /// thematic break (`* * *`) is never a bullet item.
    pub fn marker(line: &str) -> Option<ListLine<'_>> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let s = &line[indent..];
        let (marker, width) = if let Some(c) = s.chars().next().filter(|c| Self::BULLETS.contains(c)) {
            if ThematicBreak::matches(line) {
                return None;
            }
            (ListMarker::Bullet(c), 1)
        } else {
            let digits = s.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 || digits > Self::MAX_DIGITS {
                return None;
            }
            if s[digits..].chars().next() != Some(Self::ORDERED_DELIM) {
                return None;
            }
            let n = s[..digits].parse().ok()?;
            (ListMarker::Ordered(n), digits + 1)
        };
        let after = &s[width..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        Some(ListLine {
            marker,
            indent,
            rest: after.trim_start(),
        })
    }

    /// True for a line starting `1. `, the only line that can open an
    /// ordered list. Later items may be indented or tab-separated.
    pub fn opens_ordered(line: &str) -> bool {
        line.starts_with(Self::ORDERED_OPENER)
    }

    pub fn opens_unordered(line: &str) -> bool {
        matches!(
            Self::marker(line),
            Some(ListLine { marker: ListMarker::Bullet(_), .. })
        )
    }

    /// An item marker of the given type at column zero.
    pub fn is_unindented_marker(line: &str, ordered: bool) -> bool {
        matches!(Self::marker(line), Some(l) if l.indent == 0 && l.marker.is_ordered() == ordered)
    }
}

/// Width of leading whitespace, counting a tab as `tab_width` columns.
pub fn indent_columns(line: &str, tab_width: usize) -> usize {
    let mut cols = 0;
    for c in line.chars() {
        match c {
            ' ' => cols += 1,
            '\t' => cols += tab_width,
            _ => break,
        }
    }
    cols
}

/// Removes up to `width` columns of leading whitespace. A tab is one full
/// indent step.
pub fn dedent(line: &str, width: usize) -> &str {
    let mut cols = 0;
    for (i, c) in line.char_indices() {
        if cols >= width {
            return &line[i..];
        }
        match c {
            ' ' => cols += 1,
            '\t' => cols += width,
            _ => return &line[i..],
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- item", ListMarker::Bullet('-'), 0, "item")]
    #[case("* item", ListMarker::Bullet('*'), 0, "item")]
    #[case("  + item", ListMarker::Bullet('+'), 2, "item")]
    #[case("1. first", ListMarker::Ordered(1), 0, "first")]
    #[case("12.\tdozen", ListMarker::Ordered(12), 0, "dozen")]
    fn markers(
        #[case] line: &str,
        #[case] marker: ListMarker,
        #[case] indent: usize,
        #[case] rest: &str,
    ) {
        assert_eq!(List::marker(line), Some(ListLine { marker, indent, rest }));
    }

    #[rstest]
    #[case("-item")]
    #[case("**bold**")]
    #[case("* * *")]
    #[case("- - -")]
    #[case("1.one")]
    #[case("1)")]
    #[case("    - code")]
    #[case("1234567890. big")]
    fn non_markers(#[case] line: &str) {
        assert_eq!(List::marker(line), None);
    }

    #[test]
    fn ordered_lists_open_at_one() {
        assert!(List::opens_ordered("1. a"));
        assert!(!List::opens_ordered("2. b"));
        assert!(!List::opens_ordered(" 1. a"));
        assert!(!List::opens_ordered("1.\ta"));
        assert!(!List::opens_ordered("01. a"));
        assert!(List::opens_unordered("- a"));
        assert!(!List::opens_unordered("1. a"));
    }

    #[rstest]
    #[case("  text", 2, "text")]
    #[case("    text", 2, "  text")]
    #[case("\ttext", 2, "text")]
    #[case(" text", 2, "text")]
    #[case("text", 2, "text")]
    #[case("   ", 2, " ")]
    fn dedents(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(dedent(line, width), expected);
    }

    #[test]
    fn indent_counts_tabs() {
        assert_eq!(indent_columns("\t x", 4), 5);
        assert_eq!(indent_columns("x", 4), 0);
    }
}
