//! Backslash-escape rule shared by every scanner.
//!
//! A delimiter is escaped when it is preceded by an odd number of consecutive
//! backslashes: `\*` is escaped, `\\*` is not (the backslash itself is).

/// Returns true if the byte at `pos` is escaped.
pub fn is_escaped_at(s: &str, pos: usize) -> bool {
    let b = s.as_bytes();
    let mut i = pos.min(b.len());
    let mut run = 0usize;
    while i > 0 && b[i - 1] == b'\\' {
        run += 1;
        i -= 1;
    }
    run % 2 == 1
}

/// Returns true if `delim` sits at `pos` and is escaped.
///
/// Used for capture-group boundaries: the byte just before a group or just
/// after it must be the expected delimiter for the check to apply.
pub fn is_escaped_delim(s: &str, pos: usize, delim: &[u8]) -> bool {
    match s.as_bytes().get(pos) {
        Some(b) if delim.contains(b) => is_escaped_at(s, pos),
        _ => false,
    }
}

/// Checks the delimiter immediately before `start` against `delim`.
pub fn is_escaped_before(s: &str, start: usize, delim: &[u8]) -> bool {
    start >= 1 && is_escaped_delim(s, start - 1, delim)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("a*b", 1, false)]
    #[case::single(r"a\*b", 2, true)]
    #[case::double(r"a\\*b", 3, false)]
    #[case::triple(r"a\\\*b", 4, true)]
    #[case::at_start("*", 0, false)]
    fn odd_backslash_run_escapes(#[case] s: &str, #[case] pos: usize, #[case] expected: bool) {
        assert_eq!(is_escaped_at(s, pos), expected);
    }

    #[test]
    fn delimiter_must_match_to_count() {
        assert!(is_escaped_delim(r"\]", 1, b"]"));
        assert!(!is_escaped_delim(r"\)", 1, b"]"));
        assert!(is_escaped_before(r"\[x", 2, b"["));
        assert!(!is_escaped_before("[x", 1, b"["));
        assert!(!is_escaped_before("x", 0, b"["));
    }
}
