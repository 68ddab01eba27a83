/// Heading block type: ATX (`# Title`) and setext (`Title` over `===`).
pub struct Heading;

impl Heading {
    pub const ATX_MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;
    pub const SETEXT_H1: u8 = b'=';
    pub const SETEXT_H2: u8 = b'-';

    /// Parses an ATX heading line into `(level, text)`.
    ///
    /// The marker run must be 1..=6 `#` followed by whitespace. An optional
    /// closing `#` run is dropped when it is separated from the text by
    /// whitespace.
    pub fn atx(line: &str) -> Option<(u8, &str)> {
        let lead = leading_spaces(line);
        if lead > 3 {
            return None;
        }
        let rest = &line[lead..];
        let level = rest.bytes().take_while(|&b| b == Self::ATX_MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL as usize {
            return None;
        }
        let after = &rest[level..];
        if !after.starts_with([' ', '\t']) {
            return None;
        }
        Some((level as u8, strip_closing_sequence(after.trim())))
    }

    /// Level of a setext underline: `=` runs give 1, `-` runs give 2.
    ///
    /// The run must be at least two characters long.
    pub fn setext_level(line: &str) -> Option<u8> {
        if leading_spaces(line) > 3 {
            return None;
        }
        let run = line.trim();
        let first = *run.as_bytes().first()?;
        if run.len() < 2 || !run.bytes().all(|b| b == first) {
            return None;
        }
        match first {
            Self::SETEXT_H1 => Some(1),
            Self::SETEXT_H2 => Some(2),
            _ => None,
        }
    }
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches(Heading::ATX_MARKER as char);
    if without.len() == text.len() {
        return text;
    }
    if without.is_empty() {
        return "";
    }
    if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("   ## Indented", Some((2, "Indented")))]
    #[case("    # Code", None)]
    #[case("## Closed ##", Some((2, "Closed")))]
    #[case("# C#", Some((1, "C#")))]
    #[case("# ###", Some((1, "")))]
    fn atx_headings(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::atx(line), expected);
    }

    #[rstest]
    #[case("===", Some(1))]
    #[case("--", Some(2))]
    #[case("  ----  ", Some(2))]
    #[case("=", None)]
    #[case("=-=", None)]
    #[case("***", None)]
    fn setext_underlines(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(Heading::setext_level(line), expected);
    }
}
