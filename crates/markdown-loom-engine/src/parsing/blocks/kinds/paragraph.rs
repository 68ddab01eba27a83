/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters; they are the default leaf block when no
/// other recognizer matches. Continuation lines are joined with a single
/// space. `Plain` list-item text shares the same joining rule.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    /// Content of one paragraph line, leading and trailing whitespace removed.
    pub fn line_text(line: &str) -> &str {
        line.trim()
    }
}
