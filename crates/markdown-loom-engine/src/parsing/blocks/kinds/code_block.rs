/// Indented code block: lines indented by a tab or four spaces.
///
/// Code blocks are raw zones; their content is never inline-resolved.
pub struct CodeBlock;

impl CodeBlock {
    pub const INDENT: usize = 4;

    /// Strips one level of code indentation, or `None` if the line is not
    /// indented enough.
    pub fn strip_indent(line: &str) -> Option<&str> {
        let mut cols = 0;
        for (i, c) in line.char_indices() {
            match c {
                ' ' => cols += 1,
                '\t' => return Some(&line[i + 1..]),
                _ => return None,
            }
            if cols == Self::INDENT {
                return Some(&line[i + 1..]);
            }
        }
        None
    }

    pub fn is_indented(line: &str) -> bool {
        Self::strip_indent(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_or_tab() {
        assert_eq!(CodeBlock::strip_indent("    let x;"), Some("let x;"));
        assert_eq!(CodeBlock::strip_indent("\tlet x;"), Some("let x;"));
        assert_eq!(CodeBlock::strip_indent("  \tlet x;"), Some("let x;"));
        assert_eq!(CodeBlock::strip_indent("      nested"), Some("  nested"));
    }

    #[test]
    fn shallow_indent_is_not_code() {
        assert_eq!(CodeBlock::strip_indent("   x"), None);
        assert_eq!(CodeBlock::strip_indent("x"), None);
        assert_eq!(CodeBlock::strip_indent(""), None);
    }
}
