/// Code span inline type with owned delimiter constants.
///
/// Code spans are raw zones: once wrapped in `<code>`, nothing else parses
/// inside them, and later scans step over the whole element.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    pub const SINGLE: &'static str = "`";
    pub const DOUBLE: &'static str = "``";
    /// Rendered form, used to recognize already-resolved spans.
    pub const HTML_OPEN: &'static str = "<code>";
    pub const HTML_CLOSE: &'static str = "</code>";

    /// Byte offset just past the `</code>` that closes a `<code>` element
    /// starting at `start`.
    pub fn skip_rendered(s: &str, start: usize) -> Option<usize> {
        let body = start + Self::HTML_OPEN.len();
        let close = s.get(body..)?.find(Self::HTML_CLOSE)?;
        Some(body + close + Self::HTML_CLOSE.len())
    }

    /// Drops one space of padding from each side when both are present
    /// and the content is not all spaces.
    pub fn trim_padding(inner: &str) -> &str {
        if inner.len() >= 2
            && inner.starts_with(' ')
            && inner.ends_with(' ')
            && !inner.bytes().all(|b| b == b' ')
        {
            &inner[1..inner.len() - 1]
        } else {
            inner
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_rendered_code() {
        let s = "a <code>*x*</code> b";
        assert_eq!(CodeSpan::skip_rendered(s, 2), Some(18));
        assert_eq!(CodeSpan::skip_rendered("<code>open", 0), None);
    }

    #[test]
    fn padding() {
        assert_eq!(CodeSpan::trim_padding(" `a` "), "`a`");
        assert_eq!(CodeSpan::trim_padding(" a"), " a");
        assert_eq!(CodeSpan::trim_padding("  "), "  ");
    }
}
