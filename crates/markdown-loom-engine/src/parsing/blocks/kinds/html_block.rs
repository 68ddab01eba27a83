use once_cell::sync::Lazy;
use regex::Regex;

/// Raw HTML block. Opens on a comment, processing instruction, declaration,
/// a block-level tag, or any tag that is alone on its line. Continues until
/// a blank line.
pub struct HtmlBlock;

static SPECIAL_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}(?:<!--|<\?|<![A-Za-z]|<!\[CDATA\[)").expect("valid html special regex")
});

static START_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^ {0,3}<([A-Za-z][A-Za-z0-9-]*)",
        r#"(?:\s+[A-Za-z_:][A-Za-z0-9_.:-]*(?:\s*=\s*(?:[^\s"'=<>`]+|'[^']*'|"[^"]*"))?)*"#,
        r"\s*/?>(.*)$",
    ))
    .expect("valid html start tag regex")
});

static END_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}</([A-Za-z][A-Za-z0-9-]*)\s*>(.*)$").expect("valid html end tag regex")
});

impl HtmlBlock {
    /// Tags that open an HTML block even with trailing content.
    pub const BLOCK_TAGS: &'static [&'static str] = &[
        "address", "article", "aside", "blockquote", "body", "details", "dialog", "div", "dl",
        "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
        "header", "hr", "html", "iframe", "legend", "li", "main", "nav", "ol", "p", "pre",
        "section", "script", "style", "summary", "table", "tbody", "td", "tfoot", "th", "thead",
        "tr", "ul",
    ];

    pub fn opens(line: &str) -> bool {
        if SPECIAL_OPEN.is_match(line) {
            return true;
        }
        let caps = START_TAG.captures(line).or_else(|| END_TAG.captures(line));
        let Some(caps) = caps else {
            return false;
        };
        let name = caps.get(1).map(|m| m.as_str().to_ascii_lowercase());
        let trailing = caps.get(2).map_or("", |m| m.as_str());
        name.is_some_and(|n| Self::BLOCK_TAGS.contains(&n.as_str())) || trailing.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("<div>")]
    #[case("<div class=\"note\">text")]
    #[case("</div>")]
    #[case("<!-- comment -->")]
    #[case("<?php echo 1; ?>")]
    #[case("<!DOCTYPE html>")]
    #[case("<br/>")]
    #[case("<img src=\"a.png\" alt='x'>")]
    #[case("<custom-element>")]
    #[case("  <table>")]
    fn opens_html(#[case] line: &str) {
        assert!(HtmlBlock::opens(line));
    }

    #[rstest]
    #[case("<span>inline</span> text")]
    #[case("<https://example.com>")]
    #[case("text <div>")]
    #[case("    <div>")]
    #[case("< div>")]
    fn not_html(#[case] line: &str) {
        assert!(!HtmlBlock::opens(line));
    }
}
