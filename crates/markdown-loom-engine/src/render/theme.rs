use std::{fmt, str::FromStr};

use crate::parsing::blocks::{BlockKind, Document};

use super::{escape::plain_text, html::render_html};

const SOLARIZED_LIGHT_CSS: &str = include_str!("../../assets/themes/solarized-light.css");
const SOLARIZED_DARK_CSS: &str = include_str!("../../assets/themes/solarized-dark.css");

/// Stylesheet embedded in a standalone page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// No stylesheet.
    Plain,
    #[default]
    Light,
    Dark,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{0}' (expected one of: {names})", names = Theme::NAMES.join(", "))]
pub struct UnknownTheme(pub String);

impl Theme {
    pub const NAMES: [&'static str; 3] = ["plain", "light", "dark"];

    pub fn css(self) -> &'static str {
        match self {
            Theme::Plain => "",
            Theme::Light => SOLARIZED_LIGHT_CSS,
            Theme::Dark => SOLARIZED_DARK_CSS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Plain => "plain",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "none" => Ok(Theme::Plain),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps the rendered document in a complete HTML page.
///
/// The title is the text of the first heading, or `fallback_title` when the
/// document has none.
pub fn render_page(doc: &Document, theme: Theme, fallback_title: &str) -> String {
    let body = render_html(doc);
    let title = doc
        .blocks
        .iter()
        .find(|b| matches!(b.kind, BlockKind::Heading(_)))
        .and_then(|b| b.content())
        .map(|content| plain_text(content).trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| fallback_title.to_string());

    let mut page = String::with_capacity(body.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!(
        "<title>{}</title>\n",
        html_escape::encode_text(&title)
    ));
    let css = theme.css();
    if !css.is_empty() {
        page.push_str("<style>\n");
        page.push_str(css);
        if !css.ends_with('\n') {
            page.push('\n');
        }
        page.push_str("</style>\n");
    }
    page.push_str("</head>\n<body>\n");
    page.push_str(&body);
    page.push_str("</body>\n</html>\n");
    page
}
