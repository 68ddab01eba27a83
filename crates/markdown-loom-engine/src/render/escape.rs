use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::inline::escape::is_escaped_at;

/// Markup passed through untouched: rendered code, comments and tags.
static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<code>.*?</code>|<!--.*?-->|</?[A-Za-z][A-Za-z0-9-]*(?:\s[^<>]*)?/?>")
        .expect("valid markup regex")
});

/// Any tag once literal `<` has been encoded.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});")
        .expect("valid entity regex")
});

/// Final text pass over resolved inline content.
///
/// Outside of tags and `<code>` elements this drops the backslash of each
/// backslash escape and encodes `&`, `<` and `>` (an `&` that already starts
/// an entity reference is kept). A `<` preceded by an odd backslash run is
/// text, never the start of a tag.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut text = String::new();
    let mut at = 0;
    while let Some(m) = MARKUP.find_at(s, at) {
        if is_escaped_at(s, m.start()) {
            let next = m.start() + 1;
            text.push_str(&s[at..next]);
            at = next;
            continue;
        }
        text.push_str(&s[at..m.start()]);
        push_text(&mut out, &text);
        text.clear();
        out.push_str(m.as_str());
        at = m.end();
    }
    text.push_str(&s[at..]);
    push_text(&mut out, &text);
    out
}

/// The visible text of resolved inline content, for ids and titles.
///
/// Literal `<` and `>` are encoded first so only real markup is dropped;
/// entities are decoded last.
pub fn plain_text(s: &str) -> String {
    let escaped = escape_text(s);
    let text = TAG.replace_all(&escaped, "");
    html_escape::decode_html_entities(&text).into_owned()
}

fn push_text(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    let text = unescape_punctuation(text);
    let mut last = 0;
    for m in ENTITY.find_iter(&text) {
        out.push_str(&html_escape::encode_text(&text[last..m.start()]));
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&html_escape::encode_text(&text[last..]));
}

/// `\*` becomes `*`; a backslash before anything but ASCII punctuation stays.
pub fn unescape_punctuation(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '\\' && next.is_ascii_punctuation() => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}
