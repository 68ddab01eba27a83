//! Images, inline links, reference links and autolinks.
//!
//! Each pattern is scanned over the whole string with rendered `<code>`
//! elements skipped. Matches become [`Edit`]s that are spliced in one
//! left-to-right pass.

use html_escape::encode_double_quoted_attribute;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::escape::{is_escaped_at, is_escaped_before, is_escaped_delim};
use crate::parsing::refs::LinkReferenceTable;

// Group 1 of every pattern is a rendered code element; a match there is
// stepped over.
static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<code>.*?</code>)|!\[(.*?)\]\((\S+?)(?:\s+"([^"]+)")?\)"#)
        .expect("valid image regex")
});

static INLINE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)(<code>.*?</code>)|\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]+)")?\)"#)
        .expect("valid inline link regex")
});

static REFERENCE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(<code>.*?</code>)|\[([^\]]+)\] ?\[([^\]]+)\]").expect("valid reference link regex")
});

static AUTOLINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)(<code>.*?</code>)|",
        r"<((https?://[^\s<>]+)|([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}))>",
    ))
    .expect("valid autolink regex")
});

const MAILTO: &str = "mailto:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Link,
    Image,
}

/// A resolved link or image occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub target: LinkTarget,
    /// Link text, or alt text for images.
    pub label: String,
    /// `href` for links, `src` for images.
    pub url: String,
    pub title: Option<String>,
    /// Byte range of the source syntax.
    pub start: usize,
    pub end: usize,
}

impl LinkMatch {
    pub fn to_html(&self) -> String {
        let url = encode_double_quoted_attribute(&self.url);
        let title = self
            .title
            .as_deref()
            .map(|t| format!(" title=\"{}\"", encode_double_quoted_attribute(t)))
            .unwrap_or_default();
        match self.target {
            LinkTarget::Link => format!("<a href=\"{url}\"{title}>{}</a>", self.label),
            LinkTarget::Image => format!(
                "<img src=\"{url}\" alt=\"{}\"{title} />",
                encode_double_quoted_attribute(&self.label)
            ),
        }
    }

    pub fn into_edit(self) -> Edit {
        Edit {
            replacement: self.to_html(),
            start: self.start,
            end: self.end,
        }
    }
}

/// Replace the bytes `start..end` of the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// Applies edits to `s` in ascending start order.
///
/// Offsets refer to the original string; a running delta carries each
/// splice's length change to the edits after it. An edit that starts
/// inside an already-applied one is dropped.
pub fn apply_edits(s: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|e| e.start);
    let mut out = s.to_string();
    let mut delta = 0isize;
    let mut last_end = 0usize;
    for edit in edits {
        if edit.start < last_end {
            log::trace!("dropping overlapping edit at {}", edit.start);
            continue;
        }
        let start = edit.start.saturating_add_signed(delta);
        let end = edit.end.saturating_add_signed(delta);
        out.replace_range(start..end, &edit.replacement);
        delta += edit.replacement.len() as isize - (edit.end - edit.start) as isize;
        last_end = edit.end;
    }
    out
}

fn splice(s: &str, matches: Vec<LinkMatch>) -> String {
    if matches.is_empty() {
        return s.to_string();
    }
    apply_edits(s, matches.into_iter().map(LinkMatch::into_edit).collect())
}

/// Runs `re` over `s`, handing each non-code match to `build`.
///
/// A rejected match is retried one char past its start, so an escaped
/// opener does not hide a real link that begins inside it.
fn scan(
    re: &Regex,
    s: &str,
    mut build: impl FnMut(&Captures<'_>) -> Option<LinkMatch>,
) -> Vec<LinkMatch> {
    let mut found = vec![];
    let mut at = 0;
    while let Some(caps) = re.captures_at(s, at) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if caps.get(1).is_some() {
            at = whole.end();
            continue;
        }
        match build(&caps) {
            Some(m) => {
                at = whole.end();
                found.push(m);
            }
            None => at = next_char(s, whole.start()),
        }
    }
    found
}

fn next_char(s: &str, pos: usize) -> usize {
    pos + s[pos..].chars().next().map_or(1, char::len_utf8)
}

pub fn find_images(s: &str) -> Vec<LinkMatch> {
    scan(&IMAGE, s, |caps| {
        let whole = caps.get(0)?;
        let alt = caps.get(2)?;
        let src = caps.get(3)?;
        let title = caps.get(4);
        if is_escaped_at(s, whole.start())
            || is_escaped_delim(s, alt.end(), b"]")
            || is_escaped_delim(s, src.end(), b")")
        {
            return None;
        }
        if let Some(t) = title
            && (is_escaped_before(s, t.start(), b"\"") || is_escaped_delim(s, t.end(), b"\""))
        {
            return None;
        }
        Some(LinkMatch {
            target: LinkTarget::Image,
            label: alt.as_str().to_string(),
            url: src.as_str().to_string(),
            title: title.map(|t| t.as_str().to_string()),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

pub fn find_inline_links(s: &str) -> Vec<LinkMatch> {
    scan(&INLINE_LINK, s, |caps| {
        let whole = caps.get(0)?;
        let label = caps.get(2)?;
        let url = caps.get(3)?;
        let title = caps.get(4);
        if is_escaped_before(s, label.start(), b"[")
            || is_escaped_delim(s, label.end(), b"]")
            || is_escaped_delim(s, url.end(), b")")
        {
            return None;
        }
        if let Some(t) = title
            && (is_escaped_before(s, t.start(), b"\"") || is_escaped_delim(s, t.end(), b"\""))
        {
            return None;
        }
        Some(LinkMatch {
            target: LinkTarget::Link,
            label: label.as_str().to_string(),
            url: url.as_str().to_string(),
            title: title.map(|t| t.as_str().to_string()),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// `[text][tag]` and `[text] [tag]`, resolved against `refs`. Unknown tags
/// stay literal.
pub fn find_reference_links(s: &str, refs: &LinkReferenceTable) -> Vec<LinkMatch> {
    if refs.is_empty() {
        return vec![];
    }
    scan(&REFERENCE_LINK, s, |caps| {
        let whole = caps.get(0)?;
        let label = caps.get(2)?;
        let tag = caps.get(3)?;
        if is_escaped_before(s, label.start(), b"[")
            || is_escaped_delim(s, label.end(), b"]")
            || is_escaped_before(s, tag.start(), b"[")
            || is_escaped_delim(s, tag.end(), b"]")
        {
            return None;
        }
        let Some(def) = refs.find(tag.as_str()) else {
            log::debug!("no link reference for [{}]", tag.as_str());
            return None;
        };
        Some(LinkMatch {
            target: LinkTarget::Link,
            label: label.as_str().to_string(),
            url: def.url.clone(),
            title: def.title.clone(),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// `<https://...>` and `<user@host.tld>`; email addresses get `mailto:`.
pub fn find_autolinks(s: &str) -> Vec<LinkMatch> {
    scan(&AUTOLINK, s, |caps| {
        let whole = caps.get(0)?;
        let address = caps.get(2)?;
        if is_escaped_at(s, whole.start()) || is_escaped_delim(s, address.end(), b">") {
            return None;
        }
        let url = if caps.get(4).is_some() {
            format!("{MAILTO}{}", address.as_str())
        } else {
            address.as_str().to_string()
        };
        Some(LinkMatch {
            target: LinkTarget::Link,
            label: address.as_str().to_string(),
            url,
            title: None,
            start: whole.start(),
            end: whole.end(),
        })
    })
}

pub fn resolve_images(s: &str) -> String {
    splice(s, find_images(s))
}

/// Resolves inline, reference and autolinks in one splice pass.
pub fn resolve_links(s: &str, refs: &LinkReferenceTable) -> String {
    let mut matches = find_inline_links(s);
    matches.extend(find_reference_links(s, refs));
    matches.extend(find_autolinks(s));
    splice(s, matches)
}
