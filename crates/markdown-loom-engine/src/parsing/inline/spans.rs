//! Emphasis, strong emphasis and code spans.
//!
//! Resolution finds the left-most delimiter pair, replaces it with its HTML
//! element (recursing into the content first) and continues scanning after
//! the replacement. A `<code>` element is opaque to every later scan, which
//! makes resolution idempotent.

use std::{fmt::Write, ops::Range};

use super::{
    cursor::Cursor,
    escape::is_escaped_at,
    kinds::{CodeSpan, Emphasis, SpanKind},
};

/// A matched opener/closer pair in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPair {
    /// The delimiter as written, e.g. `**` or `` ` ``.
    pub syntax: &'static str,
    pub kind: SpanKind,
    /// Byte offset of the opener.
    pub start: usize,
    /// Byte offset just past the closer.
    pub end: usize,
}

impl TagPair {
    /// Byte range of the content between the delimiters.
    pub fn inner(&self) -> Range<usize> {
        self.start + self.syntax.len()..self.end - self.syntax.len()
    }
}

/// Replaces every delimiter pair in `text` with its HTML element.
///
/// `parent` is the span being resolved, if any; nothing nests inside code.
pub fn resolve_spans(text: &str, parent: Option<SpanKind>) -> String {
    if parent == Some(SpanKind::Code) {
        return text.to_string();
    }
    let mut scanner = SpanScanner::new(text);
    let mut out = String::with_capacity(text.len());
    let mut from = 0;
    while let Some(pair) = scanner.find_tag_pair(from) {
        let inner = &text[pair.inner()];
        let body = match pair.kind {
            SpanKind::Code => html_escape::encode_text(CodeSpan::trim_padding(inner)).into_owned(),
            kind => resolve_spans(inner, Some(kind)),
        };
        let tag = pair.kind.tag();
        log::trace!("{:?} pair at {}..{}", pair.kind, pair.start, pair.end);
        out.push_str(&text[from..pair.start]);
        let _ = write!(out, "<{tag}>{body}</{tag}>");
        from = pair.end;
    }
    out.push_str(&text[from..]);
    out
}

/// Finds the left-most resolvable delimiter pair at or after `from`.
pub fn find_tag_pair(s: &str, from: usize) -> Option<TagPair> {
    SpanScanner::new(s).find_tag_pair(from)
}

/// Delimiter kinds with a closer search of their own: code, `*` and `_`,
/// each single or doubled.
const DELIMITER_KINDS: usize = 6;

/// Pair search over one string.
///
/// A closer search that fails from one opener also fails from every later
/// opener of the same delimiter, so the earliest failing position is kept
/// per kind and later openers at or past it are not searched again. This
/// keeps a run of unmatched openers linear.
struct SpanScanner<'a> {
    s: &'a str,
    unclosed: [Option<usize>; DELIMITER_KINDS],
}

impl<'a> SpanScanner<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            s,
            unclosed: [None; DELIMITER_KINDS],
        }
    }

    fn find_tag_pair(&mut self, from: usize) -> Option<TagPair> {
        let s = self.s;
        let mut cur = Cursor::new(s, from);
        while let Some(c) = cur.peek() {
            let pos = cur.pos();
            if cur.starts_with(CodeSpan::HTML_OPEN)
                && let Some(end) = CodeSpan::skip_rendered(s, pos)
            {
                cur.jump(end);
                continue;
            }
            if !cur.is_escaped() {
                let pair = if c == CodeSpan::TICK {
                    self.code_pair(pos)
                } else if Emphasis::is_delimiter(c) {
                    self.emphasis_pair(pos, c)
                } else {
                    None
                };
                if pair.is_some() {
                    return pair;
                }
            }
            cur.bump();
        }
        None
    }

    fn code_pair(&mut self, pos: usize) -> Option<TagPair> {
        let s = self.s;
        let double = s[pos..].starts_with(CodeSpan::DOUBLE);
        let syntax = if double {
            CodeSpan::DOUBLE
        } else {
            CodeSpan::SINGLE
        };
        let key = kind_slot(CodeSpan::TICK, double);
        if self.known_unclosed(key, pos) {
            return None;
        }

        let open_end = pos + syntax.len();
        let mut search = open_end;
        while let Some(off) = s.get(search..).and_then(|rest| rest.find(syntax)) {
            let k = search + off;
            if k == open_end || is_escaped_at(s, k) {
                search = k + 1;
                continue;
            }
            return Some(TagPair {
                syntax,
                kind: SpanKind::Code,
                start: pos,
                end: k + syntax.len(),
            });
        }
        self.mark_unclosed(key, pos);
        None
    }

    fn emphasis_pair(&mut self, pos: usize, c: char) -> Option<TagPair> {
        let s = self.s;
        let opener = Cursor::new(s, pos);
        let double = opener.run_of(c) >= 2;
        let syntax = Emphasis::syntax(c, double);
        let open_end = pos + syntax.len();

        let after = Cursor::new(s, open_end).peek();
        if after.is_none_or(char::is_whitespace) || Emphasis::flanked_by_word(c, opener.prev()) {
            return None;
        }

        let key = kind_slot(c, double);
        if self.known_unclosed(key, pos) {
            return None;
        }
        let Some(close) = self.find_closer(open_end, c, double) else {
            self.mark_unclosed(key, pos);
            return None;
        };
        Some(TagPair {
            syntax,
            kind: if double {
                SpanKind::Strong
            } else {
                SpanKind::Emphasis
            },
            start: pos,
            end: close + syntax.len(),
        })
    }

    /// Scans for the closer matching an opener that ends at `from`.
    ///
    /// Code spans (raw or rendered) are stepped over whole. A doubled closer is
    /// the right-most pair of a delimiter run; a single closer never takes one
    /// half of a `**` pair.
    fn find_closer(&mut self, from: usize, c: char, double: bool) -> Option<usize> {
        let s = self.s;
        let width = if double { 2 } else { 1 };
        let mut cur = Cursor::new(s, from);
        while let Some(ch) = cur.peek() {
            let k = cur.pos();
            if cur.starts_with(CodeSpan::HTML_OPEN)
                && let Some(end) = CodeSpan::skip_rendered(s, k)
            {
                cur.jump(end);
                continue;
            }
            if ch == CodeSpan::TICK
                && !cur.is_escaped()
                && let Some(code) = self.code_pair(k)
            {
                cur.jump(code.end);
                continue;
            }
            if ch != c || cur.is_escaped() {
                cur.bump();
                continue;
            }

            let run = cur.run_of(c);
            let pair_run = !double && run == 2;
            if run >= width && !pair_run {
                let at = k + run - width;
                if at > from && closes_at(s, at, width, c) {
                    return Some(at);
                }
            }
            cur.jump(k + run);
        }
        None
    }

    fn known_unclosed(&self, key: usize, pos: usize) -> bool {
        self.unclosed[key].is_some_and(|failed| failed <= pos)
    }

    fn mark_unclosed(&mut self, key: usize, pos: usize) {
        let slot = &mut self.unclosed[key];
        *slot = Some(slot.map_or(pos, |failed| failed.min(pos)));
    }
}

fn kind_slot(c: char, double: bool) -> usize {
    let base = match c {
        CodeSpan::TICK => 0,
        Emphasis::STAR => 2,
        _ => 4,
    };
    base + usize::from(double)
}

fn closes_at(s: &str, at: usize, width: usize, c: char) -> bool {
    let before = Cursor::new(s, at).prev();
    let after = Cursor::new(s, at + width).peek();
    before.is_some_and(|b| !b.is_whitespace()) && !Emphasis::flanked_by_word(c, after)
}
