//! # Link Reference Table
//!
//! The pre-pass that collects `[label]: url "title"` definitions before any
//! block is parsed, so reference links may point forward in the document.
//!
//! Definitions never span lines. Labels are case-folded on the way in and on
//! lookup. When a label is defined twice the later definition wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::{
    ParseError,
    inline::escape::{is_escaped_before, is_escaped_delim},
    source::{LineSource, LookaheadSource},
};

static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[ \t]*",
        r"\[(.+)\]:",
        r"[ \t]+",
        r"<?([^> \t]+)>?",
        r#"(?:[ \t]+(?:"([^"]*)"|'([^']*)'|\(([^)]*)\)))?"#,
        r"[ \t]*$",
    ))
    .expect("valid reference definition regex")
});

/// A single `[label]: url "title"` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// Case-folded label.
    pub label: String,
    pub url: String,
    pub title: Option<String>,
}

impl LinkReference {
    /// Parses one line as a reference definition.
    ///
    /// A boundary delimiter (`[`, `]`, `<`, `>` or a title quote) preceded by
    /// an odd run of backslashes rejects the line.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = DEFINITION.captures(line)?;
        let label = caps.get(1)?;
        let url = caps.get(2)?;

        if is_escaped_before(line, label.start(), b"[") || is_escaped_delim(line, label.end(), b"]")
        {
            return None;
        }
        if is_escaped_before(line, url.start(), b"<") || is_escaped_delim(line, url.end(), b">") {
            return None;
        }

        let title = caps.get(3).or_else(|| caps.get(4)).or_else(|| caps.get(5));
        if let Some(t) = title
            && (is_escaped_before(line, t.start(), b"\"'(")
                || is_escaped_delim(line, t.end(), b"\"')"))
        {
            return None;
        }

        Some(Self {
            label: fold_label(label.as_str()),
            url: url.as_str().to_string(),
            title: title.map(|t| t.as_str().to_string()),
        })
    }
}

/// Insertion-ordered collection of definitions, one per case-folded label.
#[derive(Debug, Clone, Default)]
pub struct LinkReferenceTable {
    refs: Vec<LinkReference>,
}

impl LinkReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans every remaining line of `src` for definitions.
    ///
    /// The source is left exhausted; callers rewind it before block parsing.
    pub fn scan<S: LineSource>(src: &mut LookaheadSource<S>) -> Result<Self, ParseError> {
        let mut table = Self::new();
        while let Some(line) = src.current() {
            if let Some(def) = LinkReference::parse(line) {
                table.insert(def);
            }
            src.advance()?;
        }
        log::debug!("collected {} link reference(s)", table.len());
        Ok(table)
    }

    /// Adds a definition. A definition for an already-known label replaces
    /// the earlier one in place.
    pub fn insert(&mut self, def: LinkReference) {
        match self.refs.iter_mut().find(|r| r.label == def.label) {
            Some(existing) => {
                log::warn!("link reference [{}] redefined; using the later definition", def.label);
                *existing = def;
            }
            None => self.refs.push(def),
        }
    }

    /// Looks up a definition by label, case-insensitively.
    pub fn find(&self, label: &str) -> Option<&LinkReference> {
        let key = fold_label(label);
        self.refs.iter().find(|r| r.label == key)
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

fn fold_label(label: &str) -> String {
    label.to_lowercase()
}
