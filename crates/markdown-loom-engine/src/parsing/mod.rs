pub mod blocks;
pub mod inline;
pub mod refs;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Seek};

use blocks::{BlockParser, Document};
use refs::LinkReferenceTable;
use source::{DEFAULT_LOOKAHEAD, LineSource, LookaheadSource, ReaderLines, VecLines};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Knobs for the block parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lookahead window depth, clamped to `1..=MAX_LOOKAHEAD`.
    pub lookahead: usize,
    /// Columns of indentation that continue a list item.
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
            indent_width: 2,
        }
    }
}

/// Parses Markdown text with default options.
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    parse_source(VecLines::from_text(text), options)
}

/// Parses from a seekable reader without buffering the whole input.
pub fn parse_reader<R: BufRead + Seek>(
    reader: R,
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    parse_source(ReaderLines::new(reader), options)
}

/// Two passes over one source: collect link reference definitions, rewind,
/// then build the block tree.
pub fn parse_source<S: LineSource>(
    source: S,
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    let mut src = LookaheadSource::new(source, options.lookahead)?;
    let refs = LinkReferenceTable::scan(&mut src)?;
    src.rewind()?;
    let blocks = BlockParser::new(src, &refs, options.clone()).parse()?;
    log::debug!("parsed {} top-level block(s)", blocks.len());
    Ok(Document { blocks })
}
