use crate::parsing::{
    ParseError, ParseOptions, inline,
    refs::LinkReferenceTable,
    source::{LineSource, LookaheadSource, VecLines},
};

use super::{
    recognize::{BlockParseOutcome, LineContext, Recognizer},
    types::{Block, BlockKind},
};

/// Container levels re-parsed below the top level. Content nested deeper
/// stays as paragraph text.
pub const MAX_NESTING: usize = 32;

/// Drives the recognizers over a line source and builds one level of the
/// block tree.
///
/// At most one block is open at a time. When a recognizer starts a new
/// block the open one is finished: containers re-parse their accumulated
/// text with a nested parser, leaves get inline resolution.
pub struct BlockParser<'r, S> {
    src: LookaheadSource<S>,
    refs: &'r LinkReferenceTable,
    options: ParseOptions,
    parent: Option<BlockKind>,
    depth: usize,
    curr: Option<Block>,
    out: Vec<Block>,
}

impl<'r, S: LineSource> BlockParser<'r, S> {
    pub fn new(src: LookaheadSource<S>, refs: &'r LinkReferenceTable, options: ParseOptions) -> Self {
        Self::nested(src, refs, options, None, 0)
    }

    fn nested(
        src: LookaheadSource<S>,
        refs: &'r LinkReferenceTable,
        mut options: ParseOptions,
        parent: Option<BlockKind>,
        depth: usize,
    ) -> Self {
        options.indent_width = options.indent_width.max(1);
        Self {
            src,
            refs,
            options,
            parent,
            depth,
            curr: None,
            out: vec![],
        }
    }

    pub fn parse(mut self) -> Result<Vec<Block>, ParseError> {
        while self.src.has_lines() {
            self.step()?;
            self.src.advance()?;
        }
        // EOF flush
        self.close_current()?;
        Ok(self.out)
    }

    fn step(&mut self) -> Result<(), ParseError> {
        let Some(line) = self.src.current().map(str::to_owned) else {
            return Ok(());
        };

        for recognizer in Recognizer::for_parent(self.parent) {
            let mut cx = LineContext {
                line: &line,
                src: &mut self.src,
                open: self.curr.as_mut(),
                parent: self.parent,
                indent_width: self.options.indent_width,
            };
            match recognizer.recognize(&mut cx)? {
                BlockParseOutcome::Merged => {
                    log::trace!("{recognizer:?} merged {line:?}");
                    return Ok(());
                }
                BlockParseOutcome::NewBlock(block) => {
                    log::debug!("{recognizer:?} opened {:?}", block.kind);
                    self.close_current()?;
                    self.curr = Some(block);
                    if !recognizer.is_multiline() {
                        self.close_current()?;
                    }
                    return Ok(());
                }
                BlockParseOutcome::NoMatch => {}
            }
        }

        log::warn!("no block recognizer accepted {line:?}");
        Ok(())
    }

    fn close_current(&mut self) -> Result<(), ParseError> {
        if let Some(block) = self.curr.take() {
            let block = self.finish(block)?;
            self.out.push(block);
        }
        Ok(())
    }

    fn finish(&self, mut block: Block) -> Result<Block, ParseError> {
        let nested_parent = match block.kind {
            kind if kind.is_container() => Some(kind),
            BlockKind::ListItem if block.content().is_some_and(|c| c.contains('\n')) => {
                Some(BlockKind::ListItem)
            }
            _ => None,
        };

        if let Some(parent) = nested_parent {
            let children = self.parse_children(block.content().unwrap_or_default(), parent)?;
            block.children = children;
        } else if block.kind.takes_inline()
            && let Some(content) = block.content.take()
        {
            block.content = Some(inline::resolve_inline(&content, self.refs));
        }
        Ok(block)
    }

    fn parse_children(&self, text: &str, parent: BlockKind) -> Result<Vec<Block>, ParseError> {
        if self.depth >= MAX_NESTING {
            log::warn!("{parent:?} nested deeper than {MAX_NESTING} levels; keeping it as text");
            return Ok(vec![self.flatten(text, parent)]);
        }
        log::trace!("re-parsing {parent:?} content ({} bytes)", text.len());
        let src = LookaheadSource::new(VecLines::from_text(text), self.src.depth())?;
        BlockParser::nested(
            src,
            self.refs,
            self.options.clone(),
            Some(parent),
            self.depth + 1,
        )
        .parse()
    }

    /// The whole of `text` as one paragraph, or one item inside a list.
    fn flatten(&self, text: &str, parent: BlockKind) -> Block {
        let joined = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let kind = if parent.is_list() {
            BlockKind::ListItem
        } else {
            BlockKind::Paragraph
        };
        Block::new(kind, inline::resolve_inline(&joined, self.refs))
    }
}
