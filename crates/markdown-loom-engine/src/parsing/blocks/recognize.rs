//! Ordered block recognizers.
//!
//! Each recognizer inspects the current line (and, when it needs to, the
//! lookahead window) and either merges the line into the open block, opens a
//! new block, or declines.

use crate::parsing::{
    ParseError,
    refs::LinkReference,
    source::{LineSource, LookaheadSource},
};

use super::{
    kinds::{
        BlockQuote, CodeBlock, Heading, HtmlBlock, List, Paragraph, ThematicBreak, dedent,
        indent_columns,
    },
    types::{Block, BlockKind},
};

/// Result of offering one line to one recognizer.
#[derive(Debug, PartialEq, Eq)]
pub enum BlockParseOutcome {
    /// The line was absorbed into the open block.
    Merged,
    /// The open block is finished and this one starts.
    NewBlock(Block),
    /// Not this recognizer's syntax.
    NoMatch,
}

use BlockParseOutcome::{Merged, NewBlock, NoMatch};

/// Everything a recognizer may look at or touch for one line.
pub struct LineContext<'a, S> {
    pub line: &'a str,
    pub src: &'a mut LookaheadSource<S>,
    /// The block currently accepting lines, if any.
    pub open: Option<&'a mut Block>,
    /// Kind of the container whose content is being parsed.
    pub parent: Option<BlockKind>,
    pub indent_width: usize,
}

impl<S: LineSource> LineContext<'_, S> {
    fn open_kind(&self) -> Option<BlockKind> {
        self.open.as_ref().map(|b| b.kind)
    }

    fn is_blank(&self) -> bool {
        is_blank(self.line)
    }

    fn indent(&self) -> usize {
        indent_columns(self.line, self.indent_width)
    }

    /// First non-blank line inside the lookahead window.
    fn next_nonblank(&self) -> Option<&str> {
        (1..=self.src.depth())
            .map_while(|i| self.src.peek(i))
            .find(|l| !is_blank(l))
    }

    /// The open block that owns this line no matter what it looks like:
    /// HTML blocks take every non-blank line, lists take indented ones.
    fn claimed_by(&self) -> Option<BlockKind> {
        let kind = self.open_kind()?;
        let claimed = match kind {
            BlockKind::Html => !self.is_blank(),
            BlockKind::OrderedList | BlockKind::UnorderedList | BlockKind::ListItem => {
                !self.is_blank() && self.indent() >= self.indent_width
            }
            _ => false,
        };
        claimed.then_some(kind)
    }

    fn merge(&mut self, text: &str) -> BlockParseOutcome {
        match self.open.as_deref_mut() {
            Some(open) => {
                open.append(text);
                Merged
            }
            None => NoMatch,
        }
    }
}

/// The recognizers, one per block syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    ListItem,
    Heading,
    BlockQuote,
    OrderedList,
    UnorderedList,
    CodeBlock,
    HorizontalRule,
    Plain,
    LinkReference,
    Html,
    Paragraph,
    SectionBreak,
}

impl Recognizer {
    /// Precedence order for every line. `Paragraph` and `SectionBreak`
    /// between them accept any line, so the list is total.
    pub const ORDER: [Recognizer; 11] = [
        Recognizer::Heading,
        Recognizer::BlockQuote,
        Recognizer::OrderedList,
        Recognizer::UnorderedList,
        Recognizer::CodeBlock,
        Recognizer::HorizontalRule,
        Recognizer::Plain,
        Recognizer::LinkReference,
        Recognizer::Html,
        Recognizer::Paragraph,
        Recognizer::SectionBreak,
    ];

    /// Recognizers to try, in order. Inside a list the item recognizer
    /// runs before all others.
    pub fn for_parent(parent: Option<BlockKind>) -> impl Iterator<Item = Recognizer> {
        parent
            .is_some_and(BlockKind::is_list)
            .then_some(Recognizer::ListItem)
            .into_iter()
            .chain(Self::ORDER)
    }

    /// Whether blocks from this recognizer stay open for more lines.
    pub fn is_multiline(self) -> bool {
        !matches!(
            self,
            Recognizer::Heading | Recognizer::HorizontalRule | Recognizer::LinkReference
        )
    }

    /// The open block kind this recognizer knows how to continue.
    fn continues(self) -> Option<BlockKind> {
        match self {
            Recognizer::ListItem => Some(BlockKind::ListItem),
            Recognizer::OrderedList => Some(BlockKind::OrderedList),
            Recognizer::UnorderedList => Some(BlockKind::UnorderedList),
            Recognizer::Html => Some(BlockKind::Html),
            _ => None,
        }
    }

    pub fn recognize<S: LineSource>(
        self,
        cx: &mut LineContext<'_, S>,
    ) -> Result<BlockParseOutcome, ParseError> {
        if let Some(owner) = cx.claimed_by()
            && self.continues() != Some(owner)
        {
            return Ok(NoMatch);
        }
        match self {
            Recognizer::ListItem => Ok(list_item(cx)),
            Recognizer::Heading => heading(cx),
            Recognizer::BlockQuote => Ok(block_quote(cx)),
            Recognizer::OrderedList => Ok(list(cx, true)),
            Recognizer::UnorderedList => Ok(list(cx, false)),
            Recognizer::CodeBlock => Ok(code_block(cx)),
            Recognizer::HorizontalRule => Ok(horizontal_rule(cx)),
            Recognizer::Plain => Ok(plain(cx)),
            Recognizer::LinkReference => Ok(link_reference(cx)),
            Recognizer::Html => Ok(html(cx)),
            Recognizer::Paragraph => Ok(paragraph(cx)),
            Recognizer::SectionBreak => Ok(section_break(cx)),
        }
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line with no block syntax of its own; only these can carry a setext
/// underline.
fn is_plain_text(line: &str) -> bool {
    !is_blank(line)
        && !BlockQuote::is_marker(line)
        && List::marker(line).is_none()
        && !CodeBlock::is_indented(line)
        && !ThematicBreak::matches(line)
        && !HtmlBlock::opens(line)
        && LinkReference::parse(line).is_none()
}

fn heading<S: LineSource>(cx: &mut LineContext<'_, S>) -> Result<BlockParseOutcome, ParseError> {
    if let Some((level, text)) = Heading::atx(cx.line) {
        return Ok(NewBlock(Block::new(BlockKind::Heading(level), text)));
    }
    if is_plain_text(cx.line)
        && let Some(level) = cx.src.peek(1).and_then(Heading::setext_level)
    {
        let block = Block::new(BlockKind::Heading(level), Paragraph::line_text(cx.line));
        // the underline belongs to this heading
        cx.src.advance()?;
        return Ok(NewBlock(block));
    }
    Ok(NoMatch)
}

fn block_quote<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    let Some(rest) = BlockQuote::strip_marker(cx.line) else {
        return NoMatch;
    };
    let text = format!("{rest}\n");
    if cx.open_kind() == Some(BlockKind::BlockQuote) {
        cx.merge(&text)
    } else {
        NewBlock(Block::new(BlockKind::BlockQuote, text))
    }
}

fn list<S: LineSource>(cx: &mut LineContext<'_, S>, ordered: bool) -> BlockParseOutcome {
    let kind = if ordered {
        BlockKind::OrderedList
    } else {
        BlockKind::UnorderedList
    };

    if cx.open_kind() == Some(kind) {
        if cx.is_blank() {
            let width = cx.indent_width;
            let continues = cx.next_nonblank().is_some_and(|next| {
                List::marker(next).is_some_and(|l| l.marker.is_ordered() == ordered)
                    || indent_columns(next, width) >= width
            });
            return if continues { cx.merge("\n") } else { NoMatch };
        }
        if List::is_unindented_marker(cx.line, !ordered) {
            return NoMatch;
        }
        let text = format!("{}\n", cx.line);
        return cx.merge(&text);
    }

    let opens = if ordered {
        List::opens_ordered(cx.line)
    } else {
        List::opens_unordered(cx.line)
    };
    if opens {
        NewBlock(Block::new(kind, format!("{}\n", cx.line)))
    } else {
        NoMatch
    }
}

fn list_item<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    let Some(parent) = cx.parent.filter(|p| p.is_list()) else {
        return NoMatch;
    };
    let ordered = parent == BlockKind::OrderedList;
    let width = cx.indent_width;

    if let Some(item) = List::marker(cx.line)
        && item.indent < width
        && item.marker.is_ordered() == ordered
    {
        return NewBlock(Block::new(BlockKind::ListItem, item.rest));
    }

    if cx.open_kind() != Some(BlockKind::ListItem) {
        return NoMatch;
    }
    if cx.is_blank() {
        let continues = cx
            .next_nonblank()
            .is_some_and(|next| indent_columns(next, width) >= width);
        return if continues { cx.merge("\n") } else { NoMatch };
    }
    let text = if cx.indent() >= width {
        format!("\n{}", dedent(cx.line, width))
    } else {
        format!("{}{}", Paragraph::LINE_JOIN, Paragraph::line_text(cx.line))
    };
    cx.merge(&text)
}

fn code_block<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if cx.open_kind() == Some(BlockKind::CodeBlock) {
        if cx.is_blank() {
            let continues = cx.next_nonblank().is_some_and(CodeBlock::is_indented);
            if !continues {
                return NoMatch;
            }
            let text = format!("{}\n", CodeBlock::strip_indent(cx.line).unwrap_or_default());
            return cx.merge(&text);
        }
        return match CodeBlock::strip_indent(cx.line) {
            Some(rest) => {
                let text = format!("{rest}\n");
                cx.merge(&text)
            }
            None => NoMatch,
        };
    }

    // an indented line cannot interrupt a paragraph
    if cx.is_blank() || matches!(cx.open_kind(), Some(BlockKind::Paragraph | BlockKind::Plain)) {
        return NoMatch;
    }
    match CodeBlock::strip_indent(cx.line) {
        Some(rest) => NewBlock(Block::new(BlockKind::CodeBlock, format!("{rest}\n"))),
        None => NoMatch,
    }
}

fn horizontal_rule<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if !ThematicBreak::matches(cx.line) {
        return NoMatch;
    }
    let allowed = match cx.open_kind() {
        None => true,
        Some(kind) => matches!(
            kind,
            BlockKind::SectionBreak
                | BlockKind::Heading(_)
                | BlockKind::HorizontalRule
                | BlockKind::LinkReference
        ),
    };
    if allowed {
        NewBlock(Block::empty(BlockKind::HorizontalRule))
    } else {
        NoMatch
    }
}

fn plain<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if cx.parent != Some(BlockKind::ListItem) || cx.is_blank() {
        return NoMatch;
    }
    let text = Paragraph::line_text(cx.line);
    if cx.open_kind() == Some(BlockKind::Plain) {
        let text = format!("{}{text}", Paragraph::LINE_JOIN);
        cx.merge(&text)
    } else {
        NewBlock(Block::new(BlockKind::Plain, text))
    }
}

fn link_reference<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if LinkReference::parse(cx.line).is_some() {
        NewBlock(Block::new(BlockKind::LinkReference, cx.line.trim()))
    } else {
        NoMatch
    }
}

fn html<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if cx.open_kind() == Some(BlockKind::Html) {
        if cx.is_blank() {
            return NoMatch;
        }
        let text = format!("\n{}", cx.line);
        return cx.merge(&text);
    }
    if HtmlBlock::opens(cx.line) {
        NewBlock(Block::new(BlockKind::Html, cx.line))
    } else {
        NoMatch
    }
}

fn paragraph<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if cx.is_blank() {
        return NoMatch;
    }
    let text = Paragraph::line_text(cx.line);
    if cx.open_kind() == Some(BlockKind::Paragraph) {
        let text = format!("{}{text}", Paragraph::LINE_JOIN);
        cx.merge(&text)
    } else {
        NewBlock(Block::new(BlockKind::Paragraph, text))
    }
}

fn section_break<S: LineSource>(cx: &mut LineContext<'_, S>) -> BlockParseOutcome {
    if !cx.is_blank() {
        return NoMatch;
    }
    if cx.open_kind() == Some(BlockKind::SectionBreak) {
        Merged
    } else {
        NewBlock(Block::empty(BlockKind::SectionBreak))
    }
}
