/// The kind of a block in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// ATX or setext heading, level 1..=6.
    Heading(u8),
    Paragraph,
    BlockQuote,
    OrderedList,
    UnorderedList,
    ListItem,
    /// Indented code block.
    CodeBlock,
    HorizontalRule,
    /// Sentinel produced by one or more blank lines; never rendered.
    SectionBreak,
    /// A `[label]: url` definition line; never rendered.
    LinkReference,
    /// Raw HTML block, emitted verbatim.
    Html,
    /// Text inside a list item, emitted without a wrapping tag.
    Plain,
}

impl BlockKind {
    /// The HTML element this kind renders as, if any.
    pub fn render_tag(self) -> Option<&'static str> {
        match self {
            BlockKind::Heading(level) => match level {
                1 => Some("h1"),
                2 => Some("h2"),
                3 => Some("h3"),
                4 => Some("h4"),
                5 => Some("h5"),
                _ => Some("h6"),
            },
            BlockKind::Paragraph => Some("p"),
            BlockKind::BlockQuote => Some("blockquote"),
            BlockKind::OrderedList => Some("ol"),
            BlockKind::UnorderedList => Some("ul"),
            BlockKind::ListItem => Some("li"),
            BlockKind::CodeBlock => Some("pre"),
            BlockKind::HorizontalRule => Some("hr"),
            BlockKind::SectionBreak
            | BlockKind::LinkReference
            | BlockKind::Html
            | BlockKind::Plain => None,
        }
    }

    /// Containers re-parse their accumulated text into children when closed.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            BlockKind::BlockQuote | BlockKind::OrderedList | BlockKind::UnorderedList
        )
    }

    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::OrderedList | BlockKind::UnorderedList)
    }

    /// Whether leaf content of this kind goes through inline resolution.
    pub fn takes_inline(self) -> bool {
        matches!(
            self,
            BlockKind::Heading(_) | BlockKind::Paragraph | BlockKind::Plain | BlockKind::ListItem
        )
    }

    /// Whether this kind renders nothing at all.
    pub fn is_invisible(self) -> bool {
        matches!(self, BlockKind::SectionBreak | BlockKind::LinkReference)
    }
}

/// A node of the document tree.
///
/// Sibling order is the order of the owning `Vec`. Containers keep the raw
/// text they accumulated in `content` and their parsed structure in
/// `children`; when both are present, `children` is what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: Option<String>,
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: Some(content.into()),
            children: vec![],
        }
    }

    /// A block without content (horizontal rules, section breaks).
    pub fn empty(kind: BlockKind) -> Self {
        Self {
            kind,
            content: None,
            children: vec![],
        }
    }

    pub fn render_tag(&self) -> Option<&'static str> {
        self.kind.render_tag()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `text` to the content buffer, creating it if absent.
    pub fn append(&mut self, text: &str) {
        self.content.get_or_insert_with(String::new).push_str(text);
    }
}

/// A parsed Markdown document: its top-level blocks in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Top-level blocks that produce output.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.kind.is_invisible())
    }
}
