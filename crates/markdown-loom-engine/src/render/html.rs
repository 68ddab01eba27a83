use std::fmt::Write;

use crate::parsing::blocks::{Block, BlockKind, Document};

use super::{anchors::AnchorSet, escape::escape_text};

/// Writes a [`Document`] as an HTML fragment.
///
/// Every element is followed by a newline. Section breaks and link
/// reference definitions produce nothing; HTML blocks are copied verbatim.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    anchors: AnchorSet,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, doc: &Document) -> String {
        let mut buf = String::new();
        for block in &doc.blocks {
            self.write_block(&mut buf, block);
        }
        buf
    }

    fn write_block(&mut self, buf: &mut String, block: &Block) {
        let content = block.content().unwrap_or_default();
        match block.kind {
            BlockKind::SectionBreak | BlockKind::LinkReference => {}
            BlockKind::HorizontalRule => buf.push_str("<hr />\n"),
            BlockKind::Html => {
                buf.push_str(content);
                buf.push('\n');
            }
            BlockKind::Plain => {
                buf.push_str(&escape_text(content));
                buf.push('\n');
            }
            BlockKind::CodeBlock => {
                let _ = writeln!(
                    buf,
                    "<pre><code>{}</code></pre>",
                    html_escape::encode_text(content)
                );
            }
            BlockKind::Heading(level) => {
                let id = self.anchors.anchor_for(content);
                let _ = writeln!(
                    buf,
                    "<h{level} id=\"{id}\">{}</h{level}>",
                    escape_text(content)
                );
            }
            kind => {
                let Some(tag) = kind.render_tag() else {
                    return;
                };
                if block.is_leaf() {
                    let _ = writeln!(buf, "<{tag}>{}</{tag}>", escape_text(content));
                } else {
                    let _ = writeln!(buf, "<{tag}>");
                    for child in &block.children {
                        self.write_block(buf, child);
                    }
                    let _ = writeln!(buf, "</{tag}>");
                }
            }
        }
    }
}

/// Renders a document with a fresh set of heading anchors.
pub fn render_html(doc: &Document) -> String {
    HtmlRenderer::new().render(doc)
}
