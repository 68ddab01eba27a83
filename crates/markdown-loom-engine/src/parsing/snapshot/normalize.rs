use std::fmt::Write;

use crate::parsing::blocks::{Block, Document};

/// Renders the block tree as an indented outline, one block per line.
///
/// Leaf content is shown quoted with newlines written as `\n`; containers
/// show only their kind. Used for snapshot tests and `--debug` dumps.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        write_block(&mut out, block, 0);
    }
    out
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let _ = write!(out, "{:indent$}{:?}", "", block.kind, indent = depth * 2);
    if block.is_leaf()
        && let Some(content) = block.content()
    {
        let _ = write!(out, " \"{}\"", content.replace('\n', "\\n"));
    }
    out.push('\n');
    for child in &block.children {
        write_block(out, child, depth + 1);
    }
}
