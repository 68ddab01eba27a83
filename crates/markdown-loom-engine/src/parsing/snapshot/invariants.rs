use crate::parsing::blocks::{Block, BlockKind, Document};

/// Asserts the structural invariants of a parsed tree.
///
/// Panics with a description of the first violation found.
pub fn check(doc: &Document) {
    for b in &doc.blocks {
        check_block(b, None);
    }
}

fn check_block(b: &Block, parent: Option<BlockKind>) {
    match b.kind {
        BlockKind::Heading(level) => {
            assert!((1..=6).contains(&level), "heading level out of range: {level}");
            assert!(b.is_leaf(), "heading has children: {b:?}");
        }
        BlockKind::SectionBreak | BlockKind::HorizontalRule => {
            assert!(b.content.is_none(), "{:?} carries content: {b:?}", b.kind);
            assert!(b.is_leaf(), "{:?} has children: {b:?}", b.kind);
        }
        BlockKind::ListItem => {
            assert!(
                parent.is_some_and(BlockKind::is_list),
                "list item outside a list (parent {parent:?})"
            );
        }
        kind if kind.is_container() => {
            assert!(!b.children.is_empty(), "container without children: {b:?}");
        }
        _ => {
            assert!(b.content.is_some(), "leaf without content: {b:?}");
            assert!(b.is_leaf(), "leaf has children: {b:?}");
        }
    }

    if b.kind.is_list() {
        for child in &b.children {
            assert!(
                matches!(child.kind, BlockKind::ListItem | BlockKind::SectionBreak),
                "list child is not an item: {child:?}"
            );
        }
    }

    for child in &b.children {
        check_block(child, Some(b.kind));
    }
}
