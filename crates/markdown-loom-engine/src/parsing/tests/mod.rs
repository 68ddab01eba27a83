//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; their expected outlines are inline
//! snapshots next to each test.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseOptions,
    blocks::BlockKind,
    inline::resolve_inline,
    parse_document, parse_with_options,
    refs::LinkReferenceTable,
    snapshot::{invariants, outline},
};

// Fixture-based snapshot tests

#[test]
fn fixture_simple_paragraph() {
    insta::assert_snapshot!(fixture_outline("simple_paragraph"), @r#"
    Heading(1) "Heading"
    SectionBreak
    Paragraph "First paragraph wraps here."
    SectionBreak
    Paragraph "Second <em>para</em>."
    "#);
}

#[test]
fn fixture_nested_list() {
    insta::assert_snapshot!(fixture_outline("nested_list"), @r#"
    UnorderedList
      ListItem "one"
      ListItem
        Plain "two"
        OrderedList
          ListItem "inner"
          ListItem "more"
      ListItem "three"
    "#);
}

#[test]
fn fixture_quote_and_code() {
    insta::assert_snapshot!(fixture_outline("quote_and_code"), @r#"
    BlockQuote
      Paragraph "quoted <em>text</em>"
      BlockQuote
        Paragraph "nested"
    SectionBreak
    CodeBlock "let x = 1;\n\nlet y = 2;\n"
    Paragraph "after"
    "#);
}

#[test]
fn fixture_references() {
    insta::assert_snapshot!(fixture_outline("references"), @r#"
    Paragraph "See <a href="https://example.com/docs" title="Docs">the docs</a> and <a href="/index.html">home</a>."
    SectionBreak
    LinkReference "[docs]: https://example.com/docs "Docs""
    LinkReference "[home]: /index.html"
    "#);
}

fn fixture_outline(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md).unwrap();
    invariants(&doc);

    outline(&doc).trim_end().to_string()
}

// Property tests

#[test]
fn parsing_is_deterministic() {
    let md = std::fs::read_to_string(format!(
        "{}/src/parsing/tests/fixtures/nested_list.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    assert_eq!(parse_document(&md).unwrap(), parse_document(&md).unwrap());
}

#[test]
fn resolved_text_has_no_further_spans() {
    let refs = LinkReferenceTable::new();
    let once = resolve_inline("**bold** and *em* with `co*de*` and [t](/u)", &refs);
    assert_eq!(resolve_inline(&once, &refs), once);
}

#[test]
fn forward_and_backward_references_agree() {
    let forward = parse_document("[x][r]\n\n[r]: /u").unwrap();
    let backward = parse_document("[r]: /u\n\n[x][r]").unwrap();
    assert_eq!(forward.blocks[0].content(), Some(r#"<a href="/u">x</a>"#));
    assert_eq!(forward.blocks[0].content(), backward.blocks[2].content());
}

#[test]
fn atx_heading_level_one() {
    let doc = parse_document("# Title").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::Heading(1));
    assert_eq!(doc.blocks[0].content(), Some("Title"));
    assert_eq!(doc.blocks[0].render_tag(), Some("h1"));
}

#[test]
fn blockquote_keeps_joined_lines() {
    let doc = parse_document("> line one\n> line two").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::BlockQuote);
    assert_eq!(doc.blocks[0].content(), Some("line one\nline two\n"));
}

#[test]
fn ordered_list_has_two_items() {
    let doc = parse_document("1. first\n2. second").unwrap();
    let list = &doc.blocks[0];
    assert_eq!(list.kind, BlockKind::OrderedList);
    let items: Vec<_> = list
        .children
        .iter()
        .map(|b| (b.kind, b.content()))
        .collect();
    assert_eq!(
        items,
        vec![
            (BlockKind::ListItem, Some("first")),
            (BlockKind::ListItem, Some("second")),
        ]
    );
}

#[test]
fn setext_underline_beats_rule_after_text() {
    let doc = parse_document("Title\n---").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::Heading(2));

    let doc = parse_document("---").unwrap();
    assert_eq!(doc.blocks[0].kind, BlockKind::HorizontalRule);
}

#[test]
fn snake_case_is_not_emphasis() {
    let doc = parse_document("snake_case_word").unwrap();
    assert_eq!(doc.blocks[0].content(), Some("snake_case_word"));
}

/// Unclosed constructs stay as text.
#[test]
fn unclosed_constructs_become_text() {
    let doc = parse_document("*unclosed and `also unclosed").unwrap();
    assert_eq!(doc.blocks[0].content(), Some("*unclosed and `also unclosed"));
}

#[test]
fn long_paragraph_of_unmatched_openers_parses_quickly() {
    let md = "*a ".repeat(20_000);
    let started = Instant::now();
    let doc = parse_document(&md).unwrap();
    let elapsed = started.elapsed();

    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].content(), Some(md.trim_end()));
}

#[test]
fn deeply_nested_quote_does_not_overflow() {
    let doc = parse_document(&(">".repeat(3000) + " x")).unwrap();
    invariants(&doc);
    assert_eq!(doc.blocks[0].kind, BlockKind::BlockQuote);
}

#[test]
fn indent_width_option_changes_item_continuation() {
    let md = "- a\n  - b";

    let doc = parse_document(md).unwrap();
    invariants(&doc);
    let items = &doc.blocks[0].children;
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].children.iter().map(|b| b.kind).collect::<Vec<_>>(),
        vec![BlockKind::Plain, BlockKind::UnorderedList]
    );

    let wide = ParseOptions {
        indent_width: 4,
        ..ParseOptions::default()
    };
    let doc = parse_with_options(md, &wide).unwrap();
    invariants(&doc);
    let items: Vec<_> = doc.blocks[0].children.iter().map(|b| b.content()).collect();
    assert_eq!(items, vec![Some("a"), Some("b")]);
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = parse_document("").unwrap();
    assert!(doc.blocks.is_empty());
}

/// Blank lines collapse into one section break.
#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n\n").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, BlockKind::SectionBreak);
    assert!(doc.visible_blocks().next().is_none());
}
