pub mod io;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    ParseError, ParseOptions,
    blocks::{Block, BlockKind, Document},
    parse_document, parse_reader, parse_source, parse_with_options,
};
pub use render::{HtmlRenderer, Theme, render_html, render_page};

/// Parses `text` and renders it as an HTML fragment.
pub fn markdown_to_html(text: &str, options: &ParseOptions) -> Result<String, ParseError> {
    let doc = parse_with_options(text, options)?;
    Ok(render_html(&doc))
}
