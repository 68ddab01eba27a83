//! Block-specific types that own their syntax delimiters.
//!
//! Recognizers call these; they never hardcode `#`, `>` or list markers.

pub mod block_quote;
pub mod code_block;
pub mod heading;
pub mod html_block;
pub mod list;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use heading::Heading;
pub use html_block::HtmlBlock;
pub use list::{List, ListLine, ListMarker, dedent, indent_columns};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
