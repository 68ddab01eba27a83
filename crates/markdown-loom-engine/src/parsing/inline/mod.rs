//! # Inline Resolution
//!
//! Turns the text of a leaf block into HTML fragments in three passes:
//!
//! 1. **Spans** (`spans`): code spans, strong and emphasis, left-most pair first
//! 2. **Images** (`links`): `![alt](src "title")`
//! 3. **Links** (`links`): inline, reference and autolinks spliced together
//!
//! Rendered `<code>` elements are raw zones for every pass after the one
//! that produced them.
//!
//! ## Modules
//!
//! - **`escape`**: The odd-backslash escape rule
//! - **`cursor`**: `Cursor` for char-by-char scanning
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`spans`**: `resolve_spans()` and `TagPair`
//! - **`links`**: Link/image patterns, `LinkMatch` and `apply_edits()`

pub mod cursor;
pub mod escape;
pub mod kinds;
pub mod links;
pub mod spans;

pub use links::{Edit, LinkMatch, LinkTarget, apply_edits, resolve_images, resolve_links};
pub use spans::{TagPair, resolve_spans};

use crate::parsing::refs::LinkReferenceTable;

/// Full inline resolution for one block's text.
pub fn resolve_inline(text: &str, refs: &LinkReferenceTable) -> String {
    let spans = resolve_spans(text, None);
    let images = resolve_images(&spans);
    resolve_links(&images, refs)
}
