//! # HTML Rendering
//!
//! - **`html`**: `HtmlRenderer`, the block tree to HTML fragment writer
//! - **`escape`**: The final text pass (backslash escapes, `&`, `<`, `>`)
//! - **`anchors`**: Heading `id` slugs
//! - **`theme`**: Standalone pages with an embedded stylesheet

pub mod anchors;
pub mod escape;
pub mod html;
pub mod theme;

pub use html::{HtmlRenderer, render_html};
pub use theme::{Theme, UnknownTheme, render_page};
