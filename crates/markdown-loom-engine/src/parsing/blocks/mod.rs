//! # Block Parsing
//!
//! Line-oriented block parsing over a [`LookaheadSource`](crate::parsing::source::LookaheadSource).
//!
//! ## Parsing Model
//!
//! Every line is offered to the recognizers in a fixed precedence order
//! (`recognize`). The first recognizer that does not decline either merges
//! the line into the open block or starts a new block, which finishes the
//! open one. Finishing a container re-parses its accumulated text with a
//! nested `BlockParser`; finishing a leaf runs inline resolution.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`, `Document`
//! - **`kinds`**: Block-specific syntax knowledge (markers, indentation)
//! - **`recognize`**: The ordered recognizers and `BlockParseOutcome`
//! - **`builder`**: `BlockParser`, the per-level driver loop
//!
//! ## Key Invariants
//!
//! - Recognizer order is fixed; list items are tried first inside lists
//! - Indented code and raw HTML are never inline-resolved
//! - Containers nest (lists in quotes in lists) up to `MAX_NESTING` levels;
//!   anything deeper is kept as paragraph text

pub mod builder;
pub mod kinds;
pub mod recognize;
pub mod types;

pub use builder::{BlockParser, MAX_NESTING};
pub use recognize::{BlockParseOutcome, Recognizer};
pub use types::{Block, BlockKind, Document};
