//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` and ``` `` ```, a raw zone that suppresses other parsing
//! - **`Emphasis`**: `*`, `**`, `_`, `__`
//!
//! All delimiter constants live here, not scattered in scanner code.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;

/// The span element a delimiter pair resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Emphasis,
    Strong,
    Code,
}

impl SpanKind {
    pub fn tag(self) -> &'static str {
        match self {
            SpanKind::Emphasis => "em",
            SpanKind::Strong => "strong",
            SpanKind::Code => "code",
        }
    }
}
