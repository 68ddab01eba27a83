//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `Document` to a stable text outline for
//!   `insta` snapshots and debug dumps
//! - **`invariants`**: Structural checks (heading levels, sentinels without
//!   content, list items only inside lists)
//!
//! Parsing behavior is pinned by snapshot tests rather than a separate
//! formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::outline;
