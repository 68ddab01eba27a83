pub mod lines;
pub mod lookahead;

pub use lines::{LineSource, ReaderLines, VecLines};
pub use lookahead::{DEFAULT_LOOKAHEAD, LookaheadSource, MAX_LOOKAHEAD};
