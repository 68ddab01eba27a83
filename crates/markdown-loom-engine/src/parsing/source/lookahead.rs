use std::collections::VecDeque;

use crate::parsing::ParseError;

use super::lines::LineSource;

/// Default number of lines a recognizer may look past the current one.
pub const DEFAULT_LOOKAHEAD: usize = 5;
/// Upper bound on the lookahead depth regardless of configuration.
pub const MAX_LOOKAHEAD: usize = 10;

/// A bounded sliding window over upcoming lines.
///
/// The window is a ring of `depth + 1` slots: slot 0 is the current line and
/// slots `1..=depth` are lookahead. Advancing drops the current line and pulls
/// one more from the underlying [`LineSource`] while it has any.
pub struct LookaheadSource<S> {
    source: S,
    window: VecDeque<String>,
    depth: usize,
    exhausted: bool,
}

impl<S: LineSource> LookaheadSource<S> {
    /// Creates a source with the given lookahead depth, clamped to
    /// `1..=MAX_LOOKAHEAD`, and fills the window.
    pub fn new(source: S, depth: usize) -> Result<Self, ParseError> {
        let depth = depth.clamp(1, MAX_LOOKAHEAD);
        let mut this = Self {
            source,
            window: VecDeque::with_capacity(depth + 1),
            depth,
            exhausted: false,
        };
        this.fill()?;
        Ok(this)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The line at the front of the window.
    pub fn current(&self) -> Option<&str> {
        self.peek(0)
    }

    /// The `i`-th line ahead of the current one (`peek(0) == current()`).
    ///
    /// Returns `None` past the configured depth or past end of input.
    pub fn peek(&self, i: usize) -> Option<&str> {
        if i > self.depth {
            return None;
        }
        self.window.get(i).map(String::as_str)
    }

    /// Number of lines currently held in the window.
    pub fn valid_lines(&self) -> usize {
        self.window.len()
    }

    pub fn has_lines(&self) -> bool {
        !self.window.is_empty()
    }

    /// Moves to the next line. Returns `true` iff a current line remains.
    pub fn advance(&mut self) -> Result<bool, ParseError> {
        self.window.pop_front();
        self.fill()?;
        Ok(self.has_lines())
    }

    /// Restarts from the first line of the underlying source.
    pub fn rewind(&mut self) -> Result<(), ParseError> {
        self.source.rewind()?;
        self.window.clear();
        self.exhausted = false;
        self.fill()
    }

    fn fill(&mut self) -> Result<(), ParseError> {
        while !self.exhausted && self.window.len() <= self.depth {
            match self.source.next_line()? {
                Some(line) => self.window.push_back(line),
                None => self.exhausted = true,
            }
        }
        Ok(())
    }
}
