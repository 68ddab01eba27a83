use std::io::{BufRead, Seek, SeekFrom};

use crate::parsing::ParseError;

/// A line-at-a-time producer feeding a [`LookaheadSource`](super::LookaheadSource).
///
/// Lines are yielded with their terminator (`\n` or `\r\n`) stripped. End of
/// input is signalled by `Ok(None)`.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>, ParseError>;

    /// Restarts the source so the next call yields the first line again.
    fn rewind(&mut self) -> Result<(), ParseError>;
}

/// Lines read lazily from a file-like reader.
///
/// Rewinding seeks back to the start of the stream, which is how the
/// reference pre-pass and the block pass share one open file.
pub struct ReaderLines<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead + Seek> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead + Seek> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&self.buf).to_string()))
    }

    fn rewind(&mut self) -> Result<(), ParseError> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}

/// Lines held in memory, used for whole-string input and for re-parsing a
/// container block's accumulated text as its own sub-document.
#[derive(Debug, Clone, Default)]
pub struct VecLines {
    lines: Vec<String>,
    next: usize,
}

impl VecLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, next: 0 }
    }

    /// Splits `text` on newlines. A trailing newline does not produce an
    /// extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }
}

impl LineSource for VecLines {
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        let line = self.lines.get(self.next).cloned();
        if line.is_some() {
            self.next += 1;
        }
        Ok(line)
    }

    fn rewind(&mut self) -> Result<(), ParseError> {
        self.next = 0;
        Ok(())
    }
}

fn strip_line_ending(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}
