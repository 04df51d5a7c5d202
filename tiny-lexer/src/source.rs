//! Sentinel-terminated source buffer.
//!
//! The scanner reads one byte past the current position when it looks for
//! two-character operators and signed numbers. Reads at or beyond the end of
//! the content return the `0x00` sentinel, so lookahead never needs a bounds
//! check at the call site. A zero byte inside the content also ends the input.

use std::fs;
use std::path::Path;

use crate::LexerResult;

pub const SENTINEL: u8 = 0x00;

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[content..., 0x00]`
    buf: Vec<u8>,
}

impl SourceBuffer {
    pub fn new(content: &[u8]) -> SourceBuffer {
        let mut buf = Vec::with_capacity(content.len() + 1);
        buf.extend_from_slice(content);
        buf.push(SENTINEL);

        SourceBuffer { buf }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> LexerResult<SourceBuffer> {
        let content = fs::read(path)?;
        log::debug!("read {} bytes of source", content.len());

        Ok(SourceBuffer::new(&content))
    }

    /// Byte at `pos`, or the sentinel past the end.
    #[inline]
    pub fn byte(&self, pos: usize) -> u8 {
        self.buf.get(pos).copied().unwrap_or(SENTINEL)
    }

    /// Source text between `start` and `end`. Bytes are taken as Latin-1, so
    /// every ASCII lexeme is reproduced exactly.
    pub fn text(&self, start: usize, end: usize) -> String {
        self.buf[start..end].iter().map(|&b| b as char).collect()
    }

    /// Length of the content, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(s: &str) -> SourceBuffer {
        SourceBuffer::new(s.as_bytes())
    }
}
