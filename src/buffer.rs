//! Immutable byte buffer and line-reading cursors
//!
//! A [`Buffer`] is loaded exactly once from an input stream and never
//! mutated afterwards. All "mutation" during lookups and iteration is cursor
//! repositioning, and every [`Cursor`] owns its position privately: a cursor
//! is a cheap clone of the shared [`Bytes`] handle plus a byte offset, so any
//! number of cursors can traverse the same buffer concurrently.

use std::io::Read;

use bytes::Bytes;

use crate::error::Result;

/// Chunk size used while draining the input stream at load time
const LOAD_CHUNK_SIZE: usize = 8096;

/// A fixed, immutable byte region holding one dictionary file
#[derive(Debug, Clone)]
pub struct Buffer {
    bytes: Bytes,
}

impl Buffer {
    /// Load a buffer by draining a reader to end-of-stream.
    ///
    /// Partial reads are looped until the stream reports EOF, so the buffer
    /// always holds the complete file contents.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut data = Vec::with_capacity(LOAD_CHUNK_SIZE);
        let mut chunk = [0u8; LOAD_CHUNK_SIZE];
        loop {
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
        }
        Ok(Self {
            bytes: Bytes::from(data),
        })
    }

    /// Build a buffer directly from in-memory bytes
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Total length in bytes (the cursor limit)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Create an independent cursor positioned at the start of the buffer
    pub fn cursor(&self) -> Cursor {
        Cursor {
            bytes: self.bytes.clone(),
            pos: 0,
        }
    }
}

/// A mutable position over an immutable [`Buffer`]
///
/// Cursors are independent duplicate views: advancing one never affects
/// another, or the store-level cursor used by point lookups.
#[derive(Debug, Clone)]
pub struct Cursor {
    bytes: Bytes,
    pos: usize,
}

impl Cursor {
    /// Current absolute byte offset, in `[0, limit]`
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reposition the cursor. Positions past the limit are clamped.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// One past the last readable byte (the buffer length)
    pub fn limit(&self) -> usize {
        self.bytes.len()
    }

    /// Create another independent view over the same bytes, at this
    /// cursor's current position
    pub fn duplicate(&self) -> Cursor {
        self.clone()
    }

    /// Read the line spanning the current position to the next terminator,
    /// excluding the terminator, and leave the cursor at the first byte of
    /// the following line (or at the limit).
    ///
    /// Terminators: `\n` ends a line; `\r` ends a line and also consumes an
    /// immediately following `\n`. A lone `\r` that is not followed by `\n`
    /// leaves the lookahead byte in place for the next call.
    ///
    /// Returns `None` only when the cursor reaches the limit having
    /// accumulated nothing, which distinguishes "no more records" from a
    /// record that happens to be empty: an unterminated final line is still
    /// returned, and an empty line mid-buffer yields `Some("")`.
    ///
    /// Bytes are decoded as Latin-1, matching the historical WordNet file
    /// handling where each byte maps to one char.
    pub fn read_line(&mut self) -> Option<String> {
        let limit = self.bytes.len();
        let mut line = String::new();
        let mut eol = false;

        while !eol && self.pos < limit {
            let b = self.bytes[self.pos];
            self.pos += 1;
            match b {
                b'\n' => eol = true,
                b'\r' => {
                    eol = true;
                    if self.pos < limit && self.bytes[self.pos] == b'\n' {
                        self.pos += 1;
                    }
                }
                _ => line.push(char::from(b)),
            }
        }

        if self.pos == limit && line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}
