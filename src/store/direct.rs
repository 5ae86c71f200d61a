//! Direct-access line store
//!
//! Addresses lines by their byte offset, encoded as a decimal string key.
//! Appropriate for data files whose records are keyed by their own offset,
//! which makes a lookup a single positioned read instead of a search.

use std::sync::Arc;

use crate::buffer::Buffer;
use crate::content::ContentType;

use super::iter::LineIter;
use super::StoreCore;

/// Store over an offset-keyed data file
pub struct DirectAccessStore {
    core: StoreCore,
}

impl DirectAccessStore {
    /// Build a store over a fully loaded buffer
    pub fn new(name: impl Into<String>, content: Arc<ContentType>, buffer: Buffer) -> Self {
        Self {
            core: StoreCore::new(name.into(), content, buffer),
        }
    }

    pub(crate) fn core(&self) -> &StoreCore {
        &self.core
    }

    /// Read the line at the byte offset `key` encodes.
    ///
    /// Misses, rather than errors, on a non-numeric key, an offset at or
    /// past the buffer limit, or a line that does not itself start with the
    /// key string — the last check rejects offsets that land inside a
    /// record rather than on a genuine record start.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let offset: usize = key.parse().ok()?;
        let mut cursor = self.core.lock_cursor();
        if cursor.limit() <= offset {
            return None;
        }
        cursor.set_position(offset);
        cursor.read_line().filter(|line| line.starts_with(key))
    }

    /// Position an iterator at the byte offset `key` encodes.
    ///
    /// The line at the offset becomes the iterator's first value with no
    /// starts-with check and no comment filtering; a malformed or
    /// out-of-range key yields an iterator that is exhausted from the start.
    pub(crate) fn find_first(&self, key: &str) -> LineIter {
        let detector = self.core.detector();
        let mut cursor = self.core.fresh_cursor();

        let first = match key.parse::<usize>() {
            Ok(offset) if offset < cursor.limit() => {
                cursor.set_position(offset);
                cursor.read_line()
            }
            _ => None,
        };

        LineIter::positioned(cursor, first, detector)
    }
}
