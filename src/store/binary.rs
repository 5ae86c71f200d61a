//! Binary-search line store
//!
//! Locates lines in a comparator-sorted buffer. A probed midpoint byte
//! offset almost never lands on a record boundary, so every probe reads and
//! discards the straddled tail of one record before reading the line that is
//! actually compared.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::content::ContentType;

use super::iter::LineIter;
use super::StoreCore;

/// Store over an alphabetically (comparator-) sorted line file
pub struct BinarySearchStore {
    core: StoreCore,
}

impl BinarySearchStore {
    /// Build a store over a fully loaded buffer.
    ///
    /// The buffer's lines must be totally ordered by the content type's
    /// comparator; lookups over an unsorted buffer are undefined.
    pub fn new(name: impl Into<String>, content: Arc<ContentType>, buffer: Buffer) -> Self {
        Self {
            core: StoreCore::new(name.into(), content, buffer),
        }
    }

    pub(crate) fn core(&self) -> &StoreCore {
        &self.core
    }

    /// Locate the line whose comparator key equals `key`.
    ///
    /// Probes the midpoint of a half-open byte range `[start, stop)`,
    /// discarding the straddled record at each probe. When a probe can no
    /// longer produce a real line the range has collapsed against the buffer
    /// tail, and the last record is reachable only by scanning forward from
    /// `start` — that scan is a required branch, not an optimization.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let comparator = self.core.content_comparator();
        let mut cursor = self.core.lock_cursor();

        let mut start = 0usize;
        let mut stop = cursor.limit();
        let mut midpoint = (start + stop) / 2;

        while start < midpoint || stop - start > 1 {
            midpoint = (start + stop) / 2;
            cursor.set_position(midpoint);
            let mut line = cursor.read_line();
            if midpoint > 0 {
                line = cursor.read_line();
            }

            let line = match line {
                Some(text) if !text.is_empty() => text,
                _ => {
                    // Probe window reached the buffer tail: scan forward to
                    // the last available line and compare that.
                    cursor.set_position(start);
                    let mut last = cursor.read_line();
                    while let Some(next) = cursor.read_line() {
                        last = Some(next);
                    }
                    return last.filter(|l| comparator.compare(l, key) == Ordering::Equal);
                }
            };

            match comparator.compare(&line, key) {
                Ordering::Equal => return Some(line),
                Ordering::Greater => stop = midpoint,
                Ordering::Less => start = midpoint,
            }
        }

        None
    }

    /// Position an iterator at the first line for `key`.
    ///
    /// Runs the same double-read search, but an exact comparator match is
    /// taken as the starting point immediately, and the offset of the most
    /// recently probed line that textually starts with `key` is tracked
    /// independently — comparator orders that are not plain prefix order
    /// (token-based comparators) do not reliably put the first prefix
    /// occurrence on the search path's convergence point.
    ///
    /// When the search exits without an exact match, the head of the prefix
    /// run can lie before the convergence point, off the probe path. A
    /// forward scan from `start` recovers it; the last probed prefix offset
    /// is kept as a secondary fallback for comparators under which a prefix
    /// line can sort before its key.
    pub(crate) fn find_first(&self, key: &str) -> LineIter {
        let comparator = self.core.content_comparator();
        let detector = self.core.detector();
        let mut cursor = self.core.fresh_cursor();

        let mut last_offset: Option<usize> = None;
        let mut start = 0usize;
        let mut stop = cursor.limit();

        while start + 1 < stop {
            let midpoint = (start + stop) / 2;
            cursor.set_position(midpoint);
            cursor.read_line();
            let offset = cursor.position();
            let line = match cursor.read_line() {
                Some(text) => text,
                None => {
                    // Probe ran off the end of the file
                    let limit = cursor.limit();
                    cursor.set_position(limit);
                    return LineIter::positioned(cursor, None, detector);
                }
            };

            match comparator.compare(&line, key) {
                // An exact match is the start of this key's run
                Ordering::Equal => return LineIter::positioned(cursor, Some(line), detector),
                Ordering::Greater => stop = midpoint,
                Ordering::Less => start = midpoint,
            }

            // A line starting with the key may be the first occurrence even
            // though the search narrowed past it
            if line.starts_with(key) {
                last_offset = Some(offset);
            }
        }

        // No exact match: scan forward from `start` for the head of the
        // prefix run. Lines before `start` sort strictly below the key, so
        // the scan cannot miss an earlier match; it stops once the order
        // passes the key without a prefix hit.
        cursor.set_position(start);
        if start > 0 {
            cursor.read_line();
        }
        while let Some(line) = cursor.read_line() {
            if line.starts_with(key) {
                return LineIter::positioned(cursor, Some(line), detector);
            }
            if comparator.compare(&line, key) == Ordering::Greater {
                break;
            }
        }

        // Secondary fallback: the last prefix match seen on the probe path
        if let Some(offset) = last_offset {
            cursor.set_position(offset);
            let first = cursor.read_line();
            return LineIter::positioned(cursor, first, detector);
        }

        let limit = cursor.limit();
        cursor.set_position(limit);
        LineIter::positioned(cursor, None, detector)
    }
}
