//! Look-ahead line iterator
//!
//! A forward-only cursor that precomputes the next value, so `has_next` is
//! side-effect-free. Comment lines are skipped during advancement; the
//! initial value established by a find-start strategy is taken as-is.

use std::sync::Arc;

use crate::buffer::Cursor;
use crate::compare::CommentDetector;

/// Single-use, forward-only iterator over the lines of a store.
///
/// Owns a private duplicate cursor, so concurrently open iterators over the
/// same store are fully independent. Exhaustion is terminal: once `next`
/// returns `None` it returns `None` forever.
pub struct LineIter {
    cursor: Cursor,
    detector: Option<Arc<dyn CommentDetector>>,
    next: Option<String>,
}

impl LineIter {
    /// Start scanning from the beginning of the buffer, with comment
    /// filtering applied from the first line on
    pub(crate) fn from_start(
        mut cursor: Cursor,
        detector: Option<Arc<dyn CommentDetector>>,
    ) -> Self {
        cursor.set_position(0);
        let mut iter = Self {
            cursor,
            detector,
            next: None,
        };
        iter.advance();
        iter
    }

    /// Start at a position established by a find-start strategy.
    ///
    /// `first` was already read by the strategy and is yielded verbatim,
    /// without comment filtering; `None` produces an iterator that is
    /// exhausted from the outset.
    pub(crate) fn positioned(
        cursor: Cursor,
        first: Option<String>,
        detector: Option<Arc<dyn CommentDetector>>,
    ) -> Self {
        Self {
            cursor,
            detector,
            next: first,
        }
    }

    /// Whether a call to `next` would yield a value
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Read forward to the next non-comment line (or end-of-buffer) and
    /// stash it as the pending value
    fn advance(&mut self) {
        loop {
            let line = self.cursor.read_line();
            if let (Some(text), Some(detector)) = (&line, &self.detector) {
                if detector.is_comment_line(text) {
                    continue;
                }
            }
            self.next = line;
            return;
        }
    }
}

impl Iterator for LineIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.next.take()?;
        self.advance();
        Some(line)
    }
}
