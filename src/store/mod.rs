//! Line stores
//!
//! The per-category indexed view over one resident buffer, offering point
//! lookup and lazy iteration. Two variants exist, selected once at
//! construction by the provider:
//!
//! - [`BinarySearchStore`] — comparator-guided binary search over sorted
//!   line files
//! - [`DirectAccessStore`] — byte-offset addressing for offset-keyed data
//!   files
//!
//! [`LineStore`] is the tagged variant both are consumed through, so callers
//! get a uniform contract without virtual dispatch.

mod binary;
mod direct;
mod iter;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::buffer::{Buffer, Cursor};
use crate::compare::{CommentDetector, LineComparator};
use crate::content::ContentType;
use crate::version::{extract_version, Version};

pub use binary::BinarySearchStore;
pub use direct::DirectAccessStore;
pub use iter::LineIter;

// =============================================================================
// Shared store state
// =============================================================================

/// State common to both store variants: the resident buffer, the content
/// category it was built for, the shared default cursor used by point
/// lookups, and the version extracted once at construction.
pub(crate) struct StoreCore {
    name: String,
    content: Arc<ContentType>,
    buffer: Buffer,
    /// Shared default cursor. Point lookups hold this lock for their entire
    /// probe sequence; iterators never touch it.
    cursor: Mutex<Cursor>,
    version: Option<Version>,
}

impl StoreCore {
    pub(crate) fn new(name: String, content: Arc<ContentType>, buffer: Buffer) -> Self {
        let version = extract_version(&content, &buffer);
        let cursor = Mutex::new(buffer.cursor());
        Self {
            name,
            content,
            buffer,
            cursor,
            version,
        }
    }

    pub(crate) fn lock_cursor(&self) -> parking_lot::MutexGuard<'_, Cursor> {
        self.cursor.lock()
    }

    pub(crate) fn fresh_cursor(&self) -> Cursor {
        self.buffer.cursor()
    }

    pub(crate) fn detector(&self) -> Option<Arc<dyn CommentDetector>> {
        self.content.detector().cloned()
    }

    pub(crate) fn content_comparator(&self) -> Arc<dyn LineComparator> {
        self.content.comparator().clone()
    }

    /// Full scan from the start of the buffer, comments filtered
    pub(crate) fn iter(&self) -> LineIter {
        LineIter::from_start(self.fresh_cursor(), self.detector())
    }
}

// =============================================================================
// LineStore
// =============================================================================

/// A per-category line store, one of the two lookup strategies.
///
/// The variant is fixed at construction; every operation below behaves
/// identically from the caller's point of view, modulo the key semantics
/// (comparator key vs. decimal byte offset).
pub enum LineStore {
    BinarySearch(BinarySearchStore),
    DirectAccess(DirectAccessStore),
}

impl LineStore {
    fn core(&self) -> &StoreCore {
        match self {
            LineStore::BinarySearch(store) => store.core(),
            LineStore::DirectAccess(store) => store.core(),
        }
    }

    /// Locate the line matching `key`, or `None`.
    ///
    /// Concurrent calls on the same store serialize on the shared default
    /// cursor. Comment lines are eligible results; point lookup never
    /// consults the comment predicate.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match self {
            LineStore::BinarySearch(store) => store.lookup(key),
            LineStore::DirectAccess(store) => store.lookup(key),
        }
    }

    /// Iterate every non-comment line from the start of the buffer.
    ///
    /// Each call produces a fresh single-use iterator over a private
    /// duplicate cursor; open iterators never contend with lookups or with
    /// each other.
    pub fn iter(&self) -> LineIter {
        self.core().iter()
    }

    /// Iterate starting at the position `key` resolves to.
    ///
    /// An empty or all-whitespace key is equivalent to [`iter`](Self::iter).
    /// Positioning is variant-specific; iteration is NOT bounded to lines
    /// matching `key` — callers test each yielded line and stop themselves.
    pub fn iter_from(&self, key: &str) -> LineIter {
        let key = key.trim();
        if key.is_empty() {
            return self.iter();
        }
        match self {
            LineStore::BinarySearch(store) => store.find_first(key),
            LineStore::DirectAccess(store) => store.find_first(key),
        }
    }

    /// Version metadata extracted from the file header at construction
    pub fn version(&self) -> Option<&Version> {
        self.core().version.as_ref()
    }

    /// The file name this store was built from
    pub fn name(&self) -> &str {
        &self.core().name
    }

    /// The content category this store serves
    pub fn content_type(&self) -> &Arc<ContentType> {
        &self.core().content
    }
}
