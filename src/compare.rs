//! Line comparison and comment detection strategies
//!
//! Each content category injects its own total order over lines (used only
//! by binary search) and its own comment predicate (used only during
//! sequential iteration). The comparators here cover the standard WordNet
//! line formats; callers with custom formats can supply their own
//! implementations of the two traits.

use std::cmp::Ordering;

/// Total order between a stored line and a search key.
///
/// Binary-search stores require that the underlying file is sorted by this
/// order; violating that yields undefined lookup results, not merely slow
/// ones.
pub trait LineComparator: Send + Sync {
    /// Compare a full line from the file against a search key
    fn compare(&self, line: &str, key: &str) -> Ordering;
}

/// Predicate classifying a raw line as a comment.
///
/// Consulted only while iterating; point lookups never filter comments, so a
/// comment line that happens to match a key exactly is a legitimate lookup
/// result.
pub trait CommentDetector: Send + Sync {
    fn is_comment_line(&self, line: &str) -> bool;
}

/// Returns the leading whitespace-delimited token of a line
fn first_token(line: &str) -> &str {
    match line.find(char::is_whitespace) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

// =============================================================================
// Standard comparators
// =============================================================================

/// Comparator for index files: orders by the leading lemma token
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexLineComparator;

impl LineComparator for IndexLineComparator {
    fn compare(&self, line: &str, key: &str) -> Ordering {
        first_token(line).cmp(key)
    }
}

/// Comparator for data files: orders by the leading zero-padded offset field.
///
/// Offsets are fixed-width decimal strings, so lexicographic comparison of
/// the leading token coincides with numeric order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataLineComparator;

impl LineComparator for DataLineComparator {
    fn compare(&self, line: &str, key: &str) -> Ordering {
        first_token(line).cmp(key)
    }
}

/// Comparator for exception lists: orders by the leading surface form
#[derive(Debug, Default, Clone, Copy)]
pub struct ExceptionLineComparator;

impl LineComparator for ExceptionLineComparator {
    fn compare(&self, line: &str, key: &str) -> Ordering {
        first_token(line).cmp(key)
    }
}

// =============================================================================
// Standard comment detector
// =============================================================================

/// Detects the license-header comment lines found at the top of WordNet
/// files, which begin with two spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentProcessor;

impl CommentDetector for CommentProcessor {
    fn is_comment_line(&self, line: &str) -> bool {
        line.starts_with("  ")
    }
}
