//! Content categories
//!
//! A content type is a part-of-speech × record-kind pairing. It owns the
//! comparator and comment predicate its file is read with, and the file-name
//! hint patterns the provider uses to discover which file backs it.

use std::fmt;
use std::sync::Arc;

use crate::compare::{
    CommentDetector, CommentProcessor, DataLineComparator, ExceptionLineComparator,
    IndexLineComparator, LineComparator,
};

/// Width of the zero-padded byte offsets keying data files
const OFFSET_WIDTH: usize = 8;

/// Encode a byte offset in the canonical zero-padded form used as a
/// data-file key ("18" → "00000018")
pub fn zero_fill_offset(offset: u64) -> String {
    format!("{:0width$}", offset, width = OFFSET_WIDTH)
}

// =============================================================================
// Part of Speech
// =============================================================================

/// Grammatical categories the standard dictionary files are split by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum POS {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl POS {
    /// All parts of speech, in canonical order
    pub const ALL: [POS; 4] = [POS::Noun, POS::Verb, POS::Adjective, POS::Adverb];

    /// File-name fragments hinting that a file holds this part of speech
    pub fn resource_name_hints(&self) -> &'static [&'static str] {
        match self {
            POS::Noun => &["noun"],
            POS::Verb => &["verb"],
            POS::Adjective => &["adj"],
            POS::Adverb => &["adv"],
        }
    }
}

impl fmt::Display for POS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            POS::Noun => "noun",
            POS::Verb => "verb",
            POS::Adjective => "adjective",
            POS::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Data Kind
// =============================================================================

/// Record kinds the dictionary is composed of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Lemma-sorted index files, searched by binary search
    Index,
    /// Offset-keyed data files, addressed directly by byte offset
    Data,
    /// Morphological exception lists, searched by binary search
    Exception,
}

impl DataKind {
    /// File-name fragments hinting that a file holds this kind of record
    pub fn resource_name_hints(&self) -> &'static [&'static str] {
        match self {
            DataKind::Index => &["index", "idx"],
            DataKind::Data => &["data", "dat"],
            DataKind::Exception => &["exc"],
        }
    }

    /// Whether records of this kind are keyed by their own byte offset,
    /// making the file eligible for direct access
    pub fn is_offset_keyed(&self) -> bool {
        matches!(self, DataKind::Data)
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataKind::Index => "index",
            DataKind::Data => "data",
            DataKind::Exception => "exception",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Content Type
// =============================================================================

/// A content category: the pairing that determines which comparator, comment
/// rule, and file a line store is built from.
pub struct ContentType {
    pos: Option<POS>,
    kind: DataKind,
    comparator: Arc<dyn LineComparator>,
    detector: Option<Arc<dyn CommentDetector>>,
}

impl ContentType {
    /// Build a content type with caller-supplied strategies
    pub fn new(
        pos: Option<POS>,
        kind: DataKind,
        comparator: Arc<dyn LineComparator>,
        detector: Option<Arc<dyn CommentDetector>>,
    ) -> Self {
        Self {
            pos,
            kind,
            comparator,
            detector,
        }
    }

    /// The standard content type set: index, data, and exception files for
    /// every part of speech, with the stock comparators and the license
    /// comment detector on index and data files.
    pub fn standard() -> Vec<Arc<ContentType>> {
        let mut types: Vec<Arc<ContentType>> = Vec::with_capacity(POS::ALL.len() * 3);
        for pos in POS::ALL {
            types.push(Arc::new(ContentType::new(
                Some(pos),
                DataKind::Index,
                Arc::new(IndexLineComparator),
                Some(Arc::new(CommentProcessor)),
            )));
            types.push(Arc::new(ContentType::new(
                Some(pos),
                DataKind::Data,
                Arc::new(DataLineComparator),
                Some(Arc::new(CommentProcessor)),
            )));
            types.push(Arc::new(ContentType::new(
                Some(pos),
                DataKind::Exception,
                Arc::new(ExceptionLineComparator),
                None,
            )));
        }
        types
    }

    pub fn pos(&self) -> Option<POS> {
        self.pos
    }

    pub fn kind(&self) -> DataKind {
        self.kind
    }

    pub fn comparator(&self) -> &Arc<dyn LineComparator> {
        &self.comparator
    }

    pub fn detector(&self) -> Option<&Arc<dyn CommentDetector>> {
        self.detector.as_ref()
    }

    /// Identity key used to register and look up sources in a provider
    pub fn key(&self) -> (Option<POS>, DataKind) {
        (self.pos, self.kind)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) => write!(f, "{}/{}", pos, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl fmt::Debug for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentType")
            .field("pos", &self.pos)
            .field("kind", &self.kind)
            .finish()
    }
}
