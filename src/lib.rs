//! # lexfile
//!
//! An in-memory, line-oriented index over flat dictionary text files, with:
//! - Binary-search lookup over comparator-sorted line files
//! - Direct byte-offset lookup for offset-keyed data files
//! - Lazy look-ahead iteration with comment-line filtering
//! - Self-validating source construction with automatic fallback
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     FileProvider                            │
//! │     (discovers files, classifies by content type,           │
//! │      selects and validates the store variant)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ BinarySearch│          │ DirectAccess│
//!   │    Store    │          │    Store    │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          └────────────┬───────────┘
//!                       ▼
//!               ┌─────────────┐
//!               │   Buffer    │
//!               │  (Bytes +   │
//!               │   Cursors)  │
//!               └─────────────┘
//! ```
//!
//! All data is loaded once, before any lookup; the buffer is immutable for
//! the life of the store. Point lookups serialize on a shared cursor, while
//! iterators run on private duplicate views and never contend.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod buffer;
pub mod compare;
pub mod content;
pub mod provider;
pub mod store;
pub mod version;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use buffer::{Buffer, Cursor};
pub use compare::{CommentDetector, LineComparator};
pub use config::Config;
pub use content::{ContentType, DataKind, POS};
pub use error::{LexError, Result};
pub use provider::FileProvider;
pub use store::{LineIter, LineStore};
pub use version::Version;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the lexfile crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
