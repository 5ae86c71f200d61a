//! Error types for lexfile
//!
//! Provides a unified error type for all operations.
//!
//! Lookup misses are deliberately *not* errors: a key that does not resolve
//! to a line is an `Option::None` at the store level. Errors here are
//! reserved for I/O failures and provider misuse.

use thiserror::Error;

/// Result type alias using LexError
pub type Result<T> = std::result::Result<T, LexError>;

/// Unified error type for lexfile operations
#[derive(Debug, Error)]
pub enum LexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Provider Errors
    // -------------------------------------------------------------------------
    #[error("Data provider is not open")]
    NotOpen,

    #[error("Provider error: {0}")]
    Provider(String),
}
