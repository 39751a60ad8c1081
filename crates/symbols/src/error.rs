//! Error types for the symbols crate
//!
//! Interning text and reading a symbol's name cannot fail. The only fallible
//! entry point is interning from raw bytes, which must be valid UTF-8.

use thiserror::Error;

/// Error type for symbol interning operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The byte buffer handed to `try_intern_utf8` is not UTF-8
    #[error("Symbol name is not valid UTF-8 (first invalid byte at offset {})", .0.valid_up_to())]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;
