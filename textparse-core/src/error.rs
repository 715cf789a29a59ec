//! Error types for loading and splitting documents

use thiserror::Error;

/// Errors raised while loading a document or reading interactive input
///
/// The enumeration is flat: every variant carries a message or the values
/// needed to describe the failure, never a nested source error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The input file could not be opened
    #[error("failed to open {path}: {reason}")]
    Open {
        /// Path that was being opened
        path: String,
        /// Description of the underlying failure
        reason: String,
    },

    /// The buffer for the input could not be reserved
    #[error("failed to allocate {requested} bytes for the input buffer")]
    Allocation {
        /// Number of bytes requested
        requested: usize,
    },

    /// Size query or read failed, or fewer bytes arrived than announced
    #[error("failed to read input: {0}")]
    Read(String),

    /// Interactive input exceeded the line capacity
    #[error("input line exceeds capacity of {capacity} bytes")]
    BufferOverflow {
        /// Capacity of the line buffer, including the terminator slot
        capacity: usize,
    },

    /// Interactive input ended before a newline was read
    #[error("end of input reached before a newline")]
    EndOfInput,

    /// A quoted token has no closing quote
    #[error("unmatched quote at byte offset {offset}")]
    MalformedInput {
        /// Offset of the opening quote
        offset: usize,
    },

    /// The collector found a different number of records than the tokenizer produced
    #[error("record count mismatch: tokenizer produced {expected}, collector found {found}")]
    RecordCountMismatch {
        /// Count reported by the tokenizer
        expected: usize,
        /// Count found by the collector
        found: usize,
    },

    /// Invalid split configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
