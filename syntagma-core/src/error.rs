//! Core error types

use thiserror::Error;

/// Errors raised by document construction, lookup, and retokenization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Chunk lookup by value found no matching member
    #[error("chunk not found in chunk sequence")]
    ChunkNotFound,

    /// A token range does not fit the document
    #[error("token range {start}..{end} out of bounds for document of {len} tokens")]
    RangeOutOfBounds {
        /// Start of the offending range
        start: usize,
        /// End of the offending range (exclusive)
        end: usize,
        /// Number of tokens in the document
        len: usize,
    },

    /// A chunk root lies outside the chunk's own range
    #[error("root index {root} outside chunk range {start}..{end}")]
    RootOutsideChunk {
        /// The root token index
        root: usize,
        /// Start of the chunk range
        start: usize,
        /// End of the chunk range (exclusive)
        end: usize,
    },

    /// Two entity spans share at least one token
    #[error("entity at position {index} overlaps its predecessor")]
    OverlappingEntities {
        /// Position of the second entity in document order
        index: usize,
    },

    /// Tag scheme failed validation or parsing
    #[error("invalid tag scheme: {0}")]
    Scheme(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
