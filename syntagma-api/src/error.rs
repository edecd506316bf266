//! API error types

use syntagma_core::{CoreError, TaggerError};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Core classification or retokenization error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Tagging engine error
    #[error("tagger error: {0}")]
    Tagger(#[from] TaggerError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
