//! The tagging-engine seam
//!
//! The crate never initializes or configures a parsing engine. Anything
//! that can assign fine-grained tags and dependency labels, and identify
//! sentences, noun chunks, and named entities, plugs in here by building
//! documents through [`DocumentBuilder`](crate::document::DocumentBuilder).

use crate::document::Document;
use thiserror::Error;

/// Failure reported by a tagging engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tagger failure: {message}")]
pub struct TaggerError {
    /// Engine-specific description of what went wrong
    pub message: String,
}

impl TaggerError {
    /// Wrap an engine-specific message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A part-of-speech tagging and dependency parsing engine
pub trait Tagger {
    /// Parse raw text into a tagged, annotated document
    fn tag_text(&self, text: &str) -> std::result::Result<Document, TaggerError>;
}
