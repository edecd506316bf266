//! The atomic token unit

use crate::tag::{DepLabel, PosTag};
use serde::{Deserialize, Serialize};

/// A single tagged token inside a document
///
/// Tokens are owned by their document and never cross document boundaries.
/// The index is maintained by the document arena; it is unique, gapless,
/// and strictly increasing in surface order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    index: usize,
    text: String,
    trailing_space: bool,
    tag: PosTag,
    dep: DepLabel,
}

impl Token {
    /// Create a token
    pub fn new(
        index: usize,
        text: impl Into<String>,
        trailing_space: bool,
        tag: PosTag,
        dep: DepLabel,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            trailing_space,
            tag,
            dep,
        }
    }

    /// Zero-based position within the owning document
    pub fn index(&self) -> usize {
        self.index
    }

    /// Surface text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a space followed this token in the original text
    pub fn trailing_space(&self) -> bool {
        self.trailing_space
    }

    /// Surface text plus its original trailing whitespace, if any
    pub fn text_with_ws(&self) -> String {
        if self.trailing_space {
            format!("{} ", self.text)
        } else {
            self.text.clone()
        }
    }

    /// Fine-grained part-of-speech tag
    pub fn tag(&self) -> &PosTag {
        &self.tag
    }

    /// Dependency-relation label
    pub fn dep(&self) -> &DepLabel {
        &self.dep
    }

    pub(crate) fn shift_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn clear_trailing_space(&mut self) {
        self.trailing_space = false;
    }
}
