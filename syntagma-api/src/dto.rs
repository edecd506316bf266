//! Data Transfer Objects for API
//!
//! Owned snapshots of classification results, detached from the borrowed
//! core types so callers can hold them after the document moves on.

use syntagma_core::{Noun, Span, Token};

/// Owned snapshot of a single token
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenInfo {
    /// Position in the document at snapshot time
    pub index: usize,
    /// Surface text
    pub text: String,
    /// Fine-grained tag code
    pub tag: String,
    /// Dependency-relation code
    pub dep: String,
}

impl From<&Token> for TokenInfo {
    fn from(token: &Token) -> Self {
        Self {
            index: token.index(),
            text: token.text().to_string(),
            tag: token.tag().code().to_string(),
            dep: token.dep().code().to_string(),
        }
    }
}

/// Owned snapshot of a classified noun
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NounInfo {
    /// Dependency code of the noun token
    pub dep: String,
    /// Whether the token's text equals its chunk root's text
    pub is_root: bool,
    /// The underlying token
    pub token: TokenInfo,
}

impl From<&Noun<'_>> for NounInfo {
    fn from(noun: &Noun<'_>) -> Self {
        Self {
            dep: noun.dep.code().to_string(),
            is_root: noun.is_root,
            token: TokenInfo::from(noun.token),
        }
    }
}

/// Per-chunk classification results
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkAnalysis {
    /// The chunk's token range at snapshot time
    pub span: Span,
    /// Nouns found in the chunk, under the configured dependency filters
    pub nouns: Vec<NounInfo>,
    /// Preposition immediately governing the chunk, if any
    pub preposition: Option<TokenInfo>,
}

/// Per-sentence classification results
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceAnalysis {
    /// The sentence's token range at snapshot time
    pub span: Span,
    /// WH-words of the sentence, in surface order
    pub wh_words: Vec<TokenInfo>,
    /// Cardinal numbers of the sentence, in surface order
    pub cardinals: Vec<TokenInfo>,
    /// Noun chunks lying inside the sentence
    pub chunks: Vec<ChunkAnalysis>,
}

/// Complete analysis of a document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// One entry per sentence, in surface order
    pub sentences: Vec<SentenceAnalysis>,
}

impl Analysis {
    /// All WH-words across the document, in surface order
    pub fn wh_words(&self) -> impl Iterator<Item = &TokenInfo> + '_ {
        self.sentences.iter().flat_map(|sentence| sentence.wh_words.iter())
    }

    /// All cardinal numbers across the document, in surface order
    pub fn cardinals(&self) -> impl Iterator<Item = &TokenInfo> + '_ {
        self.sentences.iter().flat_map(|sentence| sentence.cardinals.iter())
    }
}
