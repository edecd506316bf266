//! Public API for syntagma grammatical word-class extraction
//!
//! This crate provides a stable interface over the core classifiers: an
//! [`Analyzer`] drives an injected [`Tagger`], merges named entities into
//! single tokens, runs the word-class selectors per sentence and noun
//! chunk, and returns owned result DTOs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use syntagma_core::{cardinals, merge_entities, nouns, preceding_preposition, wh_words};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Analysis, ChunkAnalysis, NounInfo, SentenceAnalysis, TokenInfo};
pub use error::{ApiError, Result};

// Re-export from core for convenience
pub use syntagma_core::{
    Chunk, Document, DocumentBuilder, Entity, Span, TagScheme, Tagger, TaggerError, Token,
};

/// Main entry point for document analysis
///
/// Wraps a tagging engine and a [`Config`]; every call produces owned DTOs
/// so the borrowed core types never escape the analysis pass.
pub struct Analyzer<T: Tagger> {
    tagger: T,
    config: Config,
}

impl<T: Tagger> Analyzer<T> {
    /// Create an analyzer with default configuration
    pub fn new(tagger: T) -> Self {
        Self::with_config(tagger, Config::default())
    }

    /// Create an analyzer with custom configuration
    pub fn with_config(tagger: T, config: Config) -> Self {
        Self { tagger, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tag raw text and analyze the resulting document
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut document = self.tagger.tag_text(text)?;
        self.analyze_document(&mut document)
    }

    /// Analyze a document the caller already holds
    ///
    /// With entity merging enabled (the default), the document is
    /// retokenized sentence by sentence first; that mutation is why the
    /// document is taken mutably even though classification itself only
    /// reads.
    pub fn analyze_document(&self, document: &mut Document) -> Result<Analysis> {
        if self.config.merge_entities {
            for index in 0..document.sentences().len() {
                let sentence = document.sentences()[index];
                merge_entities(document, sentence)?;
            }
        }

        let filters: Vec<&str> = self
            .config
            .noun_dependencies
            .iter()
            .map(String::as_str)
            .collect();

        let sentences = document
            .sentences()
            .iter()
            .map(|&sentence| {
                let tokens = document.span_tokens(sentence);
                let chunks = document
                    .chunks()
                    .iter()
                    .filter(|chunk| sentence.contains_span(&chunk.span))
                    .map(|chunk| ChunkAnalysis {
                        span: chunk.span,
                        nouns: nouns(document, chunk, &filters)
                            .iter()
                            .map(NounInfo::from)
                            .collect(),
                        preposition: preceding_preposition(document, sentence, chunk)
                            .map(TokenInfo::from),
                    })
                    .collect();

                SentenceAnalysis {
                    span: sentence,
                    wh_words: wh_words(tokens).into_iter().map(TokenInfo::from).collect(),
                    cardinals: cardinals(tokens).into_iter().map(TokenInfo::from).collect(),
                    chunks,
                }
            })
            .collect();

        Ok(Analysis { sentences })
    }
}

/// Analyze text with a given tagger and default configuration
pub fn analyze_text<T: Tagger>(tagger: T, text: &str) -> Result<Analysis> {
    Analyzer::new(tagger).analyze(text)
}
