//! Grammatical word-class extraction over tagged documents
//!
//! Given a document that a part-of-speech tagger and dependency parser has
//! already annotated, this crate selects grammatically interesting token
//! subsets (cardinals, WH-words, nouns with optional dependency-role
//! filtering), locates the preposition governing a noun chunk, and merges
//! multi-token named entities into single tokens without corrupting
//! surrounding token indices.
//!
//! The tagging engine itself is injected behind the [`Tagger`] trait;
//! engines build validated documents through [`DocumentBuilder`].

#![warn(missing_docs)]

pub mod classify;
pub mod document;
pub mod error;
pub mod locate;
pub mod retokenize;
pub mod scheme;
pub mod tag;
pub mod tagger;
pub mod token;

// Re-export key types
pub use classify::{cardinals, nouns, wh_adverbs, wh_determiners, wh_pronouns, wh_words, Noun};
pub use document::{Chunk, Document, DocumentBuilder, Entity, Span};
pub use error::{CoreError, Result};
pub use locate::preceding_preposition;
#[allow(deprecated)]
pub use locate::previous_chunk;
pub use retokenize::{merge_entities, HeadAttrs, MergePolicy, Retokenizer};
pub use scheme::TagScheme;
pub use tag::{DepLabel, PosTag, TagClass};
pub use tagger::{Tagger, TaggerError};
pub use token::Token;
