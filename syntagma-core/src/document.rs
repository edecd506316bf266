//! Document arena and its span views
//!
//! A [`Document`] owns an indexed token arena together with the sentence,
//! noun-chunk, and named-entity spans the tagger identified, plus the
//! [`TagScheme`] the tokens were classified under. Spans are plain index
//! ranges resolved against the document at use time, so a span observes
//! whatever the arena currently holds.

use crate::error::{CoreError, Result};
use crate::scheme::TagScheme;
use crate::tag::{DepLabel, PosTag};
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Half-open token-index range, document-relative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Index of the first token
    pub start: usize,
    /// One past the index of the last token
    pub end: usize,
}

impl Span {
    /// Create a span over `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Does the span cover no tokens?
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Does the span cover the given token index?
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Does the span fully cover `other`?
    pub fn contains_span(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A contiguous token span with a designated root (head) token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Covered token range
    pub span: Span,
    /// Index of the syntactic head; always a member of `span`
    pub root: usize,
}

impl Chunk {
    /// Create a chunk rooted at `root`
    pub fn new(span: Span, root: usize) -> Self {
        debug_assert!(span.contains(root), "chunk root must be a member of the chunk");
        Self { span, root }
    }
}

/// A named-entity span
///
/// Only the boundaries drive retokenization; the label is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Covered token range
    pub span: Span,
    /// Entity type label as assigned by the recognizer
    pub label: String,
}

impl Entity {
    /// Create an entity over `span`
    pub fn new(span: Span, label: impl Into<String>) -> Self {
        Self {
            span,
            label: label.into(),
        }
    }
}

/// An ordered, indexed token arena with its annotated spans
///
/// Constructed through [`DocumentBuilder`], which re-checks every invariant
/// the rest of the crate relies on. Mutable only through
/// [`Document::retokenize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) tokens: Vec<Token>,
    pub(crate) sentences: Vec<Span>,
    pub(crate) chunks: Vec<Chunk>,
    pub(crate) entities: Vec<Entity>,
    pub(crate) scheme: TagScheme,
}

impl Document {
    /// Start building a document under the default tag scheme
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Start building a document under a custom tag scheme
    pub fn builder_with_scheme(scheme: TagScheme) -> DocumentBuilder {
        DocumentBuilder::with_scheme(scheme)
    }

    /// All tokens in surface order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Does the document hold no tokens?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at the given index, if any
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The tokens a span currently observes
    ///
    /// A stale or out-of-range span resolves to an empty slice.
    pub fn span_tokens(&self, span: Span) -> &[Token] {
        self.tokens.get(span.start..span.end).unwrap_or(&[])
    }

    /// Sentence spans in surface order
    pub fn sentences(&self) -> &[Span] {
        &self.sentences
    }

    /// Noun-chunk spans in surface order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Named-entity spans in surface order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities lying fully inside the given sentence
    pub fn sentence_entities(&self, sentence: Span) -> impl Iterator<Item = &Entity> + '_ {
        self.entities
            .iter()
            .filter(move |entity| sentence.contains_span(&entity.span))
    }

    /// The root token of a chunk, if the chunk resolves in this document
    pub fn root_token(&self, chunk: &Chunk) -> Option<&Token> {
        self.tokens.get(chunk.root)
    }

    /// The tag scheme this document was classified under
    pub fn scheme(&self) -> &TagScheme {
        &self.scheme
    }

    /// Reassembled surface text, with original inter-token spacing
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (position, token) in self.tokens.iter().enumerate() {
            if position + 1 == self.tokens.len() {
                text.push_str(token.text());
            } else {
                text.push_str(&token.text_with_ws());
            }
        }
        text
    }
}

/// Builder assembling a validated [`Document`]
///
/// Token indices are assigned in push order, which makes the contiguity
/// invariant true by construction; span bounds, chunk roots, and entity
/// ordering are checked in [`DocumentBuilder::build`].
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    scheme: TagScheme,
    tokens: Vec<Token>,
    sentences: Vec<Span>,
    chunks: Vec<Chunk>,
    entities: Vec<Entity>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Builder under the default tag scheme
    pub fn new() -> Self {
        Self::with_scheme(TagScheme::default())
    }

    /// Builder under a custom tag scheme
    pub fn with_scheme(scheme: TagScheme) -> Self {
        Self {
            scheme,
            tokens: Vec::new(),
            sentences: Vec::new(),
            chunks: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Append a token, classified under the builder's scheme
    ///
    /// The token is assumed to be followed by a space; call
    /// [`DocumentBuilder::no_trailing_space`] to undo that for tokens glued
    /// to their successor (e.g. before punctuation).
    pub fn token(mut self, text: impl Into<String>, tag_code: &str, dep_code: &str) -> Self {
        let index = self.tokens.len();
        self.tokens.push(Token::new(
            index,
            text,
            true,
            PosTag::classified(tag_code, &self.scheme),
            DepLabel::new(dep_code),
        ));
        self
    }

    /// Mark the most recently pushed token as glued to its successor
    pub fn no_trailing_space(mut self) -> Self {
        if let Some(last) = self.tokens.last_mut() {
            last.clear_trailing_space();
        }
        self
    }

    /// Record a sentence span over `start..end`
    pub fn sentence(mut self, start: usize, end: usize) -> Self {
        self.sentences.push(Span::new(start, end));
        self
    }

    /// Record a noun chunk over `start..end` rooted at `root`
    pub fn chunk(mut self, start: usize, end: usize, root: usize) -> Self {
        self.chunks.push(Chunk {
            span: Span::new(start, end),
            root,
        });
        self
    }

    /// Record a named entity over `start..end`
    pub fn entity(mut self, start: usize, end: usize, label: impl Into<String>) -> Self {
        self.entities.push(Entity::new(Span::new(start, end), label));
        self
    }

    /// Validate every recorded span and produce the document
    pub fn build(mut self) -> Result<Document> {
        let len = self.tokens.len();

        for span in self.sentences.iter().chain(self.entities.iter().map(|e| &e.span)) {
            check_span(*span, len)?;
        }
        for chunk in &self.chunks {
            check_span(chunk.span, len)?;
            if !chunk.span.contains(chunk.root) {
                return Err(CoreError::RootOutsideChunk {
                    root: chunk.root,
                    start: chunk.span.start,
                    end: chunk.span.end,
                });
            }
        }

        self.entities.sort_by_key(|entity| entity.span.start);
        for index in 1..self.entities.len() {
            if self.entities[index].span.start < self.entities[index - 1].span.end {
                return Err(CoreError::OverlappingEntities { index });
            }
        }

        Ok(Document {
            tokens: self.tokens,
            sentences: self.sentences,
            chunks: self.chunks,
            entities: self.entities,
            scheme: self.scheme,
        })
    }
}

fn check_span(span: Span, len: usize) -> Result<()> {
    if span.start > span.end || span.end > len {
        return Err(CoreError::RangeOutOfBounds {
            start: span.start,
            end: span.end,
            len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_token_builder() -> DocumentBuilder {
        Document::builder()
            .token("New", "NNP", "compound")
            .token("York", "NNP", "nsubj")
    }

    #[test]
    fn indices_are_gapless_and_increasing() {
        let doc = two_token_builder().build().unwrap();
        for (position, token) in doc.tokens().iter().enumerate() {
            assert_eq!(token.index(), position);
        }
    }

    #[test]
    fn out_of_bounds_sentence_is_rejected() {
        let err = two_token_builder().sentence(0, 3).build().unwrap_err();
        assert_eq!(
            err,
            CoreError::RangeOutOfBounds {
                start: 0,
                end: 3,
                len: 2
            }
        );
    }

    #[test]
    fn root_outside_chunk_is_rejected() {
        let err = two_token_builder().chunk(0, 1, 1).build().unwrap_err();
        assert!(matches!(err, CoreError::RootOutsideChunk { root: 1, .. }));
    }

    #[test]
    fn overlapping_entities_are_rejected() {
        let err = two_token_builder()
            .token("City", "NNP", "appos")
            .entity(0, 2, "GPE")
            .entity(1, 3, "GPE")
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::OverlappingEntities { index: 1 }));
    }

    #[test]
    fn text_preserves_spacing() {
        let doc = Document::builder()
            .token("Which", "WDT", "det")
            .token("river", "NN", "nsubj")
            .no_trailing_space()
            .token("?", ".", "punct")
            .build()
            .unwrap();
        assert_eq!(doc.text(), "Which river?");
    }

    #[test]
    fn stale_span_resolves_to_empty_slice() {
        let doc = two_token_builder().build().unwrap();
        assert!(doc.span_tokens(Span::new(5, 9)).is_empty());
    }
}
