//! Entity retokenization
//!
//! Collapses multi-token named-entity spans into single tokens. The merge
//! primitive rebuilds the token arena in a single pass and renumbers every
//! recorded span, so the index-contiguity invariant holds again before the
//! next merge is attempted.

use crate::document::{Document, Entity, Span};
use crate::error::{CoreError, Result};
use crate::tag::{DepLabel, PosTag};
use crate::token::Token;
use smallvec::SmallVec;

/// Derives the attributes of a merged token
pub trait MergePolicy {
    /// Tag and dependency label for the token replacing `tokens`
    ///
    /// Called with the tokens being merged; the slice holds at least two
    /// tokens.
    fn merged_attrs(&self, tokens: &[Token]) -> (PosTag, DepLabel);
}

/// Default merge policy: the span-final token's attributes
///
/// For English entity spans the final token is usually the syntactic head.
/// Engines that track real head indices can substitute their own policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadAttrs;

impl MergePolicy for HeadAttrs {
    fn merged_attrs(&self, tokens: &[Token]) -> (PosTag, DepLabel) {
        let head = &tokens[tokens.len() - 1];
        (head.tag().clone(), head.dep().clone())
    }
}

/// Scoped retokenization transaction
///
/// Holds the document exclusively for its lifetime, so no reader can
/// observe the arena mid-merge. Each [`Retokenizer::merge`] applies
/// immediately and leaves the document consistent before the next merge
/// is attempted.
pub struct Retokenizer<'d> {
    document: &'d mut Document,
    policy: Box<dyn MergePolicy>,
}

impl Document {
    /// Open a retokenization transaction with the default merge policy
    pub fn retokenize(&mut self) -> Retokenizer<'_> {
        Retokenizer {
            document: self,
            policy: Box::new(HeadAttrs),
        }
    }
}

impl<'d> Retokenizer<'d> {
    /// Replace the default merge policy
    pub fn with_policy(mut self, policy: Box<dyn MergePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// The entities as the transaction currently sees them
    pub fn entities(&self) -> &[Entity] {
        &self.document.entities
    }

    /// Current (renumbered) span of the entity at `index`, if any
    pub fn entity_span(&self, index: usize) -> Option<Span> {
        self.document.entities.get(index).map(|entity| entity.span)
    }

    /// Collapse one contiguous token span into a single token
    ///
    /// The merged token occupies `span.start`; its surface text is the
    /// concatenation of the merged tokens with their original inter-token
    /// spacing, and its tag and dependency label come from the merge
    /// policy. Tokens merged away are destroyed. Spans of length zero or
    /// one are a no-op.
    pub fn merge(&mut self, span: Span) -> Result<()> {
        let len = self.document.tokens.len();
        if span.start > span.end || span.end > len {
            return Err(CoreError::RangeOutOfBounds {
                start: span.start,
                end: span.end,
                len,
            });
        }
        if span.len() <= 1 {
            return Ok(());
        }
        let removed = span.len() - 1;

        let merged_tokens = &self.document.tokens[span.start..span.end];
        let (tag, dep) = self.policy.merged_attrs(merged_tokens);

        let mut text = String::new();
        for token in &merged_tokens[..removed] {
            text.push_str(&token.text_with_ws());
        }
        let last = &merged_tokens[removed];
        text.push_str(last.text());
        let trailing_space = last.trailing_space();

        log::debug!("merging tokens {}..{} into {text:?}", span.start, span.end);

        // Single-pass arena rebuild
        let old = std::mem::take(&mut self.document.tokens);
        let mut rebuilt = Vec::with_capacity(len - removed);
        let mut merged = Some(Token::new(span.start, text, trailing_space, tag, dep));
        for (index, mut token) in old.into_iter().enumerate() {
            if index == span.start {
                if let Some(token) = merged.take() {
                    rebuilt.push(token);
                }
                continue;
            }
            if span.contains(index) {
                continue;
            }
            if index >= span.end {
                token.shift_index(index - removed);
            }
            rebuilt.push(token);
        }
        self.document.tokens = rebuilt;

        for sentence in &mut self.document.sentences {
            *sentence = remap_span(*sentence, span, removed);
        }
        for chunk in &mut self.document.chunks {
            chunk.span = remap_span(chunk.span, span, removed);
            chunk.root = remap_index(chunk.root, span, removed);
        }
        for entity in &mut self.document.entities {
            entity.span = remap_span(entity.span, span, removed);
        }

        Ok(())
    }
}

impl std::fmt::Debug for Retokenizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retokenizer")
            .field("tokens", &self.document.tokens.len())
            .field("entities", &self.document.entities.len())
            .finish()
    }
}

/// Merge every named entity of a sentence into a single token
///
/// One merge per entity, inside one transaction covering the sentence; the
/// entity's current range is re-read after the renumbering of previous
/// merges. A second invocation over the same sentence is a no-op, since
/// every entity is single-token by then. Spans held by the caller are
/// invalidated; re-read sentences and chunks from the document afterwards.
///
/// Overlapping entity spans are a caller precondition violation; the
/// outcome of such a pass is unspecified. Tokens outside the target
/// sentence keep their surface order, though their indices may shift down.
pub fn merge_entities(document: &mut Document, sentence: Span) -> Result<()> {
    let targets: SmallVec<[usize; 4]> = document
        .entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| sentence.contains_span(&entity.span))
        .map(|(index, _)| index)
        .collect();

    let mut retokenizer = document.retokenize();
    for index in targets {
        if let Some(span) = retokenizer.entity_span(index) {
            retokenizer.merge(span)?;
        }
    }
    Ok(())
}

fn remap_index(index: usize, merged: Span, removed: usize) -> usize {
    if index <= merged.start {
        index
    } else if index >= merged.end {
        index - removed
    } else {
        merged.start
    }
}

fn remap_span(span: Span, merged: Span, removed: usize) -> Span {
    let start = if span.start <= merged.start {
        span.start
    } else if span.start >= merged.end {
        span.start - removed
    } else {
        merged.start
    };
    let end = if span.end <= merged.start {
        span.end
    } else if span.end >= merged.end {
        span.end - removed
    } else {
        merged.start + 1
    };
    Span { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_collapses_the_merged_range() {
        let merged = Span::new(2, 4);
        assert_eq!(remap_span(Span::new(2, 4), merged, 1), Span::new(2, 3));
        assert_eq!(remap_span(Span::new(0, 2), merged, 1), Span::new(0, 2));
        assert_eq!(remap_span(Span::new(4, 6), merged, 1), Span::new(3, 5));
        assert_eq!(remap_span(Span::new(0, 6), merged, 1), Span::new(0, 5));
    }

    #[test]
    fn remap_index_inside_merged_range_points_at_merged_token() {
        let merged = Span::new(2, 5);
        assert_eq!(remap_index(1, merged, 2), 1);
        assert_eq!(remap_index(3, merged, 2), 2);
        assert_eq!(remap_index(5, merged, 2), 3);
    }
}
