//! Span-relative token lookups

use crate::document::{Chunk, Document, Span};
use crate::error::{CoreError, Result};
use crate::token::Token;

/// The preposition immediately governing a chunk, if any
///
/// Looks back exactly one position from the chunk's first token: with the
/// chunk's document-relative first index `first`, the sentence's token
/// sequence is inspected at `first - 1`. A chunk starting at index 0, a
/// position outside the sentence, or a predecessor carrying any other
/// dependency relation all resolve to `None`. No further lookback is
/// attempted even if an earlier token is a preposition.
pub fn preceding_preposition<'d>(
    document: &'d Document,
    sentence: Span,
    chunk: &Chunk,
) -> Option<&'d Token> {
    let first = chunk.span.start;
    if first == 0 {
        return None;
    }

    let candidate = document.span_tokens(sentence).get(first - 1)?;
    if document.scheme().is_preposition(candidate.dep()) {
        Some(candidate)
    } else {
        None
    }
}

/// The chunk immediately preceding `chunk` in an ordered chunk sequence
///
/// Membership is decided by value equality. A chunk absent from `chunks`
/// is a hard failure; the first chunk simply has no predecessor.
#[deprecated(
    since = "0.1.0",
    note = "derive neighbouring chunks from sentence-construction indices instead"
)]
pub fn previous_chunk<'a>(chunks: &'a [Chunk], chunk: &Chunk) -> Result<Option<&'a Chunk>> {
    log::warn!("previous_chunk is scheduled for removal; migrate to sentence-construction indices");

    let position = chunks
        .iter()
        .position(|candidate| candidate == chunk)
        .ok_or(CoreError::ChunkNotFound)?;

    Ok(position.checked_sub(1).map(|previous| &chunks[previous]))
}
