//! Token classification
//!
//! Pure, order-preserving selection of grammatically interesting tokens
//! from any token slice (a whole document or a span view). None of these
//! functions can fail; an empty result means nothing matched.

use crate::document::{Chunk, Document};
use crate::tag::{DepLabel, TagClass};
use crate::token::Token;

/// A noun occurrence derived from a chunk
///
/// Constructed fresh per classification call and never persisted. The root
/// flag compares surface text against the chunk root's text, so a token
/// repeating the root's spelling elsewhere in the chunk is also flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct Noun<'d> {
    /// Dependency label of the underlying token
    pub dep: DepLabel,
    /// Whether the token's text equals the chunk root's text
    pub is_root: bool,
    /// The underlying token
    pub token: &'d Token,
}

/// Tokens tagged as cardinal numbers, in surface order
pub fn cardinals(tokens: &[Token]) -> Vec<&Token> {
    select(tokens, |class| class == TagClass::Cardinal)
}

/// Tokens tagged as WH-adverbs (when, where, why, how, ...)
pub fn wh_adverbs(tokens: &[Token]) -> Vec<&Token> {
    select(tokens, |class| class == TagClass::WhAdverb)
}

/// Tokens tagged as WH-determiners (what, which, whose)
pub fn wh_determiners(tokens: &[Token]) -> Vec<&Token> {
    select(tokens, |class| class == TagClass::WhDeterminer)
}

/// Tokens tagged as WH-pronouns, plain or possessive (who, whose, what)
pub fn wh_pronouns(tokens: &[Token]) -> Vec<&Token> {
    select(tokens, |class| {
        matches!(class, TagClass::WhPronoun | TagClass::WhPossessive)
    })
}

/// Tokens belonging to any WH-word class, in surface order
///
/// A single pass over the slice; since the WH classes are disjoint, each
/// token appears at most once.
pub fn wh_words(tokens: &[Token]) -> Vec<&Token> {
    select(tokens, |class| class.is_wh())
}

/// Noun records for every noun-tagged token of a chunk
///
/// With a non-empty `dependencies` slice, only tokens whose dependency code
/// is listed qualify. A chunk that does not resolve in `document` yields an
/// empty list.
pub fn nouns<'d>(document: &'d Document, chunk: &Chunk, dependencies: &[&str]) -> Vec<Noun<'d>> {
    let root_text = match document.root_token(chunk) {
        Some(root) => root.text(),
        None => return Vec::new(),
    };

    document
        .span_tokens(chunk.span)
        .iter()
        .filter(|token| token.tag().class() == TagClass::Noun)
        .filter(|token| {
            dependencies.is_empty() || dependencies.contains(&token.dep().code())
        })
        .map(|token| Noun {
            dep: token.dep().clone(),
            is_root: token.text() == root_text,
            token,
        })
        .collect()
}

fn select(tokens: &[Token], matches: impl Fn(TagClass) -> bool) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|token| matches(token.tag().class()))
        .collect()
}
