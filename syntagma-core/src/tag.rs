//! Part-of-speech and dependency label value objects
//!
//! Tagger output codes are kept verbatim; the closed [`TagClass`] is
//! computed once against a [`TagScheme`](crate::scheme::TagScheme) when a
//! document is built, so later classification never compares raw strings.

use crate::scheme::TagScheme;
use serde::{Deserialize, Serialize};

/// Closed grammatical classification of a fine-grained tag code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TagClass {
    /// Cardinal number
    Cardinal,
    /// WH-adverb (when, where, why, how, ...)
    WhAdverb,
    /// WH-determiner (what, which, whose)
    WhDeterminer,
    /// WH-pronoun (who, what, which)
    WhPronoun,
    /// Possessive WH-pronoun (whose)
    WhPossessive,
    /// Noun family (code carries the scheme's noun prefix)
    Noun,
    /// Any code the scheme does not select on
    #[default]
    Other,
}

impl TagClass {
    /// Is this one of the WH-word classes?
    #[must_use]
    pub fn is_wh(&self) -> bool {
        matches!(
            self,
            TagClass::WhAdverb | TagClass::WhDeterminer | TagClass::WhPronoun | TagClass::WhPossessive
        )
    }

    /// Human-readable label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TagClass::Cardinal => "cardinal",
            TagClass::WhAdverb => "wh-adverb",
            TagClass::WhDeterminer => "wh-determiner",
            TagClass::WhPronoun => "wh-pronoun",
            TagClass::WhPossessive => "wh-possessive",
            TagClass::Noun => "noun",
            TagClass::Other => "other",
        }
    }
}

/// Fine-grained part-of-speech tag
///
/// Carries the exact code emitted by the tagger together with its closed
/// classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PosTag {
    code: String,
    class: TagClass,
}

impl PosTag {
    /// Classify a raw tagger code under the given scheme
    pub fn classified(code: impl Into<String>, scheme: &TagScheme) -> Self {
        let code = code.into();
        let class = scheme.classify(&code);
        Self { code, class }
    }

    /// The exact code as emitted by the tagger
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The closed grammatical class
    pub fn class(&self) -> TagClass {
        self.class
    }
}

/// Dependency-relation label assigned by the parser
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepLabel(String);

impl DepLabel {
    /// Wrap a raw dependency code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The exact code as emitted by the parser
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
