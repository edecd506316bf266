//! Tag scheme configuration
//!
//! Defines which tagger codes select which grammatical class. The default
//! scheme matches the Penn Treebank tag set and the CLEAR-style "prep"
//! dependency relation; alternative taggers can supply their own codes via
//! TOML.

use crate::error::{CoreError, Result};
use crate::tag::{DepLabel, TagClass};
use serde::{Deserialize, Serialize};

/// Mapping from tagger string codes to closed grammatical classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagScheme {
    /// Cardinal number tag code
    pub cardinal: String,
    /// WH-adverb tag code
    pub wh_adverb: String,
    /// WH-determiner tag code
    pub wh_determiner: String,
    /// WH-pronoun tag code
    pub wh_pronoun: String,
    /// Possessive WH-pronoun tag code
    pub wh_possessive: String,
    /// Prefix shared by the noun tag family
    pub noun_prefix: String,
    /// Dependency code of a prepositional modifier
    pub preposition: String,
}

impl Default for TagScheme {
    fn default() -> Self {
        Self {
            cardinal: "CD".to_string(),
            wh_adverb: "WRB".to_string(),
            wh_determiner: "WDT".to_string(),
            wh_pronoun: "WP".to_string(),
            wh_possessive: "WP$".to_string(),
            noun_prefix: "NN".to_string(),
            preposition: "prep".to_string(),
        }
    }
}

impl TagScheme {
    /// Parse a scheme from TOML, then validate it
    pub fn from_toml(source: &str) -> Result<Self> {
        let scheme: TagScheme =
            toml::from_str(source).map_err(|e| CoreError::Scheme(e.to_string()))?;
        scheme.validate()?;
        Ok(scheme)
    }

    /// Check that every code is non-empty and the exact codes are distinct
    pub fn validate(&self) -> Result<()> {
        let codes = [
            &self.cardinal,
            &self.wh_adverb,
            &self.wh_determiner,
            &self.wh_pronoun,
            &self.wh_possessive,
            &self.noun_prefix,
            &self.preposition,
        ];
        if codes.iter().any(|c| c.is_empty()) {
            return Err(CoreError::Scheme("tag codes must be non-empty".to_string()));
        }

        // The dep code lives in a different namespace than the tag codes
        let tag_codes = [
            &self.cardinal,
            &self.wh_adverb,
            &self.wh_determiner,
            &self.wh_pronoun,
            &self.wh_possessive,
        ];
        for (i, a) in tag_codes.iter().enumerate() {
            for b in tag_codes.iter().skip(i + 1) {
                if a == b {
                    return Err(CoreError::Scheme(format!(
                        "tag code {a:?} assigned to more than one class"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Classify a raw tag code
    ///
    /// Exact codes win over the noun prefix, so a scheme may use a prefix
    /// that happens to start one of the exact codes.
    pub fn classify(&self, code: &str) -> TagClass {
        if code == self.cardinal {
            TagClass::Cardinal
        } else if code == self.wh_adverb {
            TagClass::WhAdverb
        } else if code == self.wh_determiner {
            TagClass::WhDeterminer
        } else if code == self.wh_pronoun {
            TagClass::WhPronoun
        } else if code == self.wh_possessive {
            TagClass::WhPossessive
        } else if code.starts_with(&self.noun_prefix) {
            TagClass::Noun
        } else {
            TagClass::Other
        }
    }

    /// Is this dependency label the prepositional relation?
    pub fn is_preposition(&self, dep: &DepLabel) -> bool {
        dep.code() == self.preposition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_validates() {
        assert!(TagScheme::default().validate().is_ok());
    }

    #[test]
    fn classify_prefers_exact_codes() {
        let scheme = TagScheme::default();
        assert_eq!(scheme.classify("CD"), TagClass::Cardinal);
        assert_eq!(scheme.classify("NNS"), TagClass::Noun);
        assert_eq!(scheme.classify("JJ"), TagClass::Other);
    }

    #[test]
    fn toml_overrides_merge_with_defaults() {
        let scheme = TagScheme::from_toml(r#"preposition = "case""#).unwrap();
        assert_eq!(scheme.preposition, "case");
        assert_eq!(scheme.cardinal, "CD");
    }

    #[test]
    fn toml_round_trip() {
        let scheme = TagScheme::default();
        let text = toml::to_string(&scheme).unwrap();
        assert_eq!(TagScheme::from_toml(&text).unwrap(), scheme);
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = TagScheme::from_toml(r#"cardinal = """#).unwrap_err();
        assert!(matches!(err, CoreError::Scheme(_)));
    }

    #[test]
    fn duplicate_tag_code_is_rejected() {
        let err = TagScheme::from_toml(r#"wh_pronoun = "WRB""#).unwrap_err();
        assert!(matches!(err, CoreError::Scheme(_)));
    }

    #[test]
    fn prepositional_relation() {
        let scheme = TagScheme::default();
        assert!(scheme.is_preposition(&DepLabel::new("prep")));
        assert!(!scheme.is_preposition(&DepLabel::new("nsubj")));
    }
}
