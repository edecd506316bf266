//! High-level configuration API

use crate::error::{ApiError, Result};
use syntagma_core::TagScheme;

/// High-level configuration for document analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Tag scheme the injected tagger emits
    pub scheme: TagScheme,
    /// Whether named entities are merged before classification
    pub merge_entities: bool,
    /// Dependency codes noun extraction is restricted to (empty: no filter)
    pub noun_dependencies: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: TagScheme::default(),
            merge_entities: true,
            noun_dependencies: Vec::new(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the tag scheme
    pub fn scheme(mut self, scheme: TagScheme) -> Self {
        self.config.scheme = scheme;
        self
    }

    /// Parse the tag scheme from TOML
    pub fn scheme_toml(mut self, source: &str) -> Result<Self> {
        self.config.scheme =
            TagScheme::from_toml(source).map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Toggle entity merging before classification
    pub fn merge_entities(mut self, merge: bool) -> Self {
        self.config.merge_entities = merge;
        self
    }

    /// Restrict noun extraction to one more dependency code
    pub fn noun_dependency(mut self, code: impl Into<String>) -> Self {
        self.config.noun_dependencies.push(code.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config
            .scheme
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.config)
    }
}
