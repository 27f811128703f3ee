//! Service configuration
//!
//! Explicit immutable configuration built once at process start; nothing in
//! the core reads the environment after this.

use std::path::PathBuf;

/// Where to find the external engines the analyzer is built from.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// spaCy model name, e.g. "en_core_web_sm"
    pub spacy_model: String,

    /// Directory holding the WordNet database files (`*.exc`, `index.*`)
    pub wordnet_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            spacy_model: "en_core_web_sm".to_string(),
            wordnet_dir: PathBuf::from("data/wordnet"),
        }
    }
}

impl ServiceConfig {
    /// Read `SPACY_MODEL` and `WORDNET_DIR` from the environment, keeping
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            spacy_model: std::env::var("SPACY_MODEL").unwrap_or(defaults.spacy_model),
            wordnet_dir: std::env::var("WORDNET_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.wordnet_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.spacy_model, "en_core_web_sm");
        assert_eq!(config.wordnet_dir, PathBuf::from("data/wordnet"));
    }
}
