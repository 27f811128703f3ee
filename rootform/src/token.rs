//! Token records and part-of-speech categories
//!
//! The tagger emits raw Universal POS tag strings; `CategoryLabel` is the
//! closed vocabulary the eligibility table works over. The raw tag is kept
//! on the output record so unrecognized tags round-trip untouched.

use serde::{Deserialize, Serialize};

/// One word as returned by the tokenization + tagging engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// Surface text, exactly as tokenized
    pub text: String,

    /// Universal POS tag string, e.g. "VERB", "NOUN", "PUNCT"
    pub tag: String,
}

impl TaggedWord {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// One analyzed token in the response sequence.
///
/// `root` serializes as an explicit `null` when absent; the response
/// contract is `string | null`, never a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text, exactly as it appeared in the sentence
    pub word: String,

    /// POS tag as reported by the tagging engine
    pub pos: String,

    /// Normalized base form, lowercase; `None` when the category does not
    /// admit normalization (pronouns, proper nouns, numerals, punctuation)
    pub root: Option<String>,
}

/// Closed set of coarse POS categories understood by the eligibility table.
///
/// Sourced from the Universal Dependencies tagset the tagging engine emits;
/// anything outside the closed set parses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryLabel {
    Verb,
    Noun,
    Aux,
    Adj,
    Adv,
    Sconj,
    Part,
    Cconj,
    Det,
    Pron,
    Propn,
    Num,
    Punct,
    Other,
}

impl CategoryLabel {
    /// Parse a tagger label. Unrecognized labels degrade to `Other` rather
    /// than failing; the caller decides whether that is worth logging.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "VERB" => CategoryLabel::Verb,
            "NOUN" => CategoryLabel::Noun,
            "AUX" => CategoryLabel::Aux,
            "ADJ" => CategoryLabel::Adj,
            "ADV" => CategoryLabel::Adv,
            "SCONJ" => CategoryLabel::Sconj,
            "PART" => CategoryLabel::Part,
            "CCONJ" => CategoryLabel::Cconj,
            "DET" => CategoryLabel::Det,
            "PRON" => CategoryLabel::Pron,
            "PROPN" => CategoryLabel::Propn,
            "NUM" => CategoryLabel::Num,
            "PUNCT" => CategoryLabel::Punct,
            _ => CategoryLabel::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::Verb => "VERB",
            CategoryLabel::Noun => "NOUN",
            CategoryLabel::Aux => "AUX",
            CategoryLabel::Adj => "ADJ",
            CategoryLabel::Adv => "ADV",
            CategoryLabel::Sconj => "SCONJ",
            CategoryLabel::Part => "PART",
            CategoryLabel::Cconj => "CCONJ",
            CategoryLabel::Det => "DET",
            CategoryLabel::Pron => "PRON",
            CategoryLabel::Propn => "PROPN",
            CategoryLabel::Num => "NUM",
            CategoryLabel::Punct => "PUNCT",
            CategoryLabel::Other => "X",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_round_trip() {
        for tag in [
            "VERB", "NOUN", "AUX", "ADJ", "ADV", "SCONJ", "PART", "CCONJ", "DET", "PRON", "PROPN",
            "NUM", "PUNCT",
        ] {
            assert_eq!(CategoryLabel::from_tag(tag).as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_other() {
        assert_eq!(CategoryLabel::from_tag("INTJ"), CategoryLabel::Other);
        assert_eq!(CategoryLabel::from_tag(""), CategoryLabel::Other);
        assert_eq!(CategoryLabel::from_tag("verb"), CategoryLabel::Other);
    }

    #[test]
    fn test_token_serializes_root_as_null() {
        let token = Token {
            word: "!".to_string(),
            pos: "PUNCT".to_string(),
            root: None,
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word": "!", "pos": "PUNCT", "root": null})
        );
    }

    #[test]
    fn test_token_serializes_root_when_present() {
        let token = Token {
            word: "cats".to_string(),
            pos: "NOUN".to_string(),
            root: Some("cat".to_string()),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word": "cats", "pos": "NOUN", "root": "cat"})
        );
    }
}
