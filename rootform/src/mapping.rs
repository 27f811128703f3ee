//! Normalization-eligibility table
//!
//! The one piece of domain knowledge owned by the core: which POS categories
//! get a lemma lookup, which pass through lowercased, and which carry no
//! root at all. A single total match over the closed label set, so the table
//! can be tested exhaustively.

use crate::lexicon::LexicalCategory;
use crate::token::CategoryLabel;

/// What to do with a token of a given category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Look the word up in the lexicon under this category
    NormalizeAs(LexicalCategory),

    /// The surface form lowercased is already the root; no lexicon call
    PassThroughLowercased,

    /// Category has no meaningful base form; root stays absent
    NotApplicable,
}

/// Classify a raw tagger label. Pure and total: unknown labels fall back to
/// `NotApplicable`, a designed default rather than an error.
pub fn classify(pos_label: &str) -> Eligibility {
    match CategoryLabel::from_tag(pos_label) {
        // Auxiliaries lemmatize as verbs ("are" -> "be")
        CategoryLabel::Verb | CategoryLabel::Aux => Eligibility::NormalizeAs(LexicalCategory::Verb),
        CategoryLabel::Noun => Eligibility::NormalizeAs(LexicalCategory::Noun),
        CategoryLabel::Adj => Eligibility::NormalizeAs(LexicalCategory::Adjective),
        CategoryLabel::Adv => Eligibility::NormalizeAs(LexicalCategory::Adverb),
        CategoryLabel::Sconj | CategoryLabel::Part | CategoryLabel::Cconj | CategoryLabel::Det => {
            Eligibility::PassThroughLowercased
        }
        CategoryLabel::Pron
        | CategoryLabel::Propn
        | CategoryLabel::Num
        | CategoryLabel::Punct
        | CategoryLabel::Other => Eligibility::NotApplicable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_categories() {
        assert_eq!(
            classify("VERB"),
            Eligibility::NormalizeAs(LexicalCategory::Verb)
        );
        assert_eq!(
            classify("AUX"),
            Eligibility::NormalizeAs(LexicalCategory::Verb)
        );
        assert_eq!(
            classify("NOUN"),
            Eligibility::NormalizeAs(LexicalCategory::Noun)
        );
        assert_eq!(
            classify("ADJ"),
            Eligibility::NormalizeAs(LexicalCategory::Adjective)
        );
        assert_eq!(
            classify("ADV"),
            Eligibility::NormalizeAs(LexicalCategory::Adverb)
        );
    }

    #[test]
    fn test_pass_through_categories() {
        for tag in ["SCONJ", "PART", "CCONJ", "DET"] {
            assert_eq!(classify(tag), Eligibility::PassThroughLowercased, "{tag}");
        }
    }

    #[test]
    fn test_not_applicable_categories() {
        for tag in ["PRON", "PROPN", "NUM", "PUNCT"] {
            assert_eq!(classify(tag), Eligibility::NotApplicable, "{tag}");
        }
    }

    #[test]
    fn test_unknown_labels_fall_back_to_not_applicable() {
        for tag in ["INTJ", "SYM", "X", "", "noun", "whatever"] {
            assert_eq!(classify(tag), Eligibility::NotApplicable, "{tag}");
        }
    }
}
