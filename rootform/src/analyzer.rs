//! Sentence analysis orchestration
//!
//! Ties the tagging engine, the eligibility table, and the lexicon together
//! into the per-token normalization loop. No internal concurrency, no
//! retries; collaborator failures propagate unrecovered.

use tracing::debug;

use crate::error::AnalyzeResult;
use crate::lexicon::Lexicon;
use crate::mapping::{classify, Eligibility};
use crate::tagger::Tagger;
use crate::token::{CategoryLabel, Token};

/// Analyzes one sentence at a time against collaborators injected at
/// construction. Collaborators are loaded once at process start and never
/// mutated, so a shared `SentenceAnalyzer` serves concurrent callers as-is.
pub struct SentenceAnalyzer {
    tagger: Box<dyn Tagger>,
    lexicon: Box<dyn Lexicon>,
}

impl SentenceAnalyzer {
    pub fn new(tagger: Box<dyn Tagger>, lexicon: Box<dyn Lexicon>) -> Self {
        Self { tagger, lexicon }
    }

    /// Tokenize, tag, and normalize a sentence into an ordered token
    /// sequence. Output length always equals the tagger's token count.
    pub fn analyze(&self, sentence: &str) -> AnalyzeResult<Vec<Token>> {
        if sentence.is_empty() {
            return Ok(Vec::new());
        }

        let tagged = self.tagger.tag(sentence)?;
        let mut tokens = Vec::with_capacity(tagged.len());

        for word in tagged {
            let root = match classify(&word.tag) {
                Eligibility::NormalizeAs(category) => {
                    let lemma = self.lexicon.lemma(&word.text, category)?;
                    Some(lemma.to_lowercase())
                }
                Eligibility::PassThroughLowercased => Some(word.text.to_lowercase()),
                Eligibility::NotApplicable => {
                    if CategoryLabel::from_tag(&word.tag) == CategoryLabel::Other {
                        // Designed fallback for labels outside the closed
                        // set; logged so rare tagger outputs stay visible
                        debug!(tag = %word.tag, word = %word.text, "Unmapped POS label, no root");
                    }
                    None
                }
            };

            tokens.push(Token {
                word: word.text,
                pos: word.tag,
                root,
            });
        }

        debug!(tokens = tokens.len(), "Analyzed sentence");
        Ok(tokens)
    }
}
