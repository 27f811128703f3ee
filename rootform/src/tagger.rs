//! Tokenization + POS tagging
//!
//! `Tagger` is the seam the analyzer receives sentences through;
//! `SpacyTagger` is the production implementation, a pyo3 bridge to a spaCy
//! pipeline. The model is loaded eagerly at construction and held read-only
//! for the process lifetime, so `tag` never takes a lock.

use pyo3::prelude::*;

use tracing::info;

use crate::error::{TaggerError, TaggerResult};
use crate::token::TaggedWord;

/// Capability for splitting a sentence into POS-tagged words.
///
/// Output preserves sentence order; implementations do not filter or merge
/// tokens.
pub trait Tagger: Send + Sync {
    fn tag(&self, sentence: &str) -> TaggerResult<Vec<TaggedWord>>;
}

/// spaCy-backed tagger.
///
/// Common models:
/// - "en_core_web_sm" - Small English model (fast, ~15MB)
/// - "en_core_web_md" - Medium English model (balanced, ~45MB)
///
/// Make sure to download the model first:
/// ```bash
/// python -m spacy download en_core_web_sm
/// ```
pub struct SpacyTagger {
    model_name: String,
    nlp: Py<PyAny>,
}

impl SpacyTagger {
    /// Import spaCy and load the named model. Fails fast at startup rather
    /// than on the first request.
    pub fn load(model_name: impl Into<String>) -> TaggerResult<Self> {
        let model_name = model_name.into();

        let nlp = Python::with_gil(|py| -> Result<Py<PyAny>, TaggerError> {
            let spacy = py.import_bound("spacy").map_err(|e| TaggerError::ModelLoad {
                model: model_name.clone(),
                message: format!(
                    "failed to import spacy: {e}. Make sure spacy is installed: pip install spacy"
                ),
            })?;

            let nlp = spacy
                .call_method1("load", (model_name.as_str(),))
                .map_err(|e| TaggerError::ModelLoad {
                    model: model_name.clone(),
                    message: format!(
                        "{e}. Download it with: python -m spacy download {model_name}"
                    ),
                })?;

            Ok(nlp.into())
        })?;

        info!(model = %model_name, "Loaded spaCy tagging model");
        Ok(Self { model_name, nlp })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

fn engine_err(operation: &str, err: impl std::fmt::Display) -> TaggerError {
    TaggerError::Engine {
        message: format!("failed to {operation}: {err}"),
    }
}

impl Tagger for SpacyTagger {
    fn tag(&self, sentence: &str) -> TaggerResult<Vec<TaggedWord>> {
        Python::with_gil(|py| {
            let doc = self
                .nlp
                .bind(py)
                .call1((sentence,))
                .map_err(|e| engine_err("process sentence", e))?;

            let mut words = Vec::new();

            let doc_iter = doc.iter().map_err(|e| engine_err("iterate document", e))?;
            for token in doc_iter {
                let token = token.map_err(|e| engine_err("advance token iterator", e))?;

                let text = token
                    .getattr("text")
                    .map_err(|e| engine_err("get token text", e))?
                    .extract::<String>()
                    .map_err(|e| engine_err("extract token text", e))?;

                let tag = token
                    .getattr("pos_")
                    .map_err(|e| engine_err("get token POS", e))?
                    .extract::<String>()
                    .map_err(|e| engine_err("extract token POS", e))?;

                words.push(TaggedWord { text, tag });
            }

            Ok(words)
        })
    }
}
