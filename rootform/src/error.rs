//! Error types for the sentence-analysis core
//!
//! Idiomatic thiserror enums, one per external collaborator, composed into
//! the analyzer-level error with `#[from]` for clean `?` propagation.

use thiserror::Error;

/// Top-level error returned by the sentence analyzer.
///
/// There is no partial-result mode: any collaborator failure aborts the
/// whole analysis and surfaces here unrecovered.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Tagger error: {0}")]
    Tagger(#[from] TaggerError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Errors from the tokenization + POS-tagging engine.
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Failed to load tagging model '{model}': {message}")]
    ModelLoad { model: String, message: String },

    #[error("Tagging engine failure: {message}")]
    Engine { message: String },
}

/// Errors from the lexical database.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("IO error reading lexical database: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed entry in {file} at line {line}")]
    MalformedEntry { file: String, line: usize },
}

/// Result type aliases for convenience
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
pub type TaggerResult<T> = Result<T, TaggerError>;
pub type LexiconResult<T> = Result<T, LexiconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagger_error_wraps_into_analyze_error() {
        let err = TaggerError::Engine {
            message: "pipeline crashed".to_string(),
        };
        let analyze: AnalyzeError = err.into();
        assert!(matches!(analyze, AnalyzeError::Tagger(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TaggerError::ModelLoad {
            model: "en_core_web_sm".to_string(),
            message: "not installed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load tagging model 'en_core_web_sm': not installed"
        );
    }
}
