//! rootform - Sentence token normalization
//!
//! Accepts a natural-language sentence and produces, per token, its surface
//! text, coarse POS category, and normalized base ("root") form.
//!
//! ## Pipeline
//! Sentence -> spaCy tokenize+tag -> eligibility table -> WordNet lemma
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rootform::analyzer::SentenceAnalyzer;
//! use rootform::config::ServiceConfig;
//! use rootform::lexicon::WordNetLexicon;
//! use rootform::tagger::SpacyTagger;
//!
//! let config = ServiceConfig::from_env();
//! let tagger = SpacyTagger::load(config.spacy_model.as_str()).unwrap();
//! let lexicon = WordNetLexicon::load(&config.wordnet_dir).unwrap();
//! let analyzer = SentenceAnalyzer::new(Box::new(tagger), Box::new(lexicon));
//! let tokens = analyzer.analyze("The cats are running quickly.").unwrap();
//! assert_eq!(tokens[1].root.as_deref(), Some("cat"));
//! ```

// Core error handling
pub mod error;

// Token records and POS categories
pub mod token;

// Normalization-eligibility table
pub mod mapping;

// External engine adapters
pub mod lexicon;
pub mod tagger;

// Orchestration
pub mod analyzer;

// Startup configuration
pub mod config;

pub use analyzer::SentenceAnalyzer;
pub use error::{AnalyzeError, AnalyzeResult};
pub use token::Token;
