//! Lexical database lookup
//!
//! `Lexicon` is the seam the analyzer normalizes words through;
//! `WordNetLexicon` is the production implementation, a morphy-style
//! lemmatizer over the WordNet database files: per-category exception lists
//! for irregular inflections, index word lists for membership checks, and
//! ordered suffix detachment rules for regular inflections.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{LexiconError, LexiconResult};

/// Category vocabulary the lexical database is keyed by.
///
/// Only these four categories have base forms; the eligibility table routes
/// every other POS category away from the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalCategory {
    Verb,
    Noun,
    Adjective,
    Adverb,
}

impl LexicalCategory {
    pub const ALL: [LexicalCategory; 4] = [
        LexicalCategory::Verb,
        LexicalCategory::Noun,
        LexicalCategory::Adjective,
        LexicalCategory::Adverb,
    ];

    /// WordNet database file suffix for this category
    fn file_stem(&self) -> &'static str {
        match self {
            LexicalCategory::Verb => "verb",
            LexicalCategory::Noun => "noun",
            LexicalCategory::Adjective => "adj",
            LexicalCategory::Adverb => "adv",
        }
    }

    /// Suffix detachment rules, in application order. First candidate found
    /// in the index wins.
    fn detachment_rules(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            LexicalCategory::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            LexicalCategory::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            LexicalCategory::Adjective | LexicalCategory::Adverb => {
                &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")]
            }
        }
    }
}

/// Capability for resolving a word to its canonical base form.
///
/// Implementations must be deterministic for a fixed underlying database and
/// must return lowercase output.
pub trait Lexicon: Send + Sync {
    fn lemma(&self, word: &str, category: LexicalCategory) -> LexiconResult<String>;
}

/// Morphy-style lemmatizer backed by WordNet database files on disk.
///
/// All state is loaded in `load` and never mutated afterwards, so a shared
/// reference can serve concurrent callers without locking.
#[derive(Debug)]
pub struct WordNetLexicon {
    exceptions: HashMap<LexicalCategory, HashMap<String, String>>,
    index: HashMap<LexicalCategory, HashSet<String>>,
}

impl WordNetLexicon {
    /// Load the database from a WordNet `dict`-style directory containing
    /// `<cat>.exc` exception files and `index.<cat>` word lists for each of
    /// the four categories.
    pub fn load(dir: impl AsRef<Path>) -> LexiconResult<Self> {
        let dir = dir.as_ref();
        let mut exceptions = HashMap::new();
        let mut index = HashMap::new();

        for category in LexicalCategory::ALL {
            let exc_path = dir.join(format!("{}.exc", category.file_stem()));
            exceptions.insert(category, read_exception_file(&exc_path)?);

            let index_path = dir.join(format!("index.{}", category.file_stem()));
            index.insert(category, read_index_file(&index_path)?);
        }

        let entry_count: usize = index.values().map(HashSet::len).sum();
        let exception_count: usize = exceptions.values().map(HashMap::len).sum();
        info!(
            dir = %dir.display(),
            entries = entry_count,
            exceptions = exception_count,
            "Loaded WordNet lexical database"
        );

        Ok(Self { exceptions, index })
    }

    fn in_index(&self, word: &str, category: LexicalCategory) -> bool {
        self.index
            .get(&category)
            .is_some_and(|set| set.contains(word))
    }
}

impl Lexicon for WordNetLexicon {
    fn lemma(&self, word: &str, category: LexicalCategory) -> LexiconResult<String> {
        let form = word.to_lowercase();

        // Irregular inflections first
        if let Some(lemma) = self
            .exceptions
            .get(&category)
            .and_then(|map| map.get(&form))
        {
            return Ok(lemma.clone());
        }

        // A word already in base form maps to itself
        if self.in_index(&form, category) {
            return Ok(form);
        }

        for (suffix, replacement) in category.detachment_rules() {
            if let Some(stem) = form.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if !candidate.is_empty() && self.in_index(&candidate, category) {
                    return Ok(candidate);
                }
            }
        }

        // No database entry matched: the lowercased surface form stands in,
        // matching the reference lemmatizer's behavior for unknown words.
        Ok(form)
    }
}

/// Parse a WordNet exception file: one entry per line, whitespace-separated,
/// `inflected lemma [lemma…]`. Only the first lemma is kept; the database
/// orders lemmas by frequency.
fn read_exception_file(path: &Path) -> LexiconResult<HashMap<String, String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut map = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(inflected), Some(lemma)) = (fields.next(), fields.next()) else {
            return Err(LexiconError::MalformedEntry {
                file: path.display().to_string(),
                line: line_no + 1,
            });
        };
        map.insert(inflected.to_lowercase(), lemma.to_lowercase());
    }

    Ok(map)
}

/// Parse a WordNet index file: first whitespace field per line is the lemma.
/// License-header lines start with whitespace and are skipped.
fn read_index_file(path: &Path) -> LexiconResult<HashSet<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut set = HashSet::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with(' ') || line.is_empty() {
            continue;
        }
        if let Some(lemma) = line.split_whitespace().next() {
            // Collocations are stored with underscores; single tokens never
            // match them, so store as-is
            set.insert(lemma.to_lowercase());
        }
    }

    Ok(set)
}
