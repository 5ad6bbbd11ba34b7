//! Morphological normalization of single words.
//!
//! Scoring compares dictionary forms, so every token has to be reduced to its
//! lemma first ("хочет" → "хотеть"). The analyzer only depends on the
//! [`Morph`] trait; the concrete normalizer is injected at startup and shared
//! across all concurrent analyses.

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use tracing::info;

/// A morphological normalizer: raw token in, canonical dictionary form out.
///
/// Implementations must be pure per input (two equal tokens normalize
/// identically within a run) and safe to call from many tasks at once.
pub trait Morph: Send + Sync {
    /// Reduce a cleaned token to its canonical lower-case form.
    fn normalize(&self, word: &str) -> String;
}

/// Lemma-dictionary-backed [`Morph`].
///
/// Holds a lookup table of inflected form → lemma, loaded from a TSV file
/// (one `inflected<TAB>lemma` pair per line, UTF-8, `#` comments allowed).
/// Words missing from the table fall back to their case-folded spelling,
/// which keeps already-canonical words and proper nouns usable without a
/// complete dictionary.
///
/// The table is immutable after construction, so one instance can be shared
/// behind an `Arc` by every concurrent analysis.
pub struct DictMorph {
    lemmas: HashMap<String, String>,
}

impl DictMorph {
    /// Build an empty normalizer that only case-folds.
    pub fn new() -> Self {
        Self {
            lemmas: HashMap::new(),
        }
    }

    /// Build from in-memory `(inflected, lemma)` pairs. Keys are case-folded.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let lemmas = entries
            .into_iter()
            .map(|(word, lemma)| (word.into().to_lowercase(), lemma.into().to_lowercase()))
            .collect();
        Self { lemmas }
    }

    /// Load a lemma table from a TSV file.
    ///
    /// Lines that are empty, start with `#`, or lack a second column are
    /// skipped.
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = tokio::fs::read_to_string(path).await?;
        let mut lemmas = HashMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut columns = line.split('\t');
            if let (Some(word), Some(lemma)) = (columns.next(), columns.next()) {
                lemmas.insert(word.to_lowercase(), lemma.trim().to_lowercase());
            }
        }
        info!(path = %path.display(), entries = lemmas.len(), "Loaded lemma dictionary");
        Ok(Self { lemmas })
    }

    /// Number of known inflected forms.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// True when no lemma entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Default for DictMorph {
    fn default() -> Self {
        Self::new()
    }
}

impl Morph for DictMorph {
    fn normalize(&self, word: &str) -> String {
        let folded = word.to_lowercase();
        match self.lemmas.get(&folded) {
            Some(lemma) => lemma.clone(),
            None => folded,
        }
    }
}
