//! The charged-word lexicon.
//!
//! Two plain-text word lists (negative and positive charge) are merged into
//! one case-folded set before a batch starts. The set is read-only for the
//! rest of the run and shared by every concurrent analysis, so no
//! synchronization is needed around lookups.

use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use tracing::info;

/// File name of the negatively charged word list inside the dictionary dir.
const NEGATIVE_WORDS_FILE: &str = "negative_words.txt";
/// File name of the positively charged word list inside the dictionary dir.
const POSITIVE_WORDS_FILE: &str = "positive_words.txt";

/// A read-only set of normalized charged words.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from any word iterator. Words are case-folded.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// An empty lexicon; every score against it is 0.0.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// O(1) average membership test for a normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct charged words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load the charged-word lexicon from a dictionary directory.
///
/// Expects `negative_words.txt` and `positive_words.txt` inside `dict_dir`,
/// each a whitespace-separated UTF-8 token list. Both lists are merged into
/// one set.
pub async fn load_charged_words(dict_dir: &Path) -> Result<Lexicon, Box<dyn Error>> {
    let negative = tokio::fs::read_to_string(dict_dir.join(NEGATIVE_WORDS_FILE)).await?;
    let positive = tokio::fs::read_to_string(dict_dir.join(POSITIVE_WORDS_FILE)).await?;

    let lexicon = Lexicon::new(
        negative
            .split_whitespace()
            .chain(positive.split_whitespace()),
    );
    info!(
        dict_dir = %dict_dir.display(),
        count = lexicon.len(),
        "Loaded charged-word lexicon"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_case_folded_at_build() {
        let lexicon = Lexicon::new(["Аутсайдер", "банкротство"]);
        assert!(lexicon.contains("аутсайдер"));
        assert!(lexicon.contains("банкротство"));
        assert!(!lexicon.contains("побег"));
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("авария"));
    }

    #[tokio::test]
    async fn test_load_merges_both_lists() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("negative_words.txt"), "авария крах\nпобег")
            .await
            .unwrap();
        tokio::fs::write(dir.path().join("positive_words.txt"), "триумф")
            .await
            .unwrap();

        let lexicon = load_charged_words(dir.path()).await.unwrap();
        assert_eq!(lexicon.len(), 4);
        assert!(lexicon.contains("авария"));
        assert!(lexicon.contains("триумф"));
    }

    #[tokio::test]
    async fn test_load_fails_when_a_list_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("negative_words.txt"), "авария")
            .await
            .unwrap();

        assert!(load_charged_words(dir.path()).await.is_err());
    }
}
