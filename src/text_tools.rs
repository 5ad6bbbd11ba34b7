//! Tokenization, normalization, and the jaundice-rate score.
//!
//! [`split_by_words`] turns raw article text into a sequence of normalized
//! words; [`calculate_jaundice_rate`] measures how many of them are charged.
//! Both are deliberately boring: no I/O, no shared state, and the tokenizer's
//! only concession to the async world is a cooperative yield per token so a
//! deadline can interrupt a very large article.

use crate::lexicon::Lexicon;
use crate::morph::Morph;

/// The one normalized form shorter than three characters that is kept:
/// the Russian negation particle flips the meaning of whatever follows it.
const NEGATION_PARTICLE: &str = "не";

/// Quotation and sentence punctuation stripped from anywhere inside a token,
/// not just its edges.
const INTERIOR_PUNCTUATION: [char; 7] = ['«', '»', '…', '.', ',', '!', '?'];

/// Strip punctuation from a raw whitespace-delimited token.
///
/// Interior occurrences of quotation/ellipsis/sentence marks are removed,
/// then any remaining ASCII punctuation is trimmed from both edges. Interior
/// hyphens survive ("во-первых" stays one word).
fn clean_word(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !INTERIOR_PUNCTUATION.contains(c))
        .collect();
    stripped
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

/// Split text into normalized words, dropping short and degenerate tokens.
///
/// Splits on whitespace, cleans each token, normalizes it through `morph`,
/// and keeps the result only if it is longer than two characters or is
/// exactly the negation particle. Duplicates are preserved: the score is
/// frequency-based. Punctuation-only tokens clean down to nothing and are
/// dropped silently.
///
/// The loop yields to the scheduler after every token, so the caller's
/// compute deadline can fire mid-article and sibling tasks keep making
/// progress while a large article is being chewed through.
pub async fn split_by_words(morph: &dyn Morph, text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for raw in text.split_whitespace() {
        let cleaned = clean_word(raw);
        if !cleaned.is_empty() {
            let normalized = morph.normalize(&cleaned);
            // Cyrillic: count chars, not bytes.
            if normalized.chars().count() > 2 || normalized == NEGATION_PARTICLE {
                words.push(normalized);
            }
        }
        tokio::task::yield_now().await;
    }
    words
}

/// Share of charged words in `words`, as a percentage in [0, 100].
///
/// An empty input scores 0.0: no words is no evidence of sensationalism, not
/// an error. Otherwise the count of words present in `lexicon` over the
/// total, times 100, rounded to two decimal places.
pub fn calculate_jaundice_rate(words: &[String], lexicon: &Lexicon) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let charged = words.iter().filter(|w| lexicon.contains(w)).count();
    let score = charged as f64 / words.len() as f64 * 100.0;
    (score * 100.0).round() / 100.0
}
