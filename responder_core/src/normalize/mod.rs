//! Text normalization - lowercase, strip punctuation, tokenize, lemmatize.

mod lemma;

pub use lemma::lemmatize;

/// Normalize a raw line into lemmatized tokens.
///
/// Lowercases, removes ASCII punctuation, splits on whitespace, and
/// lemmatizes each token. Empty or whitespace-only input yields an empty
/// vector (valid, not an error). Token order follows input order and
/// repeats are preserved, since the matcher counts occurrences.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    cleaned.split_whitespace().map(lemmatize).collect()
}
