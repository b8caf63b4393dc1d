//! A small rule-based English lemmatizer.
//!
//! Covers common irregular plurals plus plural, "-ing", and "-ed" suffix
//! rules. Output is stable: lemmatizing an already-lemmatized word returns
//! it unchanged. Keys and input run through the same pipeline, so
//! consistency matters more here than dictionary-perfect stems.

/// Lexicalized words that look inflected but are already base forms,
/// sorted for binary search. "thanks" is not the plural of "thank".
const INVARIANTS: &[&str] = &["news", "series", "species", "thanks"];

/// Irregular plural forms, sorted for binary search.
const IRREGULARS: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("mice", "mouse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("women", "woman"),
];

/// Reduce a single lowercase token to its base dictionary form.
pub fn lemmatize(word: &str) -> String {
    if word.len() <= 2 || INVARIANTS.binary_search(&word).is_ok() {
        return word.to_string();
    }

    if let Ok(idx) = IRREGULARS.binary_search_by_key(&word, |&(form, _)| form) {
        return IRREGULARS[idx].1.to_string();
    }

    if let Some(stem) = strip_plural(word) {
        return stem;
    }
    if let Some(stem) = strip_verbal(word) {
        return stem;
    }

    word.to_string()
}

fn strip_plural(word: &str) -> Option<String> {
    if word.len() > 4 && word.ends_with("ies") {
        return Some(format!("{}y", &word[..word.len() - 3]));
    }
    for suffix in ["xes", "zes", "ches", "shes", "sses"] {
        if word.len() > suffix.len() + 1 && word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") && !word.ends_with("is")
    {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}

fn strip_verbal(word: &str) -> Option<String> {
    let stem = if word.len() > 5 && word.ends_with("ing") {
        &word[..word.len() - 3]
    } else if word.len() > 4 && word.ends_with("ed") {
        &word[..word.len() - 2]
    } else {
        return None;
    };
    Some(undouble(stem))
}

/// Drop a doubled trailing consonant ("runn" -> "run"), keeping doubles
/// that belong to the base form ("fall", "miss").
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3 && bytes[n - 1] == bytes[n - 2] && !stem.ends_with("ll") && !stem.ends_with("ss") {
        stem[..n - 1].to_string()
    } else {
        stem.to_string()
    }
}
