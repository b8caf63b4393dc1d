//! Trigger set definitions - single words that short-circuit the matcher.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RulesError;

/// A set of single lowercase trigger words with a pool of candidate replies.
///
/// One instance covers greetings, another covers farewells. Trigger words
/// are matched against raw whitespace tokens, without lemmatization, so a
/// greeting is recognized even when normalization would alter it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerSet {
    /// Lowercase single words that activate this set.
    pub words: HashSet<String>,

    /// Candidate replies; one is chosen uniformly at random per activation.
    pub responses: Vec<String>,
}

impl TriggerSet {
    /// Create a trigger set from words and a response pool.
    ///
    /// Words are lowercased on the way in.
    pub fn new<W, R>(words: W, responses: R) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive membership test for a single word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Check structural invariants: a non-empty pool and lowercase,
    /// single-token trigger words. Multi-word triggers can never match a
    /// whitespace token, so they are rejected rather than silently dead.
    pub fn validate(&self, name: &str) -> Result<(), RulesError> {
        if self.responses.is_empty() {
            return Err(RulesError::Validation(format!(
                "{name} response pool must not be empty"
            )));
        }
        for word in &self.words {
            if word.split_whitespace().count() != 1 {
                return Err(RulesError::Validation(format!(
                    "{name} trigger '{word}' must be a single word"
                )));
            }
            if *word != word.to_lowercase() {
                return Err(RulesError::Validation(format!(
                    "{name} trigger '{word}' must be lowercase"
                )));
            }
        }
        Ok(())
    }

    /// The compiled-in greeting triggers and responses.
    pub fn builtin_greetings() -> Self {
        Self::new(
            ["hello", "hi", "greetings", "sup", "hey"],
            [
                "hi",
                "hey",
                "*nods*",
                "hi there",
                "hello",
                "I am glad! You are talking to me",
            ],
        )
    }

    /// The compiled-in farewell triggers and responses.
    pub fn builtin_farewells() -> Self {
        Self::new(
            ["bye", "goodbye", "cya", "exit", "quit"],
            ["Goodbye!", "See you later!", "Bye!", "Have a great day!"],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = TriggerSet::builtin_greetings();
        assert!(set.contains("hello"));
        assert!(set.contains("HELLO"));
        assert!(set.contains("Hi"));
        assert!(!set.contains("bye"));
    }

    #[test]
    fn test_words_lowercased_on_construction() {
        let set = TriggerSet::new(["Howdy"], ["hi"]);
        assert!(set.contains("howdy"));
        assert!(set.validate("greetings").is_ok());
    }

    #[test]
    fn test_builtins_validate() {
        assert!(TriggerSet::builtin_greetings().validate("greetings").is_ok());
        assert!(TriggerSet::builtin_farewells().validate("farewells").is_ok());
    }

    #[test]
    fn test_empty_pool_rejected() {
        let set = TriggerSet::new(["bye"], Vec::<String>::new());
        let err = set.validate("farewells").unwrap_err();
        assert!(err.to_string().contains("response pool"));
    }

    #[test]
    fn test_multi_word_trigger_rejected() {
        let set = TriggerSet::new(["see ya"], ["Bye!"]);
        let err = set.validate("farewells").unwrap_err();
        assert!(err.to_string().contains("single word"));
    }
}
