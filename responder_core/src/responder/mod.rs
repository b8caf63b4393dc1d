//! The responder - trigger detection, knowledge-base matching, and the
//! per-line orchestrator.

mod detect;

pub use detect::detect;

use chat_rules::{RulesConfig, RulesError};
use rand::Rng;

use crate::normalize::normalize;

/// One reply plus the conversation-should-end flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,

    /// Set only by a farewell match; the caller stops its loop on `true`.
    pub end_conversation: bool,
}

impl Reply {
    fn keep_talking(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_conversation: false,
        }
    }

    fn ending(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_conversation: true,
        }
    }
}

/// The stateless rule-based responder.
///
/// Holds the immutable rule tables plus the key phrases pre-normalized at
/// construction, so per-call work is one normalization of the input and a
/// scan over the entries. Nothing is carried from one call to the next.
pub struct Responder {
    rules: RulesConfig,
    normalized_keys: Vec<Vec<String>>,
}

impl Responder {
    /// Validate the tables and precompute normalized key phrases.
    pub fn new(rules: RulesConfig) -> Result<Self, RulesError> {
        rules.validate()?;
        let normalized_keys = rules
            .knowledge_base
            .iter()
            .map(|entry| normalize(&entry.key))
            .collect();
        Ok(Self {
            rules,
            normalized_keys,
        })
    }

    /// Display name from the tables.
    pub fn bot_name(&self) -> &str {
        &self.rules.bot_name
    }

    /// Produce exactly one reply for one raw input line.
    ///
    /// Evaluation order is fixed: greeting, then farewell, then the
    /// knowledge-base matcher. An input containing both a greeting and a
    /// farewell word yields a greeting and does not end the conversation.
    pub fn respond_with(&self, input: &str, rng: &mut impl Rng) -> Reply {
        if let Some(text) = detect(&self.rules.greetings, input, rng) {
            return Reply::keep_talking(text);
        }
        if let Some(text) = detect(&self.rules.farewells, input, rng) {
            return Reply::ending(text);
        }
        Reply::keep_talking(self.best_match(&normalize(input)))
    }

    /// [`Responder::respond_with`] using the thread-local RNG.
    pub fn respond(&self, input: &str) -> Reply {
        self.respond_with(input, &mut rand::thread_rng())
    }

    /// Pick the best-scoring entry for the given input tokens, falling back
    /// to the default response at score zero.
    ///
    /// Score = how many of the key's tokens appear anywhere in the input.
    /// Each key-token occurrence contributes one point when present,
    /// regardless of how often the input repeats it. A tie at a non-zero
    /// score goes to the entry with the higher match ratio (matched tokens
    /// over key length): with equal scores that means the shorter, more
    /// completely matched key, so a fully-hit "laptop" beats a one-of-four
    /// hit on "what is your name". Equal ratios keep the earlier entry.
    fn best_match(&self, input_tokens: &[String]) -> String {
        let mut best: Option<usize> = None;
        let mut best_score = 0usize;

        for (idx, key_tokens) in self.normalized_keys.iter().enumerate() {
            let score = key_tokens
                .iter()
                .filter(|&token| input_tokens.contains(token))
                .count();

            let fuller_match = best
                .is_some_and(|b| key_tokens.len() < self.normalized_keys[b].len());
            if score > best_score || (score == best_score && score > 0 && fuller_match) {
                best = Some(idx);
                best_score = score;
            }
        }

        match best {
            Some(idx) if best_score > 0 => {
                self.rules.knowledge_base.entries[idx].response.clone()
            }
            _ => self.rules.knowledge_base.default_response.clone(),
        }
    }
}
