//! Knowledge base definitions - key phrases mapped to canned responses.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RulesError;

/// A single key phrase / response pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Key phrase whose words are matched against normalized user input.
    pub key: String,

    /// Reply returned when this entry wins the match.
    pub response: String,
}

impl KnowledgeEntry {
    /// Create a new entry.
    pub fn new(key: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            response: response.into(),
        }
    }
}

/// The knowledge base: every non-default entry plus the fallback response.
///
/// Entry order is irrelevant except as the matcher's tie-break, where the
/// earlier entry wins among keys of equal score and equal token count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub entries: Vec<KnowledgeEntry>,

    /// Returned when no entry scores above zero.
    pub default_response: String,
}

impl KnowledgeBase {
    /// Create an empty knowledge base with the given fallback response.
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_response: default_response.into(),
        }
    }

    /// Add an entry.
    pub fn with_entry(mut self, key: impl Into<String>, response: impl Into<String>) -> Self {
        self.entries.push(KnowledgeEntry::new(key, response));
        self
    }

    /// Number of non-default entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the base has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter()
    }

    /// Check structural invariants: non-empty default, non-empty keys and
    /// responses, unique keys (case-insensitive).
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.default_response.trim().is_empty() {
            return Err(RulesError::Validation(
                "default response must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            if entry.key.trim().is_empty() {
                return Err(RulesError::Validation(
                    "knowledge entry key must not be empty".into(),
                ));
            }
            if entry.response.trim().is_empty() {
                return Err(RulesError::Validation(format!(
                    "knowledge entry '{}' has an empty response",
                    entry.key
                )));
            }
            if !seen.insert(entry.key.to_lowercase()) {
                return Err(RulesError::Validation(format!(
                    "duplicate knowledge entry key '{}'",
                    entry.key
                )));
            }
        }

        Ok(())
    }

    /// The compiled-in knowledge base shipped with the bot.
    pub fn builtin() -> Self {
        Self::new(
            "I'm sorry, I don't understand that. Could you please rephrase or ask something else?",
        )
        // General queries
        .with_entry(
            "how are you",
            "I am a bot, so I don't have feelings, but I'm functioning perfectly and ready to assist you!",
        )
        .with_entry(
            "what is your name",
            "I am a simple chatbot created to help you. You can call me Bot.",
        )
        .with_entry(
            "what can you do",
            "I can answer basic questions based on my knowledge base. Try asking about our services or products!",
        )
        .with_entry("who created you", "I was created by a human programmer.")
        .with_entry("thank you", "You're welcome! Happy to help.")
        .with_entry("thanks", "You're welcome!")
        // Product and service queries
        .with_entry(
            "services",
            "We offer product information, order tracking, and customer support. What are you looking for?",
        )
        .with_entry(
            "laptop",
            "Our laptops are powerful and versatile. Do you have a specific model in mind?",
        )
        .with_entry(
            "products",
            "We have a range of electronic gadgets like laptops, mice, keyboards, and monitors. Which one interests you?",
        )
        .with_entry(
            "order status",
            "To check your order status, please provide your order number.",
        )
        .with_entry(
            "support",
            "For technical support, please visit our support page or describe your issue.",
        )
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let kb = KnowledgeBase::new("fallback")
            .with_entry("order status", "Please provide your order number.")
            .with_entry("support", "Visit our support page.");

        assert_eq!(kb.len(), 2);
        assert_eq!(kb.default_response, "fallback");
        assert_eq!(kb.entries[0].key, "order status");
    }

    #[test]
    fn test_builtin_validates() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.validate().is_ok());
        assert!(!kb.is_empty());
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let kb = KnowledgeBase::new("fallback")
            .with_entry("thanks", "You're welcome!")
            .with_entry("Thanks", "You're welcome again!");

        let err = kb.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_empty_default_rejected() {
        let kb = KnowledgeBase::new("   ");
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_empty_response_rejected() {
        let kb = KnowledgeBase::new("fallback").with_entry("support", "");
        assert!(kb.validate().is_err());
    }
}
