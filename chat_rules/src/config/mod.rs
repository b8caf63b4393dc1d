//! Rules configuration - compiled-in defaults or a TOML file on disk.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RulesError;
use crate::knowledge::KnowledgeBase;
use crate::triggers::TriggerSet;

/// The complete, write-once-at-startup rule tables for one bot.
///
/// `Default` yields the compiled-in tables; [`RulesConfig::load`] reads a
/// TOML file instead. Fields omitted from the file fall back to the
/// defaults, so a file can override just the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Display name used in the CLI banner.
    pub bot_name: String,

    pub knowledge_base: KnowledgeBase,
    pub greetings: TriggerSet,
    pub farewells: TriggerSet,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            bot_name: "Bot".into(),
            knowledge_base: KnowledgeBase::builtin(),
            greetings: TriggerSet::builtin_greetings(),
            farewells: TriggerSet::builtin_farewells(),
        }
    }
}

impl RulesConfig {
    /// Load and validate rules from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate rules from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check all tables.
    pub fn validate(&self) -> Result<(), RulesError> {
        self.knowledge_base.validate()?;
        self.greetings.validate("greetings")?;
        self.farewells.validate("farewells")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = RulesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bot_name, "Bot");
    }

    #[test]
    fn test_empty_toml_falls_back_to_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config.knowledge_base.len(), KnowledgeBase::builtin().len());
        assert!(config.greetings.contains("hello"));
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            bot_name = "Clerk"

            [knowledge_base]
            default_response = "Sorry, I only know about orders."

            [[knowledge_base.entries]]
            key = "order status"
            response = "Please provide your order number."
        "#;

        let config = RulesConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.bot_name, "Clerk");
        assert_eq!(config.knowledge_base.len(), 1);
        // Trigger sets keep their built-in values.
        assert!(config.farewells.contains("quit"));
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let toml = r#"
            [greetings]
            words = ["hi"]
            responses = []
        "#;

        let err = RulesConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, RulesError::Validation(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = RulesConfig::from_toml_str("bot_name = [").unwrap_err();
        assert!(matches!(err, RulesError::Parse(_)));
    }
}
