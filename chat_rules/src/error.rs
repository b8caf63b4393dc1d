//! Rule-table error types.

use thiserror::Error;

/// Errors raised while loading or validating the rule tables.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rules parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rules: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let e = RulesError::Validation("duplicate key 'thanks'".into());
        assert!(e.to_string().contains("duplicate key 'thanks'"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e: RulesError = io_err.into();
        assert!(e.to_string().contains("io error"));
    }
}
