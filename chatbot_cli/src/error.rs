//! Application-wide error types.

use chat_rules::RulesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("rules error: {0}")]
    Rules(#[from] RulesError),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_error_converts() {
        let e: AppError = RulesError::Validation("empty pool".into()).into();
        assert!(e.to_string().contains("empty pool"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
    }
}
