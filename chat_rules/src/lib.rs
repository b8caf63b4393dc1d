//! # Chat Rules
//!
//! The rule tables for Keyword Chat - knowledge-base entries, greeting and
//! farewell trigger sets, and the config loader. This crate is the single
//! source of truth for what the bot can say and contains no matching logic.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod triggers;

pub use config::*;
pub use error::*;
pub use knowledge::*;
pub use triggers::*;
