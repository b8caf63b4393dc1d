//! # Responder Core
//!
//! The "brain" of Keyword Chat. This crate consumes the rule tables from
//! `chat_rules`, normalizes user input, and selects exactly one reply per
//! input line.
//!
//! ## Core Components
//!
//! - **normalize**: lowercase / punctuation-strip / tokenize / lemmatize
//! - **responder**: greeting and farewell detection, best-match scoring
//!   over the knowledge base, and the per-line orchestrator
//!
//! ## Design Philosophy
//!
//! - **Stateless**: nothing persists between calls; a conversation is the
//!   caller looping until a farewell sets the exit flag
//! - **Table-Driven**: all behavior comes from immutable startup tables
//! - **Deterministic where it matters**: the only randomness is reply-pool
//!   selection, through an injected RNG

pub mod normalize;
pub mod responder;

pub use normalize::*;
pub use responder::*;
