//! Shared helpers for sentinel integration harnesses.
//!
//! `fixtures` holds the per-service raw line corpora; `assertions` holds
//! domain-specific assertion macros with context-rich failure messages.

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
