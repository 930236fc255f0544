//! sentinel — port-operations log event normalizer.
//!
//! Converts heterogeneous raw service log lines from six port-operations
//! services into uniform [`LogEvent`] records. This crate exposes the
//! pipeline layers as public modules so integration tests and the CLI can
//! import them directly.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Normalizer ──► Export
//!              │
//!              └── rules (per-service classification tables)
//! ```
//!
//! Feeds run on background tasks and talk to the normalizer loop over
//! `tokio` channels. The normalizer itself is a pure synchronous function;
//! see [`normalizer::normalize`].

pub mod export;
pub mod normalizer;
pub mod rules;

pub use sentinel_core::{Config, LogEvent, LogLevel, RawLine, Service};
