//! sentinel-core — shared types and configuration for sentinel.
//!
//! This crate holds the data structures shared across all pipeline layers,
//! plus the TOML configuration loader.
//!
//! # Architecture
//!
//! ```text
//! Feeds ──► Normalizer ──► Export
//! ```
//!
//! Feeds emit [`RawLine`] values over tokio channels; the normalizer turns
//! them into [`LogEvent`] records; export renders events to stdout.

pub mod config;
pub mod types;

pub use config::Config;
pub use types::{LogEvent, LogLevel, RawLine, Service};
