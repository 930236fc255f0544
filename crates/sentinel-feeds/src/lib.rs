//! sentinel-feeds — raw log line sources for sentinel.
//!
//! Each feed reads lines from a source and pushes
//! [`RawLine`](sentinel_core::RawLine) values onto an async channel for the
//! normalizer. Feeds preserve input order and assign zero-based line indices.

pub mod file;
pub mod stdin;

/// Errors a feed can surface. Line-level anomalies are not errors; only the
/// source itself failing (I/O, watcher setup) is reported.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed I/O error")]
    Io(#[from] std::io::Error),
    #[error("file watcher error")]
    Watch(#[from] notify::Error),
}
