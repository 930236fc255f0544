//! File feed integration harness.
//!
//! # What this covers
//!
//! - **End-to-end pipeline**: file feed → normalizer → events, preserving
//!   input order and line indices.
//! - **Lossy ingestion**: malformed lines inside a file are dropped without
//!   disturbing the events around them.
//!
//! Follow mode is exercised by the unit tests in `sentinel-feeds`; this
//! harness covers the read-to-EOF path the CLI uses by default.

mod common;
use common::*;

use std::io::Write;
use tokio::sync::mpsc;

use sentinel::{normalizer::normalize, LogEvent, RawLine};

async fn collect_lines(path: &std::path::Path) -> Vec<RawLine> {
    let (tx, mut rx) = mpsc::channel(64);
    sentinel_feeds::file::stream(path, false, tx).await.unwrap();
    let mut lines = Vec::new();
    while let Some(line) = rx.recv().await {
        lines.push(line);
    }
    lines
}

#[tokio::test]
async fn corpus_file_normalizes_in_order() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    for line in CORPUS_CONTAINER {
        writeln!(tmp, "{line}").unwrap();
    }
    tmp.flush().unwrap();

    let events: Vec<LogEvent> = collect_lines(tmp.path())
        .await
        .into_iter()
        .filter_map(|line| normalize(&line.text, line.index, "Container Service"))
        .collect();

    assert_eq!(events.len(), CORPUS_CONTAINER.len());
    for (index, event) in events.iter().enumerate() {
        assert_eq!(event.id, format!("Container Service-{index}"));
    }
    assert_action!(events[0], "Service Start");
    assert_action!(events[3], "Insert Snapshot");
}

#[tokio::test]
async fn malformed_lines_inside_a_file_are_dropped() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "{}", CORPUS_EDI[0]).unwrap();
    writeln!(tmp, "garbage line with no structure").unwrap();
    writeln!(tmp, "{}", CORPUS_EDI[1]).unwrap();
    tmp.flush().unwrap();

    let lines = collect_lines(tmp.path()).await;
    assert_eq!(lines.len(), 3);

    let events: Vec<LogEvent> = lines
        .into_iter()
        .filter_map(|line| normalize(&line.text, line.index, "EDI Service"))
        .collect();

    // The malformed middle line vanishes; its neighbours keep their indices.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "EDI Service-0");
    assert_eq!(events[1].id, "EDI Service-2");
}
