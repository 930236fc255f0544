//! File feed — reads a log file line by line, optionally following appends.
//!
//! Follow mode watches the file with `notify` and drains newly appended
//! lines each time a modify event fires. Partial lines (no trailing newline
//! yet) are buffered until the writer completes them, so a half-written line
//! is never emitted while following.

use sentinel_core::RawLine;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::FeedError;

/// Stream every line of `path` into `tx`, in file order.
///
/// With `follow = false` the feed stops at end of file. With `follow = true`
/// it keeps the file open and emits lines as they are appended, until the
/// receiver is dropped.
pub async fn stream(
    path: impl AsRef<Path>,
    follow: bool,
    tx: mpsc::Sender<RawLine>,
) -> Result<(), FeedError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let mut reader = BufReader::new(file);
    let mut pending = String::new();
    let mut index = 0usize;

    if !drain(&mut reader, &mut pending, &mut index, follow, &tx).await? {
        return Ok(());
    }
    if !follow {
        return Ok(());
    }

    // Bridge notify's callback thread onto the tokio side. blocking_send is
    // fine there; the watcher thread is not async.
    let (wake_tx, mut wake_rx) = mpsc::channel::<notify::Result<notify::Event>>(16);
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = wake_tx.blocking_send(res);
    })?;
    notify::Watcher::watch(&mut watcher, path, notify::RecursiveMode::NonRecursive)?;
    tracing::debug!(path = %path.display(), "following file for appended lines");

    while let Some(res) = wake_rx.recv().await {
        let event = res?;
        if !event.kind.is_modify() {
            continue;
        }
        if !drain(&mut reader, &mut pending, &mut index, true, &tx).await? {
            break;
        }
    }
    Ok(())
}

/// Read every currently available line and send it. Returns `Ok(false)` once
/// the receiver is gone, which is the feed's signal to shut down.
async fn drain(
    reader: &mut BufReader<File>,
    pending: &mut String,
    index: &mut usize,
    follow: bool,
    tx: &mpsc::Sender<RawLine>,
) -> Result<bool, FeedError> {
    let mut buf = String::new();
    loop {
        buf.clear();
        let n = reader.read_line(&mut buf).await?;
        if n == 0 {
            // End of file. A final unterminated line only counts when we are
            // not waiting for the writer to complete it.
            if !follow && !pending.is_empty() {
                let text = std::mem::take(pending);
                if !send(tx, index, text).await {
                    return Ok(false);
                }
            }
            return Ok(true);
        }
        if buf.ends_with('\n') {
            let mut text = std::mem::take(pending);
            text.push_str(buf.trim_end_matches(['\n', '\r']));
            if !send(tx, index, text).await {
                return Ok(false);
            }
        } else {
            pending.push_str(&buf);
        }
    }
}

async fn send(tx: &mpsc::Sender<RawLine>, index: &mut usize, text: String) -> bool {
    let line = RawLine { index: *index, text };
    *index += 1;
    tx.send(line).await.is_ok()
}
