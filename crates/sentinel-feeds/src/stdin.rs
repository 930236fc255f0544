//! Stdin feed — reads lines from standard input until EOF.

use sentinel_core::RawLine;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use crate::FeedError;

/// Stream every line of stdin into `tx`, in input order.
pub async fn stream(tx: mpsc::Sender<RawLine>) -> Result<(), FeedError> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut index = 0usize;
    while let Some(text) = lines.next_line().await? {
        let line = RawLine { index, text };
        index += 1;
        if tx.send(line).await.is_err() {
            break;
        }
    }
    Ok(())
}
