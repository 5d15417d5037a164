//! Runs a blocking scanner and forwards its output to tokio.
//!
//! The scanner stays synchronous. [`spawn_feed`] moves it onto tokio's
//! blocking pool and pushes each outcome into a bounded `mpsc` channel so an
//! async pipeline can consume one feed per task.

use crate::decoder::RecordDecoder;
use crate::line::LineSource;
use crate::scanner::ChangesScanner;
use changescan_core::{FeedEnd, ScanError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// One message emitted by a spawned feed.
#[derive(Debug)]
pub enum FeedEvent<T> {
    Change(T),
    /// Terminal line reached. Always the last event of a clean feed.
    End(FeedEnd),
    /// The scanner failed. Always the last event of a failed feed.
    Failed(ScanError),
}

/// What the blocking worker did before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    pub records: u64,
    /// False when the receiver was dropped before the feed finished.
    pub delivered: bool,
}

/// Scan `source` on the blocking pool, sending every event to the returned
/// receiver. The worker stops after the terminal line, after the first
/// error, or once the receiver is dropped.
pub fn spawn_feed<S, D>(
    source: S,
    decoder: D,
    capacity: usize,
) -> (mpsc::Receiver<FeedEvent<D::Record>>, JoinHandle<FeedSummary>)
where
    S: LineSource + Send + 'static,
    D: RecordDecoder + Send + 'static,
    D::Record: Send + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let handle = tokio::task::spawn_blocking(move || {
        let mut scanner = ChangesScanner::with_decoder(source, decoder);
        while let Some(item) = scanner.next() {
            let event = match item {
                Ok(record) => FeedEvent::Change(record),
                Err(err) => FeedEvent::Failed(err),
            };
            if tx.blocking_send(event).is_err() {
                tracing::debug!(records = scanner.records_read(), "feed: receiver dropped");
                return FeedSummary {
                    records: scanner.records_read(),
                    delivered: false,
                };
            }
        }
        let records = scanner.records_read();
        let delivered = match scanner.feed_end() {
            Some(end) => tx.blocking_send(FeedEvent::End(end.clone())).is_ok(),
            None => true,
        };
        tracing::debug!(records, delivered, "feed: worker finished");
        FeedSummary { records, delivered }
    });
    (rx, handle)
}
