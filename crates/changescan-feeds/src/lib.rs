//! changescan-feeds — `_changes` feed scanning for changescan.
//!
//! The [`scanner`] pulls lines from a [`LineSource`], skips heartbeats and
//! result-wrapper punctuation, and hands record lines to a [`RecordDecoder`].
//! [`channel::spawn_feed`] runs the same scanner on tokio's blocking pool for
//! async consumers.

pub mod channel;
pub mod decoder;
pub mod line;
pub mod scanner;

pub use channel::{spawn_feed, FeedEvent, FeedSummary};
pub use decoder::{JsonDecoder, RecordDecoder};
pub use line::LineSource;
pub use scanner::{classify, next_row, ChangesScanner, FeedRow, LineKind};
