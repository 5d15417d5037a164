//! Error types for changescan.

use thiserror::Error;

/// Longest slice of an offending line kept in a [`DecodeError`].
pub const MAX_SNIPPET_BYTES: usize = 120;

/// Result type alias using [`ScanError`].
pub type Result<T> = std::result::Result<T, ScanError>;

/// A record line that the decoder rejected.
#[derive(Debug, Error)]
#[error("failed to decode change record from {snippet:?}: {source}")]
pub struct DecodeError {
    /// Leading part of the rejected text, capped at [`MAX_SNIPPET_BYTES`].
    pub snippet: String,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub fn new(text: &str, source: serde_json::Error) -> Self {
        Self {
            snippet: truncate_snippet(text, MAX_SNIPPET_BYTES),
            source,
        }
    }
}

/// Failures surfaced by the feed scanner.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying stream failed (connection reset, closed by the caller, ...).
    #[error("failed to read changes feed: {0}")]
    Read(#[from] std::io::Error),

    /// A line classified as a change record did not decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The stream ended before a `last_seq` line was seen.
    #[error("changes feed ended without a last_seq line")]
    UnexpectedEof,
}

fn truncate_snippet(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let mut end = max.saturating_sub(3);
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &input[..end])
}
