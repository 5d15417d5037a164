//! Feed scanner — reads a `_changes` stream up to the next meaningful line.
//!
//! The feed is not one JSON document. Depending on the delivery mode it is
//! a `{"results":[` wrapper around comma-separated rows (normal, long-poll)
//! or a bare sequence of rows (continuous), with empty heartbeat lines mixed
//! in and a `last_seq` line at the end. Lines are classified by their literal
//! prefix before any JSON parsing happens:
//!
//! | Line | Kind |
//! |------|------|
//! | empty | [`LineKind::Heartbeat`] |
//! | `{"results":` ... | [`LineKind::WrapperOpen`] |
//! | `],` ... | [`LineKind::WrapperClose`] |
//! | `"last_seq":` ... or `{"last_seq":` ... | [`LineKind::Terminal`] |
//! | anything else | [`LineKind::Record`] |
//!
//! Only exactly-empty lines are heartbeats. A whitespace-only line is a
//! record line and fails to decode.

use crate::decoder::{JsonDecoder, RecordDecoder};
use crate::line::LineSource;
use changescan_core::error::Result;
use changescan_core::{ChangeRecord, FeedEnd, ScanError};

const RESULTS_OPEN: &str = "{\"results\":";
const RESULTS_CLOSE: &str = "],";
const LAST_SEQ_FIELD: &str = "\"last_seq\":";
const LAST_SEQ_OBJECT: &str = "{\"last_seq\":";

/// Classification of a single raw feed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heartbeat,
    WrapperOpen,
    WrapperClose,
    Terminal,
    Record,
}

impl LineKind {
    /// Noise lines are consumed without producing anything.
    pub fn is_noise(self) -> bool {
        matches!(
            self,
            LineKind::Heartbeat | LineKind::WrapperOpen | LineKind::WrapperClose
        )
    }
}

/// Classify a line (terminator already removed) by its literal prefix.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        LineKind::Heartbeat
    } else if line.starts_with(RESULTS_OPEN) {
        LineKind::WrapperOpen
    } else if line.starts_with(RESULTS_CLOSE) {
        LineKind::WrapperClose
    } else if line.starts_with(LAST_SEQ_FIELD) || line.starts_with(LAST_SEQ_OBJECT) {
        LineKind::Terminal
    } else {
        LineKind::Record
    }
}

/// Outcome of one successful scanner call.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedRow<T = ChangeRecord> {
    /// The next change record.
    Change(T),
    /// The feed's terminal line was reached.
    End(FeedEnd),
}

/// Read up to the next meaningful line and return what it holds.
///
/// Works for every delivery mode. Blocks on `source` until a record, the
/// terminal line, or an error is available.
pub fn next_row<S, D>(source: &mut S, decoder: &D) -> Result<FeedRow<D::Record>>
where
    S: LineSource + ?Sized,
    D: RecordDecoder + ?Sized,
{
    let mut line = String::new();
    scan_row(source, decoder, &mut line)
}

fn scan_row<S, D>(source: &mut S, decoder: &D, line: &mut String) -> Result<FeedRow<D::Record>>
where
    S: LineSource + ?Sized,
    D: RecordDecoder + ?Sized,
{
    let kind = loop {
        if !source.next_line(line)? {
            return Err(ScanError::UnexpectedEof);
        }
        let kind = classify(line);
        if !kind.is_noise() {
            break kind;
        }
        tracing::trace!(kind = ?kind, "scan: skipped line");
    };

    let line = line.as_str();
    if kind == LineKind::Terminal {
        let end = read_feed_end(line);
        tracing::debug!(last_seq = ?end.last_seq, pending = ?end.pending, "scan: end of feed");
        return Ok(FeedRow::End(end));
    }

    let text = line.strip_suffix(',').unwrap_or(line);
    tracing::trace!(bytes = text.len(), "scan: record line");
    let record = decoder.decode(text)?;
    Ok(FeedRow::Change(record))
}

/// Pull `last_seq` and `pending` out of a terminal line.
///
/// The wrapper form (`"last_seq":"9","pending":0}`) is a bare object tail, so
/// the body is rebuilt into a standalone object before decoding.
fn read_feed_end(line: &str) -> FeedEnd {
    let body = line.strip_prefix('{').unwrap_or(line).trim_end();
    let body = body.strip_suffix('}').unwrap_or(body);
    match serde_json::from_str::<FeedEnd>(&format!("{{{body}}}")) {
        Ok(end) => end,
        Err(err) => {
            tracing::warn!(error = %err, "scan: unreadable last_seq line, ending feed without it");
            FeedEnd::default()
        }
    }
}

/// Iterator over the records of one feed read.
///
/// Stops at the terminal line without reading past it; the terminal
/// metadata is then available from [`ChangesScanner::feed_end`]. The iterator
/// is fused after an error.
pub struct ChangesScanner<S, D = JsonDecoder> {
    source: S,
    decoder: D,
    line: String,
    end: Option<FeedEnd>,
    failed: bool,
    records: u64,
}

impl<S: LineSource> ChangesScanner<S> {
    pub fn new(source: S) -> Self {
        Self::with_decoder(source, JsonDecoder::new())
    }
}

impl<S: LineSource, D: RecordDecoder> ChangesScanner<S, D> {
    pub fn with_decoder(source: S, decoder: D) -> Self {
        Self {
            source,
            decoder,
            line: String::new(),
            end: None,
            failed: false,
            records: 0,
        }
    }

    /// Terminal metadata, once the `last_seq` line has been read.
    pub fn feed_end(&self) -> Option<&FeedEnd> {
        self.end.as_ref()
    }

    /// True once the terminal line was read or an error was returned.
    pub fn is_finished(&self) -> bool {
        self.end.is_some() || self.failed
    }

    pub fn records_read(&self) -> u64 {
        self.records
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: LineSource, D: RecordDecoder> Iterator for ChangesScanner<S, D> {
    type Item = Result<D::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        match scan_row(&mut self.source, &self.decoder, &mut self.line) {
            Ok(FeedRow::Change(record)) => {
                self.records += 1;
                Some(Ok(record))
            }
            Ok(FeedRow::End(end)) => {
                self.end = Some(end);
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, records = self.records, "scan: feed failed");
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: LineSource, D: RecordDecoder> std::iter::FusedIterator for ChangesScanner<S, D> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
