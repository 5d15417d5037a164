//! Output — renders scanned change records for the CLI.

use anyhow::Context;
use changescan_core::config::OutputFormat;
use changescan_core::{ChangeRecord, FeedEnd, FeedMode};
use changescan_feeds::{ChangesScanner, LineSource};
use serde::Serialize;
use std::io::Write;

/// What a completed scan saw, printed as the summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub mode: FeedMode,
    pub records: u64,
    /// `last_seq` normalised for use as a `since=` checkpoint.
    pub last_seq: Option<String>,
    pub pending: Option<u64>,
}

impl ScanReport {
    fn new(mode: FeedMode, records: u64, end: &FeedEnd) -> Self {
        Self {
            mode,
            records,
            last_seq: end.last_seq.as_ref().map(|s| s.as_checkpoint()),
            pending: end.pending,
        }
    }
}

/// Render one record as a single output line (without newline).
pub fn render(record: &ChangeRecord, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Jsonl => serde_json::to_string(record)?,
        OutputFormat::Ids => record.id.clone(),
        OutputFormat::Seq => {
            let mut line = format!("{}\t{}", record.seq, record.id);
            for rev in record.revs() {
                line.push('\t');
                line.push_str(rev);
            }
            line
        }
    })
}

/// Scan `source` to its terminal line, writing each record to `out`.
pub fn scan_to<S, W>(
    source: S,
    out: &mut W,
    format: OutputFormat,
    mode: FeedMode,
) -> anyhow::Result<ScanReport>
where
    S: LineSource,
    W: Write,
{
    let mut scanner = ChangesScanner::new(source);
    while let Some(record) = scanner.next() {
        let record =
            record.with_context(|| format!("after {} records", scanner.records_read()))?;
        writeln!(out, "{}", render(&record, format)?)?;
    }
    out.flush()?;

    let end = scanner
        .feed_end()
        .context("scanner stopped without reaching last_seq")?;
    let report = ScanReport::new(mode, scanner.records_read(), end);
    tracing::info!(
        mode = %report.mode,
        records = report.records,
        last_seq = ?report.last_seq,
        "scan complete"
    );
    Ok(report)
}
