#![allow(dead_code)]
//! Static feed corpora used across harnesses.
//!
//! Each corpus is the raw text a server would send for one `_changes`
//! request, line for line. The `render_*` helpers build the same framing
//! around arbitrary record lines so property tests can compare modes.

use std::io::Cursor;

/// `feed=normal` response: results wrapper, comma-separated rows, summary.
pub const FEED_NORMAL: &str = r#"{"results":[
{"seq":"1-g1AAAAB","id":"doc-1","changes":[{"rev":"1-967a00dff5e02add41819138abb3284d"}]},
{"seq":"2-g1AAAAC","id":"doc-2","changes":[{"rev":"1-5ba8a1b5a6ce4e4b8c1f0f7a0a6a6a6a"}]},
{"seq":"3-g1AAAAD","id":"doc-1","changes":[{"rev":"2-7051cbe5c8faecd085a3fa619e6e6337"}],"deleted":true}
],
"last_seq":"3-g1AAAAD","pending":0}
"#;

/// `feed=longpoll` response for a batch limited with `limit=2`.
pub const FEED_LONGPOLL: &str = r#"{"results":[
{"seq":4,"id":"order-17","changes":[{"rev":"3-aa"}]},
{"seq":5,"id":"order-18","changes":[{"rev":"1-bb"},{"rev":"1-cc"}]}
],
"last_seq":5,"pending":12}
"#;

/// `feed=continuous&heartbeat=...` response with heartbeats between rows.
pub const FEED_CONTINUOUS: &str = "{\"seq\":\"1-g1AAAAB\",\"id\":\"doc-1\",\"changes\":[{\"rev\":\"1-967a00dff5e02add41819138abb3284d\"}]}\n\
\n\
\n\
{\"seq\":\"2-g1AAAAC\",\"id\":\"doc-2\",\"changes\":[{\"rev\":\"1-5ba8a1b5a6ce4e4b8c1f0f7a0a6a6a6a\"}]}\n\
\n\
{\"seq\":\"3-g1AAAAD\",\"id\":\"doc-1\",\"changes\":[{\"rev\":\"2-7051cbe5c8faecd085a3fa619e6e6337\"}],\"deleted\":true}\n\
{\"last_seq\":\"3-g1AAAAD\"}\n";

/// `include_docs=true` rows carry the document body.
pub const FEED_WITH_DOCS: &str = r#"{"results":[
{"seq":"9","id":"user-1","changes":[{"rev":"4-ff"}],"doc":{"_id":"user-1","_rev":"4-ff","name":"Ada","roles":["admin"]}}
],
"last_seq":"9","pending":0}
"#;

/// An empty database polled in normal mode.
pub const FEED_EMPTY_NORMAL: &str = "{\"results\":[\n\n],\n\"last_seq\":\"0\",\"pending\":0}\n";

/// Ids in `FEED_NORMAL` / `FEED_CONTINUOUS`, in feed order.
pub const FEED_IDS: &[&str] = &["doc-1", "doc-2", "doc-1"];

pub fn source(text: &str) -> Cursor<Vec<u8>> {
    Cursor::new(text.as_bytes().to_vec())
}

/// A minimal record line for `seq`/`id`, without trailing comma.
pub fn record_line(seq: u64, id: &str) -> String {
    format!(r#"{{"seq":"{seq}","id":"{id}","changes":[{{"rev":"1-{seq:x}"}}]}}"#)
}

/// Wrap record lines in normal-mode framing.
pub fn render_normal(records: &[String], last_seq: &str) -> String {
    let mut out = String::from("{\"results\":[\n");
    for (i, rec) in records.iter().enumerate() {
        out.push_str(rec);
        if i + 1 < records.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(&format!("],\n\"last_seq\":\"{last_seq}\",\"pending\":0}}\n"));
    out
}

/// Emit record lines in continuous framing, with `heartbeats[i]` empty lines
/// before record `i` (missing entries mean none).
pub fn render_continuous(records: &[String], heartbeats: &[usize], last_seq: &str) -> String {
    let mut out = String::new();
    for (i, rec) in records.iter().enumerate() {
        for _ in 0..heartbeats.get(i).copied().unwrap_or(0) {
            out.push('\n');
        }
        out.push_str(rec);
        out.push('\n');
    }
    out.push_str(&format!("{{\"last_seq\":\"{last_seq}\"}}\n"));
    out
}
