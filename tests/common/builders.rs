#![allow(dead_code)]
//! Test builders — ergonomic constructors for `ChangeRecord` values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use changescan_core::{ChangeRecord, Revision, Seq};

// ---------------------------------------------------------------------------
// ChangeRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`ChangeRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let rec = ChangeRecordBuilder::new("3-g1AAAAD", "doc-1")
///     .rev("2-7051cbe5c8faecd085a3fa619e6e6337")
///     .deleted()
///     .build();
/// ```
pub struct ChangeRecordBuilder {
    seq: Seq,
    id: String,
    changes: Vec<Revision>,
    deleted: bool,
    doc: Option<serde_json::Value>,
}

impl ChangeRecordBuilder {
    pub fn new(seq: impl Into<Seq>, id: impl Into<String>) -> Self {
        Self {
            seq: seq.into(),
            id: id.into(),
            changes: Vec::new(),
            deleted: false,
            doc: None,
        }
    }

    pub fn rev(mut self, rev: impl Into<String>) -> Self {
        self.changes.push(Revision { rev: rev.into() });
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn doc(mut self, doc: serde_json::Value) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn build(self) -> ChangeRecord {
        ChangeRecord {
            seq: self.seq,
            id: self.id,
            changes: self.changes,
            deleted: self.deleted,
            doc: self.doc,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The three records of `FEED_NORMAL` / `FEED_CONTINUOUS`.
pub fn corpus_records() -> Vec<ChangeRecord> {
    vec![
        ChangeRecordBuilder::new("1-g1AAAAB", "doc-1")
            .rev("1-967a00dff5e02add41819138abb3284d")
            .build(),
        ChangeRecordBuilder::new("2-g1AAAAC", "doc-2")
            .rev("1-5ba8a1b5a6ce4e4b8c1f0f7a0a6a6a6a")
            .build(),
        ChangeRecordBuilder::new("3-g1AAAAD", "doc-1")
            .rev("2-7051cbe5c8faecd085a3fa619e6e6337")
            .deleted()
            .build(),
    ]
}
