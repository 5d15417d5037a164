//! Core types for changescan-core.
//!
//! This module defines the data structures shared by the scanner, the channel
//! adapter and the CLI: the decoded [`ChangeRecord`], its [`Seq`] token and
//! [`Revision`] list, the [`FeedEnd`] termination signal, and the
//! [`FeedMode`] discriminant.

use serde::{Deserialize, Serialize};

/// One change reported by a `_changes` feed.
///
/// Decoded from a single record line. Unknown fields are ignored so that
/// producers adding keys do not break the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Sequence token the caller can resume the feed from.
    pub seq: Seq,
    /// Document identifier.
    pub id: String,
    /// Leaf revisions touched by this change.
    #[serde(default)]
    pub changes: Vec<Revision>,
    /// Set when the change is a deletion tombstone.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    /// Document body, only present for feeds requested with `include_docs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<serde_json::Value>,
}

impl ChangeRecord {
    /// Revision strings in feed order.
    pub fn revs(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|c| c.rev.as_str())
    }
}

/// A single `{"rev": "..."}` entry of a change's `changes` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub rev: String,
}

/// Opaque sequence token.
///
/// Older servers emit integers, clustered ones emit strings; both are
/// preserved as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seq {
    Number(u64),
    Text(String),
}

impl Seq {
    /// The token as a string suitable for a `since=` query parameter.
    pub fn as_checkpoint(&self) -> String {
        match self {
            Seq::Number(n) => n.to_string(),
            Seq::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for Seq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seq::Number(n) => write!(f, "{n}"),
            Seq::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Seq {
    fn from(value: &str) -> Self {
        Seq::Text(value.to_string())
    }
}

impl From<u64> for Seq {
    fn from(value: u64) -> Self {
        Seq::Number(value)
    }
}

/// Trailing metadata of a feed's terminal line.
///
/// Both fields are best-effort: termination is decided by the line prefix,
/// so a terminal line whose body cannot be read still ends the feed, with
/// `None` here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEnd {
    pub last_seq: Option<Seq>,
    /// Number of changes still pending after `last_seq` (normal and
    /// long-poll feeds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<u64>,
}

/// Delivery style of a `_changes` feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedMode {
    #[default]
    Normal,
    Longpoll,
    Continuous,
}

impl std::fmt::Display for FeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedMode::Normal => write!(f, "normal"),
            FeedMode::Longpoll => write!(f, "longpoll"),
            FeedMode::Continuous => write!(f, "continuous"),
        }
    }
}

impl std::str::FromStr for FeedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(FeedMode::Normal),
            "longpoll" => Ok(FeedMode::Longpoll),
            "continuous" => Ok(FeedMode::Continuous),
            other => Err(format!("unknown feed mode {other:?}")),
        }
    }
}
