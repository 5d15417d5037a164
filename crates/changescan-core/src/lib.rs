//! changescan-core — shared types, errors and configuration.
//!
//! # Architecture
//!
//! ```text
//! LineSource ──► Scanner ──► ChangeRecord / FeedEnd
//!                   │
//!                   └──► channel adapter ──► tokio consumers
//! ```
//!
//! The scanner and its seams live in `changescan-feeds`; this crate only holds
//! what both the feeds crate and the CLI need to agree on.

pub mod config;
pub mod error;
pub mod types;

pub use error::{DecodeError, ScanError};
pub use types::{ChangeRecord, FeedEnd, FeedMode, Revision, Seq};
