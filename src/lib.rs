//! changescan — reads document-database `_changes` feeds.
//!
//! The scanning itself lives in `changescan-feeds`; this crate adds record
//! rendering for the command-line tool.
//!
//! # Architecture
//!
//! ```text
//! stdin / file ──► LineSource ──► Scanner ──► output::render ──► stdout
//!                                    │
//!                                    └──► FeedEnd ──► summary (stderr)
//! ```

pub mod output;
