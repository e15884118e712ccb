//! orcadb - A verifiable, content-addressed embedded value store
//!
//! Keys live in a sorted index; values live in an append-only value log.
//! Index entries carry a fixed-width locator (length, offset, content digest)
//! and values are resolved lazily and verifiably on demand.

pub mod index;
pub mod observability;
pub mod reader;
pub mod sql;
pub mod store;
pub mod vlog;
