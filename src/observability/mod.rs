//! Observability for orcadb
//!
//! Structured, synchronous JSON logging. Events are emitted at store
//! lifecycle points and on corruption detection, never on hot per-entry
//! paths.

mod logger;

pub use logger::{Logger, Severity};
