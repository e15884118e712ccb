//! Key reading subsystem for orcadb
//!
//! Separates "does a key exist" from "what is its value": the key reader
//! walks the sorted index cheaply, and value bytes are fetched only through
//! an explicit, lazy value reference.
//!
//! # Design Principles
//!
//! - Pull-based: one cursor entry per `read()`, no buffering, no reordering
//! - Lazy values: a scan performs zero value log I/O
//! - No local recovery: cursor and log failures surface unchanged

mod errors;
mod key_reader;
mod value_ref;

pub use errors::{ReaderError, ReaderResult};
pub use key_reader::{KeyEntry, KeyReader};
pub use value_ref::ValueRef;
