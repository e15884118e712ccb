//! Sorted index subsystem for orcadb
//!
//! The index owns ordered key enumeration: keys map to opaque locator bytes
//! plus transaction metadata, and scans walk an immutable snapshot through a
//! single-pass cursor.
//!
//! # Design Principles
//!
//! - Snapshots are point-in-time and immutable; concurrent readers need no locks
//! - Cursors yield entries in scan order, one at a time, with no buffering
//! - Locator bytes stay opaque here; the reader layer decodes them
//! - Deterministic: BTreeMap iteration order

mod cursor;
mod errors;
mod memtree;

pub use cursor::{IndexEntry, IndexSnapshot, ScanSpec, SnapshotCursor};
pub use errors::{IndexError, IndexResult};
pub use memtree::{MemIndex, MemSnapshot};
