//! Snapshot and cursor abstractions over the sorted key index
//!
//! The key reader consumes the index exclusively through these traits: a
//! snapshot is an immutable point-in-time view, and a cursor is an ordered,
//! single-pass walk over it. Entries carry the opaque locator bytes exactly
//! as stored; decoding them is the reader's job.

use super::errors::IndexResult;

/// One entry pulled from an index cursor.
///
/// `tx` is the transaction that committed the entry and `revision_count` the
/// number of revisions recorded for the key. Both are opaque pass-through
/// metadata at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Entry key
    pub key: Vec<u8>,
    /// Opaque encoded locator bytes, exactly as stored in the index
    pub locator: Vec<u8>,
    /// Committing transaction id
    pub tx: u64,
    /// Number of revisions recorded for this key
    pub revision_count: u64,
}

/// Specification of an index scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSpec {
    /// Start the scan at this key (inclusive); None starts at the boundary
    pub seek_key: Option<Vec<u8>>,
    /// Restrict the scan to keys with this prefix
    pub prefix: Option<Vec<u8>>,
    /// Walk keys in descending order
    pub descending: bool,
}

impl ScanSpec {
    /// Creates a full ascending scan
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive seek key
    pub fn with_seek_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.seek_key = Some(key.into());
        self
    }

    /// Restricts the scan to keys carrying the given prefix
    pub fn with_prefix(mut self, prefix: impl Into<Vec<u8>>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Walks keys in descending order
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }
}

/// Ordered, single-pass cursor over one snapshot.
///
/// Not safe for concurrent use; one cursor advances one position at a time.
pub trait SnapshotCursor {
    /// Pulls the next entry in scan order.
    ///
    /// Returns `Ok(None)` when the cursor is exhausted; exhaustion is a
    /// normal terminal signal, not an error.
    fn next(&mut self) -> IndexResult<Option<IndexEntry>>;

    /// Releases the cursor. Subsequent `next()` calls fail.
    fn close(&mut self) -> IndexResult<()>;
}

/// Immutable point-in-time view of the sorted index.
///
/// Multiple cursors over the same snapshot may operate concurrently; the
/// snapshot itself never changes.
pub trait IndexSnapshot {
    /// Opens a cursor over this snapshot for the given scan.
    fn open_cursor(&self, spec: &ScanSpec) -> IndexResult<Box<dyn SnapshotCursor>>;
}
