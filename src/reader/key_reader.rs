//! Pull-based key reader over an index snapshot
//!
//! The reader orchestrates one cursor over one snapshot: each `read()` pulls
//! exactly one index entry, decodes its locator immediately, and hands back
//! the key with a lazy [`ValueRef`] plus the pass-through transaction
//! metadata. Value bytes are never fetched here.

use std::sync::Arc;

use crate::index::{IndexSnapshot, ScanSpec, SnapshotCursor};
use crate::observability::Logger;
use crate::vlog::{Locator, ValueLog};

use super::errors::{ReaderError, ReaderResult};
use super::value_ref::ValueRef;

/// One key entry produced by [`KeyReader::read`].
#[derive(Debug)]
pub struct KeyEntry {
    /// Entry key
    pub key: Vec<u8>,
    /// Lazy reference to the entry's value
    pub value: ValueRef,
    /// Committing transaction id, passed through unchanged
    pub tx: u64,
    /// Revision count for the key, passed through unchanged
    pub revision_count: u64,
}

/// Cursor-backed reader yielding keys with lazy value references.
///
/// Lifecycle: opened, zero or more reads, explicitly closed. Reading after
/// close fails deterministically. A single reader is not safe for concurrent
/// use; independent readers over the same snapshot are.
pub struct KeyReader {
    vlog: Arc<ValueLog>,
    cursor: Box<dyn SnapshotCursor>,
    closed: bool,
}

impl KeyReader {
    /// Opens a reader over a snapshot for the given scan.
    ///
    /// Fails if the snapshot cannot open a cursor for the spec; that error
    /// propagates unchanged.
    pub fn open(
        vlog: Arc<ValueLog>,
        snapshot: &dyn IndexSnapshot,
        spec: &ScanSpec,
    ) -> ReaderResult<Self> {
        let cursor = snapshot.open_cursor(spec)?;
        Ok(Self {
            vlog,
            cursor,
            closed: false,
        })
    }

    /// Pulls the next entry in cursor order.
    ///
    /// Returns `Ok(None)` when the scan is exhausted. A malformed locator is
    /// a fatal error for this call; the cursor has already advanced, so the
    /// caller may choose to keep reading subsequent entries.
    pub fn read(&mut self) -> ReaderResult<Option<KeyEntry>> {
        if self.closed {
            return Err(ReaderError::ReaderClosed);
        }

        let entry = match self.cursor.next()? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let locator = Locator::decode(&entry.locator).map_err(|e| {
            let key_hex = hex(&entry.key);
            let locator_len = entry.locator.len().to_string();
            Logger::error(
                "LOCATOR_CORRUPTED",
                &[("key", &key_hex), ("locator_len", &locator_len)],
            );
            e
        })?;

        Ok(Some(KeyEntry {
            key: entry.key,
            value: ValueRef::new(locator, Arc::clone(&self.vlog)),
            tx: entry.tx,
            revision_count: entry.revision_count,
        }))
    }

    /// Releases the underlying cursor.
    ///
    /// Idempotent; after the first close every `read()` fails with
    /// [`ReaderError::ReaderClosed`].
    pub fn close(&mut self) -> ReaderResult<()> {
        if !self.closed {
            self.cursor.close()?;
            self.closed = true;
        }
        Ok(())
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
