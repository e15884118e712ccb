//! BTreeMap-based in-memory sorted index
//!
//! The index maps keys to locator bytes plus transaction metadata using
//! BTreeMap for deterministic ascending key order. Snapshots are immutable
//! clones of the tree: writers keep inserting into the live index while open
//! snapshots continue to see the state at snapshot time.

use std::collections::BTreeMap;

use super::cursor::{IndexEntry, IndexSnapshot, ScanSpec, SnapshotCursor};
use super::errors::{IndexError, IndexResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemEntry {
    locator: Vec<u8>,
    tx: u64,
    revision_count: u64,
}

/// Mutable in-memory sorted index.
#[derive(Debug, Default)]
pub struct MemIndex {
    tree: BTreeMap<Vec<u8>, MemEntry>,
}

impl MemIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self {
            tree: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites a key with its locator bytes.
    ///
    /// Re-inserting a key bumps its revision count.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, locator: Vec<u8>, tx: u64) {
        let key = key.into();
        let revision_count = self
            .tree
            .get(&key)
            .map(|e| e.revision_count + 1)
            .unwrap_or(1);
        self.tree.insert(
            key,
            MemEntry {
                locator,
                tx,
                revision_count,
            },
        );
    }

    /// Returns the number of keys in the index
    pub fn key_count(&self) -> usize {
        self.tree.len()
    }

    /// Takes an immutable point-in-time snapshot of the index.
    pub fn snapshot(&self) -> MemSnapshot {
        MemSnapshot {
            tree: self.tree.clone(),
        }
    }
}

/// Immutable point-in-time view of a [`MemIndex`].
#[derive(Debug, Clone)]
pub struct MemSnapshot {
    tree: BTreeMap<Vec<u8>, MemEntry>,
}

impl IndexSnapshot for MemSnapshot {
    fn open_cursor(&self, spec: &ScanSpec) -> IndexResult<Box<dyn SnapshotCursor>> {
        let mut entries: Vec<IndexEntry> = self
            .tree
            .iter()
            .filter(|(key, _)| match (&spec.seek_key, spec.descending) {
                (Some(seek), false) => key.as_slice() >= seek.as_slice(),
                (Some(seek), true) => key.as_slice() <= seek.as_slice(),
                (None, _) => true,
            })
            .filter(|(key, _)| match &spec.prefix {
                Some(prefix) => key.starts_with(prefix),
                None => true,
            })
            .map(|(key, entry)| IndexEntry {
                key: key.clone(),
                locator: entry.locator.clone(),
                tx: entry.tx,
                revision_count: entry.revision_count,
            })
            .collect();

        if spec.descending {
            entries.reverse();
        }

        Ok(Box::new(MemCursor {
            entries: entries.into_iter(),
            closed: false,
        }))
    }
}

/// Cursor over a materialized snapshot range.
struct MemCursor {
    entries: std::vec::IntoIter<IndexEntry>,
    closed: bool,
}

impl SnapshotCursor for MemCursor {
    fn next(&mut self) -> IndexResult<Option<IndexEntry>> {
        if self.closed {
            return Err(IndexError::CursorClosed);
        }
        Ok(self.entries.next())
    }

    fn close(&mut self) -> IndexResult<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_index() -> MemIndex {
        let mut index = MemIndex::new();
        index.insert(b"a".to_vec(), vec![1], 10);
        index.insert(b"b".to_vec(), vec![2], 11);
        index.insert(b"c".to_vec(), vec![3], 12);
        index
    }

    fn collect_keys(snapshot: &MemSnapshot, spec: &ScanSpec) -> Vec<Vec<u8>> {
        let mut cursor = snapshot.open_cursor(spec).unwrap();
        let mut keys = Vec::new();
        while let Some(entry) = cursor.next().unwrap() {
            keys.push(entry.key);
        }
        keys
    }

    #[test]
    fn test_ascending_order() {
        let mut index = MemIndex::new();
        // Insert out of order
        index.insert(b"c".to_vec(), vec![3], 12);
        index.insert(b"a".to_vec(), vec![1], 10);
        index.insert(b"b".to_vec(), vec![2], 11);

        let keys = collect_keys(&index.snapshot(), &ScanSpec::new());
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_seek_key_inclusive() {
        let index = seeded_index();
        let spec = ScanSpec::new().with_seek_key(b"b".to_vec());
        let keys = collect_keys(&index.snapshot(), &spec);
        assert_eq!(keys, vec![b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_prefix_filter() {
        let mut index = MemIndex::new();
        index.insert(b"user:1".to_vec(), vec![1], 1);
        index.insert(b"user:2".to_vec(), vec![2], 2);
        index.insert(b"order:1".to_vec(), vec![3], 3);

        let spec = ScanSpec::new().with_prefix(b"user:".to_vec());
        let keys = collect_keys(&index.snapshot(), &spec);
        assert_eq!(keys, vec![b"user:1".to_vec(), b"user:2".to_vec()]);
    }

    #[test]
    fn test_descending_scan() {
        let index = seeded_index();
        let spec = ScanSpec::new().descending();
        let keys = collect_keys(&index.snapshot(), &spec);
        assert_eq!(keys, vec![b"c".to_vec(), b"b".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_descending_seek_is_upper_bound() {
        let index = seeded_index();
        let spec = ScanSpec::new().with_seek_key(b"b".to_vec()).descending();
        let keys = collect_keys(&index.snapshot(), &spec);
        assert_eq!(keys, vec![b"b".to_vec(), b"a".to_vec()]);
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let mut index = seeded_index();
        let snapshot = index.snapshot();

        index.insert(b"d".to_vec(), vec![4], 13);

        let keys = collect_keys(&snapshot, &ScanSpec::new());
        assert_eq!(keys.len(), 3, "later inserts must not appear in snapshot");
    }

    #[test]
    fn test_revision_count_increments() {
        let mut index = MemIndex::new();
        index.insert(b"k".to_vec(), vec![1], 1);
        index.insert(b"k".to_vec(), vec![2], 2);
        index.insert(b"k".to_vec(), vec![3], 3);

        let snapshot = index.snapshot();
        let mut cursor = snapshot.open_cursor(&ScanSpec::new()).unwrap();
        let entry = cursor.next().unwrap().unwrap();
        assert_eq!(entry.revision_count, 3);
        assert_eq!(entry.tx, 3);
        assert_eq!(entry.locator, vec![3]);
    }

    #[test]
    fn test_cursor_next_after_close_fails() {
        let index = seeded_index();
        let snapshot = index.snapshot();
        let mut cursor = snapshot.open_cursor(&ScanSpec::new()).unwrap();

        cursor.next().unwrap();
        cursor.close().unwrap();

        assert_eq!(cursor.next().unwrap_err(), IndexError::CursorClosed);
    }
}
