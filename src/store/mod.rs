//! Store facade for orcadb
//!
//! Ties the value log to the key reading layer: callers open a store, take a
//! snapshot of their index, and read keys with lazy value references. The
//! store holds the shared value log handle that every value reference
//! resolves against.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::index::{IndexSnapshot, ScanSpec};
use crate::observability::Logger;
use crate::reader::{KeyReader, ReaderResult};
use crate::vlog::{Locator, ValueDigest, ValueLog, ValueLogOptions, VlogError, VlogResult};

/// Name of the value log file inside the store directory
const VLOG_FILE: &str = "values.vlog";

/// Options controlling store behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Verify content digests on every value read (explicit opt-in)
    pub verify_on_read: bool,
}

impl StoreOptions {
    /// Creates options with defaults (verification disabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables digest verification on every value read
    pub fn with_verify_on_read(mut self, verify: bool) -> Self {
        self.verify_on_read = verify;
        self
    }
}

/// Content-addressed value store.
///
/// Many value references may share the store's value log concurrently; none
/// of them controls its lifetime.
pub struct Store {
    vlog: Arc<ValueLog>,
}

impl Store {
    /// Opens a store rooted at the given directory, creating it if needed.
    pub fn open(dir: &Path, options: StoreOptions) -> VlogResult<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            VlogError::io_error(
                format!("Failed to create store directory: {}", dir.display()),
                e,
            )
        })?;

        let vlog = ValueLog::open(
            &dir.join(VLOG_FILE),
            ValueLogOptions::new().with_verify_on_read(options.verify_on_read),
        )?;

        let path = dir.display().to_string();
        Logger::info(
            "STORE_OPENED",
            &[
                ("path", &path),
                ("verify_on_read", if options.verify_on_read { "true" } else { "false" }),
            ],
        );

        Ok(Self {
            vlog: Arc::new(vlog),
        })
    }

    /// Returns the shared value log handle.
    pub fn value_log(&self) -> &Arc<ValueLog> {
        &self.vlog
    }

    /// Appends a value to the value log, returning its locator.
    ///
    /// The caller records the encoded locator in its index.
    pub fn append_value(&self, value: &[u8]) -> VlogResult<Locator> {
        self.vlog.append(value)
    }

    /// Reads exactly `buf.len()` value bytes at `offset`.
    ///
    /// The expected digest accompanies the read as a verification hint.
    pub fn read_value_at(
        &self,
        buf: &mut [u8],
        offset: u64,
        expected: &ValueDigest,
    ) -> VlogResult<usize> {
        self.vlog.read_at(buf, offset, expected)
    }

    /// Opens a key reader over an index snapshot.
    ///
    /// Cursor-open failures propagate unchanged.
    pub fn key_reader(
        &self,
        snapshot: &dyn IndexSnapshot,
        spec: &ScanSpec,
    ) -> ReaderResult<KeyReader> {
        KeyReader::open(Arc::clone(&self.vlog), snapshot, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::MemIndex;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directory_and_log() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("store");

        let _store = Store::open(&root, StoreOptions::new()).unwrap();
        assert!(root.join(VLOG_FILE).exists());
    }

    #[test]
    fn test_append_and_read_value_at() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path(), StoreOptions::new()).unwrap();

        let locator = store.append_value(b"payload").unwrap();

        let mut buf = vec![0u8; locator.value_len as usize];
        let n = store
            .read_value_at(&mut buf, locator.value_off, &locator.digest)
            .unwrap();
        assert_eq!(n, 7);
        assert_eq!(&buf, b"payload");
    }

    #[test]
    fn test_key_reader_over_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path(), StoreOptions::new()).unwrap();

        let mut index = MemIndex::new();
        let locator = store.append_value(b"hello").unwrap();
        index.insert(b"greeting".to_vec(), locator.encode().to_vec(), 1);

        let snapshot = index.snapshot();
        let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();

        let entry = reader.read().unwrap().unwrap();
        assert_eq!(entry.key, b"greeting".to_vec());
        assert_eq!(entry.value.resolve().unwrap(), b"hello");
        assert!(reader.read().unwrap().is_none());

        reader.close().unwrap();
    }

    #[test]
    fn test_reopen_reads_existing_values() {
        let dir = TempDir::new().unwrap();

        let locator = {
            let store = Store::open(dir.path(), StoreOptions::new()).unwrap();
            store.append_value(b"durable").unwrap()
        };

        let store = Store::open(dir.path(), StoreOptions::new()).unwrap();
        let mut buf = vec![0u8; locator.value_len as usize];
        store
            .read_value_at(&mut buf, locator.value_off, &locator.digest)
            .unwrap();
        assert_eq!(&buf, b"durable");
    }
}
