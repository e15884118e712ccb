//! End-to-end value resolution tests
//!
//! Exercises the full read path: values appended to the value log, locators
//! recorded in the index, keys scanned through the key reader, and values
//! resolved lazily on demand.

use std::sync::Arc;
use std::thread;

use orcadb::index::{MemIndex, ScanSpec};
use orcadb::store::{Store, StoreOptions};
use orcadb::vlog::{compute_digest, Locator, LOCATOR_LEN};
use tempfile::TempDir;

fn populated_store(values: &[(&str, &str)]) -> (TempDir, Store, MemIndex) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path(), StoreOptions::new()).unwrap();

    let mut index = MemIndex::new();
    for (i, (key, value)) in values.iter().enumerate() {
        let locator = store.append_value(value.as_bytes()).unwrap();
        index.insert(key.as_bytes().to_vec(), locator.encode().to_vec(), i as u64 + 1);
    }

    (dir, store, index)
}

#[test]
fn scan_yields_keys_in_order_with_resolvable_values() {
    let (_dir, store, index) =
        populated_store(&[("a", "alpha"), ("b", "bravo"), ("c", "charlie")]);

    let snapshot = index.snapshot();
    let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();

    let mut seen = Vec::new();
    while let Some(entry) = reader.read().unwrap() {
        let value = entry.value.resolve().unwrap();
        seen.push((entry.key, value));
    }

    assert_eq!(
        seen,
        vec![
            (b"a".to_vec(), b"alpha".to_vec()),
            (b"b".to_vec(), b"bravo".to_vec()),
            (b"c".to_vec(), b"charlie".to_vec()),
        ]
    );

    reader.close().unwrap();
}

#[test]
fn scan_alone_performs_no_value_log_reads() {
    let (_dir, store, index) = populated_store(&[("a", "alpha"), ("b", "bravo")]);

    let snapshot = index.snapshot();
    let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();
    while reader.read().unwrap().is_some() {}

    assert_eq!(store.value_log().read_count(), 0);
}

#[test]
fn each_resolve_is_a_fresh_read() {
    let (_dir, store, index) = populated_store(&[("k", "value")]);

    let snapshot = index.snapshot();
    let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();
    let entry = reader.read().unwrap().unwrap();

    let first = entry.value.resolve().unwrap();
    let second = entry.value.resolve().unwrap();

    assert_eq!(first, second);
    assert_eq!(store.value_log().read_count(), 2);
}

#[test]
fn references_outlive_the_reader() {
    let (_dir, store, index) = populated_store(&[("k", "survivor")]);

    let snapshot = index.snapshot();
    let entry = {
        let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();
        let entry = reader.read().unwrap().unwrap();
        reader.close().unwrap();
        entry
    };

    // The reference resolves after its reader is gone
    assert_eq!(entry.value.resolve().unwrap(), b"survivor");
}

#[test]
fn concurrent_resolution_from_many_references() {
    let (_dir, store, index) = populated_store(&[
        ("a", "alpha"),
        ("b", "bravo"),
        ("c", "charlie"),
        ("d", "delta"),
    ]);

    let snapshot = index.snapshot();
    let mut reader = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();

    let mut entries = Vec::new();
    while let Some(entry) = reader.read().unwrap() {
        entries.push(entry);
    }

    let expected: Vec<Vec<u8>> = ["alpha", "bravo", "charlie", "delta"]
        .iter()
        .map(|v| v.as_bytes().to_vec())
        .collect();

    let handles: Vec<_> = entries
        .into_iter()
        .map(|entry| thread::spawn(move || entry.value.resolve().unwrap()))
        .collect();

    let resolved: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(resolved, expected);
}

#[test]
fn prefix_scan_resolves_only_matching_keys() {
    let (_dir, store, index) = populated_store(&[
        ("order:1", "books"),
        ("order:2", "tools"),
        ("user:1", "alice"),
    ]);

    let snapshot = index.snapshot();
    let spec = ScanSpec::new().with_prefix(b"order:".to_vec());
    let mut reader = store.key_reader(&snapshot, &spec).unwrap();

    let mut values = Vec::new();
    while let Some(entry) = reader.read().unwrap() {
        values.push(entry.value.resolve().unwrap());
    }
    assert_eq!(values, vec![b"books".to_vec(), b"tools".to_vec()]);
}

#[test]
fn worked_locator_example() {
    // The documented scenario: len=5, off=1000, digest of "hello"
    let digest = compute_digest(b"hello");
    let mut blob = Vec::new();
    blob.extend_from_slice(&[0x00, 0x00, 0x00, 0x05]);
    blob.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xE8]);
    blob.extend_from_slice(&digest);
    assert_eq!(blob.len(), LOCATOR_LEN);

    let locator = Locator::decode(&blob).unwrap();
    assert_eq!(locator.value_len, 5);
    assert_eq!(locator.value_off, 1000);
    assert_eq!(locator.digest, digest);
}

#[test]
fn shared_log_handle_across_stores_and_threads() {
    let (_dir, store, index) = populated_store(&[("k", "shared")]);
    let snapshot = index.snapshot();

    // Two readers, two threads, one snapshot
    let log = Arc::clone(store.value_log());
    let mut r1 = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();
    let mut r2 = store.key_reader(&snapshot, &ScanSpec::new()).unwrap();

    let e1 = r1.read().unwrap().unwrap();
    let e2 = r2.read().unwrap().unwrap();

    let t1 = thread::spawn(move || e1.value.resolve().unwrap());
    let t2 = thread::spawn(move || e2.value.resolve().unwrap());

    assert_eq!(t1.join().unwrap(), b"shared");
    assert_eq!(t2.join().unwrap(), b"shared");
    assert_eq!(log.read_count(), 2);
}
