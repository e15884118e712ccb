//! Lazy, re-readable value references
//!
//! Index scans touch far more keys than callers ultimately read values for,
//! so a scan never fetches value bytes up front. Each entry instead yields a
//! `ValueRef`: a decoded locator plus a shared handle to the value log.
//! Resolution is the caller's explicit choice and its full cost.

use std::sync::Arc;

use crate::vlog::{Locator, ValueDigest, ValueLog, VlogResult};

/// Deferred handle to a value in the value log.
///
/// Holds no value bytes and performs no caching: every [`ValueRef::resolve`]
/// call is one fresh read against the log. References are cheap to create
/// and discard; the value log must outlive any reference that will be
/// resolved (the handle is shared, not owning).
#[derive(Clone)]
pub struct ValueRef {
    locator: Locator,
    vlog: Arc<ValueLog>,
}

impl ValueRef {
    /// Creates a reference from a decoded locator. Performs no I/O.
    pub(crate) fn new(locator: Locator, vlog: Arc<ValueLog>) -> Self {
        Self { locator, vlog }
    }

    /// Length of the referenced value in bytes
    pub fn len(&self) -> u32 {
        self.locator.value_len
    }

    /// Returns true if the referenced value is empty
    pub fn is_empty(&self) -> bool {
        self.locator.value_len == 0
    }

    /// Byte offset of the value in the value log
    pub fn offset(&self) -> u64 {
        self.locator.value_off
    }

    /// Content digest recorded for the value at write time
    pub fn digest(&self) -> &ValueDigest {
        &self.locator.digest
    }

    /// Fetches the value bytes from the value log.
    ///
    /// Allocates exactly `len()` bytes and delegates to the log's
    /// offset read, passing the recorded digest along as the verification
    /// hint. Accessor failures (out-of-range offset, truncated read, I/O
    /// error, digest mismatch when verification is enabled) propagate
    /// unchanged.
    pub fn resolve(&self) -> VlogResult<Vec<u8>> {
        let mut buf = vec![0u8; self.locator.value_len as usize];
        self.vlog
            .read_at(&mut buf, self.locator.value_off, &self.locator.digest)?;
        Ok(buf)
    }
}

impl std::fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueRef")
            .field("value_len", &self.locator.value_len)
            .field("value_off", &self.locator.value_off)
            .finish()
    }
}
