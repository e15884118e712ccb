//! Fixed-width value locator codec
//!
//! A locator tells the reader where a value lives in the value log and how to
//! recognize it. The wire form is a persisted, bit-exact 44-byte layout:
//!
//! ```text
//! +------------------+
//! | Value Length     | (u32 BE, bytes 0..4)
//! +------------------+
//! | Value Offset     | (u64 BE, bytes 4..12)
//! +------------------+
//! | Content Digest   | (32 bytes, bytes 12..44)
//! +------------------+
//! ```
//!
//! Decode performs no plausibility checks on length or offset; those belong
//! to the value log at resolve time. The only structural requirement is that
//! the blob carries at least the fixed width. Trailing bytes are ignored.

use super::digest::{ValueDigest, DIGEST_LEN};
use super::errors::{VlogError, VlogResult};

/// Fixed wire width of an encoded locator in bytes
pub const LOCATOR_LEN: usize = 4 + 8 + DIGEST_LEN;

/// Decoded form of a value locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    /// Number of bytes stored at `value_off` in the value log
    pub value_len: u32,
    /// Byte offset of the value in the value log
    pub value_off: u64,
    /// SHA-256 digest of the value, computed at write time
    pub digest: ValueDigest,
}

impl Locator {
    /// Creates a locator from its decoded fields.
    pub fn new(value_len: u32, value_off: u64, digest: ValueDigest) -> Self {
        Self {
            value_len,
            value_off,
            digest,
        }
    }

    /// Decodes a locator from its opaque wire form.
    ///
    /// Requires at least [`LOCATOR_LEN`] bytes; extra trailing bytes are
    /// ignored. Fails with ORCA_MALFORMED_LOCATOR on a short blob.
    pub fn decode(blob: &[u8]) -> VlogResult<Self> {
        if blob.len() < LOCATOR_LEN {
            return Err(VlogError::malformed_locator(blob.len()));
        }

        let value_len = u32::from_be_bytes([blob[0], blob[1], blob[2], blob[3]]);
        let value_off = u64::from_be_bytes([
            blob[4], blob[5], blob[6], blob[7], blob[8], blob[9], blob[10], blob[11],
        ]);

        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&blob[12..LOCATOR_LEN]);

        Ok(Self {
            value_len,
            value_off,
            digest,
        })
    }

    /// Encodes the locator into its fixed 44-byte wire form.
    ///
    /// Exact inverse of [`Locator::decode`].
    pub fn encode(&self) -> [u8; LOCATOR_LEN] {
        let mut buf = [0u8; LOCATOR_LEN];
        buf[0..4].copy_from_slice(&self.value_len.to_be_bytes());
        buf[4..12].copy_from_slice(&self.value_off.to_be_bytes());
        buf[12..LOCATOR_LEN].copy_from_slice(&self.digest);
        buf
    }
}
