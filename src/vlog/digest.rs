//! SHA-256 content digests for value log entries
//!
//! Every appended value is digested at write time and the digest travels
//! inside the locator. Verification on read is opt-in; a mismatch means the
//! log bytes no longer match what was committed.

use sha2::{Digest, Sha256};

/// Width of a content digest in bytes
pub const DIGEST_LEN: usize = 32;

/// A 256-bit content digest
pub type ValueDigest = [u8; DIGEST_LEN];

/// Computes the SHA-256 digest of the provided data.
///
/// Deterministic: the same input always produces the same digest.
pub fn compute_digest(data: &[u8]) -> ValueDigest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Verifies that the computed digest matches the expected digest.
pub fn verify_digest(data: &[u8], expected: &ValueDigest) -> bool {
    compute_digest(data) == *expected
}
