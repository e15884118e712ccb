//! Value log subsystem for orcadb
//!
//! The value log holds raw value payloads in a single append-only file,
//! addressed by offset plus length. The sorted index never stores values;
//! it stores fixed-width locators pointing here.
//!
//! # Design Principles
//!
//! - Append-only (no in-place updates)
//! - Content-addressed: every value is SHA-256 digested at write time
//! - Reads are fresh, uncached, and safe to issue concurrently
//! - Digest verification on read is explicit opt-in, never implicit
//!
//! # Invariants Enforced
//!
//! - A locator's length equals the number of bytes stored at its offset
//! - The locator wire form is the bit-exact 44-byte big-endian layout
//! - Corruption (short locator, digest mismatch, bad header) is fatal

mod digest;
mod errors;
mod locator;
mod log;

pub use digest::{compute_digest, verify_digest, ValueDigest, DIGEST_LEN};
pub use errors::{Severity, VlogError, VlogErrorCode, VlogResult};
pub use locator::{Locator, LOCATOR_LEN};
pub use log::{ValueLog, ValueLogOptions};
