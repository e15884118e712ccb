//! Append-only value log
//!
//! Values are written raw at the tail of a single log file and addressed by
//! absolute byte offset plus length. The file starts with a fixed 16-byte
//! header:
//!
//! ```text
//! +------------------+
//! | Magic            | (8 bytes: "ORCAVLG1")
//! +------------------+
//! | Format Version   | (u32 LE)
//! +------------------+
//! | Header Checksum  | (u32 LE, CRC32 of the first 12 bytes)
//! +------------------+
//! ```
//!
//! The log performs no retries and no caching. Every read is a fresh seek
//! plus exact-length read; an interior lock makes concurrent reads and
//! appends safe. Digest verification on read is opt-in: the expected digest
//! always travels with the read request, but it is only checked when the log
//! was opened with `verify_on_read`.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::digest::{compute_digest, verify_digest, ValueDigest};
use super::errors::{VlogError, VlogResult};
use super::locator::Locator;

/// Magic bytes identifying a value log file
const MAGIC: &[u8; 8] = b"ORCAVLG1";

/// Current on-disk format version
const FORMAT_VERSION: u32 = 1;

/// Fixed header length in bytes
const HEADER_LEN: u64 = 16;

/// Options controlling value log behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueLogOptions {
    /// Recompute and check the content digest on every read.
    ///
    /// Off by default: the digest always travels with the read request, but
    /// verification is an explicit opt-in step.
    pub verify_on_read: bool,
}

impl ValueLogOptions {
    /// Creates options with defaults (verification disabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables digest verification on every read
    pub fn with_verify_on_read(mut self, verify: bool) -> Self {
        self.verify_on_read = verify;
        self
    }
}

#[derive(Debug)]
struct Inner {
    file: std::fs::File,
    /// Total file length, including the header
    size: u64,
}

/// Append-only value log backed by a single file.
#[derive(Debug)]
pub struct ValueLog {
    path: PathBuf,
    inner: Mutex<Inner>,
    verify_on_read: bool,
    /// Number of value reads performed, for observability and tests
    reads: AtomicU64,
}

impl ValueLog {
    /// Opens a value log, creating it with a fresh header if absent or empty.
    ///
    /// An existing file must carry a valid header; any mismatch in magic,
    /// version, or header checksum is fatal corruption.
    pub fn open(path: &Path, options: ValueLogOptions) -> VlogResult<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)
            .map_err(|e| {
                VlogError::io_error(
                    format!("Failed to open value log: {}", path.display()),
                    e,
                )
            })?;

        let size = file
            .metadata()
            .map_err(|e| VlogError::io_error("Failed to read value log metadata", e))?
            .len();

        let size = if size == 0 {
            Self::write_header(&mut file)?;
            HEADER_LEN
        } else {
            Self::validate_header(&mut file)?;
            size
        };

        Ok(Self {
            path: path.to_path_buf(),
            inner: Mutex::new(Inner { file, size }),
            verify_on_read: options.verify_on_read,
            reads: AtomicU64::new(0),
        })
    }

    /// Returns the value log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of value reads performed so far.
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the current log size in bytes, including the header.
    pub fn size(&self) -> u64 {
        self.inner.lock().expect("value log lock poisoned").size
    }

    /// Appends a value at the tail of the log.
    ///
    /// Computes the content digest at write time and returns the locator
    /// describing where the value now lives.
    pub fn append(&self, value: &[u8]) -> VlogResult<Locator> {
        if value.len() > u32::MAX as usize {
            return Err(VlogError::illegal_arguments(format!(
                "Value of {} bytes exceeds maximum locator length",
                value.len()
            )));
        }

        let digest = compute_digest(value);

        let mut inner = self.inner.lock().expect("value log lock poisoned");
        let offset = inner.size;

        inner
            .file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| VlogError::io_error("Failed to seek to value log tail", e))?;
        inner
            .file
            .write_all(value)
            .map_err(|e| VlogError::io_error("Failed to append value", e))?;

        inner.size += value.len() as u64;

        Ok(Locator::new(value.len() as u32, offset, digest))
    }

    /// Reads exactly `buf.len()` bytes starting at `offset`.
    ///
    /// The expected content digest accompanies every read; it is checked only
    /// when the log was opened with `verify_on_read`, in which case a
    /// mismatch is fatal ORCA_DIGEST_MISMATCH.
    ///
    /// Fails with ORCA_VLOG_READ_FAILED when the requested range falls
    /// outside the log.
    pub fn read_at(
        &self,
        buf: &mut [u8],
        offset: u64,
        expected: &ValueDigest,
    ) -> VlogResult<usize> {
        let mut inner = self.inner.lock().expect("value log lock poisoned");

        let out_of_range = offset < HEADER_LEN
            || offset
                .checked_add(buf.len() as u64)
                .map_or(true, |end| end > inner.size);
        if out_of_range {
            return Err(VlogError::out_of_range(offset, buf.len(), inner.size));
        }

        inner
            .file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| {
                VlogError::read_failed(format!("Failed to seek to offset {}", offset), e)
            })?;
        inner.file.read_exact(buf).map_err(|e| {
            VlogError::read_failed(format!("Truncated read at offset {}", offset), e)
        })?;

        drop(inner);
        self.reads.fetch_add(1, Ordering::Relaxed);

        if self.verify_on_read && !verify_digest(buf, expected) {
            return Err(VlogError::digest_mismatch(offset));
        }

        Ok(buf.len())
    }

    fn write_header(file: &mut std::fs::File) -> VlogResult<()> {
        let mut header = [0u8; HEADER_LEN as usize];
        header[0..8].copy_from_slice(MAGIC);
        header[8..12].copy_from_slice(&FORMAT_VERSION.to_le_bytes());

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&header[0..12]);
        header[12..16].copy_from_slice(&hasher.finalize().to_le_bytes());

        file.seek(SeekFrom::Start(0))
            .map_err(|e| VlogError::io_error("Failed to seek for header write", e))?;
        file.write_all(&header)
            .map_err(|e| VlogError::io_error("Failed to write value log header", e))?;
        Ok(())
    }

    fn validate_header(file: &mut std::fs::File) -> VlogResult<()> {
        let mut header = [0u8; HEADER_LEN as usize];
        file.seek(SeekFrom::Start(0))
            .map_err(|e| VlogError::io_error("Failed to seek for header read", e))?;
        file.read_exact(&mut header)
            .map_err(|_| VlogError::corruption("Truncated value log header"))?;

        if &header[0..8] != MAGIC {
            return Err(VlogError::corruption("Value log magic mismatch"));
        }

        let version = u32::from_le_bytes([header[8], header[9], header[10], header[11]]);
        if version != FORMAT_VERSION {
            return Err(VlogError::corruption(format!(
                "Unsupported value log format version: {}",
                version
            )));
        }

        let stored_crc = u32::from_le_bytes([header[12], header[13], header[14], header[15]]);
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&header[0..12]);
        if hasher.finalize() != stored_crc {
            return Err(VlogError::corruption("Value log header checksum mismatch"));
        }

        Ok(())
    }
}
