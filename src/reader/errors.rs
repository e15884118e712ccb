//! Key reader error types
//!
//! The reader adds no interpretation of its own: cursor failures and locator
//! or value log failures pass through unchanged. The only reader-owned error
//! is the deterministic read-after-close failure.

use thiserror::Error;

use crate::index::IndexError;
use crate::vlog::VlogError;

/// Result type for key reader operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors surfaced by the key reader
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The reader was closed; it cannot be reused
    #[error("Key reader already closed")]
    ReaderClosed,

    /// Propagated unchanged from the index cursor
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Propagated unchanged from the locator codec or value log
    #[error(transparent)]
    Vlog(#[from] VlogError),
}

impl ReaderError {
    /// Returns whether this error indicates data corruption
    pub fn is_corruption(&self) -> bool {
        matches!(self, ReaderError::Vlog(e) if e.is_fatal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_locator_is_corruption() {
        let err = ReaderError::from(VlogError::malformed_locator(3));
        assert!(err.is_corruption());
    }

    #[test]
    fn test_cursor_error_is_not_corruption() {
        let err = ReaderError::from(IndexError::ReadFailed("io".into()));
        assert!(!err.is_corruption());
    }
}
