//! Index cursor error types

use thiserror::Error;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors surfaced by index snapshots and their cursors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The cursor was closed and can no longer be read
    #[error("Cursor already closed")]
    CursorClosed,

    /// The underlying index failed to produce the next entry
    #[error("Cursor read failed: {0}")]
    ReadFailed(String),

    /// The scan specification is not satisfiable by this snapshot
    #[error("Invalid scan spec: {0}")]
    InvalidSpec(String),
}
