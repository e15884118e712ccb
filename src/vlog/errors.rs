//! Value log error types
//!
//! Error codes:
//! - ORCA_ILLEGAL_ARGUMENTS (ERROR severity) - caller contract violation
//! - ORCA_VLOG_IO_ERROR (ERROR severity)
//! - ORCA_VLOG_READ_FAILED (ERROR severity) - out-of-range or truncated read
//! - ORCA_MALFORMED_LOCATOR (FATAL severity) - from CORRUPTION category
//! - ORCA_DIGEST_MISMATCH (FATAL severity) - from CORRUPTION category
//! - ORCA_VLOG_CORRUPTION (FATAL severity) - from CORRUPTION category

use std::fmt;
use std::io;

/// Severity levels for value log errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, store continues
    Error,
    /// Data integrity is compromised
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Value log error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VlogErrorCode {
    /// Caller violated a construction or call contract
    OrcaIllegalArguments,
    /// Disk I/O failure
    OrcaVlogIoError,
    /// Value read failed (offset out of range, truncated read)
    OrcaVlogReadFailed,
    /// Locator blob shorter than the fixed wire width
    OrcaMalformedLocator,
    /// Read bytes do not match the recorded content digest
    OrcaDigestMismatch,
    /// Value log file header is invalid
    OrcaVlogCorruption,
}

impl VlogErrorCode {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            VlogErrorCode::OrcaIllegalArguments => "ORCA_ILLEGAL_ARGUMENTS",
            VlogErrorCode::OrcaVlogIoError => "ORCA_VLOG_IO_ERROR",
            VlogErrorCode::OrcaVlogReadFailed => "ORCA_VLOG_READ_FAILED",
            VlogErrorCode::OrcaMalformedLocator => "ORCA_MALFORMED_LOCATOR",
            VlogErrorCode::OrcaDigestMismatch => "ORCA_DIGEST_MISMATCH",
            VlogErrorCode::OrcaVlogCorruption => "ORCA_VLOG_CORRUPTION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            VlogErrorCode::OrcaIllegalArguments => Severity::Error,
            VlogErrorCode::OrcaVlogIoError => Severity::Error,
            VlogErrorCode::OrcaVlogReadFailed => Severity::Error,
            VlogErrorCode::OrcaMalformedLocator => Severity::Fatal,
            VlogErrorCode::OrcaDigestMismatch => Severity::Fatal,
            VlogErrorCode::OrcaVlogCorruption => Severity::Fatal,
        }
    }
}

impl fmt::Display for VlogErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Value log error with full context
#[derive(Debug)]
pub struct VlogError {
    /// Error code
    code: VlogErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl VlogError {
    /// Create an illegal arguments error
    pub fn illegal_arguments(message: impl Into<String>) -> Self {
        Self {
            code: VlogErrorCode::OrcaIllegalArguments,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create an I/O error
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: VlogErrorCode::OrcaVlogIoError,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a read failed error
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: VlogErrorCode::OrcaVlogReadFailed,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Create a read failed error for an out-of-range request
    pub fn out_of_range(offset: u64, len: usize, log_size: u64) -> Self {
        Self {
            code: VlogErrorCode::OrcaVlogReadFailed,
            message: "Read range exceeds value log size".to_string(),
            details: Some(format!(
                "offset: {}, len: {}, log_size: {}",
                offset, len, log_size
            )),
            source: None,
        }
    }

    /// Create a malformed locator error (FATAL)
    pub fn malformed_locator(got_len: usize) -> Self {
        Self {
            code: VlogErrorCode::OrcaMalformedLocator,
            message: "Locator blob shorter than fixed wire width".to_string(),
            details: Some(format!("got: {} bytes, need: 44", got_len)),
            source: None,
        }
    }

    /// Create a digest mismatch error with offset context (FATAL)
    pub fn digest_mismatch(offset: u64) -> Self {
        Self {
            code: VlogErrorCode::OrcaDigestMismatch,
            message: "Value bytes do not match recorded content digest".to_string(),
            details: Some(format!("offset: {}", offset)),
            source: None,
        }
    }

    /// Create a value log corruption error (FATAL)
    pub fn corruption(message: impl Into<String>) -> Self {
        Self {
            code: VlogErrorCode::OrcaVlogCorruption,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> VlogErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns whether this error indicates data corruption
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for VlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for VlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for value log operations
pub type VlogResult<T> = Result<T, VlogError>;
