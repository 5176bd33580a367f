//! # Error Module
//!
//! User-friendly error types for the duplicate report engine.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - record positions, paths, what went wrong
//! - **Recoverable at the edge** - scan and storage failures are surfaced to
//!   the presentation layer, never treated as process-fatal

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum DuplicateReportError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors at the external-scanner boundary
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scanner could not be reached or its output could not be read.
    /// Retryable; no partial report is shown.
    #[error("Scanner unavailable: {reason}")]
    Unavailable { reason: String },

    /// The scanner responded but carried an explicit error payload
    /// (e.g. the target directory was missing or unreadable).
    #[error("Scan failed: {message}")]
    Reported { message: String },
}

/// Errors while building a report from scanned records
///
/// These are hard failures: a record the core cannot account for would make
/// the statistics silently wrong, so nothing is coerced or skipped.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index}: size {size} is negative")]
    NegativeSize { index: usize, size: i64 },

    #[error("Record {index}: unparseable date_added {value:?}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Record {index}: unknown scan status {value:?} (expected UNIQUE or DUPLICATE)")]
    UnknownStatus { index: usize, value: String },

    #[error("Failed to export report to {path}: {source}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the storage collaborator (delete / download)
///
/// Non-fatal: a failed action leaves the prior report intact; the UI
/// contract is refresh-by-rescan, not local patching.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Access denied: {path} is outside the scanned directory")]
    OutsideRoot { path: PathBuf },

    #[error("Failed to delete {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to download {path}: {source}")]
    DownloadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, DuplicateReportError>;
