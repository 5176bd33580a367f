//! # Intake Module
//!
//! The boundary with the external scanner.
//!
//! The scanner owns directory traversal and content-duplication detection;
//! this module only receives its output. A payload is either an explicit
//! error (surfaced as-is, no partial report) or a list of raw records that
//! must validate completely before classification - a record the engine
//! cannot account for would make the statistics silently wrong, so missing
//! or unreadable fields are hard failures naming the record's position,
//! never coerced to defaults.
//!
//! The scanner also emits its own aggregate counters alongside `files`;
//! they are ignored here, the aggregator recomputes them from the records.

use crate::core::record::{parse_timestamp, FileRecord, ScanStatus};
use crate::error::{ReportError, ScanError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw scan payload as the scanner serializes it
#[derive(Debug, Clone, Deserialize)]
pub struct ScanPayload {
    /// Explicit scanner-side failure (e.g. unreadable target directory)
    pub error: Option<String>,
    #[serde(default)]
    pub files: Vec<RawRecord>,
}

impl ScanPayload {
    /// Unwrap the record list, rejecting payloads that carry an error
    pub fn into_files(self) -> Result<Vec<RawRecord>, ScanError> {
        match self.error {
            Some(message) => Err(ScanError::Reported { message }),
            None => Ok(self.files),
        }
    }
}

/// One record as it appears on the wire, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub name: Option<String>,
    pub location: Option<String>,
    pub size: Option<i64>,
    pub date_added: Option<String>,
    pub status: Option<String>,
}

impl RawRecord {
    /// Validate into a typed record, `index` being the wire position
    fn into_record(self, index: usize) -> Result<FileRecord, ReportError> {
        let name = self
            .name
            .ok_or(ReportError::MissingField { index, field: "name" })?;

        let size = self
            .size
            .ok_or(ReportError::MissingField { index, field: "size" })?;
        if size < 0 {
            return Err(ReportError::NegativeSize { index, size });
        }

        let date_raw = self
            .date_added
            .ok_or(ReportError::MissingField { index, field: "date_added" })?;
        let date_added = parse_timestamp(&date_raw).ok_or_else(|| ReportError::InvalidTimestamp {
            index,
            value: date_raw.clone(),
        })?;

        let status_raw = self
            .status
            .ok_or(ReportError::MissingField { index, field: "status" })?;
        let status = ScanStatus::from_wire(&status_raw).ok_or_else(|| ReportError::UnknownStatus {
            index,
            value: status_raw.clone(),
        })?;

        Ok(FileRecord {
            name,
            location: self.location.unwrap_or_default(),
            size: size as u64,
            date_added,
            status,
        })
    }
}

/// Validate a full wire sequence, preserving input order
pub fn validate(raw: Vec<RawRecord>) -> Result<Vec<FileRecord>, ReportError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.into_record(index))
        .collect()
}

/// Trait for scan-record sources
///
/// The production source reads scanner output from disk; implement this
/// trait to plug in a different collaborator (e.g. for testing).
pub trait RecordSource: Send + Sync {
    /// Fetch the raw payload for one scan
    fn fetch(&self, target: &Path) -> Result<ScanPayload, ScanError>;
}

/// Source that reads a payload the scanner wrote as a JSON file
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource;

impl JsonFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSource for JsonFileSource {
    fn fetch(&self, target: &Path) -> Result<ScanPayload, ScanError> {
        let bytes = fs::read(target).map_err(|e| ScanError::Unavailable {
            reason: format!("{}: {}", target.display(), e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| ScanError::Unavailable {
            reason: format!("{}: {}", target.display(), e),
        })
    }
}
