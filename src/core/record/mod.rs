//! # Record Module
//!
//! The scanned-file record model and its classified counterpart.
//!
//! A [`FileRecord`] is what the external scanner hands us: file metadata plus
//! a binary content verdict (`UNIQUE` / `DUPLICATE`). A [`ClassifiedRecord`]
//! is what the engine hands back: the same record with a three-way display
//! status and, for duplicates, a pointer to the record judged to be the
//! earliest copy. The scanner's verdict is never overwritten.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Timestamp format emitted by the scanner
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a scanner timestamp
///
/// Accepts the scanner's native space-separated form and the `T`-separated
/// ISO-8601 equivalent.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Serde adapter for the scanner's timestamp format
pub(crate) mod wire_date {
    use super::{parse_timestamp, DATE_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_timestamp(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unparseable date_added {value:?}")))
    }
}

/// The external scanner's content-duplication verdict
///
/// Assigned once by the scanner, trusted as-is by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScanStatus {
    Unique,
    Duplicate,
}

impl ScanStatus {
    /// Parse the scanner's wire representation
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "UNIQUE" => Some(ScanStatus::Unique),
            "DUPLICATE" => Some(ScanStatus::Duplicate),
            _ => None,
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Unique => write!(f, "UNIQUE"),
            ScanStatus::Duplicate => write!(f, "DUPLICATE"),
        }
    }
}

/// The three-way classification shown to the user
///
/// Derived by the classifier; distinct from the scanner's binary verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayStatus {
    Unique,
    Duplicate,
    Original,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStatus::Unique => write!(f, "UNIQUE"),
            DisplayStatus::Duplicate => write!(f, "DUPLICATE"),
            DisplayStatus::Original => write!(f, "ORIGINAL"),
        }
    }
}

/// One scanned file as reported by the external scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File base name
    pub name: String,
    /// Directory relative to the scan root; empty means the root itself
    #[serde(default)]
    pub location: String,
    /// File size in bytes
    pub size: u64,
    /// When the file was discovered/created
    #[serde(with = "wire_date")]
    pub date_added: NaiveDateTime,
    /// The scanner's content verdict
    pub status: ScanStatus,
}

impl FileRecord {
    /// Whether the scanner marked this record a content duplicate
    pub fn is_duplicate(&self) -> bool {
        self.status == ScanStatus::Duplicate
    }

    /// Path relative to the scan root (`location/name`, or bare `name`)
    pub fn relative_path(&self) -> PathBuf {
        if self.location.is_empty() {
            PathBuf::from(&self.name)
        } else {
            PathBuf::from(&self.location).join(&self.name)
        }
    }

    /// Location label for display; the root shows as "Root Directory"
    pub fn display_location(&self) -> &str {
        if self.location.is_empty() {
            "Root Directory"
        } else {
            &self.location
        }
    }
}

/// Identity reference to the record judged to be the earliest copy
///
/// `index` points into the report's `files` sequence; `name` and
/// `date_added` are carried along so a serialized report can render the
/// "original file" column without a join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalRef {
    pub index: usize,
    pub name: String,
    #[serde(with = "wire_date")]
    pub date_added: NaiveDateTime,
}

impl fmt::Display for OriginalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date_added.format(DATE_FORMAT))
    }
}

/// A record with its derived display role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    #[serde(flatten)]
    pub record: FileRecord,
    /// Derived role; never overwrites the scanner's `status`
    pub display_status: DisplayStatus,
    /// Present only when `display_status` is `DUPLICATE` and an earlier
    /// same-size record exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<OriginalRef>,
}
