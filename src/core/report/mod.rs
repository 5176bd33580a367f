//! # Report Module
//!
//! Aggregates a classified record set into the per-scan report.
//!
//! A [`Report`] is a request-scoped value: each scan builds a fresh one and
//! nothing is cached or shared between scans. The counters are folded from
//! the scanner's `status` field, so they agree with the record list by
//! construction no matter what the classifier decided about display roles.

mod export;

pub use export::{export_csv, export_json, export_to_file, ExportFormat};

use crate::core::record::ClassifiedRecord;
use serde::{Deserialize, Serialize};

/// Aggregate statistics plus the classified record list for one scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Count of all records
    pub total_files: usize,
    /// Count of records the scanner marked DUPLICATE
    pub duplicate_files: usize,
    /// Sum of sizes over DUPLICATE records, in bytes
    pub space_wasted: u64,
    /// Classified records, in scan input order
    pub files: Vec<ClassifiedRecord>,
}

impl Report {
    /// Fold the classified sequence into a report
    ///
    /// Order is preserved; an empty scan is a valid (all-zero) report.
    pub fn assemble(files: Vec<ClassifiedRecord>) -> Self {
        let total_files = files.len();
        let duplicate_files = files.iter().filter(|f| f.record.is_duplicate()).count();
        let space_wasted = files
            .iter()
            .filter(|f| f.record.is_duplicate())
            .map(|f| f.record.size)
            .sum();

        Self {
            total_files,
            duplicate_files,
            space_wasted,
            files,
        }
    }

    /// Resolve a record's original pointer against this report
    pub fn original_of(&self, record: &ClassifiedRecord) -> Option<&ClassifiedRecord> {
        record
            .original
            .as_ref()
            .and_then(|original| self.files.get(original.index))
    }
}
