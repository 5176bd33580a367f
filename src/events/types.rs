//! Event type definitions for lifecycle reporting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the report pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// External-scanner phase events
    Scan(ScanEvent),
    /// Classification/aggregation phase events
    Report(ReportEvent),
}

/// Events around the external-scanner fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ScanEvent {
    /// The fetch has started
    Started { target: PathBuf },
    /// The scanner delivered a record set
    Completed { total_records: usize },
    /// The fetch failed or the scanner reported an error; no report follows
    Failed { message: String },
}

/// Events from classification and aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportEvent {
    /// A report was assembled
    Completed {
        total_files: usize,
        duplicate_files: usize,
        space_wasted: u64,
    },
}
