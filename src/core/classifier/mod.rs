//! # Classifier Module
//!
//! Assigns each scanned record its display role.
//!
//! The external scanner already decided *which* records are content
//! duplicates; the classifier only answers the presentation question
//! "which of these content-equal files came first". Size is used as a
//! grouping hint for role assignment and timestamps as the ordering key -
//! content equality is never re-derived here, from size or anything else.
//!
//! ## Rules
//! - A `UNIQUE` record becomes `ORIGINAL` when a later same-size `DUPLICATE`
//!   record exists (first-writer-is-canonical).
//! - A `DUPLICATE` record points at the first record in input order, of any
//!   status, with the same size and an earlier position in time. With no
//!   earlier same-size record it stays `DUPLICATE` with no pointer.
//!
//! "Earlier" is a total order: timestamp first, input position breaking
//! ties, so equal timestamps resolve deterministically first-seen-wins.

use crate::core::record::{ClassifiedRecord, DisplayStatus, FileRecord, OriginalRef, ScanStatus};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Classify a scan's records in input order
///
/// Pure and deterministic: the output depends only on field values and input
/// order. The scanner's `status` field is carried through untouched.
pub fn classify(records: &[FileRecord]) -> Vec<ClassifiedRecord> {
    // Index records by size, preserving input order within each bucket,
    // so role assignment is O(bucket) instead of O(n) per record.
    let mut by_size: HashMap<u64, Vec<usize>> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        by_size.entry(record.size).or_default().push(index);
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let bucket = &by_size[&record.size];
            match record.status {
                ScanStatus::Unique => {
                    let has_later_copy = bucket.iter().any(|&other| {
                        records[other].is_duplicate()
                            && is_earlier(record.date_added, index, records[other].date_added, other)
                    });

                    ClassifiedRecord {
                        record: record.clone(),
                        display_status: if has_later_copy {
                            DisplayStatus::Original
                        } else {
                            DisplayStatus::Unique
                        },
                        original: None,
                    }
                }
                ScanStatus::Duplicate => {
                    let original = bucket
                        .iter()
                        .find(|&&other| {
                            is_earlier(records[other].date_added, other, record.date_added, index)
                        })
                        .map(|&other| OriginalRef {
                            index: other,
                            name: records[other].name.clone(),
                            date_added: records[other].date_added,
                        });

                    ClassifiedRecord {
                        record: record.clone(),
                        display_status: DisplayStatus::Duplicate,
                        original,
                    }
                }
            }
        })
        .collect()
}

/// Total order over records: timestamp, then input position
fn is_earlier(
    a_date: NaiveDateTime,
    a_index: usize,
    b_date: NaiveDateTime,
    b_index: usize,
) -> bool {
    (a_date, a_index) < (b_date, b_index)
}
