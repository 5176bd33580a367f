//! # Search Module
//!
//! Name filtering over an already-classified report.
//!
//! The filter is presentation-side: it narrows the `files` list for display
//! and never re-invokes the classifier, so a record's role and original
//! pointer are unaffected by what the user typed in the search box.

use crate::core::record::ClassifiedRecord;

/// Case-insensitive substring filter on record names
#[derive(Debug, Clone)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    /// Create a filter; the query is lowercased once up front
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }

    /// Check whether a record's name matches the query
    ///
    /// An empty query matches everything.
    pub fn matches(&self, record: &ClassifiedRecord) -> bool {
        record.record.name.to_lowercase().contains(&self.query)
    }

    /// Narrow a classified file list, preserving order
    pub fn apply<'a>(&self, files: &'a [ClassifiedRecord]) -> Vec<&'a ClassifiedRecord> {
        files.iter().filter(|file| self.matches(file)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{parse_timestamp, DisplayStatus, FileRecord, ScanStatus};

    fn classified(name: &str) -> ClassifiedRecord {
        ClassifiedRecord {
            record: FileRecord {
                name: name.to_string(),
                location: String::new(),
                size: 10,
                date_added: parse_timestamp("2024-01-01 00:00:00").unwrap(),
                status: ScanStatus::Unique,
            },
            display_status: DisplayStatus::Unique,
            original: None,
        }
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filter = SearchFilter::new("REPORT");
        assert!(filter.matches(&classified("quarterly_report.pdf")));
        assert!(filter.matches(&classified("Report.PDF")));
    }

    #[test]
    fn filter_matches_substrings_only() {
        let filter = SearchFilter::new("photo");
        assert!(filter.matches(&classified("vacation_photo_01.jpg")));
        assert!(!filter.matches(&classified("document.txt")));
    }

    #[test]
    fn empty_query_matches_everything() {
        let filter = SearchFilter::new("");
        assert!(filter.matches(&classified("anything.bin")));
    }

    #[test]
    fn apply_preserves_order() {
        let files = vec![classified("b_notes.txt"), classified("a_notes.txt"), classified("other.md")];

        let filter = SearchFilter::new("notes");
        let narrowed = filter.apply(&files);

        let names: Vec<_> = narrowed.iter().map(|f| f.record.name.as_str()).collect();
        assert_eq!(names, ["b_notes.txt", "a_notes.txt"]);
    }
}
