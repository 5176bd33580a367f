//! Export functionality for duplicate reports.
//!
//! Supports CSV and JSON export formats for sharing and archiving results.

use super::Report;
use std::io::Write;
use std::path::Path;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export a report to CSV format
///
/// CSV columns: Name, Location, Size (bytes), Date Added, Status, Display Status, Original
pub fn export_csv<W: Write>(report: &Report, mut writer: W) -> std::io::Result<()> {
    writeln!(
        writer,
        "Name,Location,Size (bytes),Date Added,Status,Display Status,Original"
    )?;

    for file in &report.files {
        let original = file
            .original
            .as_ref()
            .map(|o| o.to_string())
            .unwrap_or_default();

        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            file.record.name,
            file.record.display_location(),
            file.record.size,
            file.record.date_added.format(crate::core::record::DATE_FORMAT),
            file.record.status,
            file.display_status,
            original
        )?;
    }

    Ok(())
}

/// Export a report as pretty-printed JSON
///
/// Produces the same shape the presentation layer consumes.
pub fn export_json<W: Write>(report: &Report, writer: W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Export a report to a file
pub fn export_to_file(report: &Report, path: &Path, format: ExportFormat) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(report, writer),
        ExportFormat::Json => export_json(report, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::classify;
    use crate::core::record::{parse_timestamp, FileRecord, ScanStatus};

    fn sample_report() -> Report {
        let records = vec![
            FileRecord {
                name: "a.txt".to_string(),
                location: String::new(),
                size: 100,
                date_added: parse_timestamp("2024-01-01 00:00:00").unwrap(),
                status: ScanStatus::Unique,
            },
            FileRecord {
                name: "a_copy.txt".to_string(),
                location: "backup".to_string(),
                size: 100,
                date_added: parse_timestamp("2024-01-02 00:00:00").unwrap(),
                status: ScanStatus::Duplicate,
            },
        ];
        Report::assemble(classify(&records))
    }

    #[test]
    fn csv_export_includes_header() {
        let mut output = Vec::new();

        export_csv(&sample_report(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.starts_with("Name,Location,Size (bytes),Date Added,Status"));
    }

    #[test]
    fn csv_export_includes_all_records() {
        let mut output = Vec::new();

        export_csv(&sample_report(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("a.txt"));
        assert!(csv.contains("a_copy.txt"));
        assert!(csv.contains("Root Directory"));
        assert!(csv.contains("backup"));
    }

    #[test]
    fn csv_marks_roles_and_original() {
        let mut output = Vec::new();

        export_csv(&sample_report(), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("ORIGINAL"));
        assert!(csv.contains("a.txt (2024-01-01 00:00:00)"));
    }

    #[test]
    fn json_export_round_trips() {
        let report = sample_report();
        let mut output = Vec::new();

        export_json(&report, &mut output).unwrap();

        let back: Report = serde_json::from_slice(&output).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn export_to_file_writes_both_formats() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = sample_report();

        let csv_path = dir.path().join("report.csv");
        export_to_file(&report, &csv_path, ExportFormat::Csv).unwrap();
        assert!(std::fs::read_to_string(&csv_path).unwrap().contains("a_copy.txt"));

        let json_path = dir.path().join("report.json");
        export_to_file(&report, &json_path, ExportFormat::Json).unwrap();
        assert!(std::fs::read_to_string(&json_path).unwrap().contains("space_wasted"));
    }
}
