//! # Pipeline Module
//!
//! Orchestrates one scan-and-report run.
//!
//! ## Stages
//! 1. **Fetch** - pull the raw payload from the external scanner
//! 2. **Validate** - turn raw records into typed ones, or fail hard
//! 3. **Classify** - assign display roles and original pointers
//! 4. **Assemble** - fold the aggregate counters into a [`Report`]
//!
//! The pipeline holds no state between runs: every invocation fetches a
//! fresh snapshot and returns an independent report, so concurrent runs
//! never share mutable data.

use crate::core::classifier::classify;
use crate::core::intake::{validate, RecordSource};
use crate::core::report::Report;
use crate::error::Result;
use crate::events::{null_sender, Event, EventSender, ReportEvent, ScanEvent};
use std::path::Path;

/// Fetch-validate-classify-assemble runner over a record source
pub struct ReportPipeline {
    source: Box<dyn RecordSource>,
}

impl ReportPipeline {
    /// Create a pipeline over the given record source
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Run one scan without lifecycle reporting
    pub fn run(&self, target: &Path) -> Result<Report> {
        self.run_with_events(target, &null_sender())
    }

    /// Run one scan, emitting lifecycle events along the way
    ///
    /// On any failure a `ScanEvent::Failed` is emitted and no report is
    /// produced - partial data is never handed to the presentation layer.
    pub fn run_with_events(&self, target: &Path, events: &EventSender) -> Result<Report> {
        events.send(Event::Scan(ScanEvent::Started {
            target: target.to_path_buf(),
        }));

        let outcome = self.fetch_and_build(target, events);
        if let Err(ref error) = outcome {
            events.send(Event::Scan(ScanEvent::Failed {
                message: error.to_string(),
            }));
        }
        outcome
    }

    fn fetch_and_build(&self, target: &Path, events: &EventSender) -> Result<Report> {
        let payload = self.source.fetch(target)?;
        let raw = payload.into_files()?;
        events.send(Event::Scan(ScanEvent::Completed {
            total_records: raw.len(),
        }));

        let records = validate(raw)?;
        let report = Report::assemble(classify(&records));

        events.send(Event::Report(ReportEvent::Completed {
            total_files: report.total_files,
            duplicate_files: report.duplicate_files,
            space_wasted: report.space_wasted,
        }));

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intake::ScanPayload;
    use crate::core::record::DisplayStatus;
    use crate::error::{DuplicateReportError, ScanError};
    use crate::events::EventChannel;

    /// Record source serving a canned payload, standing in for the scanner
    struct FixedSource {
        payload: String,
    }

    impl FixedSource {
        fn new(payload: &str) -> Self {
            Self {
                payload: payload.to_string(),
            }
        }
    }

    impl RecordSource for FixedSource {
        fn fetch(&self, _target: &Path) -> std::result::Result<ScanPayload, ScanError> {
            serde_json::from_str(&self.payload).map_err(|e| ScanError::Unavailable {
                reason: e.to_string(),
            })
        }
    }

    #[test]
    fn run_builds_a_classified_report() {
        let source = FixedSource::new(
            r#"{"files": [
                {"name": "a.txt", "location": "", "size": 100,
                 "date_added": "2024-01-01 00:00:00", "status": "UNIQUE"},
                {"name": "a_copy.txt", "location": "", "size": 100,
                 "date_added": "2024-01-02 00:00:00", "status": "DUPLICATE"}
            ]}"#,
        );

        let pipeline = ReportPipeline::new(Box::new(source));
        let report = pipeline.run(Path::new("/data")).unwrap();

        assert_eq!(report.total_files, 2);
        assert_eq!(report.duplicate_files, 1);
        assert_eq!(report.space_wasted, 100);
        assert_eq!(report.files[0].display_status, DisplayStatus::Original);
        assert_eq!(report.files[1].display_status, DisplayStatus::Duplicate);
    }

    #[test]
    fn reported_scanner_error_yields_no_report() {
        let source = FixedSource::new(r#"{"error": "Directory not found: /data"}"#);

        let pipeline = ReportPipeline::new(Box::new(source));
        let result = pipeline.run(Path::new("/data"));

        assert!(matches!(
            result,
            Err(DuplicateReportError::Scan(ScanError::Reported { .. }))
        ));
    }

    #[test]
    fn malformed_record_aborts_the_run() {
        let source = FixedSource::new(
            r#"{"files": [
                {"name": "a.txt", "date_added": "2024-01-01 00:00:00", "status": "UNIQUE"}
            ]}"#,
        );

        let pipeline = ReportPipeline::new(Box::new(source));
        let result = pipeline.run(Path::new("/data"));

        assert!(matches!(result, Err(DuplicateReportError::Report(_))));
    }

    #[test]
    fn lifecycle_events_bracket_a_successful_run() {
        let source = FixedSource::new(r#"{"files": []}"#);
        let pipeline = ReportPipeline::new(Box::new(source));
        let (sender, receiver) = EventChannel::new();

        pipeline
            .run_with_events(Path::new("/data"), &sender)
            .unwrap();
        drop(sender);

        let events: Vec<Event> = receiver.iter().collect();
        assert!(matches!(events[0], Event::Scan(ScanEvent::Started { .. })));
        assert!(matches!(
            events[1],
            Event::Scan(ScanEvent::Completed { total_records: 0 })
        ));
        assert!(matches!(
            events[2],
            Event::Report(ReportEvent::Completed { total_files: 0, .. })
        ));
    }

    #[test]
    fn failure_emits_a_failed_event() {
        let source = FixedSource::new(r#"{"error": "scanner exploded"}"#);
        let pipeline = ReportPipeline::new(Box::new(source));
        let (sender, receiver) = EventChannel::new();

        let _ = pipeline.run_with_events(Path::new("/data"), &sender);
        drop(sender);

        let events: Vec<Event> = receiver.iter().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, Event::Scan(ScanEvent::Failed { .. }))));
    }

    #[test]
    fn repeat_runs_produce_identical_reports() {
        let source = FixedSource::new(
            r#"{"files": [
                {"name": "a.txt", "location": "", "size": 100,
                 "date_added": "2024-01-01 00:00:00", "status": "UNIQUE"}
            ]}"#,
        );
        let pipeline = ReportPipeline::new(Box::new(source));

        let first = pipeline.run(Path::new("/data")).unwrap();
        let second = pipeline.run(Path::new("/data")).unwrap();

        assert_eq!(first, second);
    }
}
