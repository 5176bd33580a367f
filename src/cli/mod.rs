//! # CLI Module
//!
//! Command-line interface for the duplicate report engine.
//!
//! ## Usage
//! ```bash
//! # Build a report from scanner output
//! dupreport report scan-records.json
//!
//! # Narrow the listing and export alongside
//! dupreport report scan-records.json --query invoice --export report.csv
//!
//! # JSON output for scripting
//! dupreport report scan-records.json --output json
//!
//! # Act on a file the report flagged
//! dupreport delete "backup/a_copy.txt" --root ~/Downloads/Data
//! dupreport download "a.txt" --root ~/Downloads/Data --to ./a.txt
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use duplicate_report::core::format::humanize_bytes;
use duplicate_report::core::intake::JsonFileSource;
use duplicate_report::core::pipeline::ReportPipeline;
use duplicate_report::core::record::{DisplayStatus, DATE_FORMAT};
use duplicate_report::core::report::{export_to_file, ExportFormat, Report};
use duplicate_report::core::search::SearchFilter;
use duplicate_report::core::storage::LocalStore;
use duplicate_report::error::{ReportError, Result};
use duplicate_report::events::{Event, EventChannel, ScanEvent};
use std::path::PathBuf;
use std::thread;

/// Duplicate Report - see where your space went
#[derive(Parser, Debug)]
#[command(name = "dupreport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a duplicate report from scanner output
    Report {
        /// Scanner output file (JSON record payload)
        records: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Show only files whose name contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Also write the report to this file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Format for --export
        #[arg(long, default_value = "csv")]
        export_format: ExportKind,
    },

    /// Delete a file from the scanned tree
    Delete {
        /// Path relative to the scan root (as shown in the report)
        path: String,

        /// The scanned root directory
        #[arg(long)]
        root: PathBuf,
    },

    /// Copy a file out of the scanned tree
    Download {
        /// Path relative to the scan root (as shown in the report)
        path: String,

        /// The scanned root directory
        #[arg(long)]
        root: PathBuf,

        /// Destination file
        #[arg(long)]
        to: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (duplicate paths only)
    Minimal,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportKind {
    Csv,
    Json,
}

impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Csv => ExportFormat::Csv,
            ExportKind::Json => ExportFormat::Json,
        }
    }
}

/// Run the CLI
pub fn run() -> Result<()> {
    duplicate_report::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            records,
            output,
            query,
            export,
            export_format,
        } => run_report(records, output, query, export, export_format),
        Commands::Delete { path, root } => run_delete(&path, root),
        Commands::Download { path, root, to } => run_download(&path, root, &to),
    }
}

fn run_report(
    records: PathBuf,
    output: OutputFormat,
    query: Option<String>,
    export: Option<PathBuf>,
    export_format: ExportKind,
) -> Result<()> {
    let term = Term::stderr();
    let pretty = matches!(output, OutputFormat::Pretty);

    if pretty {
        term.write_line(&format!(
            "{} {}",
            style("Duplicate Report").bold().cyan(),
            style("v0.1.0").dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let pipeline = ReportPipeline::new(Box::new(JsonFileSource::new()));

    // Lifecycle events drive the status lines on a listener thread
    let (sender, receiver) = EventChannel::new();
    let status_term = Term::stderr();
    let listener = thread::spawn(move || {
        for event in receiver.iter() {
            if !pretty {
                continue;
            }
            match event {
                Event::Scan(ScanEvent::Started { target }) => {
                    status_term
                        .write_line(&format!(
                            "  {} reading scan records from {}",
                            style("→").cyan(),
                            target.display()
                        ))
                        .ok();
                }
                Event::Scan(ScanEvent::Completed { total_records }) => {
                    status_term
                        .write_line(&format!(
                            "  {} {} records received",
                            style("→").cyan(),
                            total_records
                        ))
                        .ok();
                }
                Event::Scan(ScanEvent::Failed { message }) => {
                    status_term
                        .write_line(&format!("  {} {}", style("✗").red().bold(), message))
                        .ok();
                }
                _ => {}
            }
        }
    });

    let outcome = pipeline.run_with_events(&records, &sender);
    drop(sender);
    listener.join().ok();
    let report = outcome?;

    if let Some(path) = export {
        export_to_file(&report, &path, export_format.into()).map_err(|source| {
            ReportError::ExportFailed {
                path: path.clone(),
                source,
            }
        })?;
        if pretty {
            term.write_line(&format!(
                "  {} report exported to {}",
                style("→").cyan(),
                path.display()
            ))
            .ok();
        }
    }

    let filter = query.map(|q| SearchFilter::new(&q));
    match output {
        OutputFormat::Pretty => print_pretty_report(&term, &report, filter.as_ref()),
        OutputFormat::Json => print_json_report(&report, filter.as_ref()),
        OutputFormat::Minimal => print_minimal_report(&report, filter.as_ref()),
    }

    Ok(())
}

fn print_pretty_report(term: &Term, report: &Report, filter: Option<&SearchFilter>) {
    term.write_line("").ok();
    term.write_line(&format!("{} Scan Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    // Headline stats before the listing
    term.write_line(&format!(
        "  Total Files      {}",
        style(report.total_files).cyan()
    ))
    .ok();
    term.write_line(&format!(
        "  Duplicate Files  {}",
        style(report.duplicate_files).yellow()
    ))
    .ok();
    term.write_line(&format!(
        "  Space Wasted     {}",
        style(humanize_bytes(report.space_wasted)).red()
    ))
    .ok();
    term.write_line("").ok();

    let visible: Vec<_> = match filter {
        Some(filter) => filter.apply(&report.files),
        None => report.files.iter().collect(),
    };

    if visible.is_empty() {
        term.write_line(&format!("  {} no matching files", style("·").dim()))
            .ok();
        return;
    }

    term.write_line(&format!("{}", style("Files:").bold().underlined()))
        .ok();
    term.write_line("").ok();

    for file in visible {
        let status = match file.display_status {
            DisplayStatus::Unique => style("UNIQUE   ").dim().to_string(),
            DisplayStatus::Original => style("ORIGINAL ").green().to_string(),
            DisplayStatus::Duplicate => style("DUPLICATE").yellow().to_string(),
        };

        let mut line = format!(
            "  {} {} ({}, {}, {})",
            status,
            file.record.name,
            file.record.display_location(),
            humanize_bytes(file.record.size),
            file.record.date_added.format(DATE_FORMAT),
        );

        if let Some(ref original) = file.original {
            line.push_str(&format!(" {} {}", style("←").dim(), style(original).dim()));
        }

        term.write_line(&line).ok();
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "{}",
        style("Deleting a file? Re-run the scan afterwards to refresh the report.").dim()
    ))
    .ok();
}

fn print_json_report(report: &Report, filter: Option<&SearchFilter>) {
    // Stats stay global; the filter only narrows the listing
    let visible: Vec<_> = match filter {
        Some(filter) => filter.apply(&report.files),
        None => report.files.iter().collect(),
    };

    let output = serde_json::json!({
        "total_files": report.total_files,
        "duplicate_files": report.duplicate_files,
        "space_wasted": report.space_wasted,
        "files": visible,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_minimal_report(report: &Report, filter: Option<&SearchFilter>) {
    for file in &report.files {
        if let Some(filter) = filter {
            if !filter.matches(file) {
                continue;
            }
        }
        if file.record.is_duplicate() {
            println!("{}", file.record.relative_path().display());
        }
    }
}

fn run_delete(path: &str, root: PathBuf) -> Result<()> {
    let term = Term::stderr();
    let store = LocalStore::new(root);

    store.delete(path)?;

    term.write_line(&format!("{} Deleted {}", style("✓").green().bold(), path))
        .ok();
    term.write_line(&format!(
        "{}",
        style("Re-run the scan to refresh the report.").dim()
    ))
    .ok();
    Ok(())
}

fn run_download(path: &str, root: PathBuf, to: &PathBuf) -> Result<()> {
    let term = Term::stderr();
    let store = LocalStore::new(root);

    let written = store.retrieve(path, to)?;

    term.write_line(&format!(
        "{} Downloaded {} to {} ({})",
        style("✓").green().bold(),
        path,
        to.display(),
        humanize_bytes(written)
    ))
    .ok();
    Ok(())
}
