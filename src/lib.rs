//! # Duplicate Report
//!
//! Turns a set of scanned file records into a classified, explainable
//! duplicate report.
//!
//! ## Core Philosophy
//! - **Trust the scanner** - content equality is the external scanner's
//!   verdict; this crate only decides roles (original vs duplicate)
//! - **Show WHICH** - every duplicate points at the file it duplicates
//! - **No hidden state** - each scan produces an independent report
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and presentation layers:
//! - `core` - record model, classifier, aggregation, storage actions
//! - `events` - event-driven lifecycle reporting (GUI-ready)
//! - `error` - user-friendly error types
//! - `cli` - command-line interface

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{DuplicateReportError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point (CLI or GUI).
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
