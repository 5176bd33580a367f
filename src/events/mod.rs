//! # Events Module
//!
//! Lifecycle events for scan-and-report runs.
//!
//! ## Design
//! The engine itself is a fast pure computation, but the external scanner it
//! waits on is not - a scan of a large tree takes real time. The pipeline
//! therefore emits lifecycle events through a channel so any UI (CLI, GUI,
//! web) can show progress and failures without polling.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         match event {
//!             Event::Scan(ScanEvent::Started { target }) => {
//!                 println!("Scanning {}...", target.display())
//!             }
//!             Event::Report(ReportEvent::Completed { total_files, .. }) => {
//!                 println!("{total_files} files classified")
//!             }
//!             _ => {}
//!         }
//!     }
//! });
//!
//! pipeline.run_with_events(&target, &sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
