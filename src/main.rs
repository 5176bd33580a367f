//! # dupreport CLI
//!
//! Command-line interface for the duplicate report engine.
//!
//! ## Usage
//! ```bash
//! dupreport report scan-records.json --query invoice
//! dupreport report scan-records.json --output json
//! dupreport delete "backup/a_copy.txt" --root ~/Downloads/Data
//! ```

mod cli;

use duplicate_report::Result;

fn main() -> Result<()> {
    cli::run()
}
