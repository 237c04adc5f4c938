//! # Chatlens
//!
//! A Rust library for turning a WhatsApp "export chat" text file into a
//! table of messages and summarizing it.
//!
//! ## Overview
//!
//! The pipeline has three pure stages:
//!
//! 1. **Parse** - header lines (`dd/mm/yy, h:mm am - ...`) start a message,
//!    every other line continues the current one. Each logical message is
//!    split into date, sender and body; entries without an author become
//!    `System` messages.
//! 2. **Filter** - keep records whose date falls inside an inclusive range,
//!    optionally from one sender only.
//! 3. **Analyze** - totals, messages per sender, media vs text per sender,
//!    and a gap-free monthly series.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 01/01/23, 9:30 am - Alice: Happy new year
//! 01/01/23, 9:31 am - Bob: <Media omitted>
//! 01/03/23, 6:02 pm - Alice: see you
//! tomorrow
//! ";
//!     let table = parse(export);
//!     assert_eq!(table[2].message, "see you tomorrow");
//!
//!     let range = DateRange::from_inputs(Some("01/01/23"), Some("31/03/23"), DateStyle::ShortYear)?;
//!     let in_range = filter(&table, range.start, range.end)?;
//!
//!     let analysis = analyze(&in_range)?;
//!     assert_eq!(analysis.total_count, 3);
//!     assert_eq!(analysis.media_breakdown["Bob"].media, 1);
//!     assert_eq!(analysis.monthly.len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`](parser::ChatParser), [`parse`], header detection
//! - [`config`] - [`ParseConfig`](config::ParseConfig)
//! - [`message`] - [`MessageRecord`], [`MessageKind`], [`MessageTable`]
//! - [`core`] - Processing stages
//!   - [`core::filter`] - [`DateRange`](core::DateRange), [`filter()`], [`FilterConfig`](core::FilterConfig)
//!   - [`core::analyzer`] - [`analyze`], [`Analysis`](core::Analysis)
//!   - [`core::output`] - record exporters and report renderers
//! - [`format`] - [`ExportFormat`](format::ExportFormat), [`ReportFormat`](format::ReportFormat)
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `csv-output` | CSV export and CSV report |
//! | `json-output` | JSON/JSONL export and JSON report |
//! | `cli` | [`cli`] module and the `chatlens` binary |
//! | `full` | All of the above (default) |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use crate::core::{analyze, filter};
pub use error::{ChatlensError, Result};
pub use message::{MessageKind, MessageRecord, MessageTable};
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::message::{MessageKind, MessageRecord, MessageTable};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::ParseConfig;
    pub use crate::parser::{ChatParser, parse};

    // Filtering
    pub use crate::core::filter::{DateRange, DateStyle, FilterConfig, apply_filters, filter};

    // Analysis
    pub use crate::core::analyzer::{Analysis, MediaCounts, MonthlyCount, SenderCount, analyze};

    // Output (file writers and string converters)
    pub use crate::core::output::report_to_text;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{report_to_csv, to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl};

    // Format types
    pub use crate::format::{ExportFormat, ReportFormat, render_report, write_to_format};
}
