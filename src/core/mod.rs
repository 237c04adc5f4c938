//! Core processing logic for chatlens.
//!
//! This module contains:
//! - [`filter`] - Date range and sender filtering
//! - [`analyzer`] - Per-sender, media and monthly statistics
//! - [`output`] - Record exporters and report renderers
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{DateRange, DateStyle, analyze, filter};
//! use chatlens::parser::parse;
//!
//! # fn main() -> chatlens::Result<()> {
//! let table = parse("01/01/23, 9:00 am - Alice: Hi\n05/02/23, 9:00 am - Bob: Yo\n");
//! let range = DateRange::from_inputs(Some("01/01/23"), Some("31/01/23"), DateStyle::ShortYear)?;
//!
//! let january = filter(&table, range.start, range.end)?;
//! assert_eq!(analyze(&january)?.total_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod filter;
pub mod output;

pub use analyzer::{Analysis, MediaCounts, MonthlyCount, SenderCount, analyze};
pub use filter::{DateRange, DateStyle, FilterConfig, apply_filters, filter};

#[cfg(feature = "csv-output")]
pub use output::{report_to_csv, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, to_jsonl, write_json, write_jsonl};
pub use output::report_to_text;
