//! Output format writers.
//!
//! Two kinds of output leave the pipeline:
//!
//! - the filtered **record table**, exported with
//!   - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//!   - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//!   - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//! - the **analysis report**, rendered with
//!   - [`report_to_text`] - plain text, always available
//!   - [`report_to_csv`] - semicolon-delimited sections - requires `csv-output` feature
//!   - [`report_to_json`] - pretty JSON object - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{report_to_text, to_csv, write_json, write_jsonl};
//! use chatlens::core::analyzer::analyze;
//! use chatlens::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("12/05/23", "Alice", "Hello!"),
//!     MessageRecord::new("12/05/23", "Bob", "Hi there!"),
//! ];
//!
//! write_json(&records, "records.json")?;
//! write_jsonl(&records, "records.jsonl")?;
//! let csv_string = to_csv(&records)?;
//!
//! println!("{}", report_to_text(&analyze(&records)?));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{report_to_csv, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use report::report_to_text;
