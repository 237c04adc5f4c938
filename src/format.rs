//! Output format types for the chatlens library.
//!
//! [`ExportFormat`] selects how the filtered record table is written;
//! [`ReportFormat`] selects how an [`Analysis`] is rendered. Neither depends
//! on a CLI framework, so both are usable from library code.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{ExportFormat, ReportFormat, render_report, write_to_format};
//! use chatlens::core::analyzer::analyze;
//! use chatlens::MessageRecord;
//!
//! let records = vec![MessageRecord::new("12/05/23", "Alice", "Hello!")];
//!
//! // Format detection from extension
//! let format = ExportFormat::from_path("records.jsonl")?;
//! assert_eq!(format, ExportFormat::Jsonl);
//! write_to_format(&records, "records.jsonl", format)?;
//!
//! let report = render_report(&analyze(&records)?, ReportFormat::Text)?;
//! assert!(report.contains("Total messages:  1"));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::analyzer::Analysis;
use crate::core::output::report_to_text;
use crate::error::{ChatlensError, Result};
use crate::message::MessageRecord;

/// File format for exporting the record table.
///
/// # Example
///
/// ```rust
/// use chatlens::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, ExportFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// CSV with semicolon delimiter, columns `Date;Sender;Message`
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line. Also known as NDJSON.
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects the format from a file path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidFormat`] for a missing or unknown
    /// extension.
    ///
    /// ```rust
    /// use chatlens::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_path("out/records.JSON").unwrap(), ExportFormat::Json);
    /// assert!(ExportFormat::from_path("records.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "export",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl, ndjson"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv-output",
            ExportFormat::Json | ExportFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Rendering of an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Aligned plain-text tables (default)
    #[default]
    Text,

    /// Semicolon-delimited sections
    Csv,

    /// Pretty-printed JSON object
    Json,
}

impl ReportFormat {
    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "csv", "json"]
    }

    fn required_feature(self) -> Option<&'static str> {
        match self {
            ReportFormat::Text => None,
            ReportFormat::Csv => Some("csv-output"),
            ReportFormat::Json => Some("json-output"),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(records: &[MessageRecord], path: &str, format: ExportFormat) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::write_json(records, path),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::write_jsonl(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format, format.required_feature())),
    }
}

/// Converts records to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(records: &[MessageRecord], format: ExportFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Json => crate::core::output::to_json(records),
        #[cfg(feature = "json-output")]
        ExportFormat::Jsonl => crate::core::output::to_jsonl(records),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format, format.required_feature())),
    }
}

/// Renders an analysis in the specified report format.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidFormat`] if the format's feature is not
/// enabled, or a serialization error.
pub fn render_report(analysis: &Analysis, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report_to_text(analysis)),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => crate::core::output::report_to_csv(analysis),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => crate::core::output::report_to_json(analysis),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(
            format,
            format.required_feature().unwrap_or("full"),
        )),
    }
}

fn feature_disabled(format: impl fmt::Display, feature: &str) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!("Output format {format} requires the '{feature}' feature to be enabled"),
    )
}
