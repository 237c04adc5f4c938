//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! error the library can surface. Parser-level malformed entries are *not*
//! errors unless strict parsing is requested: by default they are skipped.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A date string did not match the expected format.
    ///
    /// Raised both for user-supplied range bounds and for record dates
    /// coerced during filtering or analysis. A single bad record date
    /// aborts the whole operation.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    DateFormat {
        /// The offending date string
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A date range was requested without both bounds.
    #[error("Missing {field} date. Please enter both start and end dates.")]
    MissingInput {
        /// Which bound is missing ("start" or "end")
        field: &'static str,
    },

    /// A logical message could not be split into its parts.
    ///
    /// Only produced when strict parsing is enabled.
    #[error("Malformed entry starting at line {line}: {reason}")]
    MalformedEntry {
        /// 1-based line number of the header that started the entry
        line: usize,
        /// What could not be split
        reason: &'static str,
    },

    /// The requested output format is unknown or unavailable.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the export file or generated output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a date format error.
    pub fn date_format(input: impl Into<String>, expected: &'static str) -> Self {
        ChatlensError::DateFormat {
            input: input.into(),
            expected,
        }
    }

    /// Creates a missing input error for the named range bound.
    pub fn missing_input(field: &'static str) -> Self {
        ChatlensError::MissingInput { field }
    }

    /// Creates a malformed entry error.
    pub fn malformed_entry(line: usize, reason: &'static str) -> Self {
        ChatlensError::MalformedEntry { line, reason }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a date format error.
    pub fn is_date_format(&self) -> bool {
        matches!(self, ChatlensError::DateFormat { .. })
    }

    /// Returns `true` if a range bound was missing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ChatlensError::MissingInput { .. })
    }

    /// Returns `true` if this is a strict-mode parse failure.
    pub fn is_malformed_entry(&self) -> bool {
        matches!(self, ChatlensError::MalformedEntry { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }
}
