//! Filter records by date range and sender.
//!
//! This module provides [`filter`] for the plain inclusive date-range cut,
//! [`DateRange`] for validating user-supplied bounds, and [`FilterConfig`] /
//! [`apply_filters`] for combining a range with a sender filter.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{DateRange, DateStyle, filter};
//! use chatlens::MessageRecord;
//!
//! # fn main() -> chatlens::Result<()> {
//! let table = vec![
//!     MessageRecord::new("01/01/23", "Alice", "Happy new year"),
//!     MessageRecord::new("15/06/23", "Bob", "Summer!"),
//! ];
//!
//! let range = DateRange::from_inputs(Some("01/06/23"), Some("30/06/23"), DateStyle::ShortYear)?;
//! let june = filter(&table, range.start, range.end)?;
//! assert_eq!(june.len(), 1);
//! assert_eq!(june[0].sender, "Bob");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Both bounds are inclusive
//! - Every record date is coerced; one bad date fails the whole call
//! - A range whose start is after its end selects nothing
//! - Sender matching is case-insensitive for ASCII characters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::message::{MessageRecord, MessageTable};

/// How user-supplied range bounds are written.
///
/// Record dates are always `dd/mm/yy`. Bounds default to the same
/// two-digit-year form; `LongYear` accepts the four-digit form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `dd/mm/yy`, e.g. `12/05/23`
    #[default]
    ShortYear,
    /// `dd/mm/yyyy`, e.g. `12/05/2023`
    LongYear,
}

impl DateStyle {
    /// Returns the chrono format string.
    pub fn format(self) -> &'static str {
        match self {
            DateStyle::ShortYear => "%d/%m/%y",
            DateStyle::LongYear => "%d/%m/%Y",
        }
    }

    /// Returns the format as shown to users.
    pub fn label(self) -> &'static str {
        match self {
            DateStyle::ShortYear => "DD/MM/YY",
            DateStyle::LongYear => "DD/MM/YYYY",
        }
    }

    /// Parses a single bound.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::DateFormat`] if `input` does not match.
    pub fn parse(self, input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input, self.format())
            .map_err(|_| ChatlensError::date_format(input, self.label()))
    }
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range from already parsed dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Builds a range from raw user inputs.
    ///
    /// `None` and empty strings count as missing.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::MissingInput`] if either bound is missing; no
    ///   parsing is attempted in that case
    /// - [`ChatlensError::DateFormat`] if a bound does not match `style`
    ///
    /// # Examples
    ///
    /// ```
    /// use chatlens::core::filter::{DateRange, DateStyle};
    ///
    /// let err = DateRange::from_inputs(Some("01/01/23"), None, DateStyle::ShortYear).unwrap_err();
    /// assert!(err.is_missing_input());
    ///
    /// let err = DateRange::from_inputs(Some("01/01/2023"), Some("31/01/23"), DateStyle::ShortYear)
    ///     .unwrap_err();
    /// assert!(err.is_date_format());
    /// ```
    pub fn from_inputs(start: Option<&str>, end: Option<&str>, style: DateStyle) -> Result<Self> {
        let start = start
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ChatlensError::missing_input("start"))?;
        let end = end
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ChatlensError::missing_input("end"))?;

        Ok(Self {
            start: style.parse(start)?,
            end: style.parse(end)?,
        })
    }

    /// Returns `true` if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Returns the records dated within `[start, end]`, in their original order.
///
/// The input table is left untouched.
///
/// # Errors
///
/// Returns [`ChatlensError::DateFormat`] if any record's date is not
/// `dd/mm/yy`, even one that would fall outside the range.
pub fn filter(table: &[MessageRecord], start: NaiveDate, end: NaiveDate) -> Result<MessageTable> {
    let range = DateRange::new(start, end);
    let mut kept = MessageTable::new();

    for record in table {
        if range.contains(record.parsed_date()?) {
            kept.push(record.clone());
        }
    }

    Ok(kept)
}

/// Configuration for filtering records by date and sender.
///
/// Filters are combined with AND logic.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::{DateStyle, FilterConfig};
///
/// # fn main() -> chatlens::Result<()> {
/// let by_sender = FilterConfig::new().with_sender("Alice");
///
/// let combined = FilterConfig::new()
///     .with_date_inputs(Some("01/01/23"), Some("31/12/23"), DateStyle::ShortYear)?
///     .with_sender("Alice");
/// assert!(combined.has_date_filter());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records inside this range.
    pub range: Option<DateRange>,

    /// Include only records from this sender (case-insensitive).
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date range directly.
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the date range from raw user inputs.
    ///
    /// See [`DateRange::from_inputs`] for the validation rules.
    pub fn with_date_inputs(
        self,
        start: Option<&str>,
        end: Option<&str>,
        style: DateStyle,
    ) -> Result<Self> {
        Ok(self.with_range(DateRange::from_inputs(start, end, style)?))
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.range.is_some() || self.sender.is_some()
    }

    /// Returns `true` if a date range is set.
    pub fn has_date_filter(&self) -> bool {
        self.range.is_some()
    }

    /// Returns `true` if a sender filter is set.
    pub fn has_sender_filter(&self) -> bool {
        self.sender.is_some()
    }
}

/// Filters a table based on the provided configuration.
///
/// Returns a new table containing only records that match all active
/// filters. With no active filters the result is a copy of the input.
///
/// # Errors
///
/// With a date range set, fails with [`ChatlensError::DateFormat`] on the
/// first record whose date cannot be coerced.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::{FilterConfig, apply_filters};
/// use chatlens::MessageRecord;
///
/// let table = vec![
///     MessageRecord::new("01/01/23", "Alice", "Hello"),
///     MessageRecord::new("01/01/23", "Bob", "Hi"),
///     MessageRecord::new("02/01/23", "alice", "Bye"),
/// ];
///
/// let config = FilterConfig::new().with_sender("Alice");
/// let filtered = apply_filters(&table, &config)?;
/// assert_eq!(filtered.len(), 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn apply_filters(table: &[MessageRecord], config: &FilterConfig) -> Result<MessageTable> {
    let mut kept = match config.range {
        Some(range) => filter(table, range.start, range.end)?,
        None => table.to_vec(),
    };

    if let Some(ref sender) = config.sender {
        kept.retain(|record| record.sender.eq_ignore_ascii_case(sender));
    }

    log::debug!("filters kept {} of {} records", kept.len(), table.len());
    Ok(kept)
}
