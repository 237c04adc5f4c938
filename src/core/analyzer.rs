//! Summary statistics over a record table.
//!
//! [`analyze`] produces an [`Analysis`]: the total count, messages per
//! sender, the media/text split per sender, and a monthly series that has
//! no gaps between the first and last month seen.
//!
//! # Example
//!
//! ```
//! use chatlens::core::analyzer::analyze;
//! use chatlens::MessageRecord;
//!
//! # fn main() -> chatlens::Result<()> {
//! let table = vec![
//!     MessageRecord::new("01/01/23", "Alice", "Hi"),
//!     MessageRecord::new("01/03/23", "Bob", "<Media omitted>"),
//! ];
//!
//! let analysis = analyze(&table)?;
//! assert_eq!(analysis.total_count, 2);
//!
//! let months: Vec<_> = analysis.monthly.iter().map(|m| (m.month.as_str(), m.count)).collect();
//! assert_eq!(months, [("2023-01", 1), ("2023-02", 0), ("2023-03", 1)]);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::message::{MessageKind, MessageRecord};

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    /// Sender name.
    pub sender: String,
    /// Number of records.
    pub count: usize,
}

/// Media/text split for one sender. Both fields are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCounts {
    /// Records classified [`MessageKind::Media`].
    pub media: usize,
    /// Records classified [`MessageKind::Text`].
    pub text: usize,
}

impl MediaCounts {
    fn record(&mut self, kind: MessageKind) {
        match kind {
            MessageKind::Media => self.media += 1,
            MessageKind::Text => self.text += 1,
        }
    }

    /// Returns `media + text`.
    pub fn total(&self) -> usize {
        self.media + self.text
    }
}

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// `YYYY-MM` label.
    pub month: String,
    /// Number of records dated in that month.
    pub count: usize,
}

/// Result of [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of records analyzed.
    pub total_count: usize,

    /// Records per sender, busiest first, ties ordered by name.
    pub per_sender: Vec<SenderCount>,

    /// Media/text split keyed by sender.
    pub media_breakdown: BTreeMap<String, MediaCounts>,

    /// One entry per month from the first to the last month observed,
    /// in chronological order. Months without records count 0.
    pub monthly: Vec<MonthlyCount>,

    /// Earliest record date, if any.
    pub first_date: Option<NaiveDate>,

    /// Latest record date, if any.
    pub last_date: Option<NaiveDate>,
}

impl Analysis {
    /// Returns the number of media records across all senders.
    pub fn media_total(&self) -> usize {
        self.media_breakdown.values().map(|c| c.media).sum()
    }

    /// Returns the number of text records across all senders.
    pub fn text_total(&self) -> usize {
        self.media_breakdown.values().map(|c| c.text).sum()
    }

    /// Returns the record count for `sender`, or 0.
    pub fn count_for(&self, sender: &str) -> usize {
        self.media_breakdown.get(sender).map_or(0, MediaCounts::total)
    }

    /// Returns `true` if no records were analyzed.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Computes summary statistics for a table.
///
/// The table is only read.
///
/// # Errors
///
/// Returns [`crate::ChatlensError::DateFormat`] if any record's date is not
/// `dd/mm/yy`.
pub fn analyze(table: &[MessageRecord]) -> Result<Analysis> {
    let mut media_breakdown: BTreeMap<String, MediaCounts> = BTreeMap::new();
    let mut by_month: BTreeMap<YearMonth, usize> = BTreeMap::new();
    let mut first_date: Option<NaiveDate> = None;
    let mut last_date: Option<NaiveDate> = None;

    for record in table {
        let date = record.parsed_date()?;

        media_breakdown
            .entry(record.sender.clone())
            .or_default()
            .record(record.kind());
        *by_month.entry(YearMonth::of(date)).or_default() += 1;

        first_date = Some(first_date.map_or(date, |d| d.min(date)));
        last_date = Some(last_date.map_or(date, |d| d.max(date)));
    }

    let mut per_sender: Vec<SenderCount> = media_breakdown
        .iter()
        .map(|(sender, counts)| SenderCount {
            sender: sender.clone(),
            count: counts.total(),
        })
        .collect();
    // Stable sort keeps the BTreeMap's name order among equal counts.
    per_sender.sort_by(|a, b| b.count.cmp(&a.count));

    let analysis = Analysis {
        total_count: table.len(),
        per_sender,
        media_breakdown,
        monthly: fill_months(&by_month),
        first_date,
        last_date,
    };

    log::debug!(
        "analyzed {} records from {} senders over {} months",
        analysis.total_count,
        analysis.per_sender.len(),
        analysis.monthly.len()
    );
    Ok(analysis)
}

/// Expands sparse month counts into a contiguous series.
fn fill_months(by_month: &BTreeMap<YearMonth, usize>) -> Vec<MonthlyCount> {
    let (Some((&first, _)), Some((&last, _))) = (by_month.first_key_value(), by_month.last_key_value())
    else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut month = first;
    while month <= last {
        series.push(MonthlyCount {
            month: month.to_string(),
            count: by_month.get(&month).copied().unwrap_or(0),
        });
        month = month.succ();
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, sender: &str, message: &str) -> MessageRecord {
        MessageRecord::new(date, sender, message)
    }

    fn series(analysis: &Analysis) -> Vec<(&str, usize)> {
        analysis
            .monthly
            .iter()
            .map(|m| (m.month.as_str(), m.count))
            .collect()
    }

    #[test]
    fn test_empty_table() {
        let analysis = analyze(&[]).unwrap();
        assert_eq!(analysis, Analysis::default());
        assert!(analysis.is_empty());
    }

    #[test]
    fn test_total_count() {
        let table = vec![
            rec("01/01/23", "Alice", "a"),
            rec("01/01/23", "Alice", "b"),
            rec("02/01/23", "Bob", "c"),
        ];
        assert_eq!(analyze(&table).unwrap().total_count, 3);
    }

    #[test]
    fn test_per_sender_sorted_by_count_then_name() {
        let table = vec![
            rec("01/01/23", "Carol", "x"),
            rec("01/01/23", "Bob", "x"),
            rec("01/01/23", "Alice", "x"),
            rec("01/01/23", "Bob", "x"),
        ];
        let analysis = analyze(&table).unwrap();
        let order: Vec<_> = analysis
            .per_sender
            .iter()
            .map(|s| (s.sender.as_str(), s.count))
            .collect();
        assert_eq!(order, [("Bob", 2), ("Alice", 1), ("Carol", 1)]);
    }

    #[test]
    fn test_media_breakdown_reports_zeroes() {
        let table = vec![
            rec("01/01/23", "Alice", "<Media omitted>"),
            rec("01/01/23", "Alice", "<Media omitted>"),
            rec("01/01/23", "Bob", "hello"),
        ];
        let analysis = analyze(&table).unwrap();
        assert_eq!(
            analysis.media_breakdown["Alice"],
            MediaCounts { media: 2, text: 0 }
        );
        assert_eq!(
            analysis.media_breakdown["Bob"],
            MediaCounts { media: 0, text: 1 }
        );
        assert_eq!(analysis.media_total(), 2);
        assert_eq!(analysis.text_total(), 1);
    }

    #[test]
    fn test_monthly_series_fills_gaps() {
        let table = vec![rec("01/01/23", "Alice", "a"), rec("01/03/23", "Bob", "b")];
        let analysis = analyze(&table).unwrap();
        assert_eq!(
            series(&analysis),
            [("2023-01", 1), ("2023-02", 0), ("2023-03", 1)]
        );
    }

    #[test]
    fn test_monthly_series_crosses_year_boundary() {
        let table = vec![
            rec("15/02/23", "Alice", "late"),
            rec("20/11/22", "Bob", "early"),
            rec("21/11/22", "Bob", "early again"),
        ];
        let analysis = analyze(&table).unwrap();
        assert_eq!(
            series(&analysis),
            [("2022-11", 2), ("2022-12", 0), ("2023-01", 0), ("2023-02", 1)]
        );
        assert_eq!(analysis.first_date, NaiveDate::from_ymd_opt(2022, 11, 20));
        assert_eq!(analysis.last_date, NaiveDate::from_ymd_opt(2023, 2, 15));
    }

    #[test]
    fn test_bad_date_fails() {
        let table = vec![rec("01/01/23", "Alice", "a"), rec("yesterday", "Bob", "b")];
        assert!(analyze(&table).unwrap_err().is_date_format());
    }

    #[test]
    fn test_count_for() {
        let table = vec![rec("01/01/23", "Alice", "a"), rec("01/01/23", "System", "Group created")];
        let analysis = analyze(&table).unwrap();
        assert_eq!(analysis.count_for("Alice"), 1);
        assert_eq!(analysis.count_for("System"), 1);
        assert_eq!(analysis.count_for("Nobody"), 0);
    }

    #[test]
    fn test_year_month_display_and_succ() {
        let dec = YearMonth { year: 2023, month: 12 };
        assert_eq!(dec.to_string(), "2023-12");
        assert_eq!(dec.succ().to_string(), "2024-01");
    }
}
