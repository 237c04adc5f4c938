//! WhatsApp TXT export parser.
//!
//! Exports are line oriented, but a single chat entry may span several
//! lines when the original message contained line breaks. An entry starts at
//! a *header line*:
//!
//! ```text
//! 12/05/23, 9:30 am - Alice: Hello there
//! 12/05/23, 9:31 am - Bob: first line
//! second line of Bob's message
//! 12/05/23, 9:32 am - Alice added Carol
//! ```
//!
//! Every following non-header line belongs to the same entry. Lines before
//! the first header are ignored. Entries whose text cannot be split into
//! date, sender and body are skipped, unless strict parsing is enabled.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse;
//!
//! let table = parse("12/05/23, 9:30 am - Alice: Hello there\n12/05/23, 9:31 am - Group created");
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0].sender, "Alice");
//! assert_eq!(table[1].sender, "System");
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ParseConfig;
use crate::error::{ChatlensError, Result};
use crate::message::{MessageRecord, MessageTable, SYSTEM_SENDER};

/// Pattern a line must match at its start to open a new entry.
///
/// `dd/mm/yy, h:mm am - ` with lowercase `am`/`pm` only. `\s` is
/// Unicode-aware, so the narrow no-break space some exports put before
/// `am`/`pm` is accepted.
pub const HEADER_PATTERN: &str = r"^\d{2}/\d{2}/\d{2},\s+\d{1,2}:\d{2}\s+(?:am|pm)\s+-";

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

/// Separator between the timestamp and the rest of the entry.
const TIMESTAMP_SEPARATOR: &str = " - ";

/// Separator between date and time inside the timestamp.
const DATE_TIME_SEPARATOR: &str = ", ";

/// Separator between sender and body.
const SENDER_SEPARATOR: &str = ": ";

/// Returns `true` if `line` starts a new entry.
pub fn is_header_line(line: &str) -> bool {
    HEADER.is_match(line)
}

/// Parses export content with the default configuration.
///
/// Never fails: malformed entries are dropped and input without any header
/// line yields an empty table.
pub fn parse(content: &str) -> MessageTable {
    LogicalMessages::new(content, ParseConfig::default().strip_carriage_returns)
        .filter_map(|entry| split_entry(&entry.text).ok())
        .collect()
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::ChatParser;
///
/// let parser = ChatParser::new();
/// let table = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParseConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Reads and parses an export file.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read,
    /// [`ChatlensError::Utf8`] if it is not UTF-8, and
    /// [`ChatlensError::MalformedEntry`] in strict mode.
    pub fn parse(&self, path: &Path) -> Result<MessageTable> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: format!("reading {}", path.display()),
            source,
        })?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let table = self.parse_str(content)?;
        log::debug!("parsed {} records from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parses export content from a string.
    ///
    /// # Errors
    ///
    /// Only fails in strict mode, with [`ChatlensError::MalformedEntry`]
    /// for the first entry that cannot be split.
    pub fn parse_str(&self, content: &str) -> Result<MessageTable> {
        let mut table = MessageTable::new();

        for entry in LogicalMessages::new(content, self.config.strip_carriage_returns) {
            match split_entry(&entry.text) {
                Ok(record) => table.push(record),
                Err(reason) if self.config.strict => {
                    return Err(ChatlensError::malformed_entry(entry.line, reason));
                }
                Err(_) => {}
            }
        }

        Ok(table)
    }
}

/// One entry's raw lines, joined with single spaces and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalMessage {
    /// 1-based line number of the header line.
    pub line: usize,
    /// Joined text, header included.
    pub text: String,
}

struct Pending<'a> {
    line: usize,
    lines: Vec<&'a str>,
}

impl Pending<'_> {
    fn finish(self) -> LogicalMessage {
        LogicalMessage {
            line: self.line,
            text: self.lines.join(" ").trim().to_string(),
        }
    }
}

/// Iterator grouping raw lines into [`LogicalMessage`]s.
///
/// Splits on `\n` only. With `strip_carriage_returns` one trailing `\r` is
/// removed from each line first.
pub struct LogicalMessages<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    current: Option<Pending<'a>>,
    strip_carriage_returns: bool,
}

impl<'a> LogicalMessages<'a> {
    /// Creates an iterator over the entries of `content`.
    pub fn new(content: &'a str, strip_carriage_returns: bool) -> Self {
        Self {
            lines: content.split('\n').enumerate(),
            current: None,
            strip_carriage_returns,
        }
    }
}

impl Iterator for LogicalMessages<'_> {
    type Item = LogicalMessage;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((idx, raw)) = self.lines.next() else {
                return self.current.take().map(Pending::finish);
            };

            let line = if self.strip_carriage_returns {
                raw.strip_suffix('\r').unwrap_or(raw)
            } else {
                raw
            };

            if is_header_line(line) {
                let started = Pending {
                    line: idx + 1,
                    lines: vec![line],
                };
                if let Some(finished) = self.current.replace(started) {
                    return Some(finished.finish());
                }
            } else if let Some(current) = self.current.as_mut() {
                current.lines.push(line);
            }
            // else: preamble before the first header, never emitted
        }
    }
}

/// Splits one joined entry into a record.
///
/// The leftmost occurrence of each separator wins.
fn split_entry(text: &str) -> std::result::Result<MessageRecord, &'static str> {
    let (date_time, name_message) = text
        .split_once(TIMESTAMP_SEPARATOR)
        .ok_or("no ' - ' after the timestamp")?;

    let (date, _time) = date_time
        .split_once(DATE_TIME_SEPARATOR)
        .ok_or("no ', ' between date and time")?;

    let (sender, message) = name_message
        .split_once(SENDER_SEPARATOR)
        .unwrap_or((SYSTEM_SENDER, name_message));

    Ok(MessageRecord::new(date, sender, message))
}
