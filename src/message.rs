//! Parsed chat record type.
//!
//! This module provides [`MessageRecord`], one entry of a WhatsApp export
//! after its header and continuation lines have been stitched together, and
//! [`MessageKind`], the text-vs-media classification used by the analyzer.
//!
//! # Examples
//!
//! ```
//! use chatlens::{MessageKind, MessageRecord};
//!
//! let msg = MessageRecord::new("12/05/23", "Alice", "Hello there");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.kind(), MessageKind::Text);
//!
//! let photo = MessageRecord::new("12/05/23", "Bob", "<Media omitted>");
//! assert!(photo.is_media());
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Sender assigned to entries that carry no `"Name: "` prefix, such as
/// "Group created" or "Alice added Bob".
pub const SYSTEM_SENDER: &str = "System";

/// Placeholder WhatsApp writes in place of attachments.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// chrono format of the date stored in every record.
pub const RECORD_DATE_FORMAT: &str = "%d/%m/%y";

/// Human-readable form of [`RECORD_DATE_FORMAT`], used in error messages.
pub const RECORD_DATE_LABEL: &str = "DD/MM/YY";

/// An ordered sequence of records; order is the order of the export.
pub type MessageTable = Vec<MessageRecord>;

/// One chat entry reconstructed from an export.
///
/// The date is kept as the `dd/mm/yy` text found in the header. It is only
/// coerced to a calendar date when filtering or analyzing, which is where
/// a bad date surfaces as [`ChatlensError::DateFormat`].
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | `dd/mm/yy` text from the header line |
/// | `sender` | Author name, or [`SYSTEM_SENDER`] |
/// | `message` | Body with line breaks collapsed to spaces |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Date text in `dd/mm/yy` form.
    pub date: String,

    /// Display name of the author, or `"System"`.
    pub sender: String,

    /// Message body.
    pub message: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(
        date: impl Into<String>,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            sender: sender.into(),
            message: message.into(),
        }
    }

    /// Returns the date text.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this entry has no explicit author.
    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }

    /// Classifies the body as media or text.
    pub fn kind(&self) -> MessageKind {
        MessageKind::classify(&self.message)
    }

    /// Returns `true` if the body contains the media placeholder.
    pub fn is_media(&self) -> bool {
        self.kind() == MessageKind::Media
    }

    /// Coerces the stored date text to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::DateFormat`] if the text is not `dd/mm/yy`.
    ///
    /// ```
    /// use chatlens::MessageRecord;
    /// use chrono::NaiveDate;
    ///
    /// let msg = MessageRecord::new("01/03/23", "Alice", "Hi");
    /// assert_eq!(msg.parsed_date()?, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, RECORD_DATE_FORMAT)
            .map_err(|_| ChatlensError::date_format(self.date.as_str(), RECORD_DATE_LABEL))
    }
}

/// Text-vs-media classification of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageKind {
    /// Body contains [`MEDIA_PLACEHOLDER`].
    Media,
    /// Anything else.
    Text,
}

impl MessageKind {
    /// Classifies a message body. The match is an exact, case-sensitive
    /// substring test.
    pub fn classify(body: &str) -> Self {
        if body.contains(MEDIA_PLACEHOLDER) {
            MessageKind::Media
        } else {
            MessageKind::Text
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Media => write!(f, "Media"),
            MessageKind::Text => write!(f, "Text"),
        }
    }
}
