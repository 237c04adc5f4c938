//! Configuration types for the parser.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Filter criteria live next to the
//! filter itself in [`crate::core::filter::FilterConfig`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParseConfig;
//! use chatlens::parser::ChatParser;
//!
//! let config = ParseConfig::new()
//!     .with_strict(true)
//!     .with_strip_carriage_returns(false);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for WhatsApp export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParseConfig;
///
/// let config = ParseConfig::new().with_strict(true);
/// assert!(config.strict);
/// assert!(config.strip_carriage_returns);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Remove one trailing `\r` from every line before matching, so CRLF
    /// exports behave like LF exports (default: true)
    pub strip_carriage_returns: bool,

    /// Fail on entries that cannot be split into date/sender/message
    /// instead of skipping them (default: false)
    pub strict: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strip_carriage_returns: true,
            strict: false,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects malformed entries.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Enables or disables strict parsing.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets whether trailing carriage returns are stripped.
    #[must_use]
    pub fn with_strip_carriage_returns(mut self, strip: bool) -> Self {
        self.strip_carriage_returns = strip;
        self
    }
}
