//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportStyle`] - Report format option, convertible to
//!   [`crate::format::ReportFormat`]
//!
//! `Args` also knows how to turn its flags into the library's
//! configuration types, so `main` only wires the pipeline together:
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--start", "01/01/23", "--end", "31/01/23"]);
//! let filters = args.filter_config().unwrap();
//! assert!(filters.has_date_filter());
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::ParseConfig;
use crate::core::filter::{DateStyle, FilterConfig};
use crate::error::Result;
use crate::format::ReportFormat;

/// Summarize a WhatsApp chat export: who talks most, how much is media,
/// and how activity moves month to month.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --start 01/01/23 --end 31/03/23
    chatlens chat.txt --start 01/01/2023 --end 31/03/2023 --long-year
    chatlens chat.txt --sender Alice --format json -o alice.json
    chatlens chat.txt --export records.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// First day to include (DD/MM/YY, or DD/MM/YYYY with --long-year)
    #[arg(long, value_name = "DATE")]
    pub start: Option<String>,

    /// Last day to include (DD/MM/YY, or DD/MM/YYYY with --long-year)
    #[arg(long, value_name = "DATE")]
    pub end: Option<String>,

    /// Read --start/--end as DD/MM/YYYY
    #[arg(long)]
    pub long_year: bool,

    /// Only keep messages from this sender (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportStyle,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the filtered messages (.csv, .json, .jsonl, .ndjson)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Fail on entries that cannot be split into date, sender and message
    #[arg(long)]
    pub strict: bool,

    /// Keep trailing carriage returns (CRLF exports)
    #[arg(long)]
    pub keep_cr: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns how --start/--end are read.
    pub fn date_style(&self) -> DateStyle {
        if self.long_year {
            DateStyle::LongYear
        } else {
            DateStyle::ShortYear
        }
    }

    /// Builds the parser configuration from --strict and --keep-cr.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new()
            .with_strict(self.strict)
            .with_strip_carriage_returns(!self.keep_cr)
    }

    /// Builds the filter configuration.
    ///
    /// With neither --start nor --end the whole table is kept. Giving only
    /// one of them is an error.
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` or `DateFormat` for a bad range.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if self.start.is_some() || self.end.is_some() {
            config = config.with_date_inputs(
                self.start.as_deref(),
                self.end.as_deref(),
                self.date_style(),
            )?;
        }
        if let Some(sender) = &self.sender {
            config = config.with_sender(sender.clone());
        }
        Ok(config)
    }

    /// Log level selected by -v, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Report format options.
///
/// - [`Text`](ReportStyle::Text) - Aligned tables for the terminal
/// - [`Csv`](ReportStyle::Csv) - Semicolon-delimited sections
/// - [`Json`](ReportStyle::Json) - Full analysis as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Plain text (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ReportFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<ReportStyle> for ReportFormat {
    fn from(style: ReportStyle) -> ReportFormat {
        match style {
            ReportStyle::Text => ReportFormat::Text,
            ReportStyle::Csv => ReportFormat::Csv,
            ReportStyle::Json => ReportFormat::Json,
        }
    }
}
