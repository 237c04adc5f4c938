//! # chatlens CLI
//!
//! Command-line interface for the chatlens library. The report goes to
//! stdout (or `-o`); progress lines go to stderr so the report can be piped.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use env_logger::Builder;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::{analyze, apply_filters};
use chatlens::format::{ExportFormat, ReportFormat, render_report, write_to_format};
use chatlens::parser::ChatParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Validate everything the user typed before touching the file
    let filter_config = args.filter_config()?;
    let export_format = args
        .export
        .as_deref()
        .map(ExportFormat::from_path)
        .transpose()?;
    let report_format: ReportFormat = args.format.into();

    eprintln!("💬 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input.display());
    if let Some(range) = &filter_config.range {
        eprintln!("📅 Range:   {} .. {}", range.start, range.end);
    }
    if let Some(sender) = &filter_config.sender {
        eprintln!("👤 Sender:  {}", sender);
    }

    let parser = ChatParser::with_config(args.parse_config());
    let parse_start = Instant::now();
    let table = parser.parse(&args.input)?;
    eprintln!(
        "⏳ Parsed {} messages ({:.2}s)",
        table.len(),
        parse_start.elapsed().as_secs_f64()
    );

    let filtered = if filter_config.is_active() {
        let filtered = apply_filters(&table, &filter_config)?;
        eprintln!("🔍 {} messages after filtering", filtered.len());
        filtered
    } else {
        table
    };

    let analysis = analyze(&filtered)?;
    let report = render_report(&analysis, report_format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &report)?;
            eprintln!("💾 Report ({}) saved to {}", report_format, path.display());
        }
        None => print!("{report}"),
    }

    if let (Some(path), Some(format)) = (&args.export, export_format) {
        write_to_format(&filtered, &path.to_string_lossy(), format)?;
        eprintln!("💾 Exported {} messages as {} to {}", filtered.len(), format, path.display());
    }

    eprintln!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}
