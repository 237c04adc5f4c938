//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::analyzer::Analysis;
use crate::error::Result;
use crate::message::MessageRecord;

/// Column names of the record export.
const RECORD_HEADER: [&str; 3] = ["Date", "Sender", "Message"];

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.delimiter(b';');
    builder
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W) -> Result<W> {
    let mut writer = builder().from_writer(sink);
    writer.write_record(RECORD_HEADER)?;
    for record in records {
        writer.write_record([&record.date, &record.sender, &record.message])?;
    }
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Sender`, `Message`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file)?;
    Ok(())
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let bytes = write_records(records, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders an analysis as semicolon-delimited sections.
///
/// ```text
/// Total;3
/// Sender;Messages;Media;Text
/// Bob;2;1;1
/// Alice;1;0;1
/// Month;Messages
/// 2023-01;3
/// ```
pub fn report_to_csv(analysis: &Analysis) -> Result<String> {
    let mut writer = builder().flexible(true).from_writer(Vec::new());

    writer.write_record(["Total", &analysis.total_count.to_string()])?;

    writer.write_record(["Sender", "Messages", "Media", "Text"])?;
    for entry in &analysis.per_sender {
        let counts = analysis
            .media_breakdown
            .get(&entry.sender)
            .copied()
            .unwrap_or_default();
        writer.write_record([
            entry.sender.clone(),
            entry.count.to_string(),
            counts.media.to_string(),
            counts.text.to_string(),
        ])?;
    }

    writer.write_record(["Month", "Messages"])?;
    for month in &analysis.monthly {
        writer.write_record([month.month.clone(), month.count.to_string()])?;
    }

    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::analyze;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv_basic() {
        let records = vec![
            MessageRecord::new("12/05/23", "Alice", "Hello"),
            MessageRecord::new("12/05/23", "Bob", "Hi there"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&records, path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();

        assert!(content.starts_with("Date;Sender;Message\n"));
        assert!(content.contains("12/05/23;Alice;Hello"));
        assert!(content.contains("12/05/23;Bob;Hi there"));
    }

    #[test]
    fn test_to_csv_quotes_delimiter() {
        let records = vec![MessageRecord::new("12/05/23", "Alice", "a;b")];
        let csv = to_csv(&records).unwrap();
        assert!(csv.contains("12/05/23;Alice;\"a;b\""));

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[2], "a;b");
    }

    #[test]
    fn test_to_csv_empty_has_header() {
        assert_eq!(to_csv(&[]).unwrap(), "Date;Sender;Message\n");
    }

    #[test]
    fn test_report_to_csv_sections() {
        let table = vec![
            MessageRecord::new("01/01/23", "Bob", "<Media omitted>"),
            MessageRecord::new("01/01/23", "Bob", "hey"),
            MessageRecord::new("01/03/23", "Alice", "hi"),
        ];
        let csv = report_to_csv(&analyze(&table).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            [
                "Total;3",
                "Sender;Messages;Media;Text",
                "Bob;2;1;1",
                "Alice;1;0;1",
                "Month;Messages",
                "2023-01;2",
                "2023-02;0",
                "2023-03;1",
            ]
        );
    }
}
