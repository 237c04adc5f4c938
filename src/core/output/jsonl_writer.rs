//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools such as `jq -c`
//! and `grep`.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use crate::message::MessageRecord;

fn write_lines<W: Write>(records: &[MessageRecord], writer: &mut W) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Writes records in JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"date":"12/05/23","sender":"Alice","message":"Hello"}
/// {"date":"12/05/23","sender":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let records = vec![
            MessageRecord::new("12/05/23", "Alice", "Hello"),
            MessageRecord::new("13/05/23", "Bob", "Hi"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&records, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["message"], "Hello");

        let second: MessageRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second, records[1]);
    }

    #[test]
    fn test_to_jsonl_empty() {
        assert_eq!(to_jsonl(&[]).unwrap(), "");
    }
}
