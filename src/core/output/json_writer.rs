//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::analyzer::Analysis;
use crate::error::Result;
use crate::message::MessageRecord;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "12/05/23", "sender": "Alice", "message": "Hello"},
///   {"date": "12/05/23", "sender": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Renders an analysis as a pretty-printed JSON object.
///
/// Dates are ISO `YYYY-MM-DD`; `first_date` and `last_date` are `null` for
/// an empty table.
pub fn report_to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
