//! Human-readable analysis report.

use std::fmt::Write;

use crate::core::analyzer::Analysis;

const RULE_WIDTH: usize = 44;

/// Renders an analysis as a plain-text report.
///
/// Sections: totals, messages per sender, media vs text per sender, and
/// the monthly trend with a bar per month.
#[must_use]
pub fn report_to_text(analysis: &Analysis) -> String {
    let mut output = String::new();
    output.push_str("Chat Summary\n");
    output.push_str("============\n\n");

    if analysis.is_empty() {
        output.push_str("No messages in range.\n");
        return output;
    }

    let _ = writeln!(output, "  Total messages:  {}", analysis.total_count);
    let _ = writeln!(output, "  Senders:         {}", analysis.per_sender.len());
    let _ = writeln!(output, "  Media:           {}", analysis.media_total());
    let _ = writeln!(output, "  Text:            {}", analysis.text_total());
    if let (Some(first), Some(last)) = (analysis.first_date, analysis.last_date) {
        let _ = writeln!(
            output,
            "  Span:            {} .. {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }

    let name_width = analysis
        .per_sender
        .iter()
        .map(|s| s.sender.chars().count())
        .max()
        .unwrap_or(0)
        .max("Sender".len());

    output.push_str("\nMessages per sender\n");
    let _ = writeln!(
        output,
        "{:<name_width$}  {:>8}  {:>6}  {:>6}",
        "Sender", "Messages", "Media", "Text"
    );
    output.push_str(&"-".repeat(name_width + 28));
    output.push('\n');
    for entry in &analysis.per_sender {
        let counts = analysis
            .media_breakdown
            .get(&entry.sender)
            .copied()
            .unwrap_or_default();
        let _ = writeln!(
            output,
            "{:<name_width$}  {:>8}  {:>6}  {:>6}",
            entry.sender, entry.count, counts.media, counts.text
        );
    }

    output.push_str("\nMessages per month\n");
    let peak = analysis.monthly.iter().map(|m| m.count).max().unwrap_or(0);
    for month in &analysis.monthly {
        let _ = writeln!(
            output,
            "{}  {:>6}  {}",
            month.month,
            month.count,
            bar(month.count, peak)
        );
    }

    output
}

/// Scales `count` against `peak` into a bar of at most [`RULE_WIDTH`] cells.
/// Any non-zero count gets at least one cell.
fn bar(count: usize, peak: usize) -> String {
    if count == 0 || peak == 0 {
        return String::new();
    }
    let cells = (count * RULE_WIDTH).div_ceil(peak).clamp(1, RULE_WIDTH);
    "#".repeat(cells)
}
