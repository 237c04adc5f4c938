//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of header detection, entry
//! splitting, date handling and analysis that the unit tests only touch.

use chatlens::config::ParseConfig;
use chatlens::core::filter::{DateRange, DateStyle, filter};
use chatlens::parser::{ChatParser, LogicalMessages, is_header_line, parse};
use chatlens::{ChatlensError, MessageKind, MessageRecord, analyze};
use chrono::NaiveDate;

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =========================================================================
// Header detection
// =========================================================================

#[test]
fn test_header_accepts_flexible_whitespace() {
    assert!(is_header_line("12/05/23,  9:30  am  - Alice: hi"));
    assert!(is_header_line("12/05/23, 9:30\u{202f}pm - Alice: hi"));
    assert!(is_header_line("12/05/23, 12:00 am -"));
}

#[test]
fn test_header_rejects_other_locales() {
    assert!(!is_header_line("[12/05/23, 9:30:00 AM] Alice: hi"));
    assert!(!is_header_line("12.05.23, 09:30 - Alice: hi"));
    assert!(!is_header_line("2023-05-12, 9:30 am - Alice: hi"));
    assert!(!is_header_line("12/05/23 9:30 am - Alice: hi"));
    assert!(!is_header_line("12/05/23, 9:30 Am - Alice: hi"));
}

#[test]
fn test_uppercase_meridiem_lines_are_continuations() {
    let content = "12/05/23, 9:30 am - Alice: hi\n12/05/23, 9:31 PM - Bob: not a header";
    let table = parse(content);
    assert_eq!(table.len(), 1);
    assert_eq!(
        table[0].message,
        "hi 12/05/23, 9:31 PM - Bob: not a header"
    );
}

// =========================================================================
// Entry splitting
// =========================================================================

#[test]
fn test_sender_is_text_before_first_colon_space() {
    let table = parse("12/05/23, 9:30 am - Eve: the admin: says hi");
    assert_eq!(table[0].sender, "Eve");
    assert_eq!(table[0].message, "the admin: says hi");
}

#[test]
fn test_sender_may_contain_dash_separator() {
    let table = parse("12/05/23, 9:30 am - Jean - Luc: bonjour");
    assert_eq!(table[0].sender, "Jean - Luc");
    assert_eq!(table[0].message, "bonjour");
}

#[test]
fn test_colon_without_space_is_system() {
    let table = parse("12/05/23, 9:30 am - Alice:hi");
    assert_eq!(table[0], MessageRecord::new("12/05/23", "System", "Alice:hi"));
}

#[test]
fn test_empty_body_becomes_system_entry() {
    // Trimming removes the space after the colon, so no ": " remains.
    let table = parse("12/05/23, 9:30 am - Alice: ");
    assert_eq!(table[0], MessageRecord::new("12/05/23", "System", "Alice:"));
}

#[test]
fn test_phone_number_sender() {
    let table = parse("12/05/23, 9:30 am - +44 7700 900123: hello");
    assert_eq!(table[0].sender, "+44 7700 900123");
}

#[test]
fn test_unicode_senders_and_bodies() {
    let content = "\
12/05/23, 9:30 am - Иван: Привет мир!
12/05/23, 9:31 am - 田中太郎: こんにちは
12/05/23, 9:32 am - User 🎉: Hello 👋 World 🌍";
    let table = parse(content);
    assert_eq!(table[0].sender, "Иван");
    assert_eq!(table[1].message, "こんにちは");
    assert_eq!(table[2].sender, "User 🎉");
}

#[test]
fn test_blank_continuation_lines_keep_double_space() {
    let table = parse("12/05/23, 9:30 am - Alice: first\n\nafter blank");
    assert_eq!(table[0].message, "first  after blank");
}

#[test]
fn test_trailing_whitespace_trimmed() {
    let table = parse("12/05/23, 9:30 am - Alice: hi   \n   \n");
    assert_eq!(table[0].message, "hi");
}

#[test]
fn test_dash_without_spaces_is_dropped() {
    let content = "12/05/23, 9:30 am -Alice: hi\n12/05/23, 9:31 am - Bob: ok";
    assert_eq!(parse(content), vec![MessageRecord::new("12/05/23", "Bob", "ok")]);

    let err = ChatParser::with_config(ParseConfig::strict())
        .parse_str(content)
        .unwrap_err();
    assert!(matches!(err, ChatlensError::MalformedEntry { line: 1, .. }));
}

#[test]
fn test_only_preamble_yields_empty_table() {
    let content = "Chat with Alice\nExported on 12/05/2023\n\n";
    assert!(parse(content).is_empty());
    assert!(
        ChatParser::with_config(ParseConfig::strict())
            .parse_str(content)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_logical_messages_line_numbers() {
    let content = "intro\n12/05/23, 9:30 am - A: x\ny\n12/05/23, 9:31 am - B: z";
    let lines: Vec<usize> = LogicalMessages::new(content, true).map(|m| m.line).collect();
    assert_eq!(lines, [2, 4]);
}

#[test]
fn test_keep_carriage_returns_in_continuations() {
    let content = "12/05/23, 9:30 am - Alice: a\r\nb\r\n";
    let keep = ChatParser::with_config(ParseConfig::new().with_strip_carriage_returns(false));
    assert_eq!(keep.parse_str(content).unwrap()[0].message, "a\r b");
    assert_eq!(parse(content)[0].message, "a b");
}

// =========================================================================
// Media classification
// =========================================================================

#[test]
fn test_media_placeholder_is_case_sensitive() {
    let table = parse(
        "12/05/23, 9:30 am - A: <Media omitted>\n12/05/23, 9:31 am - A: <media omitted>\n12/05/23, 9:32 am - A: look <Media omitted>",
    );
    let kinds: Vec<MessageKind> = table.iter().map(MessageRecord::kind).collect();
    assert_eq!(kinds, [MessageKind::Media, MessageKind::Text, MessageKind::Media]);
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn test_impossible_date_parses_but_fails_analysis() {
    let table = parse("31/02/23, 9:30 am - Alice: hi");
    assert_eq!(table.len(), 1);

    let err = analyze(&table).unwrap_err();
    assert!(err.is_date_format());
    assert!(err.to_string().contains("31/02/23"));

    let err = filter(&table, date(1, 1, 2023), date(31, 12, 2023)).unwrap_err();
    assert!(err.is_date_format());
}

#[test]
fn test_one_bad_record_aborts_whole_filter() {
    let table = vec![
        MessageRecord::new("01/01/23", "Alice", "ok"),
        MessageRecord::new("not a date", "Bob", "bad"),
    ];
    assert!(filter(&table, date(1, 1, 2020), date(1, 1, 2030)).is_err());
}

#[test]
fn test_leap_day() {
    let table = parse("29/02/24, 9:30 am - Alice: leap");
    let kept = filter(&table, date(29, 2, 2024), date(29, 2, 2024)).unwrap();
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_whitespace_bound_is_not_missing() {
    let err = DateRange::from_inputs(Some("   "), Some("31/01/23"), DateStyle::ShortYear)
        .unwrap_err();
    assert!(err.is_date_format());
}

#[test]
fn test_empty_bound_is_missing_input() {
    let err = DateRange::from_inputs(Some(""), Some("31/01/23"), DateStyle::ShortYear)
        .unwrap_err();
    assert!(matches!(err, ChatlensError::MissingInput { field: "start" }));
}

#[test]
fn test_missing_input_checked_before_format() {
    let err = DateRange::from_inputs(Some("garbage"), None, DateStyle::ShortYear).unwrap_err();
    assert!(err.is_missing_input());
}

#[test]
fn test_year_forms_per_style() {
    assert!(DateStyle::ShortYear.parse("01/01/2023").is_err());
    assert_eq!(DateStyle::LongYear.parse("01/01/2023").unwrap(), date(1, 1, 2023));
}

#[test]
fn test_single_day_range() {
    let table = vec![
        MessageRecord::new("11/05/23", "A", "before"),
        MessageRecord::new("12/05/23", "A", "on"),
        MessageRecord::new("13/05/23", "A", "after"),
    ];
    let kept = filter(&table, date(12, 5, 2023), date(12, 5, 2023)).unwrap();
    assert_eq!(kept, vec![MessageRecord::new("12/05/23", "A", "on")]);
}

// =========================================================================
// Analysis
// =========================================================================

#[test]
fn test_monthly_series_spanning_years() {
    let table = vec![
        MessageRecord::new("31/12/21", "A", "x"),
        MessageRecord::new("01/01/23", "A", "y"),
    ];
    let analysis = analyze(&table).unwrap();
    assert_eq!(analysis.monthly.len(), 14);
    assert_eq!(analysis.monthly.first().unwrap().month, "2021-12");
    assert_eq!(analysis.monthly.last().unwrap().month, "2023-01");
    assert_eq!(analysis.monthly.iter().map(|m| m.count).sum::<usize>(), 2);
}

#[test]
fn test_sender_names_are_case_sensitive_in_analysis() {
    let table = vec![
        MessageRecord::new("01/01/23", "alice", "x"),
        MessageRecord::new("01/01/23", "Alice", "y"),
    ];
    let analysis = analyze(&table).unwrap();
    assert_eq!(analysis.per_sender.len(), 2);
}
