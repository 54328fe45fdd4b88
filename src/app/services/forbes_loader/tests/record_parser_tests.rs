//! Tests for line splitting and typed row construction

use crate::app::models::{Column, ColumnType, Schema};
use crate::app::services::forbes_loader::record_parser::{
    build_row, parse_line, strip_terminator,
};
use crate::Error;

fn test_schema() -> Schema {
    Schema::new(vec![
        Column::new("Company", ColumnType::Str),
        Column::new("Market Value", ColumnType::Float),
        Column::new("Rank", ColumnType::Int),
    ])
}

#[test]
fn test_strip_trailing_delimiter() {
    assert_eq!(strip_terminator("a;b;c;", ';'), "a;b;c");
}

#[test]
fn test_strip_carriage_return() {
    assert_eq!(strip_terminator("a;b;c\r", ';'), "a;b;c");
}

#[test]
fn test_strip_crlf_with_trailing_delimiter() {
    assert_eq!(strip_terminator("a;b;c;\r\n", ';'), "a;b;c");
}

#[test]
fn test_strip_leaves_unterminated_line_alone() {
    assert_eq!(strip_terminator("a;b;c", ';'), "a;b;c");
}

#[test]
fn test_parse_line_splits_on_delimiter() {
    let fields = parse_line("Acme;12,3;42;", ';', 3, 2).unwrap();
    assert_eq!(fields, vec!["Acme", "12,3", "42"]);
}

#[test]
fn test_parse_line_arity_mismatch() {
    let result = parse_line("Acme;12,3;", ';', 3, 7);
    assert!(matches!(
        result,
        Err(Error::MalformedRecord {
            line_number: 7,
            expected: 3,
            found: 2,
        })
    ));
}

#[test]
fn test_parse_line_preserves_empty_fields() {
    let fields = parse_line("Acme;;42;", ';', 3, 2).unwrap();
    assert_eq!(fields, vec!["Acme", "", "42"]);
}

#[test]
fn test_build_row_typed_conversion() {
    let fields = vec!["Acme".to_string(), "12.3".to_string(), "42".to_string()];
    let row = build_row(fields, &test_schema()).unwrap();

    assert_eq!(row.get_str(0).unwrap(), "Acme");
    assert_eq!(row.get_float(1).unwrap(), 12.3);
    assert_eq!(row.get_int(2).unwrap(), 42);
}

#[test]
fn test_build_row_rejects_unnormalized_float() {
    // A comma decimal that skipped normalization must not parse
    let fields = vec!["Acme".to_string(), "12,3".to_string(), "42".to_string()];
    let result = build_row(fields, &test_schema());

    assert!(matches!(
        result,
        Err(Error::TypeConversion { ref column, .. }) if column == "Market Value"
    ));
}

#[test]
fn test_build_row_rejects_non_integer_rank() {
    let fields = vec!["Acme".to_string(), "12.3".to_string(), "top".to_string()];
    let result = build_row(fields, &test_schema());

    assert!(matches!(
        result,
        Err(Error::TypeConversion { ref column, .. }) if column == "Rank"
    ));
}

#[test]
fn test_build_row_arity_mismatch() {
    let fields = vec!["Acme".to_string()];
    assert!(build_row(fields, &test_schema()).is_err());
}
