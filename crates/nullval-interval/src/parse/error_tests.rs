//! Tests for duration parse errors.

use super::*;

#[test]
fn test_parse_error_new() {
    let error = ParseError::new(ParseErrorKind::FormatMismatch, "P1X", "interval", 2);
    assert_eq!(error.kind, ParseErrorKind::FormatMismatch);
    assert_eq!(error.input, "P1X");
    assert_eq!(error.type_name, "interval");
    assert_eq!(error.position, 2);
    assert_eq!(error.found, Some('X'));
}

#[test]
fn test_parse_error_at_end_has_no_char() {
    let error = ParseError::new(ParseErrorKind::UnexpectedEof, "P1", "interval", 2);
    assert!(error.found.is_none());
}

#[test]
fn test_parse_error_non_ascii_char() {
    let error = ParseError::new(ParseErrorKind::FormatMismatch, "P1é", "interval", 2);
    assert_eq!(error.found, Some('é'));
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new(ParseErrorKind::FormatMismatch, "P1X", "interval", 2);
    assert_eq!(
        error.to_string(),
        r#"failed to parse "P1X" into interval: format mismatch at position 2 (found 'X')"#
    );
}

#[test]
fn test_parse_error_display_at_end() {
    let error = ParseError::new(ParseErrorKind::UnexpectedEof, "PT-", "null interval", 3);
    assert_eq!(
        error.to_string(),
        r#"failed to parse "PT-" into null interval: unexpected end of input at position 3"#
    );
}

#[test]
fn test_all_error_kinds_display() {
    let kinds = [
        (ParseErrorKind::UnexpectedEof, "unexpected end of input"),
        (ParseErrorKind::ExpectedDigit, "expected digit"),
        (ParseErrorKind::FormatMismatch, "format mismatch"),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.to_string(), expected);
    }
}
