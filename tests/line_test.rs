//! Tests for line tokenizing

use gedtree::errors::ParseError;
use gedtree::line::{is_xref_pointer, LineRecord};

#[test]
fn given_plain_record_line_when_parsing_then_splits_level_and_tag() {
    let record = LineRecord::parse("0 HEAD", 1).unwrap();
    assert_eq!(record.level, 0);
    assert_eq!(record.id, None);
    assert_eq!(record.tag, "HEAD");
    assert_eq!(record.value, None);
    assert_eq!(record.line_number, 1);
}

#[test]
fn given_record_opening_line_when_parsing_then_keeps_xref_delimiters() {
    let record = LineRecord::parse("0 @I1@ INDI", 5).unwrap();
    assert_eq!(record.level, 0);
    assert_eq!(record.id.as_deref(), Some("@I1@"));
    assert_eq!(record.tag, "INDI");
    assert_eq!(record.value, None);
}

#[test]
fn given_value_with_spaces_when_parsing_then_value_is_untrimmed_remainder() {
    let record = LineRecord::parse("1 NAME John /Doe/", 2).unwrap();
    assert_eq!(record.tag, "NAME");
    assert_eq!(record.value.as_deref(), Some("John /Doe/"));

    // double space after the tag: the second space belongs to the value
    let record = LineRecord::parse("1 NOTE  indented", 3).unwrap();
    assert_eq!(record.value.as_deref(), Some(" indented"));
}

#[test]
fn given_tag_without_trailing_space_when_parsing_then_value_is_none() {
    let record = LineRecord::parse("1 CONT", 4).unwrap();
    assert_eq!(record.value, None);
}

#[test]
fn given_tag_with_trailing_space_when_parsing_then_value_is_empty_string() {
    let record = LineRecord::parse("1 CONT ", 4).unwrap();
    assert_eq!(record.value.as_deref(), Some(""));
}

#[test]
fn given_multi_digit_level_when_parsing_then_whole_token_is_the_level() {
    let record = LineRecord::parse("10 NOTE deep", 7).unwrap();
    assert_eq!(record.level, 10);
}

#[test]
fn given_unparseable_level_when_parsing_then_invalid_level_error() {
    let err = LineRecord::parse("X NAME John", 3).unwrap_err();
    match err {
        ParseError::InvalidLevel { line_number, token } => {
            assert_eq!(line_number, 3);
            assert_eq!(token, "X");
        }
        other => panic!("expected InvalidLevel, got {other:?}"),
    }
}

#[test]
fn given_level_only_line_when_parsing_then_missing_tag_error() {
    let err = LineRecord::parse("0", 9).unwrap_err();
    assert!(matches!(err, ParseError::MissingTag { line_number: 9 }));
}

#[test]
fn given_unterminated_xref_when_parsing_then_error_names_the_token() {
    let err = LineRecord::parse("0 @I1 INDI", 2).unwrap_err();
    match err {
        ParseError::UnterminatedXref { line_number, token } => {
            assert_eq!(line_number, 2);
            assert_eq!(token, "@I1");
        }
        other => panic!("expected UnterminatedXref, got {other:?}"),
    }
}

#[test]
fn given_custom_tag_when_parsing_then_accepted_like_standard_tags() {
    let record = LineRecord::parse("1 _LOC somewhere", 2).unwrap();
    assert_eq!(record.tag, "_LOC");
    assert_eq!(record.value.as_deref(), Some("somewhere"));
}

#[test]
fn given_parsed_record_when_reemitting_then_wire_format_matches_input() {
    for line in ["0 HEAD", "0 @I1@ INDI", "1 NAME John /Doe/", "2 GIVN John"] {
        let record = LineRecord::parse(line, 1).unwrap();
        assert_eq!(record.to_line(), line);
    }
}

#[test]
fn given_record_when_displaying_then_diagnostic_form_names_the_line() {
    let record = LineRecord::parse("0 @I1@ INDI", 5).unwrap();
    assert_eq!(record.to_string(), "Line 5: 0 @I1@ INDI");

    let record = LineRecord::parse("1 NAME John", 6).unwrap();
    assert_eq!(record.to_string(), "Line 6: 1 NAME John");
}

#[test]
fn test_xref_pointer_recognition() {
    assert!(is_xref_pointer("@I1@"));
    assert!(is_xref_pointer("@F12@"));
    assert!(!is_xref_pointer("John /Doe/"));
    assert!(!is_xref_pointer("@I1"));
    assert!(!is_xref_pointer("see @I1@ above"));
}
