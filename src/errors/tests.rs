//! Unit tests for the error types: display formatting, names and the
//! serialized shape external tools consume.

use super::errors::{LexicalError, LexicalErrorKind, SyntaxError};

#[test]
fn test_lexical_error_display() {
    let error = LexicalError::new(LexicalErrorKind::InvalidCharacter { character: '@' }, 3, 7);
    assert_eq!(error.to_string(), "3:7: invalid character: '@'");
    assert_eq!(error.error_name(), "InvalidCharacter");

    let error = LexicalError::new(LexicalErrorKind::UnterminatedString, 1, 12);
    assert_eq!(error.to_string(), "1:12: unterminated string literal");
}

#[test]
fn test_malformed_number_message() {
    let error = LexicalError::new(
        LexicalErrorKind::MalformedNumber { text: String::from("1.5e") },
        2,
        4,
    );
    assert_eq!(error.message(), "malformed numeric literal: \"1.5e\"");
    assert_eq!(error.error_name(), "MalformedNumber");
}

#[test]
fn test_syntax_error_display() {
    let error = SyntaxError::new("missing FROM clause", 1, 11, "FROM", "Keyword 'WHERE'");
    assert_eq!(
        error.to_string(),
        "1:11: missing FROM clause (expected FROM, found Keyword 'WHERE')"
    );
}

#[test]
fn test_syntax_error_serializes_with_stable_fields() {
    let error = SyntaxError::new("unexpected token", 2, 5, "';'", "Identifier 'x'");
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["message"], "unexpected token");
    assert_eq!(json["line"], 2);
    assert_eq!(json["column"], 5);
    assert_eq!(json["expected"], "';'");
    assert_eq!(json["found"], "Identifier 'x'");
}

#[test]
fn test_lexical_error_serializes_position() {
    let error = LexicalError::new(LexicalErrorKind::UnterminatedComment, 4, 1);
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["line"], 4);
    assert_eq!(json["column"], 1);
}
