use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

/// The closed set of problems the lexer can detect.
///
/// Every variant is non-fatal: the offending span is skipped and scanning
/// continues, so one bad character never hides the rest of the input.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum LexicalErrorKind {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("malformed numeric literal: {text:?}")]
    MalformedNumber { text: String },
}

/// A lexical diagnostic with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub line: u32,
    pub column: u32,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, line: u32, column: u32) -> Self {
        LexicalError { kind, line, column }
    }

    pub fn error_name(&self) -> &'static str {
        match self.kind {
            LexicalErrorKind::InvalidCharacter { .. } => "InvalidCharacter",
            LexicalErrorKind::UnterminatedString => "UnterminatedString",
            LexicalErrorKind::UnterminatedComment => "UnterminatedComment",
            LexicalErrorKind::MalformedNumber { .. } => "MalformedNumber",
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

/// A syntax diagnostic recorded by the parser before it resynchronizes.
///
/// `expected` describes the token or construct the grammar anticipated and
/// `found` the kind and text of the token actually seen, so callers can
/// surface both halves verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxError {
    pub message: String,
    pub line: u32,
    pub column: u32,
    pub expected: String,
    pub found: String,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        line: u32,
        column: u32,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        SyntaxError {
            message: message.into(),
            line,
            column,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} (expected {}, found {})",
            self.line, self.column, self.message, self.expected, self.found
        )
    }
}
