//! Utility macros for the frontend.
//!
//! `MK_TOKEN!` builds a `Token` from a kind, its text and the position the
//! scan started at, which keeps the per-character handlers in the lexer
//! short.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1, 5);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
            column: $column,
        }
    };
}
