//! Parser implementation for building the parse tree.
//!
//! This module contains the main Parser struct and the top-level `parse`
//! entry point. Statement dispatch goes through a keyword lookup table and
//! expression parsing uses a Pratt approach with NUD/LED handlers over a
//! binding-power ladder.
//!
//! Syntax errors never abort the pass: each one is recorded and the parser
//! resynchronizes at the next statement boundary (panic-mode recovery), so
//! one malformed clause yields one diagnostic instead of a cascade.

use std::collections::HashMap;

use crate::{
    ast::statements::Statement,
    errors::errors::SyntaxError,
    lexer::tokens::{Delimiter, Keyword, Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Whether the parser is consuming grammar or discarding tokens after an
/// error while it looks for a safe place to resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Scanning,
    Recovering,
}

/// True for tokens that are safe to resume parsing from after an error:
/// a statement terminator or a keyword that starts a new statement.
pub fn is_sync_point(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Delimiter(Delimiter::Semicolon) => true,
        TokenKind::Keyword(keyword) => keyword.starts_statement(),
        _ => false,
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the current position, the accumulated syntax
/// diagnostics and the lookup tables for statement and expression parsing.
pub struct Parser {
    /// The list of tokens to parse, always terminated by EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Scanning or recovering after an error
    state: ParseState,
    /// Syntax diagnostics collected across the whole pass
    errors: Vec<SyntaxError>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), 1, 1));
        }

        Parser {
            tokens,
            pos: 0,
            state: ParseState::Scanning,
            errors: Vec::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one (two-token lookahead).
    pub fn peek_next_kind(&self) -> TokenKind {
        self.tokens[(self.pos + 1).min(self.tokens.len() - 1)].kind
    }

    /// Returns the current token and advances past it. At EOF this keeps
    /// returning the EOF token without moving.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Human-readable kind+text of a token, for the `found` half of a
    /// diagnostic.
    pub fn describe_token(token: &Token) -> String {
        if token.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            format!("{} '{}'", token.kind, token.text)
        }
    }

    /// Builds an unexpected-token error at the current position.
    pub fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.current_token();
        SyntaxError::new(
            "unexpected token",
            token.line,
            token.column,
            expected,
            Self::describe_token(token),
        )
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        expected: &str,
        error: Option<SyntaxError>,
    ) -> Result<Token, SyntaxError> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(expected)),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        self.expect_error(expected_kind, expected, None)
    }

    /// Consumes the keyword if it is the current token.
    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.current_token_kind() == TokenKind::Keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn record(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    pub fn take_errors(&mut self) -> Vec<SyntaxError> {
        std::mem::take(&mut self.errors)
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Panic-mode recovery: discards tokens until a synchronization point,
    /// then returns to the Scanning state. The sync token itself is left in
    /// place; the top-level loop decides whether to consume it.
    pub fn synchronize(&mut self) {
        self.state = ParseState::Recovering;
        while self.has_tokens() && !is_sync_point(&self.current_token_kind()) {
            self.advance();
        }
        self.state = ParseState::Scanning;
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. Does not
    /// clobber a binding power already claimed by an infix registration.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses a stream of tokens into a list of statements.
///
/// This is the main entry point for syntax analysis. It never aborts for
/// input problems: every malformed statement produces one diagnostic and
/// parsing resumes at the next synchronization point, so the result is a
/// best-effort tree plus the full list of errors found in a single pass.
pub fn parse(tokens: Vec<Token>) -> (Vec<Statement>, Vec<SyntaxError>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut statements = Vec::new();

    while parser.has_tokens() {
        // Stray or trailing terminators
        if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Semicolon) {
            parser.advance();
            continue;
        }

        match parse_stmt(&mut parser) {
            Ok(stmt) => {
                statements.push(stmt);

                match parser.current_token_kind() {
                    TokenKind::Delimiter(Delimiter::Semicolon) => {
                        parser.advance();
                    }
                    // A trailing statement without ';' still parses
                    TokenKind::EOF => {}
                    _ => {
                        let error = parser.unexpected("';'");
                        parser.record(error);
                        parser.synchronize();
                    }
                }
            }
            Err(error) => {
                parser.record(error);
                parser.synchronize();
            }
        }
    }

    (statements, parser.take_errors())
}
