use crate::{
    errors::errors::{LexicalError, LexicalErrorKind},
    MK_TOKEN,
};

use super::tokens::{suggest_keyword, Comparison, Delimiter, Operator, Token, TokenKind, RESERVED_LOOKUP};

/// A hand-rolled character scanner over an immutable source buffer.
///
/// The only operation that mutates the cursor is `next_token`; once the end
/// of input is reached it keeps returning `EOF` tokens forever. Lexical
/// problems accumulate in the instance instead of stopping the scan.
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    errors: Vec<LexicalError>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            errors: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn record(&mut self, kind: LexicalErrorKind, line: u32, column: u32) {
        self.errors.push(LexicalError::new(kind, line, column));
    }

    /// Consumes the collected lexical diagnostics.
    pub fn take_errors(&mut self) -> Vec<LexicalError> {
        std::mem::take(&mut self.errors)
    }

    /// Fuzzy match against the reserved-word table, for error messages that
    /// want to suggest the keyword a misspelled identifier was likely meant
    /// to be.
    pub fn keyword_suggestion(&self, text: &str) -> Option<&'static str> {
        suggest_keyword(text)
    }

    /// Skips whitespace, `--` line comments and `## ... ##` block comments.
    ///
    /// A block comment with no closing marker before end of input is an
    /// unterminated-comment error positioned at its opening `##`.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(|c| c.is_whitespace()) {
                self.advance();
            }

            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            if self.peek() == Some('#') && self.peek_next() == Some('#') {
                let (line, column) = (self.line, self.column);
                self.advance();
                self.advance();

                let mut terminated = false;
                while let Some(c) = self.advance() {
                    if c == '#' && self.peek() == Some('#') {
                        self.advance();
                        terminated = true;
                        break;
                    }
                }

                if !terminated {
                    self.record(LexicalErrorKind::UnterminatedComment, line, column);
                }
                continue;
            }

            break;
        }
    }

    /// Produces the next token, skipping over any spans that raise lexical
    /// errors so the stream always terminates in `EOF`.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            let (line, column) = (self.line, self.column);

            let c = match self.peek() {
                Some(c) => c,
                None => return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), line, column),
            };

            if c.is_ascii_digit() {
                match self.scan_number(line, column) {
                    Some(token) => return token,
                    None => continue,
                }
            }

            if c.is_alphabetic() || c == '_' {
                return self.scan_identifier(line, column);
            }

            if c == '\'' {
                match self.scan_string(line, column) {
                    Some(token) => return token,
                    None => continue,
                }
            }

            match self.scan_operator(line, column) {
                Some(token) => return token,
                None => {
                    self.advance();
                    self.record(LexicalErrorKind::InvalidCharacter { character: c }, line, column);
                }
            }
        }
    }

    /// Scans an integer or float literal, including scientific notation.
    ///
    /// Returns `None` (after recording a malformed-number error) when an
    /// exponent marker has no digits behind it.
    fn scan_number(&mut self, line: u32, column: u32) -> Option<Token> {
        let start = self.pos;
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            is_float = true;
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }

            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                let text: String = self.source[start..self.pos].iter().collect();
                self.record(LexicalErrorKind::MalformedNumber { text }, line, column);
                return None;
            }

            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text: String = self.source[start..self.pos].iter().collect();
        let kind = if is_float { TokenKind::Float } else { TokenKind::Integer };
        Some(MK_TOKEN!(kind, text, line, column))
    }

    /// Scans an identifier and resolves it against the reserved-word table.
    /// Keywords are canonicalized to uppercase; identifiers keep their case.
    fn scan_identifier(&mut self, line: u32, column: u32) -> Token {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text: String = self.source[start..self.pos].iter().collect();
        let upper = text.to_uppercase();

        if let Some(keyword) = RESERVED_LOOKUP.get(upper.as_str()) {
            MK_TOKEN!(TokenKind::Keyword(*keyword), upper, line, column)
        } else {
            MK_TOKEN!(TokenKind::Identifier, text, line, column)
        }
    }

    /// Scans a single-quoted string literal. A doubled quote inside the
    /// literal folds to one quote in the token text.
    fn scan_string(&mut self, line: u32, column: u32) -> Option<Token> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                Some('\'') => {
                    if self.peek_next() == Some('\'') {
                        value.push('\'');
                        self.advance();
                        self.advance();
                    } else {
                        self.advance(); // closing quote
                        return Some(MK_TOKEN!(TokenKind::String, value, line, column));
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    self.record(LexicalErrorKind::UnterminatedString, line, column);
                    return None;
                }
            }
        }
    }

    /// Scans operator, comparison and delimiter tokens. Two-character forms
    /// are tried before their one-character prefixes; scanning the short
    /// form first would split `<=` into `<` and `=`.
    fn scan_operator(&mut self, line: u32, column: u32) -> Option<Token> {
        let c = self.peek()?;
        let next = self.peek_next();

        let (kind, text) = match (c, next) {
            ('<', Some('=')) => (TokenKind::Comparison(Comparison::LessEquals), "<="),
            ('<', Some('>')) => (TokenKind::Comparison(Comparison::NotEquals), "<>"),
            ('<', Some('<')) => (TokenKind::Operator(Operator::Shl), "<<"),
            ('>', Some('=')) => (TokenKind::Comparison(Comparison::GreaterEquals), ">="),
            ('>', Some('>')) => (TokenKind::Operator(Operator::Shr), ">>"),
            ('!', Some('=')) => (TokenKind::Comparison(Comparison::NotEquals), "!="),
            ('|', Some('|')) => (TokenKind::Operator(Operator::Concat), "||"),
            ('<', _) => (TokenKind::Comparison(Comparison::Less), "<"),
            ('>', _) => (TokenKind::Comparison(Comparison::Greater), ">"),
            ('=', _) => (TokenKind::Comparison(Comparison::Equals), "="),
            ('|', _) => (TokenKind::Operator(Operator::BitOr), "|"),
            ('&', _) => (TokenKind::Operator(Operator::BitAnd), "&"),
            ('^', _) => (TokenKind::Operator(Operator::BitXor), "^"),
            ('+', _) => (TokenKind::Operator(Operator::Plus), "+"),
            ('-', _) => (TokenKind::Operator(Operator::Minus), "-"),
            ('*', _) => (TokenKind::Operator(Operator::Star), "*"),
            ('/', _) => (TokenKind::Operator(Operator::Slash), "/"),
            ('%', _) => (TokenKind::Operator(Operator::Percent), "%"),
            ('.', _) => (TokenKind::Dot, "."),
            (',', _) => (TokenKind::Delimiter(Delimiter::Comma), ","),
            ('(', _) => (TokenKind::Delimiter(Delimiter::OpenParen), "("),
            (')', _) => (TokenKind::Delimiter(Delimiter::CloseParen), ")"),
            (';', _) => (TokenKind::Delimiter(Delimiter::Semicolon), ";"),
            _ => return None,
        };

        for _ in 0..text.len() {
            self.advance();
        }

        Some(MK_TOKEN!(kind, String::from(text), line, column))
    }
}

/// Runs the scanner over the whole input, returning the token stream
/// (always terminated by exactly one `EOF`) and every lexical diagnostic
/// found along the way.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    let mut lex = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            break;
        }
    }

    (tokens, lex.take_errors())
}
