//! Lexical analysis module for the frontend.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of classified tokens for parsing. It handles:
//!
//! - Hand-rolled character scanning with longest-match operator handling
//! - Recognition of keywords, identifiers, literals and operators
//! - Line/column tracking for error reporting
//! - Dual comment styles and whitespace handling
//! - Non-fatal lexical diagnostics (the scan always runs to EOF)

pub mod lexer;
pub mod tokens;
