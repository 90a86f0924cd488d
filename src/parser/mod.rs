//! Parser module for building the statement tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a list of statements. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (queries, data modification, schema definition)
//! - Expression parsing (binary ops, predicates, function calls, literals)
//! - Data type parsing for column definitions and CAST
//! - Error recovery and reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
