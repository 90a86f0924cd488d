use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Statement},
    errors::errors::SyntaxError,
    lexer::tokens::{Comparison, Delimiter, Keyword, Operator, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence ladder, low to high. Conditions sit below arithmetic so that
/// a comparison binds tighter than AND/OR and arithmetic binds tighter than
/// a comparison.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Or,
    And,
    Not,
    Comparison,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, SyntaxError>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, SyntaxError>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, SyntaxError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(TokenKind::Keyword(Keyword::Or), BindingPower::Or, parse_logical_expr);
    parser.led(TokenKind::Keyword(Keyword::And), BindingPower::And, parse_logical_expr);

    // Comparison operators and SQL predicates
    parser.led(TokenKind::Comparison(Comparison::Equals), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Comparison(Comparison::NotEquals), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Comparison(Comparison::Less), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Comparison(Comparison::LessEquals), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Comparison(Comparison::Greater), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Comparison(Comparison::GreaterEquals), BindingPower::Comparison, parse_comparison_expr);
    parser.led(TokenKind::Keyword(Keyword::Between), BindingPower::Comparison, parse_between_expr);
    parser.led(TokenKind::Keyword(Keyword::In), BindingPower::Comparison, parse_in_expr);
    parser.led(TokenKind::Keyword(Keyword::Like), BindingPower::Comparison, parse_like_expr);
    parser.led(TokenKind::Keyword(Keyword::Is), BindingPower::Comparison, parse_is_expr);
    parser.led(TokenKind::Keyword(Keyword::Not), BindingPower::Comparison, parse_negated_postfix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Operator(Operator::Plus), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Minus), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Concat), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::BitAnd), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::BitOr), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::BitXor), BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Star), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Slash), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Percent), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Shl), BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Operator(Operator::Shr), BindingPower::Multiplicative, parse_binary_expr);

    parser.led(TokenKind::Delimiter(Delimiter::OpenParen), BindingPower::Call, parse_call_expr);

    // Member (qualified names)
    parser.led(TokenKind::Dot, BindingPower::Member, parse_qualified_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Float, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Keyword(Keyword::True), parse_primary_expr);
    parser.nud(TokenKind::Keyword(Keyword::False), parse_primary_expr);
    parser.nud(TokenKind::Keyword(Keyword::Null), parse_primary_expr);
    parser.nud(TokenKind::Operator(Operator::Minus), parse_prefix_expr);
    parser.nud(TokenKind::Keyword(Keyword::Not), parse_not_expr);
    parser.nud(TokenKind::Delimiter(Delimiter::OpenParen), parse_grouping_expr);
    parser.nud(TokenKind::Keyword(Keyword::Cast), parse_cast_expr);

    // Statements
    parser.stmt(Keyword::Select, parse_select_stmt);
    parser.stmt(Keyword::Insert, parse_insert_stmt);
    parser.stmt(Keyword::Update, parse_update_stmt);
    parser.stmt(Keyword::Delete, parse_delete_stmt);
    parser.stmt(Keyword::Create, parse_create_stmt);
    parser.stmt(Keyword::Alter, parse_alter_stmt);
    parser.stmt(Keyword::Drop, parse_drop_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<Keyword, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
