use crate::{
    ast::expressions::{Expr, ExprKind},
    errors::errors::SyntaxError,
    lexer::tokens::{Delimiter, Keyword, Operator, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser, types::parse_data_type};

/// Pratt expression loop: parse a prefix (NUD) expression, then fold in
/// infix (LED) operators while their binding power exceeds `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, SyntaxError> {
    let token_kind = parser.current_token_kind();
    let nud_fn = match parser.get_nud_lookup().get(&token_kind) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected("an expression")),
    };

    let mut left = nud_fn(parser)?;

    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let led_fn = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => return Err(parser.unexpected("an operator")),
        };
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.advance();

    let kind = match token.kind {
        TokenKind::Integer => match token.text.parse::<i64>() {
            Ok(value) => ExprKind::Integer(value),
            Err(_) => {
                return Err(SyntaxError::new(
                    "integer literal out of range",
                    token.line,
                    token.column,
                    "an integer that fits in 64 bits",
                    Parser::describe_token(&token),
                ))
            }
        },
        TokenKind::Float => match token.text.parse::<f64>() {
            Ok(value) => ExprKind::Float(value),
            Err(_) => {
                return Err(SyntaxError::new(
                    "malformed float literal",
                    token.line,
                    token.column,
                    "a float literal",
                    Parser::describe_token(&token),
                ))
            }
        },
        TokenKind::String => ExprKind::String(token.text.clone()),
        TokenKind::Identifier => ExprKind::Column {
            table: None,
            name: token.text.clone(),
        },
        TokenKind::Keyword(Keyword::True) => ExprKind::Boolean(true),
        TokenKind::Keyword(Keyword::False) => ExprKind::Boolean(false),
        TokenKind::Keyword(Keyword::Null) => ExprKind::Null,
        _ => {
            return Err(SyntaxError::new(
                "unexpected token",
                token.line,
                token.column,
                "a literal or column reference",
                Parser::describe_token(&token),
            ))
        }
    };

    Ok(Expr::new(kind, token.line, token.column))
}

/// Unary arithmetic minus.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::new(
        ExprKind::Negate(Box::new(operand)),
        operator_token.line,
        operator_token.column,
    ))
}

/// Prefix NOT. Binds tighter than AND/OR but looser than a comparison, so
/// `NOT a = 1` negates the whole comparison.
pub fn parse_not_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let not_token = parser.advance();
    let operand = parse_expr(parser, BindingPower::Not)?;

    Ok(Expr::new(
        ExprKind::Not(Box::new(operand)),
        not_token.line,
        not_token.column,
    ))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Operator(operator) => operator,
        _ => return Err(parser.unexpected("an arithmetic operator")),
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        operator_token.line,
        operator_token.column,
    ))
}

pub fn parse_comparison_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance();
    let operator = match operator_token.kind {
        TokenKind::Comparison(operator) => operator,
        _ => return Err(parser.unexpected("a comparison operator")),
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::new(
        ExprKind::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        operator_token.line,
        operator_token.column,
    ))
}

pub fn parse_logical_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, SyntaxError> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    let kind = match operator_token.kind {
        TokenKind::Keyword(Keyword::And) => ExprKind::And {
            left: Box::new(left),
            right: Box::new(right),
        },
        TokenKind::Keyword(Keyword::Or) => ExprKind::Or {
            left: Box::new(left),
            right: Box::new(right),
        },
        _ => return Err(parser.unexpected("AND or OR")),
    };

    Ok(Expr::new(kind, operator_token.line, operator_token.column))
}

pub fn parse_between_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let between_token = parser.advance();
    between_bounds(parser, left, false, between_token.line, between_token.column)
}

/// `low AND high` — the bounds parse at the AND level so the connective
/// belongs to BETWEEN, not to the surrounding condition.
fn between_bounds(
    parser: &mut Parser,
    expr: Expr,
    negated: bool,
    line: u32,
    column: u32,
) -> Result<Expr, SyntaxError> {
    let low = parse_expr(parser, BindingPower::And)?;
    parser.expect(TokenKind::Keyword(Keyword::And), "AND")?;
    let high = parse_expr(parser, BindingPower::And)?;

    Ok(Expr::new(
        ExprKind::Between {
            expr: Box::new(expr),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        },
        line,
        column,
    ))
}

pub fn parse_in_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let in_token = parser.advance();
    in_list(parser, left, false, in_token.line, in_token.column)
}

fn in_list(
    parser: &mut Parser,
    expr: Expr,
    negated: bool,
    line: u32,
    column: u32,
) -> Result<Expr, SyntaxError> {
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;

    let mut list = vec![parse_expr(parser, BindingPower::Default)?];
    while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;

    Ok(Expr::new(
        ExprKind::InList {
            expr: Box::new(expr),
            negated,
            list,
        },
        line,
        column,
    ))
}

pub fn parse_like_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let like_token = parser.advance();
    like_pattern(parser, left, false, like_token.line, like_token.column)
}

fn like_pattern(
    parser: &mut Parser,
    expr: Expr,
    negated: bool,
    line: u32,
    column: u32,
) -> Result<Expr, SyntaxError> {
    let pattern = parse_expr(parser, BindingPower::Comparison)?;

    Ok(Expr::new(
        ExprKind::Like {
            expr: Box::new(expr),
            negated,
            pattern: Box::new(pattern),
        },
        line,
        column,
    ))
}

/// `IS [NOT] NULL`.
pub fn parse_is_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let is_token = parser.advance();
    let negated = parser.eat_keyword(Keyword::Not);
    parser.expect(TokenKind::Keyword(Keyword::Null), "NULL")?;

    Ok(Expr::new(
        ExprKind::IsNull {
            expr: Box::new(left),
            negated,
        },
        is_token.line,
        is_token.column,
    ))
}

/// Postfix NOT: `x NOT BETWEEN a AND b`, `x NOT IN (...)`, `x NOT LIKE p`.
pub fn parse_negated_postfix_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, SyntaxError> {
    let not_token = parser.advance();

    match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Between) => {
            parser.advance();
            between_bounds(parser, left, true, not_token.line, not_token.column)
        }
        TokenKind::Keyword(Keyword::In) => {
            parser.advance();
            in_list(parser, left, true, not_token.line, not_token.column)
        }
        TokenKind::Keyword(Keyword::Like) => {
            parser.advance();
            like_pattern(parser, left, true, not_token.line, not_token.column)
        }
        _ => Err(parser.unexpected("BETWEEN, IN or LIKE after NOT")),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;

    Ok(expr)
}

/// Function calls, recognized generically by name plus argument list.
/// `COUNT(*)` and `COUNT(DISTINCT x)` get their special argument forms;
/// unknown function names are accepted here and left for semantic analysis.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    let paren = parser.advance();

    let name = match left.kind {
        ExprKind::Column { table: None, name } => name,
        _ => {
            return Err(SyntaxError::new(
                "only a simple name can be called as a function",
                paren.line,
                paren.column,
                "a function name before '('",
                Parser::describe_token(parser.current_token()),
            ))
        }
    };

    let mut distinct = false;
    let mut args = Vec::new();

    if parser.current_token_kind() == TokenKind::Operator(Operator::Star)
        && parser.peek_next_kind() == TokenKind::Delimiter(Delimiter::CloseParen)
    {
        let star = parser.advance();
        args.push(Expr::new(ExprKind::Wildcard, star.line, star.column));
    } else if parser.eat_keyword(Keyword::Distinct) {
        distinct = true;
        args.push(parse_expr(parser, BindingPower::Default)?);
    } else if parser.current_token_kind() != TokenKind::Delimiter(Delimiter::CloseParen) {
        args.push(parse_expr(parser, BindingPower::Default)?);
        while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
            args.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;

    Ok(Expr::new(
        ExprKind::Function { name, distinct, args },
        left.line,
        left.column,
    ))
}

/// Qualified names: `table.column`.
pub fn parse_qualified_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, SyntaxError> {
    parser.advance();
    let member = parser.expect(TokenKind::Identifier, "a column name after '.'")?;

    match left.kind {
        ExprKind::Column { table: None, name } => Ok(Expr::new(
            ExprKind::Column {
                table: Some(name),
                name: member.text,
            },
            left.line,
            left.column,
        )),
        _ => Err(SyntaxError::new(
            "only a table name can qualify a column",
            left.line,
            left.column,
            "a table name before '.'",
            Parser::describe_token(&member),
        )),
    }
}

/// `CAST(expr AS type)`.
pub fn parse_cast_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let cast_token = parser.advance();
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Keyword(Keyword::As), "AS")?;
    let data_type = parse_data_type(parser)?;
    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;

    Ok(Expr::new(
        ExprKind::Cast {
            expr: Box::new(expr),
            data_type,
        },
        cast_token.line,
        cast_token.column,
    ))
}
