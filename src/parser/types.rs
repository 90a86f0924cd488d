use crate::{
    ast::types::DataType,
    errors::errors::SyntaxError,
    lexer::tokens::{Delimiter, Keyword, TokenKind},
};

use super::parser::Parser;

/// Parses a column data type, with optional length or precision arguments
/// where the type takes them.
pub fn parse_data_type(parser: &mut Parser) -> Result<DataType, SyntaxError> {
    let token = parser.advance();

    let keyword = match token.kind {
        TokenKind::Keyword(keyword) => keyword,
        _ => {
            return Err(SyntaxError::new(
                "unexpected token",
                token.line,
                token.column,
                "a data type",
                Parser::describe_token(&token),
            ))
        }
    };

    match keyword {
        Keyword::Int | Keyword::Integer => Ok(DataType::Int),
        Keyword::Float => Ok(DataType::Float),
        Keyword::Real => Ok(DataType::Real),
        Keyword::Double => Ok(DataType::Double),
        Keyword::Decimal => Ok(DataType::Decimal(parse_precision(parser)?)),
        Keyword::Numeric => Ok(DataType::Numeric(parse_precision(parser)?)),
        Keyword::Varchar => Ok(DataType::Varchar(parse_length(parser)?)),
        Keyword::Char => Ok(DataType::Char(parse_length(parser)?)),
        Keyword::Text => Ok(DataType::Text),
        Keyword::Boolean => Ok(DataType::Boolean),
        Keyword::Date => Ok(DataType::Date),
        Keyword::Time => Ok(DataType::Time),
        Keyword::Timestamp => Ok(DataType::Timestamp),
        _ => Err(SyntaxError::new(
            "unexpected token",
            token.line,
            token.column,
            "a data type",
            Parser::describe_token(&token),
        )),
    }
}

/// Optional `(length)` suffix for VARCHAR and CHAR.
fn parse_length(parser: &mut Parser) -> Result<Option<u32>, SyntaxError> {
    if parser.current_token_kind() != TokenKind::Delimiter(Delimiter::OpenParen) {
        return Ok(None);
    }
    parser.advance();
    let length = parse_u32(parser)?;
    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
    Ok(Some(length))
}

/// Optional `(precision, scale)` suffix for DECIMAL and NUMERIC.
fn parse_precision(parser: &mut Parser) -> Result<Option<(u32, u32)>, SyntaxError> {
    if parser.current_token_kind() != TokenKind::Delimiter(Delimiter::OpenParen) {
        return Ok(None);
    }
    parser.advance();
    let precision = parse_u32(parser)?;
    parser.expect(TokenKind::Delimiter(Delimiter::Comma), "','")?;
    let scale = parse_u32(parser)?;
    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
    Ok(Some((precision, scale)))
}

fn parse_u32(parser: &mut Parser) -> Result<u32, SyntaxError> {
    let token = parser.expect(TokenKind::Integer, "an integer")?;
    token.text.parse::<u32>().map_err(|_| {
        SyntaxError::new(
            "type argument out of range",
            token.line,
            token.column,
            "a small positive integer",
            Parser::describe_token(&token),
        )
    })
}
