use crate::{
    ast::{
        statements::{
            AlterAction, AlterTableStatement, Assignment, ColumnConstraint, ColumnDef,
            CreateTableStatement, DeleteStatement, DropBehavior, DropStatement, InsertStatement,
            Join, JoinKind, ObjectType, OrderItem, SelectItem, SelectStatement, Statement,
            StatementKind, TableConstraint, TableConstraintKind, TableRef, UpdateStatement,
        },
    },
    errors::errors::SyntaxError,
    lexer::tokens::{suggest_keyword, Comparison, Delimiter, Keyword, Operator, TokenKind},
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_data_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    if let TokenKind::Keyword(keyword) = parser.current_token_kind() {
        if let Some(handler) = parser.get_stmt_lookup().get(&keyword).copied() {
            return handler(parser);
        }
    }

    let token = parser.current_token().clone();
    let message = match suggest_keyword(&token.text) {
        Some(suggestion) if token.kind == TokenKind::Identifier => {
            format!("expected a statement, did you mean {}?", suggestion)
        }
        _ => String::from("expected a statement"),
    };

    Err(SyntaxError::new(
        message,
        token.line,
        token.column,
        "SELECT, INSERT, UPDATE, DELETE, CREATE, ALTER or DROP",
        Parser::describe_token(&token),
    ))
}

pub fn parse_select_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();
    let body = parse_select_body(parser)?;

    Ok(Statement::new(StatementKind::Select(body), head.line, head.column))
}

/// Everything after the SELECT keyword. Split out so CREATE VIEW can reuse
/// it for its defining query.
pub fn parse_select_body(parser: &mut Parser) -> Result<SelectStatement, SyntaxError> {
    let distinct = parser.eat_keyword(Keyword::Distinct);

    let mut columns = Vec::new();
    loop {
        if parser.current_token_kind() == TokenKind::Operator(Operator::Star) {
            parser.advance();
            columns.push(SelectItem::Wildcard);
        } else {
            let expr = parse_expr(parser, BindingPower::Default)?;
            let alias = if parser.eat_keyword(Keyword::As) {
                Some(parser.expect(TokenKind::Identifier, "an alias name")?.text)
            } else {
                None
            };
            columns.push(SelectItem::Expr { expr, alias });
        }

        if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    let missing_from = {
        let token = parser.current_token();
        SyntaxError::new(
            "missing FROM clause",
            token.line,
            token.column,
            "FROM",
            Parser::describe_token(token),
        )
    };
    parser.expect_error(TokenKind::Keyword(Keyword::From), "FROM", Some(missing_from))?;

    let from = parse_table_ref(parser)?;
    let joins = parse_joins(parser)?;

    let where_clause = if parser.eat_keyword(Keyword::Where) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let mut group_by = Vec::new();
    if parser.eat_keyword(Keyword::Group) {
        parser.expect(TokenKind::Keyword(Keyword::By), "BY")?;
        group_by.push(parse_expr(parser, BindingPower::Default)?);
        while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
            group_by.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    let having = if parser.eat_keyword(Keyword::Having) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    let mut order_by = Vec::new();
    if parser.eat_keyword(Keyword::Order) {
        parser.expect(TokenKind::Keyword(Keyword::By), "BY")?;
        loop {
            let expr = parse_expr(parser, BindingPower::Default)?;
            let descending = if parser.eat_keyword(Keyword::Desc) {
                true
            } else {
                parser.eat_keyword(Keyword::Asc);
                false
            };
            order_by.push(OrderItem { expr, descending });

            if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
                parser.advance();
            } else {
                break;
            }
        }
    }

    let limit = if parser.eat_keyword(Keyword::Limit) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(SelectStatement {
        distinct,
        columns,
        from,
        joins,
        where_clause,
        group_by,
        having,
        order_by,
        limit,
    })
}

fn parse_table_ref(parser: &mut Parser) -> Result<TableRef, SyntaxError> {
    let name = parser.expect(TokenKind::Identifier, "a table name")?;

    let alias = if parser.eat_keyword(Keyword::As) {
        Some(parser.expect(TokenKind::Identifier, "an alias name")?.text)
    } else if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance().text)
    } else {
        None
    };

    Ok(TableRef {
        name: name.text,
        alias,
        line: name.line,
        column: name.column,
    })
}

fn parse_joins(parser: &mut Parser) -> Result<Vec<Join>, SyntaxError> {
    let mut joins = Vec::new();

    loop {
        let kind = match parser.current_token_kind() {
            TokenKind::Keyword(Keyword::Join) => JoinKind::Inner,
            TokenKind::Keyword(Keyword::Inner) => JoinKind::Inner,
            TokenKind::Keyword(Keyword::Left) => JoinKind::Left,
            TokenKind::Keyword(Keyword::Right) => JoinKind::Right,
            TokenKind::Keyword(Keyword::Full) => JoinKind::Full,
            TokenKind::Keyword(Keyword::Cross) => JoinKind::Cross,
            _ => break,
        };

        if parser.current_token_kind() != TokenKind::Keyword(Keyword::Join) {
            parser.advance();
        }
        parser.expect(TokenKind::Keyword(Keyword::Join), "JOIN")?;

        let table = parse_table_ref(parser)?;

        // CROSS JOIN takes no ON condition
        let on = if kind == JoinKind::Cross {
            None
        } else {
            parser.expect(TokenKind::Keyword(Keyword::On), "ON")?;
            Some(parse_expr(parser, BindingPower::Default)?)
        };

        joins.push(Join { kind, table, on });
    }

    Ok(joins)
}

pub fn parse_insert_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();
    parser.expect(TokenKind::Keyword(Keyword::Into), "INTO")?;

    let name = parser.expect(TokenKind::Identifier, "a table name")?;
    let table = TableRef {
        name: name.text,
        alias: None,
        line: name.line,
        column: name.column,
    };

    let columns = if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::OpenParen) {
        Some(parse_paren_column_list(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Keyword(Keyword::Values), "VALUES")?;

    let mut rows = Vec::new();
    loop {
        parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;

        let mut row = vec![parse_expr(parser, BindingPower::Default)?];
        while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
            row.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
        rows.push(row);

        if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    Ok(Statement::new(
        StatementKind::Insert(InsertStatement { table, columns, rows }),
        head.line,
        head.column,
    ))
}

pub fn parse_update_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();

    let name = parser.expect(TokenKind::Identifier, "a table name")?;
    let table = TableRef {
        name: name.text,
        alias: None,
        line: name.line,
        column: name.column,
    };

    parser.expect(TokenKind::Keyword(Keyword::Set), "SET")?;

    let mut assignments = Vec::new();
    loop {
        let column = parser.expect(TokenKind::Identifier, "a column name")?.text;
        parser.expect(TokenKind::Comparison(Comparison::Equals), "'='")?;
        let value = parse_expr(parser, BindingPower::Default)?;
        assignments.push(Assignment { column, value });

        if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    let where_clause = if parser.eat_keyword(Keyword::Where) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Statement::new(
        StatementKind::Update(UpdateStatement { table, assignments, where_clause }),
        head.line,
        head.column,
    ))
}

pub fn parse_delete_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();
    parser.expect(TokenKind::Keyword(Keyword::From), "FROM")?;

    let name = parser.expect(TokenKind::Identifier, "a table name")?;
    let table = TableRef {
        name: name.text,
        alias: None,
        line: name.line,
        column: name.column,
    };

    let where_clause = if parser.eat_keyword(Keyword::Where) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Statement::new(
        StatementKind::Delete(DeleteStatement { table, where_clause }),
        head.line,
        head.column,
    ))
}

pub fn parse_create_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();

    match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Table) => {
            parser.advance();
            let create = parse_create_table(parser)?;
            Ok(Statement::new(StatementKind::CreateTable(create), head.line, head.column))
        }
        TokenKind::Keyword(Keyword::Database) => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier, "a database name")?.text;
            Ok(Statement::new(
                StatementKind::CreateDatabase { name },
                head.line,
                head.column,
            ))
        }
        TokenKind::Keyword(Keyword::View) => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier, "a view name")?.text;
            parser.expect(TokenKind::Keyword(Keyword::As), "AS")?;
            parser.expect(TokenKind::Keyword(Keyword::Select), "SELECT")?;
            let query = parse_select_body(parser)?;
            Ok(Statement::new(
                StatementKind::CreateView { name, query: Box::new(query) },
                head.line,
                head.column,
            ))
        }
        TokenKind::Keyword(Keyword::Index) => {
            parser.advance();
            let name = parser.expect(TokenKind::Identifier, "an index name")?.text;
            parser.expect(TokenKind::Keyword(Keyword::On), "ON")?;
            let table = parser.expect(TokenKind::Identifier, "a table name")?.text;
            let columns = parse_paren_column_list(parser)?;
            Ok(Statement::new(
                StatementKind::CreateIndex { name, table, columns },
                head.line,
                head.column,
            ))
        }
        _ => Err(parser.unexpected("TABLE, DATABASE, VIEW or INDEX")),
    }
}

fn parse_create_table(parser: &mut Parser) -> Result<CreateTableStatement, SyntaxError> {
    let if_not_exists = if parser.current_token_kind() == TokenKind::Keyword(Keyword::If) {
        parser.advance();
        parser.expect(TokenKind::Keyword(Keyword::Not), "NOT")?;
        parser.expect(TokenKind::Keyword(Keyword::Exists), "EXISTS")?;
        true
    } else {
        false
    };

    let name = parser.expect(TokenKind::Identifier, "a table name")?.text;
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;

    let mut columns = Vec::new();
    let mut constraints = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::Keyword(
                Keyword::Primary
                | Keyword::Foreign
                | Keyword::Unique
                | Keyword::Check
                | Keyword::Constraint,
            ) => constraints.push(parse_table_constraint(parser)?),
            _ => columns.push(parse_column_def(parser)?),
        }

        if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;

    Ok(CreateTableStatement { name, if_not_exists, columns, constraints })
}

fn parse_column_def(parser: &mut Parser) -> Result<ColumnDef, SyntaxError> {
    let name = parser.expect(TokenKind::Identifier, "a column name")?.text;
    let data_type = parse_data_type(parser)?;

    let mut constraints = Vec::new();
    loop {
        match parser.current_token_kind() {
            TokenKind::Keyword(Keyword::Primary) => {
                parser.advance();
                parser.expect(TokenKind::Keyword(Keyword::Key), "KEY")?;
                constraints.push(ColumnConstraint::PrimaryKey);
            }
            TokenKind::Keyword(Keyword::Not) => {
                parser.advance();
                parser.expect(TokenKind::Keyword(Keyword::Null), "NULL")?;
                constraints.push(ColumnConstraint::NotNull);
            }
            TokenKind::Keyword(Keyword::Unique) => {
                parser.advance();
                constraints.push(ColumnConstraint::Unique);
            }
            TokenKind::Keyword(Keyword::Default) => {
                parser.advance();
                constraints.push(ColumnConstraint::Default(parse_expr(
                    parser,
                    BindingPower::Default,
                )?));
            }
            TokenKind::Keyword(Keyword::References) => {
                parser.advance();
                let table = parser.expect(TokenKind::Identifier, "a table name")?.text;
                let column =
                    if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::OpenParen) {
                        parser.advance();
                        let column = parser.expect(TokenKind::Identifier, "a column name")?.text;
                        parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
                        Some(column)
                    } else {
                        None
                    };
                constraints.push(ColumnConstraint::References { table, column });
            }
            TokenKind::Keyword(Keyword::Check) => {
                parser.advance();
                parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;
                let expr = parse_expr(parser, BindingPower::Default)?;
                parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
                constraints.push(ColumnConstraint::Check(expr));
            }
            _ => break,
        }
    }

    Ok(ColumnDef { name, data_type, constraints })
}

fn parse_table_constraint(parser: &mut Parser) -> Result<TableConstraint, SyntaxError> {
    let name = if parser.eat_keyword(Keyword::Constraint) {
        Some(parser.expect(TokenKind::Identifier, "a constraint name")?.text)
    } else {
        None
    };

    let kind = match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Primary) => {
            parser.advance();
            parser.expect(TokenKind::Keyword(Keyword::Key), "KEY")?;
            TableConstraintKind::PrimaryKey(parse_paren_column_list(parser)?)
        }
        TokenKind::Keyword(Keyword::Foreign) => {
            parser.advance();
            parser.expect(TokenKind::Keyword(Keyword::Key), "KEY")?;
            let columns = parse_paren_column_list(parser)?;
            parser.expect(TokenKind::Keyword(Keyword::References), "REFERENCES")?;
            let ref_table = parser.expect(TokenKind::Identifier, "a table name")?.text;
            let ref_columns =
                if parser.current_token_kind() == TokenKind::Delimiter(Delimiter::OpenParen) {
                    parse_paren_column_list(parser)?
                } else {
                    Vec::new()
                };
            TableConstraintKind::ForeignKey { columns, ref_table, ref_columns }
        }
        TokenKind::Keyword(Keyword::Unique) => {
            parser.advance();
            TableConstraintKind::Unique(parse_paren_column_list(parser)?)
        }
        TokenKind::Keyword(Keyword::Check) => {
            parser.advance();
            parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;
            let expr = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
            TableConstraintKind::Check(expr)
        }
        _ => return Err(parser.unexpected("a table constraint")),
    };

    Ok(TableConstraint { name, kind })
}

fn parse_paren_column_list(parser: &mut Parser) -> Result<Vec<String>, SyntaxError> {
    parser.expect(TokenKind::Delimiter(Delimiter::OpenParen), "'('")?;

    let mut columns = vec![parser.expect(TokenKind::Identifier, "a column name")?.text];
    while parser.current_token_kind() == TokenKind::Delimiter(Delimiter::Comma) {
        parser.advance();
        columns.push(parser.expect(TokenKind::Identifier, "a column name")?.text);
    }

    parser.expect(TokenKind::Delimiter(Delimiter::CloseParen), "')'")?;
    Ok(columns)
}

pub fn parse_alter_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();
    parser.expect(TokenKind::Keyword(Keyword::Table), "TABLE")?;
    let table = parser.expect(TokenKind::Identifier, "a table name")?.text;

    let action = match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Add) => {
            parser.advance();
            parser.expect(TokenKind::Keyword(Keyword::Column), "COLUMN")?;
            AlterAction::AddColumn(parse_column_def(parser)?)
        }
        TokenKind::Keyword(Keyword::Drop) => {
            parser.advance();
            parser.expect(TokenKind::Keyword(Keyword::Column), "COLUMN")?;
            AlterAction::DropColumn(parser.expect(TokenKind::Identifier, "a column name")?.text)
        }
        _ => return Err(parser.unexpected("ADD or DROP")),
    };

    Ok(Statement::new(
        StatementKind::AlterTable(AlterTableStatement { table, action }),
        head.line,
        head.column,
    ))
}

pub fn parse_drop_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let head = parser.advance();

    let object = match parser.current_token_kind() {
        TokenKind::Keyword(Keyword::Table) => ObjectType::Table,
        TokenKind::Keyword(Keyword::Database) => ObjectType::Database,
        TokenKind::Keyword(Keyword::View) => ObjectType::View,
        TokenKind::Keyword(Keyword::Index) => ObjectType::Index,
        _ => return Err(parser.unexpected("TABLE, DATABASE, VIEW or INDEX")),
    };
    parser.advance();

    let if_exists = if parser.current_token_kind() == TokenKind::Keyword(Keyword::If) {
        parser.advance();
        parser.expect(TokenKind::Keyword(Keyword::Exists), "EXISTS")?;
        true
    } else {
        false
    };

    let name = parser.expect(TokenKind::Identifier, "an object name")?.text;

    let behavior = if parser.eat_keyword(Keyword::Cascade) {
        Some(DropBehavior::Cascade)
    } else if parser.eat_keyword(Keyword::Restrict) {
        Some(DropBehavior::Restrict)
    } else {
        None
    };

    Ok(Statement::new(
        StatementKind::Drop(DropStatement { object, name, if_exists, behavior }),
        head.line,
        head.column,
    ))
}
