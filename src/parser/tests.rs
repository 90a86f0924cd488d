//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the various statement forms
//! including:
//! - Queries (projection, joins, grouping, ordering)
//! - Data modification (INSERT, UPDATE, DELETE)
//! - Schema definition (CREATE, ALTER, DROP)
//! - Expression precedence and SQL predicates
//! - Error recovery

use crate::{
    ast::{
        expressions::ExprKind,
        statements::{
            AlterAction, ColumnConstraint, DropBehavior, JoinKind, ObjectType, SelectItem,
            Statement, StatementKind, TableConstraintKind,
        },
        types::DataType,
    },
    errors::errors::SyntaxError,
    lexer::tokens::{Comparison, Delimiter, Keyword, Operator, TokenKind},
};

use super::parser::{is_sync_point, parse};

fn run(source: &str) -> (Vec<Statement>, Vec<SyntaxError>) {
    let (tokens, lex_errors) = crate::lexer::lexer::tokenize(source);
    assert!(lex_errors.is_empty(), "unexpected lexical errors: {:?}", lex_errors);
    parse(tokens)
}

fn run_clean(source: &str) -> Vec<Statement> {
    let (statements, errors) = run(source);
    assert!(errors.is_empty(), "unexpected syntax errors: {:?}", errors);
    statements
}

fn select_of(statement: &Statement) -> &crate::ast::statements::SelectStatement {
    match &statement.kind {
        StatementKind::Select(select) => select,
        other => panic!("expected a SELECT, got {:?}", other),
    }
}

#[test]
fn test_parse_select_wildcard() {
    let statements = run_clean("SELECT * FROM users;");

    assert_eq!(statements.len(), 1);
    let select = select_of(&statements[0]);
    assert_eq!(select.columns, vec![SelectItem::Wildcard]);
    assert_eq!(select.from.name, "users");
    assert!(select.where_clause.is_none());
}

#[test]
fn test_parse_select_full_clause_set() {
    let statements = run_clean(
        "SELECT DISTINCT dept, COUNT(*) AS total \
         FROM employees \
         WHERE salary > 1000 \
         GROUP BY dept \
         HAVING COUNT(*) > 5 \
         ORDER BY total DESC, dept \
         LIMIT 10;",
    );

    let select = select_of(&statements[0]);
    assert!(select.distinct);
    assert_eq!(select.columns.len(), 2);
    match &select.columns[1] {
        SelectItem::Expr { alias, .. } => assert_eq!(alias.as_deref(), Some("total")),
        other => panic!("expected an aliased expression, got {:?}", other),
    }
    assert!(select.where_clause.is_some());
    assert_eq!(select.group_by.len(), 1);
    assert!(select.having.is_some());
    assert_eq!(select.order_by.len(), 2);
    assert!(select.order_by[0].descending);
    assert!(!select.order_by[1].descending);
    assert!(select.limit.is_some());
}

#[test]
fn test_parse_select_joins() {
    let statements = run_clean(
        "SELECT u.name FROM users u \
         JOIN orders o ON u.id = o.user_id \
         LEFT JOIN payments p ON o.id = p.order_id \
         CROSS JOIN regions;",
    );

    let select = select_of(&statements[0]);
    assert_eq!(select.from.alias.as_deref(), Some("u"));
    assert_eq!(select.joins.len(), 3);
    assert_eq!(select.joins[0].kind, JoinKind::Inner);
    assert!(select.joins[0].on.is_some());
    assert_eq!(select.joins[1].kind, JoinKind::Left);
    assert_eq!(select.joins[2].kind, JoinKind::Cross);
    assert!(select.joins[2].on.is_none());
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let statements = run_clean("SELECT a + b * c FROM t;");

    let select = select_of(&statements[0]);
    let expr = match &select.columns[0] {
        SelectItem::Expr { expr, .. } => expr,
        other => panic!("expected an expression, got {:?}", other),
    };

    // a + (b * c)
    match &expr.kind {
        ExprKind::Binary { operator, right, .. } => {
            assert_eq!(*operator, Operator::Plus);
            assert!(matches!(
                right.kind,
                ExprKind::Binary { operator: Operator::Star, .. }
            ));
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_comparison_binds_tighter_than_and_or() {
    let statements = run_clean("SELECT * FROM t WHERE a = 1 AND b < 2 OR c > 3;");

    let select = select_of(&statements[0]);
    // ((a = 1 AND b < 2) OR c > 3)
    match select.where_clause.as_ref().map(|e| &e.kind) {
        Some(ExprKind::Or { left, right }) => {
            assert!(matches!(left.kind, ExprKind::And { .. }));
            assert!(matches!(
                right.kind,
                ExprKind::Comparison { operator: Comparison::Greater, .. }
            ));
        }
        other => panic!("expected OR at the top, got {:?}", other),
    }
}

#[test]
fn test_not_negates_whole_comparison() {
    let statements = run_clean("SELECT * FROM t WHERE NOT a = 1;");

    let select = select_of(&statements[0]);
    match select.where_clause.as_ref().map(|e| &e.kind) {
        Some(ExprKind::Not(inner)) => {
            assert!(matches!(inner.kind, ExprKind::Comparison { .. }));
        }
        other => panic!("expected NOT at the top, got {:?}", other),
    }
}

#[test]
fn test_arithmetic_nests_inside_comparison_inside_logic() {
    let statements = run_clean(
        "SELECT * FROM t WHERE (Salary_2025 >= 10000 AND NOT Active) OR (Balance <= 5000 / 2);",
    );

    let select = select_of(&statements[0]);
    match select.where_clause.as_ref().map(|e| &e.kind) {
        Some(ExprKind::Or { left, right }) => {
            assert!(matches!(left.kind, ExprKind::And { .. }));
            match &right.kind {
                ExprKind::Comparison { operator, right: divided, .. } => {
                    assert_eq!(*operator, Comparison::LessEquals);
                    assert!(matches!(
                        divided.kind,
                        ExprKind::Binary { operator: Operator::Slash, .. }
                    ));
                }
                other => panic!("expected a comparison, got {:?}", other),
            }
        }
        other => panic!("expected OR at the top, got {:?}", other),
    }
}

#[test]
fn test_bare_condition_is_an_expression() {
    let statements = run_clean("SELECT * FROM t WHERE active;");

    let select = select_of(&statements[0]);
    assert!(matches!(
        select.where_clause.as_ref().map(|e| &e.kind),
        Some(ExprKind::Column { table: None, .. })
    ));
}

#[test]
fn test_parse_predicates() {
    let statements = run_clean(
        "SELECT * FROM t WHERE a BETWEEN 1 AND 10 \
         AND b IN (1, 2, 3) \
         AND name LIKE 'A%' \
         AND c IS NULL;",
    );
    assert_eq!(statements.len(), 1);

    let statements = run_clean(
        "SELECT * FROM t WHERE a NOT BETWEEN 1 AND 10 \
         AND b NOT IN (1, 2) \
         AND name NOT LIKE 'A%' \
         AND c IS NOT NULL;",
    );
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_between_owns_its_and() {
    let statements = run_clean("SELECT * FROM t WHERE a BETWEEN 1 AND 10 AND b;");

    let select = select_of(&statements[0]);
    // (a BETWEEN 1 AND 10) AND b
    match select.where_clause.as_ref().map(|e| &e.kind) {
        Some(ExprKind::And { left, right }) => {
            assert!(matches!(left.kind, ExprKind::Between { negated: false, .. }));
            assert!(matches!(right.kind, ExprKind::Column { .. }));
        }
        other => panic!("expected AND at the top, got {:?}", other),
    }
}

#[test]
fn test_parse_function_calls() {
    let statements = run_clean("SELECT COUNT(*), COUNT(DISTINCT dept), MAX(salary) FROM t;");

    let select = select_of(&statements[0]);
    let kinds: Vec<_> = select
        .columns
        .iter()
        .map(|item| match item {
            SelectItem::Expr { expr, .. } => &expr.kind,
            other => panic!("expected an expression, got {:?}", other),
        })
        .collect();

    match kinds[0] {
        ExprKind::Function { name, distinct, args } => {
            assert_eq!(name, "COUNT");
            assert!(!distinct);
            assert!(matches!(args[0].kind, ExprKind::Wildcard));
        }
        other => panic!("expected a function, got {:?}", other),
    }
    match kinds[1] {
        ExprKind::Function { distinct, .. } => assert!(distinct),
        other => panic!("expected a function, got {:?}", other),
    }
    match kinds[2] {
        ExprKind::Function { name, args, .. } => {
            assert_eq!(name, "MAX");
            assert_eq!(args.len(), 1);
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_parse_cast() {
    let statements = run_clean("SELECT CAST(price AS INT) FROM t;");

    let select = select_of(&statements[0]);
    match &select.columns[0] {
        SelectItem::Expr { expr, .. } => match &expr.kind {
            ExprKind::Cast { data_type, .. } => assert_eq!(*data_type, DataType::Int),
            other => panic!("expected a cast, got {:?}", other),
        },
        other => panic!("expected an expression, got {:?}", other),
    }
}

#[test]
fn test_parse_qualified_columns() {
    let statements = run_clean("SELECT u.name FROM users u;");

    let select = select_of(&statements[0]);
    match &select.columns[0] {
        SelectItem::Expr { expr, .. } => {
            assert_eq!(
                expr.kind,
                ExprKind::Column {
                    table: Some(String::from("u")),
                    name: String::from("name")
                }
            );
        }
        other => panic!("expected an expression, got {:?}", other),
    }
}

#[test]
fn test_parse_insert_multi_row() {
    let statements = run_clean(
        "INSERT INTO users (id, name) VALUES (1, 'Ada'), (2, 'Grace');",
    );

    match &statements[0].kind {
        StatementKind::Insert(insert) => {
            assert_eq!(insert.table.name, "users");
            assert_eq!(
                insert.columns,
                Some(vec![String::from("id"), String::from("name")])
            );
            assert_eq!(insert.rows.len(), 2);
            assert_eq!(insert.rows[0].len(), 2);
        }
        other => panic!("expected an INSERT, got {:?}", other),
    }
}

#[test]
fn test_parse_insert_without_column_list() {
    let statements = run_clean("INSERT INTO t VALUES (1, 2.5, 'x', NULL, TRUE);");

    match &statements[0].kind {
        StatementKind::Insert(insert) => {
            assert!(insert.columns.is_none());
            assert_eq!(insert.rows[0].len(), 5);
        }
        other => panic!("expected an INSERT, got {:?}", other),
    }
}

#[test]
fn test_parse_update() {
    let statements = run_clean("UPDATE users SET name = 'Ada', age = age + 1 WHERE id = 1;");

    match &statements[0].kind {
        StatementKind::Update(update) => {
            assert_eq!(update.table.name, "users");
            assert_eq!(update.assignments.len(), 2);
            assert_eq!(update.assignments[0].column, "name");
            assert!(update.where_clause.is_some());
        }
        other => panic!("expected an UPDATE, got {:?}", other),
    }
}

#[test]
fn test_parse_delete() {
    let statements = run_clean("DELETE FROM users WHERE id = 1;");

    match &statements[0].kind {
        StatementKind::Delete(delete) => {
            assert_eq!(delete.table.name, "users");
            assert!(delete.where_clause.is_some());
        }
        other => panic!("expected a DELETE, got {:?}", other),
    }
}

#[test]
fn test_parse_create_table() {
    let statements = run_clean(
        "CREATE TABLE IF NOT EXISTS users ( \
            id INT PRIMARY KEY, \
            name VARCHAR(100) NOT NULL UNIQUE, \
            balance DECIMAL(10, 2) DEFAULT 0, \
            dept_id INT REFERENCES depts(id), \
            age INT CHECK (age >= 0), \
            CONSTRAINT uq_name UNIQUE (name), \
            FOREIGN KEY (dept_id) REFERENCES depts (id) \
         );",
    );

    match &statements[0].kind {
        StatementKind::CreateTable(create) => {
            assert_eq!(create.name, "users");
            assert!(create.if_not_exists);
            assert_eq!(create.columns.len(), 5);

            assert_eq!(create.columns[0].constraints, vec![ColumnConstraint::PrimaryKey]);
            assert_eq!(create.columns[1].data_type, DataType::Varchar(Some(100)));
            assert_eq!(
                create.columns[1].constraints,
                vec![ColumnConstraint::NotNull, ColumnConstraint::Unique]
            );
            assert_eq!(create.columns[2].data_type, DataType::Decimal(Some((10, 2))));
            assert!(matches!(
                create.columns[3].constraints[0],
                ColumnConstraint::References { .. }
            ));
            assert!(matches!(create.columns[4].constraints[0], ColumnConstraint::Check(_)));

            assert_eq!(create.constraints.len(), 2);
            assert_eq!(create.constraints[0].name.as_deref(), Some("uq_name"));
            assert!(matches!(
                create.constraints[1].kind,
                TableConstraintKind::ForeignKey { .. }
            ));
        }
        other => panic!("expected a CREATE TABLE, got {:?}", other),
    }
}

#[test]
fn test_parse_create_database_view_index() {
    let statements = run_clean(
        "CREATE DATABASE shop; \
         CREATE VIEW adults AS SELECT * FROM users WHERE age >= 18; \
         CREATE INDEX idx_name ON users (name, dept);",
    );

    assert_eq!(statements.len(), 3);
    assert!(matches!(statements[0].kind, StatementKind::CreateDatabase { .. }));
    match &statements[1].kind {
        StatementKind::CreateView { name, query } => {
            assert_eq!(name, "adults");
            assert!(query.where_clause.is_some());
        }
        other => panic!("expected a CREATE VIEW, got {:?}", other),
    }
    match &statements[2].kind {
        StatementKind::CreateIndex { name, table, columns } => {
            assert_eq!(name, "idx_name");
            assert_eq!(table, "users");
            assert_eq!(columns.len(), 2);
        }
        other => panic!("expected a CREATE INDEX, got {:?}", other),
    }
}

#[test]
fn test_parse_alter_table() {
    let statements = run_clean(
        "ALTER TABLE users ADD COLUMN email VARCHAR(255); \
         ALTER TABLE users DROP COLUMN legacy_flag;",
    );

    match &statements[0].kind {
        StatementKind::AlterTable(alter) => {
            assert_eq!(alter.table, "users");
            assert!(matches!(alter.action, AlterAction::AddColumn(_)));
        }
        other => panic!("expected an ALTER TABLE, got {:?}", other),
    }
    match &statements[1].kind {
        StatementKind::AlterTable(alter) => {
            assert_eq!(alter.action, AlterAction::DropColumn(String::from("legacy_flag")));
        }
        other => panic!("expected an ALTER TABLE, got {:?}", other),
    }
}

#[test]
fn test_parse_drop() {
    let statements = run_clean(
        "DROP TABLE IF EXISTS users CASCADE; \
         DROP VIEW adults; \
         DROP INDEX idx_name RESTRICT;",
    );

    match &statements[0].kind {
        StatementKind::Drop(drop) => {
            assert_eq!(drop.object, ObjectType::Table);
            assert!(drop.if_exists);
            assert_eq!(drop.behavior, Some(DropBehavior::Cascade));
        }
        other => panic!("expected a DROP, got {:?}", other),
    }
    match &statements[1].kind {
        StatementKind::Drop(drop) => {
            assert_eq!(drop.object, ObjectType::View);
            assert!(!drop.if_exists);
            assert_eq!(drop.behavior, None);
        }
        other => panic!("expected a DROP, got {:?}", other),
    }
    match &statements[2].kind {
        StatementKind::Drop(drop) => {
            assert_eq!(drop.behavior, Some(DropBehavior::Restrict));
        }
        other => panic!("expected a DROP, got {:?}", other),
    }
}

#[test]
fn test_missing_from_reports_at_offending_token() {
    let (statements, errors) = run("SELECT id WHERE age > 18;");

    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "missing FROM clause");
    assert_eq!(errors[0].expected, "FROM");
    // Anchored at the WHERE token
    assert_eq!((errors[0].line, errors[0].column), (1, 11));
}

#[test]
fn test_recovery_is_one_error_per_bad_statement() {
    let (statements, errors) = run(
        "SELECT FROM t; \
         SELECT id FROM users; \
         DELETE users WHERE id = 1;",
    );

    // The good statement in the middle survives both neighbors
    assert_eq!(statements.len(), 1);
    assert!(matches!(statements[0].kind, StatementKind::Select(_)));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_missing_semicolon_between_statements() {
    let (statements, errors) = run("SELECT id FROM t SELECT name FROM u;");

    // Recovery lands on the second statement head, so both still parse
    assert_eq!(statements.len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].expected, "';'");
}

#[test]
fn test_statement_typo_gets_a_suggestion() {
    let (statements, errors) = run("SELEC id FROM t;");

    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "expected a statement, did you mean SELECT?");
}

#[test]
fn test_integer_literal_out_of_range() {
    let (statements, errors) = run("SELECT 99999999999999999999 FROM t;");

    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "integer literal out of range");
}

#[test]
fn test_trailing_statement_without_semicolon() {
    let statements = run_clean("SELECT id FROM t");
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_stray_semicolons_are_skipped() {
    let statements = run_clean(";; SELECT id FROM t ;;");
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_empty_input() {
    let (statements, errors) = parse(Vec::new());
    assert!(statements.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_sync_points() {
    assert!(is_sync_point(&TokenKind::Delimiter(Delimiter::Semicolon)));
    assert!(is_sync_point(&TokenKind::Keyword(Keyword::Select)));
    assert!(is_sync_point(&TokenKind::Keyword(Keyword::Drop)));
    assert!(!is_sync_point(&TokenKind::Keyword(Keyword::Where)));
    assert!(!is_sync_point(&TokenKind::Identifier));
    assert!(!is_sync_point(&TokenKind::EOF));
}
