use crate::lexer::tokens::{Comparison, Operator};

use super::types::DataType;

/// An expression or condition node, positioned at its anchoring token.
///
/// Conditions and arithmetic share one type: the grammar allows a bare
/// expression wherever a condition is expected (an implicit truthiness
/// test), so splitting them buys nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
    pub column: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32, column: u32) -> Self {
        Expr { kind, line, column }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    /// A column reference, optionally qualified with a table name.
    Column {
        table: Option<String>,
        name: String,
    },
    /// The `*` inside `COUNT(*)`.
    Wildcard,
    /// A function call. Names are not validated against a whitelist here;
    /// rejecting unknown functions is semantic analysis's job.
    Function {
        name: String,
        distinct: bool,
        args: Vec<Expr>,
    },
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// Unary arithmetic minus.
    Negate(Box<Expr>),
    Binary {
        left: Box<Expr>,
        operator: Operator,
        right: Box<Expr>,
    },
    Comparison {
        left: Box<Expr>,
        operator: Comparison,
        right: Box<Expr>,
    },
    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    InList {
        expr: Box<Expr>,
        negated: bool,
        list: Vec<Expr>,
    },
    Like {
        expr: Box<Expr>,
        negated: bool,
        pattern: Box<Expr>,
    },
    IsNull {
        expr: Box<Expr>,
        negated: bool,
    },
}
