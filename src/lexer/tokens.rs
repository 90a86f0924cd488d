use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("SELECT", Keyword::Select);
        map.insert("FROM", Keyword::From);
        map.insert("WHERE", Keyword::Where);
        map.insert("INSERT", Keyword::Insert);
        map.insert("INTO", Keyword::Into);
        map.insert("VALUES", Keyword::Values);
        map.insert("UPDATE", Keyword::Update);
        map.insert("SET", Keyword::Set);
        map.insert("DELETE", Keyword::Delete);
        map.insert("CREATE", Keyword::Create);
        map.insert("TABLE", Keyword::Table);
        map.insert("DATABASE", Keyword::Database);
        map.insert("VIEW", Keyword::View);
        map.insert("INDEX", Keyword::Index);
        map.insert("ALTER", Keyword::Alter);
        map.insert("DROP", Keyword::Drop);
        map.insert("ADD", Keyword::Add);
        map.insert("COLUMN", Keyword::Column);
        map.insert("DISTINCT", Keyword::Distinct);
        map.insert("GROUP", Keyword::Group);
        map.insert("BY", Keyword::By);
        map.insert("HAVING", Keyword::Having);
        map.insert("ORDER", Keyword::Order);
        map.insert("ASC", Keyword::Asc);
        map.insert("DESC", Keyword::Desc);
        map.insert("LIMIT", Keyword::Limit);
        map.insert("JOIN", Keyword::Join);
        map.insert("INNER", Keyword::Inner);
        map.insert("LEFT", Keyword::Left);
        map.insert("RIGHT", Keyword::Right);
        map.insert("FULL", Keyword::Full);
        map.insert("CROSS", Keyword::Cross);
        map.insert("ON", Keyword::On);
        map.insert("AND", Keyword::And);
        map.insert("OR", Keyword::Or);
        map.insert("NOT", Keyword::Not);
        map.insert("BETWEEN", Keyword::Between);
        map.insert("IN", Keyword::In);
        map.insert("LIKE", Keyword::Like);
        map.insert("IS", Keyword::Is);
        map.insert("NULL", Keyword::Null);
        map.insert("AS", Keyword::As);
        map.insert("PRIMARY", Keyword::Primary);
        map.insert("KEY", Keyword::Key);
        map.insert("FOREIGN", Keyword::Foreign);
        map.insert("REFERENCES", Keyword::References);
        map.insert("UNIQUE", Keyword::Unique);
        map.insert("DEFAULT", Keyword::Default);
        map.insert("CHECK", Keyword::Check);
        map.insert("CONSTRAINT", Keyword::Constraint);
        map.insert("INT", Keyword::Int);
        map.insert("INTEGER", Keyword::Integer);
        map.insert("FLOAT", Keyword::Float);
        map.insert("REAL", Keyword::Real);
        map.insert("DOUBLE", Keyword::Double);
        map.insert("DECIMAL", Keyword::Decimal);
        map.insert("NUMERIC", Keyword::Numeric);
        map.insert("VARCHAR", Keyword::Varchar);
        map.insert("CHAR", Keyword::Char);
        map.insert("TEXT", Keyword::Text);
        map.insert("BOOLEAN", Keyword::Boolean);
        map.insert("DATE", Keyword::Date);
        map.insert("TIME", Keyword::Time);
        map.insert("TIMESTAMP", Keyword::Timestamp);
        map.insert("TRUE", Keyword::True);
        map.insert("FALSE", Keyword::False);
        map.insert("CAST", Keyword::Cast);
        map.insert("IF", Keyword::If);
        map.insert("EXISTS", Keyword::Exists);
        map.insert("CASCADE", Keyword::Cascade);
        map.insert("RESTRICT", Keyword::Restrict);
        map
    };
}

/// Reserved words of the language, resolved once at lexing time.
///
/// The parser dispatches on these variants and never inspects raw keyword
/// text, so a misspelled match arm is a compile error rather than a silent
/// stringly-typed branch.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Create,
    Table,
    Database,
    View,
    Index,
    Alter,
    Drop,
    Add,
    Column,
    Distinct,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Limit,
    Join,
    Inner,
    Left,
    Right,
    Full,
    Cross,
    On,
    And,
    Or,
    Not,
    Between,
    In,
    Like,
    Is,
    Null,
    As,
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Default,
    Check,
    Constraint,
    Int,
    Integer,
    Float,
    Real,
    Double,
    Decimal,
    Numeric,
    Varchar,
    Char,
    Text,
    Boolean,
    Date,
    Time,
    Timestamp,
    True,
    False,
    Cast,
    If,
    Exists,
    Cascade,
    Restrict,
}

impl Keyword {
    /// Keywords that may begin a statement. These double as the
    /// synchronization points for panic-mode recovery.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Keyword::Select
                | Keyword::Insert
                | Keyword::Update
                | Keyword::Delete
                | Keyword::Create
                | Keyword::Alter
                | Keyword::Drop
        )
    }
}

/// Arithmetic, bitwise, shift and concatenation operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    BitAnd,  // &
    BitOr,   // |
    BitXor,  // ^
    Shl,     // <<
    Shr,     // >>
    Concat,  // ||
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Concat => "||",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Comparison {
    Equals,        // =
    NotEquals,     // != and <>
    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Equals => "=",
            Comparison::NotEquals => "!=",
            Comparison::Less => "<",
            Comparison::LessEquals => "<=",
            Comparison::Greater => ">",
            Comparison::GreaterEquals => ">=",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Delimiter {
    Comma,
    OpenParen,
    CloseParen,
    Semicolon,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier,
    String,
    Integer,
    Float,
    Operator(Operator),
    Comparison(Comparison),
    Delimiter(Delimiter),
    Dot,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(_) => write!(f, "Keyword"),
            TokenKind::Operator(_) => write!(f, "Operator"),
            TokenKind::Comparison(_) => write!(f, "Comparison"),
            TokenKind::Delimiter(_) => write!(f, "Delimiter"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// A single classified lexeme with its 1-based source position.
///
/// `text` preserves the original spelling for identifiers and literals;
/// keywords carry their canonical uppercase form and string tokens carry
/// the unescaped content without the surrounding quotes.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\ntext: {}}}", self.kind, self.text)
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{}:{} {} ({})", self.line, self.column, self.kind, self.text);
    }
}

/// Returns the reserved word closest to `text` (case-insensitive), if any
/// is within edit distance 2. Advisory only: used to enrich error messages
/// for likely keyword typos, never to steer parsing.
pub fn suggest_keyword(text: &str) -> Option<&'static str> {
    let upper = text.to_uppercase();
    let mut best: Option<(&'static str, usize)> = None;

    for candidate in RESERVED_LOOKUP.keys() {
        let distance = edit_distance(&upper, candidate);
        if distance <= 2 && best.map_or(true, |(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }

    best.filter(|(_, d)| *d > 0).map(|(word, _)| word)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
