use std::fmt::Display;

/// Column data types recognized by the grammar.
///
/// Precision and length arguments stay optional where SQL allows omitting
/// them; nothing here checks that a value fits the type.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    Int,
    Float,
    Real,
    Double,
    Decimal(Option<(u32, u32)>),
    Numeric(Option<(u32, u32)>),
    Varchar(Option<u32>),
    Char(Option<u32>),
    Text,
    Boolean,
    Date,
    Time,
    Timestamp,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Int => write!(f, "INT"),
            DataType::Float => write!(f, "FLOAT"),
            DataType::Real => write!(f, "REAL"),
            DataType::Double => write!(f, "DOUBLE"),
            DataType::Decimal(None) => write!(f, "DECIMAL"),
            DataType::Decimal(Some((p, s))) => write!(f, "DECIMAL({}, {})", p, s),
            DataType::Numeric(None) => write!(f, "NUMERIC"),
            DataType::Numeric(Some((p, s))) => write!(f, "NUMERIC({}, {})", p, s),
            DataType::Varchar(None) => write!(f, "VARCHAR"),
            DataType::Varchar(Some(n)) => write!(f, "VARCHAR({})", n),
            DataType::Char(None) => write!(f, "CHAR"),
            DataType::Char(Some(n)) => write!(f, "CHAR({})", n),
            DataType::Text => write!(f, "TEXT"),
            DataType::Boolean => write!(f, "BOOLEAN"),
            DataType::Date => write!(f, "DATE"),
            DataType::Time => write!(f, "TIME"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}
