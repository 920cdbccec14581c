use ordered_float::NotNan;
use std::fmt::{self, Display};

/// The syntactic shape recognized in a default token, before it is checked
/// against the column's category.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Number(NotNan<f64>),
    Bool(bool),
    Null,
    /// Parenthesized SQL expression, kept verbatim.
    Expression(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "s: \"{}\"", s),
            Literal::Number(n) => write!(f, "n: {}", n.into_inner()),
            Literal::Bool(b) => write!(f, "b: {}", b),
            Literal::Null => write!(f, "NULL"),
            Literal::Expression(e) => write!(f, "e: {}", e),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(_) => write!(f, "String({})", self),
            Literal::Number(_) => write!(f, "Number({})", self),
            Literal::Bool(_) => write!(f, "Bool({})", self),
            Literal::Null => write!(f, "Null(NULL)"),
            Literal::Expression(_) => write!(f, "Expression({})", self),
        }
    }
}
