//! Abstract Syntax Tree (AST) for search queries.

/// One `keyword:value` unit of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The filter keyword (lowercase).
    pub keyword: String,
    /// The raw value (lowercase, unquoted).
    pub value: String,
}

impl Clause {
    /// Creates a clause.
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}

/// A parsed search query.
///
/// There is no grouping: `Not` only ever wraps a single `Clause` or `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The empty query; matches every item.
    All,

    /// A `keyword:value` clause.
    Clause(Clause),

    /// A bare word, matched with the free-text filter.
    Text(String),

    /// Logical AND of two queries.
    And(Box<Query>, Box<Query>),

    /// Logical OR of two queries.
    Or(Box<Query>, Box<Query>),

    /// Logical NOT of a single clause.
    Not(Box<Query>),
}

impl Query {
    /// Creates an AND query from two queries.
    pub fn and(left: Query, right: Query) -> Self {
        Query::And(Box::new(left), Box::new(right))
    }

    /// Creates an OR query from two queries.
    pub fn or(left: Query, right: Query) -> Self {
        Query::Or(Box::new(left), Box::new(right))
    }

    /// Creates a NOT query.
    pub fn negate(inner: Query) -> Self {
        Query::Not(Box::new(inner))
    }

    /// Creates a clause query.
    pub fn clause(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Clause(Clause::new(keyword, value))
    }
}
