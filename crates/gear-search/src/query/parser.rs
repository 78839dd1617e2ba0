//! Parser for search queries.

use super::ast::{Clause, Query};
use super::lexer::{Lexer, QueryToken};
use crate::error::SearchError;

/// Output of [`QueryParser::parse`]: the query plus any recoverable errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The parsed query. Empty input parses to [`Query::All`].
    pub query: Query,
    /// Tokens that were skipped.
    pub errors: Vec<SearchError>,
}

/// Parser for search queries.
///
/// # Grammar
///
/// ```text
/// query    ::= or_expr?
/// or_expr  ::= and_expr ("or" and_expr)*
/// and_expr ::= unary ("and"? unary)*
/// unary    ::= "-" unary | term
/// term     ::= keyword ":" value | text
/// ```
///
/// Juxtaposition is AND, and AND binds tighter than OR. There are no
/// parentheses; `-` negates a single term. Misplaced connectives are skipped
/// and reported rather than failing the whole query.
///
/// # Example
///
/// ```
/// use gear_search_rs::query::{Query, QueryParser};
///
/// let parsed = QueryParser::parse("is:dupe or season:5");
/// assert!(matches!(parsed.query, Query::Or(_, _)));
/// assert!(parsed.errors.is_empty());
/// ```
pub struct QueryParser {
    tokens: Vec<QueryToken>,
    position: usize,
    errors: Vec<SearchError>,
}

impl QueryParser {
    /// Parses a query string.
    pub fn parse(input: &str) -> ParsedQuery {
        let lexed = Lexer::new(input).tokenize_with_errors();
        let errors = lexed
            .errors
            .iter()
            .map(|e| SearchError::unexpected_token(e.character.to_string()))
            .collect();

        let mut parser = Self {
            tokens: lexed.tokens.into_iter().map(|pt| pt.token).collect(),
            position: 0,
            errors,
        };
        let query = parser.parse_or_expr().unwrap_or(Query::All);

        ParsedQuery {
            query,
            errors: parser.errors,
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&QueryToken> {
        self.tokens.get(self.position)
    }

    /// Consumes and returns the current token.
    fn advance(&mut self) -> Option<QueryToken> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Returns true if the current token starts a term.
    fn at_term(&self) -> bool {
        matches!(
            self.peek(),
            Some(QueryToken::Not | QueryToken::Clause { .. } | QueryToken::Text(_))
        )
    }

    /// Parses OR expressions: `and_expr ("or" and_expr)*`
    fn parse_or_expr(&mut self) -> Option<Query> {
        let mut left = self.parse_and_expr();

        while self.peek() == Some(&QueryToken::Or) {
            self.advance(); // consume 'or'
            let right = self.parse_and_expr();
            left = match (left, right) {
                (Some(left), Some(right)) => Some(Query::or(left, right)),
                (left, right) => {
                    self.errors.push(SearchError::unexpected_token("or"));
                    left.or(right)
                }
            };
        }

        left
    }

    /// Parses AND expressions: `unary ("and"? unary)*`
    fn parse_and_expr(&mut self) -> Option<Query> {
        let mut left: Option<Query> = None;

        loop {
            match self.peek() {
                None | Some(QueryToken::Or) => break,
                Some(QueryToken::And) => {
                    self.advance(); // consume 'and'
                    if left.is_none() || !self.at_term() {
                        self.errors.push(SearchError::unexpected_token("and"));
                    }
                }
                Some(_) => {
                    if let Some(term) = self.parse_unary() {
                        left = Some(match left {
                            Some(left) => Query::and(left, term),
                            None => term,
                        });
                    }
                }
            }
        }

        left
    }

    /// Parses unary expressions: `"-" unary | term`
    fn parse_unary(&mut self) -> Option<Query> {
        match self.advance()? {
            QueryToken::Not => {
                if !self.at_term() {
                    self.errors.push(SearchError::unexpected_token("-"));
                    return None;
                }
                self.parse_unary().map(Query::negate)
            }
            QueryToken::Clause { keyword, value } => Some(Query::Clause(Clause { keyword, value })),
            QueryToken::Text(text) => Some(Query::Text(text)),
            connective @ (QueryToken::Or | QueryToken::And) => {
                let token = if connective == QueryToken::Or { "or" } else { "and" };
                self.errors.push(SearchError::unexpected_token(token));
                None
            }
        }
    }
}
