//! Numeric range comparators.
//!
//! Turns range strings such as `>7`, `<=3` or `5` into a [`RangeComparator`]
//! that tests numbers against the threshold. A missing operator means exact
//! equality.

use std::fmt;

use crate::error::{SearchError, SearchResult};

/// Comparison operator of a range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    LessOrEqual,
    Equal,
    GreaterOrEqual,
    Greater,
}

impl Comparison {
    /// Returns the operator as written in a query.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
            Comparison::Equal => "=",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Greater => ">",
        }
    }
}

/// Splits a leading comparison operator off `text`.
///
/// Returns the operator (if any) and the remainder. Two-character operators are
/// matched before their one-character prefixes.
pub(crate) fn split_operator(text: &str) -> (Option<Comparison>, &str) {
    const OPERATORS: [(&str, Comparison); 5] = [
        ("<=", Comparison::LessOrEqual),
        (">=", Comparison::GreaterOrEqual),
        ("<", Comparison::Less),
        (">", Comparison::Greater),
        ("=", Comparison::Equal),
    ];

    OPERATORS
        .iter()
        .find_map(|(symbol, op)| text.strip_prefix(symbol).map(|rest| (Some(*op), rest)))
        .unwrap_or((None, text))
}

/// A parsed range expression: `value <op> threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeComparator {
    /// The comparison to apply.
    pub comparison: Comparison,
    /// The right-hand side of the comparison.
    pub threshold: f64,
}

impl RangeComparator {
    /// Parses a range string.
    ///
    /// # Grammar
    ///
    /// ```text
    /// range   ::= ws* op? ws* literal ws*
    /// op      ::= "<" | "<=" | "=" | ">=" | ">"
    /// literal ::= ("+" | "-")? digit+ ("." digit+)?
    /// ```
    ///
    /// The text must start with an operator or a digit.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRange` if the text is empty, starts with
    /// something other than an operator or digit, or the literal is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use gear_search_rs::range::RangeComparator;
    ///
    /// let at_least_seven = RangeComparator::parse(">=7").unwrap();
    /// assert!(at_least_seven.matches(7.0));
    /// assert!(!at_least_seven.matches(6.0));
    /// ```
    pub fn parse(text: &str) -> SearchResult<Self> {
        let trimmed = text.trim();
        if !trimmed.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '<' | '>' | '=')) {
            return Err(SearchError::invalid_range(
                text,
                "expected a comparison operator or a number",
            ));
        }

        let (comparison, literal) = split_operator(trimmed);
        let literal = literal.trim();
        if !is_numeric_literal(literal) {
            return Err(SearchError::invalid_range(text, "not a number"));
        }

        let threshold = literal
            .parse::<f64>()
            .map_err(|e| SearchError::invalid_range(text, e.to_string()))?;

        Ok(Self {
            comparison: comparison.unwrap_or(Comparison::Equal),
            threshold,
        })
    }

    /// Returns true if `value` satisfies the comparison.
    pub fn matches(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::Less => value < self.threshold,
            Comparison::LessOrEqual => value <= self.threshold,
            Comparison::Equal => value == self.threshold,
            Comparison::GreaterOrEqual => value >= self.threshold,
            Comparison::Greater => value > self.threshold,
        }
    }
}

impl fmt::Display for RangeComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparison.symbol(), self.threshold)
    }
}

/// Checks `[+-]?digit+(.digit+)?`.
///
/// `str::parse::<f64>` alone would also accept `inf`, `NaN` and exponents.
fn is_numeric_literal(literal: &str) -> bool {
    let unsigned = literal
        .strip_prefix(['+', '-'])
        .unwrap_or(literal);

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(integer) && fraction.map_or(true, all_digits)
}
