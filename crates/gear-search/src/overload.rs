//! Overload resolution for keywords that take either a range or a word.
//!
//! `masterwork:>7` and `masterwork:handling` share a keyword but test
//! different things. The first character of the value decides which: a digit
//! or a comparison character means a numeric range, anything else is a word.

use std::borrow::Cow;

use crate::error::SearchResult;
use crate::range::RangeComparator;

/// Which grammar an overloaded value uses.
#[derive(Debug, Clone, PartialEq)]
pub enum OverloadBranch<'a> {
    /// Numeric range, already parsed.
    Range(RangeComparator),
    /// Symbolic word, passed through verbatim.
    Symbol(&'a str),
}

/// Returns true if `value` is range syntax.
///
/// This is the only rule used to pick a branch.
pub fn is_range_syntax(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '<' | '>' | '='))
}

/// Resolves an overloaded value.
///
/// Range values are passed through `substitute` before parsing so that word
/// tables (season names) can still produce numbers.
///
/// # Errors
///
/// Returns `SearchError::InvalidRange` if the value sniffs as a range but does
/// not parse as one.
pub fn resolve<'a, F>(value: &'a str, substitute: F) -> SearchResult<OverloadBranch<'a>>
where
    F: FnOnce(&'a str) -> Cow<'a, str>,
{
    if is_range_syntax(value) {
        let substituted = substitute(value);
        RangeComparator::parse(&substituted).map(OverloadBranch::Range)
    } else {
        Ok(OverloadBranch::Symbol(value))
    }
}
