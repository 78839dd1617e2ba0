//! Filter definition registry.
//!
//! A [`FilterDefinition`] binds one or more keywords to a value grammar and an
//! evaluator. The [`Registry`] indexes definitions by keyword and turns a raw
//! clause value into a [`ClauseMatcher`] once per clause, so the comparator or
//! lookup work is not repeated for every item.
//!
//! # Value formats
//!
//! - [`FilterKind::Attribute`] - the raw value is compared directly
//!   (`owner:invault`, `is:dupe`)
//! - [`FilterKind::Range`] - the value is a numeric range, optionally with
//!   words substituted first (`season:<=forge`)
//! - [`FilterKind::RangeOverload`] - the value is either a range or a word,
//!   decided by [`overload::is_range_syntax`](crate::overload::is_range_syntax)
//!   (`masterwork:>7` vs `masterwork:handling`)

mod definitions;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use gear_model_rs::Item;
use strsim::levenshtein;

use crate::context::SearchContext;
use crate::error::{SearchError, SearchResult};
use crate::lexicon::Lexicon;
use crate::overload::{self, OverloadBranch};
use crate::range::RangeComparator;

pub use definitions::{builtin_definitions, FREE_TEXT_KEYWORD, MASTERWORK_TIER_CAP};

/// Keywords claimed by the query syntax itself (`is:dupe`, `not:locked`).
pub const RESERVED_KEYWORDS: [&str; 2] = ["is", "not"];

/// Maximum Levenshtein distance to consider a keyword as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Evaluates an attribute filter: `(item, value, context) -> matched`.
pub type AttributeFn = fn(&Item, &str, &SearchContext<'_>) -> bool;

/// Extracts the number a range filter compares. `None` means the item has no
/// such field and never matches.
pub type NumericFn = fn(&Item, &Lexicon) -> Option<f64>;

/// Builds the matcher for the word branch of an overloaded filter.
pub type SymbolFn = fn(&str, &Lexicon) -> ClauseMatcher;

/// A prepared clause: the predicate a single `keyword:value` applies to items.
#[derive(Clone)]
pub struct ClauseMatcher {
    matcher: Arc<dyn Fn(&Item, &SearchContext<'_>) -> bool + Send + Sync>,
}

impl ClauseMatcher {
    /// Wraps a predicate.
    pub fn new<F>(matcher: F) -> Self
    where
        F: Fn(&Item, &SearchContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            matcher: Arc::new(matcher),
        }
    }

    /// Returns true if the item matches this clause.
    pub fn matches(&self, item: &Item, context: &SearchContext<'_>) -> bool {
        (self.matcher)(item, context)
    }
}

impl fmt::Debug for ClauseMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClauseMatcher(..)")
    }
}

/// The declared value grammar of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    Attribute,
    Range,
    RangeOverload,
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueFormat::Attribute => "attribute",
            ValueFormat::Range => "range",
            ValueFormat::RangeOverload => "range or word",
        })
    }
}

/// Word table applied to range values before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Season names, e.g. `forge` becomes `5`.
    Seasons,
}

/// Value grammar and evaluator of a filter.
#[derive(Debug, Clone, Copy)]
pub enum FilterKind {
    /// Compares the raw value directly.
    Attribute {
        /// The keyword alone is a complete `is:` / `not:` clause.
        standalone: bool,
        /// Values usable on their own after `is:` / `not:`.
        values: &'static [&'static str],
        /// The evaluator.
        matches: AttributeFn,
    },

    /// Compares a numeric field against a range.
    Range {
        /// Word table applied before parsing.
        vocabulary: Option<Vocabulary>,
        /// Field extractor.
        extract: NumericFn,
    },

    /// Either a numeric range or a word, decided by the first character.
    RangeOverload {
        /// Word table applied to the range branch before parsing.
        vocabulary: Option<Vocabulary>,
        /// Field extractor for the range branch.
        extract: NumericFn,
        /// Values above the cap are compared as the cap.
        cap: Option<f64>,
        /// Matcher factory for the word branch.
        symbol: SymbolFn,
    },
}

/// A registered filter.
#[derive(Debug, Clone)]
pub struct FilterDefinition {
    /// Keyword aliases.
    pub keywords: &'static [&'static str],
    /// Human-readable description.
    pub description: &'static str,
    /// Grammar and evaluator.
    pub kind: FilterKind,
}

impl FilterDefinition {
    /// Returns the value format of this filter.
    pub fn format(&self) -> ValueFormat {
        match self.kind {
            FilterKind::Attribute { .. } => ValueFormat::Attribute,
            FilterKind::Range { .. } => ValueFormat::Range,
            FilterKind::RangeOverload { .. } => ValueFormat::RangeOverload,
        }
    }

    /// Returns the primary keyword.
    pub fn name(&self) -> &'static str {
        self.keywords.first().copied().unwrap_or_default()
    }
}

/// The table of all known filters.
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<FilterDefinition>,
    by_keyword: HashMap<String, usize>,
    by_is_value: HashMap<String, usize>,
    lexicon: Arc<Lexicon>,
}

impl Registry {
    /// Builds a registry from a set of definitions.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::DuplicateKeyword` if two definitions share a
    /// keyword (case-insensitive) or an `is:` value, and
    /// `SearchError::ReservedKeyword` if a definition uses `is` or `not`.
    pub fn new(definitions: Vec<FilterDefinition>, lexicon: Lexicon) -> SearchResult<Self> {
        let mut by_keyword = HashMap::new();
        let mut by_is_value = HashMap::new();

        for (index, definition) in definitions.iter().enumerate() {
            for keyword in definition.keywords {
                let key = keyword.to_lowercase();
                if RESERVED_KEYWORDS.contains(&key.as_str()) {
                    return Err(SearchError::ReservedKeyword(key));
                }
                if by_keyword.insert(key.clone(), index).is_some() {
                    return Err(SearchError::DuplicateKeyword(key));
                }
            }

            if let FilterKind::Attribute {
                standalone, values, ..
            } = definition.kind
            {
                let keywords: &[&str] = if standalone { definition.keywords } else { &[] };
                for word in keywords.iter().chain(values) {
                    let key = word.to_lowercase();
                    if by_is_value.insert(key.clone(), index).is_some() {
                        return Err(SearchError::DuplicateKeyword(key));
                    }
                }
            }
        }

        Ok(Self {
            definitions,
            by_keyword,
            by_is_value,
            lexicon: Arc::new(lexicon),
        })
    }

    /// Builds a registry with the built-in filters.
    pub fn builtin(lexicon: Lexicon) -> SearchResult<Self> {
        Self::new(builtin_definitions(), lexicon)
    }

    /// Looks up a filter by keyword (exact, case-insensitive).
    pub fn resolve(&self, keyword: &str) -> Option<&FilterDefinition> {
        self.by_keyword
            .get(&keyword.to_lowercase())
            .map(|&index| &self.definitions[index])
    }

    /// Looks up the attribute filter addressed by `is:<word>`.
    ///
    /// `word` may be the keyword of a standalone attribute filter (`is:dupe`)
    /// or a declared value (`is:inleftchar`). Keywords that need a value
    /// (`tag`, `location`) are not `is:` words.
    pub fn resolve_is(&self, word: &str) -> Option<&FilterDefinition> {
        self.by_is_value
            .get(&word.to_lowercase())
            .map(|&index| &self.definitions[index])
    }

    /// Returns all definitions in registration order.
    pub fn definitions(&self) -> &[FilterDefinition] {
        &self.definitions
    }

    /// Returns the lexicon used for word substitution and lookups.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Suggests the closest registered keyword for a misspelled one.
    pub fn suggest(&self, keyword: &str) -> Option<String> {
        let query = keyword.to_lowercase();
        let (best_match, best_distance) = self
            .by_keyword
            .keys()
            .chain(self.by_is_value.keys())
            .map(|name| (name, levenshtein(&query, name)))
            .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))?;

        if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
            Some(best_match.clone())
        } else {
            None
        }
    }

    /// Turns a raw clause value into a matcher for `definition`.
    ///
    /// Runs once per clause; the returned matcher is reused for every item.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidRange` when a range value does not parse.
    pub fn prepare(&self, definition: &FilterDefinition, raw: &str) -> SearchResult<ClauseMatcher> {
        match definition.kind {
            FilterKind::Attribute { matches, .. } => {
                let value = raw.to_lowercase();
                Ok(ClauseMatcher::new(move |item, context| {
                    matches(item, &value, context)
                }))
            }
            FilterKind::Range {
                vocabulary,
                extract,
            } => {
                let text = self.substitute(vocabulary, raw);
                let comparator = RangeComparator::parse(&text)?;
                Ok(self.numeric_matcher(extract, comparator, None))
            }
            FilterKind::RangeOverload {
                vocabulary,
                extract,
                cap,
                symbol,
            } => match overload::resolve(raw, |value| self.substitute(vocabulary, value))? {
                OverloadBranch::Range(comparator) => {
                    Ok(self.numeric_matcher(extract, comparator, cap))
                }
                OverloadBranch::Symbol(word) => Ok(symbol(word, &self.lexicon)),
            },
        }
    }

    fn substitute<'v>(&self, vocabulary: Option<Vocabulary>, value: &'v str) -> Cow<'v, str> {
        match vocabulary {
            Some(Vocabulary::Seasons) => self.lexicon.substitute_season(value),
            None => Cow::Borrowed(value),
        }
    }

    fn numeric_matcher(
        &self,
        extract: NumericFn,
        comparator: RangeComparator,
        cap: Option<f64>,
    ) -> ClauseMatcher {
        let lexicon = Arc::clone(&self.lexicon);
        ClauseMatcher::new(move |item, _| {
            extract(item, &lexicon)
                .map(|value| cap.map_or(value, |cap| value.min(cap)))
                .is_some_and(|value| comparator.matches(value))
        })
    }
}

#[cfg(test)]
mod tests;
