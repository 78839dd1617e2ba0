//! Compiles parsed queries into predicates.

use gear_model_rs::Item;

use super::ast::{Clause, Query};
use super::parser::{ParsedQuery, QueryParser};
use crate::context::SearchContext;
use crate::error::{SearchError, SearchResult};
use crate::registry::{ClauseMatcher, Registry, ValueFormat, FREE_TEXT_KEYWORD};

/// Resolved form of a [`Query`].
#[derive(Debug, Clone)]
enum Node {
    All,
    /// A clause that failed to compile. Matches nothing, even under negation.
    Invalid,
    Match(ClauseMatcher),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Not(Box<Node>),
}

impl Node {
    fn evaluate(&self, item: &Item, context: &SearchContext<'_>) -> bool {
        match self {
            Node::All => true,
            Node::Invalid => false,
            Node::Match(matcher) => matcher.matches(item, context),
            Node::And(left, right) => {
                left.evaluate(item, context) && right.evaluate(item, context)
            }
            Node::Or(left, right) => left.evaluate(item, context) || right.evaluate(item, context),
            Node::Not(inner) => !inner.evaluate(item, context),
        }
    }
}

/// A query compiled against a [`Registry`].
///
/// Every clause's value has already been preprocessed, so evaluating the query
/// against an item only runs the prepared matchers. Clauses that could not be
/// compiled match nothing and are listed in [`diagnostics`](Self::diagnostics).
#[derive(Debug, Clone)]
pub struct CompiledQuery {
    source: String,
    query: Query,
    root: Node,
    diagnostics: Vec<SearchError>,
}

impl CompiledQuery {
    /// Returns the query string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the errors for every clause or token that was ignored.
    pub fn diagnostics(&self) -> &[SearchError] {
        &self.diagnostics
    }

    /// Returns true if every clause compiled.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if the item matches the query.
    pub fn matches(&self, item: &Item, context: &SearchContext<'_>) -> bool {
        self.root.evaluate(item, context)
    }

    /// Binds the query to a context, producing an `Item -> bool` predicate.
    pub fn predicate<'a>(
        &'a self,
        context: &'a SearchContext<'a>,
    ) -> impl Fn(&Item) -> bool + Send + Sync + 'a {
        move |item| self.matches(item, context)
    }
}

/// Compiles a query string against a registry.
///
/// Never fails: unknown keywords and malformed values turn their clause into a
/// non-match and are reported through [`CompiledQuery::diagnostics`].
///
/// # Example
///
/// ```
/// use gear_search_rs::lexicon::Lexicon;
/// use gear_search_rs::query::compile;
/// use gear_search_rs::registry::Registry;
///
/// let registry = Registry::builtin(Lexicon::builtin()).unwrap();
///
/// let compiled = compile("masterwork:>7 season:forge", &registry);
/// assert!(compiled.is_clean());
///
/// let compiled = compile("zzz:foo", &registry);
/// assert_eq!(compiled.diagnostics().len(), 1);
/// ```
pub fn compile(input: &str, registry: &Registry) -> CompiledQuery {
    let ParsedQuery { query, errors } = QueryParser::parse(input);
    let mut compiler = Compiler {
        registry,
        diagnostics: errors,
    };
    let root = compiler.compile_node(&query);

    for diagnostic in &compiler.diagnostics {
        tracing::debug!(query = input, error = %diagnostic, "ignoring part of search query");
    }
    tracing::debug!(query = input, ast = ?query, "compiled search query");

    CompiledQuery {
        source: input.to_string(),
        query,
        root,
        diagnostics: compiler.diagnostics,
    }
}

struct Compiler<'r> {
    registry: &'r Registry,
    diagnostics: Vec<SearchError>,
}

impl Compiler<'_> {
    fn compile_node(&mut self, query: &Query) -> Node {
        match query {
            Query::All => Node::All,
            Query::Clause(clause) => self.compile_clause(clause),
            Query::Text(text) => {
                let result = self.prepare_keyword(FREE_TEXT_KEYWORD, text);
                self.finish(result)
            }
            Query::And(left, right) => Node::And(
                Box::new(self.compile_node(left)),
                Box::new(self.compile_node(right)),
            ),
            Query::Or(left, right) => Node::Or(
                Box::new(self.compile_node(left)),
                Box::new(self.compile_node(right)),
            ),
            Query::Not(inner) => negate(self.compile_node(inner)),
        }
    }

    fn compile_clause(&mut self, clause: &Clause) -> Node {
        match clause.keyword.as_str() {
            "is" => {
                let result = self.prepare_is(&clause.value);
                self.finish(result)
            }
            "not" => {
                let result = self.prepare_is(&clause.value);
                negate(self.finish(result))
            }
            keyword => {
                let result = self.prepare_keyword(keyword, &clause.value);
                self.finish(result)
            }
        }
    }

    fn prepare_is(&self, word: &str) -> SearchResult<ClauseMatcher> {
        if word.is_empty() {
            return Err(SearchError::MissingValue {
                keyword: "is".to_string(),
            });
        }
        if let Some(definition) = self.registry.resolve_is(word) {
            return self.registry.prepare(definition, word);
        }
        if self.registry.resolve(word).is_some() {
            return Err(SearchError::MissingValue {
                keyword: word.to_lowercase(),
            });
        }
        Err(SearchError::unknown_keyword(word, self.registry.suggest(word)))
    }

    fn prepare_keyword(&self, keyword: &str, value: &str) -> SearchResult<ClauseMatcher> {
        let definition = self
            .registry
            .resolve(keyword)
            .ok_or_else(|| SearchError::unknown_keyword(keyword, self.registry.suggest(keyword)))?;

        if value.is_empty() && definition.format() != ValueFormat::Attribute {
            return Err(SearchError::MissingValue {
                keyword: keyword.to_string(),
            });
        }
        self.registry.prepare(definition, value)
    }

    fn finish(&mut self, result: SearchResult<ClauseMatcher>) -> Node {
        match result {
            Ok(matcher) => Node::Match(matcher),
            Err(error) => {
                self.diagnostics.push(error);
                Node::Invalid
            }
        }
    }
}

fn negate(node: Node) -> Node {
    match node {
        Node::Invalid => Node::Invalid,
        node => Node::Not(Box::new(node)),
    }
}
