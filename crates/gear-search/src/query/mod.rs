//! Search query parsing and compilation.
//!
//! # Supported Syntax
//!
//! ## Clauses
//! - `keyword:value` - a registered filter, e.g. `season:forge`, `masterwork:>7`
//! - `is:word` - an attribute filter by keyword or value, e.g. `is:dupe`, `is:invault`
//! - `not:word` - the negation of `is:word`
//! - `name:"quoted value"` - values may be quoted
//!
//! ## Free Text
//! - `ace` or `"ace of spades"` - item name contains the text
//!
//! ## Connectives
//! - whitespace or `,` - AND
//! - `and` - AND (optional)
//! - `or` - OR, binding looser than AND
//! - `-` prefix - NOT, applies to the single following term
//!
//! # Example
//!
//! ```
//! use gear_search_rs::context::SearchContext;
//! use gear_search_rs::lexicon::Lexicon;
//! use gear_search_rs::query::compile;
//! use gear_search_rs::registry::Registry;
//!
//! let registry = Registry::builtin(Lexicon::builtin()).unwrap();
//! let compiled = compile("is:dupe -is:locked", &registry);
//!
//! let items: Vec<gear_model_rs::Item> = vec![];
//! let context = SearchContext::new(&[], &items);
//! let matches: Vec<_> = items.iter().filter(|i| compiled.matches(i, &context)).collect();
//! assert!(matches.is_empty());
//! ```

mod ast;
mod compiler;
mod lexer;
mod parser;

pub use ast::{Clause, Query};
pub use compiler::{compile, CompiledQuery};
pub use lexer::{Lexer, LexerError, LexerResult, PositionedToken, QueryToken};
pub use parser::{ParsedQuery, QueryParser};
