//! Search query engine for inventory items.
//!
//! Compiles short filter strings such as `is:dupe masterwork:>7 season:forge`
//! into predicates over [`gear_model_rs::Item`]s.
//!
//! # Pipeline
//!
//! 1. [`query::compile`] tokenizes and parses the query, then resolves every
//!    clause against a [`registry::Registry`].
//! 2. Each clause value is prepared once: range values go through
//!    [`lexicon::Lexicon`] substitution and [`range::RangeComparator`], and
//!    overloaded values are routed by [`overload::resolve`].
//! 3. The [`query::CompiledQuery`] is evaluated per item with a
//!    [`context::SearchContext`] carrying the store roster and duplicate set.
//! 4. [`evaluation`] applies it to a collection and [`actions`] runs bulk
//!    actions over the result.
//!
//! # Example
//!
//! ```
//! use gear_search_rs::{compile, Lexicon, Registry, SearchContext};
//!
//! let registry = Registry::builtin(Lexicon::builtin()).unwrap();
//! let query = compile("season:<=forge -is:locked", &registry);
//! assert!(query.is_clean());
//!
//! let items: Vec<gear_model_rs::Item> = Vec::new();
//! let context = SearchContext::new(&[], &items);
//! assert!(gear_search_rs::evaluation::filter_items(&items, query.predicate(&context)).is_empty());
//! ```

pub mod actions;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod lexicon;
pub mod overload;
pub mod query;
pub mod range;
pub mod registry;

pub use actions::{
    run_bulk_action, ActionError, ActionFailure, ActionSink, ActionSummary, BulkAction, Notifier,
};
pub use context::SearchContext;
pub use error::{SearchError, SearchResult};
pub use evaluation::{all_same_category, filter_items, search_inventory, search_items};
pub use lexicon::Lexicon;
pub use query::{compile, CompiledQuery, Query};
pub use range::{Comparison, RangeComparator};
pub use registry::{FilterDefinition, FilterKind, Registry, ValueFormat};
