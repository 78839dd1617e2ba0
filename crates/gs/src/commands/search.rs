//! Search command implementation.
//!
//! Compiles a query, runs it against the inventory and prints the matches.

use gear_search_rs::{all_same_category, compile, search_inventory};

use super::{report_diagnostics, CommandContext, Result, Session, DEFAULT_LIMIT};
use crate::output::{format_items_json, format_items_table, ItemsPage};

/// Options for the search command.
#[derive(Debug)]
pub struct SearchOptions {
    /// Query text.
    pub query: String,
    /// Explicit result limit.
    pub limit: Option<u32>,
    /// Show every match.
    pub all: bool,
}

/// Picks the number of rows to show: `--all`, then `--limit`, then config,
/// then [`DEFAULT_LIMIT`].
fn effective_limit(opts: &SearchOptions, configured: Option<u32>) -> Option<usize> {
    if opts.all {
        return None;
    }
    let limit = opts.limit.or(configured).unwrap_or(DEFAULT_LIMIT);
    Some(limit as usize)
}

/// Executes the search command.
///
/// # Errors
///
/// Returns an error only if writing JSON fails. Query mistakes are
/// reported as warnings and never fail the command.
pub fn execute(ctx: &CommandContext, session: &Session, opts: &SearchOptions) -> Result<()> {
    let compiled = compile(&opts.query, &session.registry);
    report_diagnostics(ctx, &compiled);

    let matches = search_inventory(&session.inventory, &compiled);
    let same_category = all_same_category(&matches);
    let shown = effective_limit(opts, session.limit)
        .map_or(matches.len(), |limit| limit.min(matches.len()));

    tracing::debug!(
        query = %opts.query,
        total = matches.len(),
        shown,
        "search finished"
    );

    let page = ItemsPage {
        query: &opts.query,
        items: &matches[..shown],
        total: matches.len(),
        same_category,
        diagnostics: compiled.diagnostics(),
    };

    if ctx.json_output {
        println!("{}", format_items_json(&page)?);
    } else {
        print!("{}", format_items_table(&page, ctx.use_colors));
    }

    Ok(())
}
