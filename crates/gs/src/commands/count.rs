//! Count command implementation.

use gear_search_rs::{compile, search_inventory};

use super::{report_diagnostics, CommandContext, Result, Session};
use crate::output::format_count_json;

/// Executes the count command.
pub fn execute(ctx: &CommandContext, session: &Session, query: &str) -> Result<()> {
    let compiled = compile(query, &session.registry);
    report_diagnostics(ctx, &compiled);

    let count = search_inventory(&session.inventory, &compiled).len();

    if ctx.json_output {
        println!(
            "{}",
            format_count_json(query, count, compiled.diagnostics())?
        );
    } else if ctx.verbose {
        let noun = if count == 1 { "item" } else { "items" };
        println!("{count} {noun} match '{query}'");
    } else {
        println!("{count}");
    }

    Ok(())
}
