//! Keywords command implementation.
//!
//! Lists the filters a query can use. Needs no inventory.

use super::config::Config;
use super::{load_registry, CommandContext, Result};
use crate::output::{format_keywords_json, format_keywords_table};

/// Executes the keywords command.
pub fn execute(ctx: &CommandContext, config: &Config) -> Result<()> {
    let registry = load_registry(config)?;

    if ctx.json_output {
        println!("{}", format_keywords_json(registry.definitions())?);
    } else {
        print!("{}", format_keywords_table(registry.definitions(), ctx.use_colors));
    }

    Ok(())
}
