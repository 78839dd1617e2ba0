//! Command implementations for the gs CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod bulk;
pub mod completions;
pub mod config;
pub mod count;
pub mod keywords;
pub mod search;

use std::path::{Path, PathBuf};

use gear_model_rs::Inventory;
use gear_search_rs::{CompiledQuery, Lexicon, Registry};

use crate::cli::Cli;
use config::Config;

/// Default number of items shown by `gs search`.
pub const DEFAULT_LIMIT: u32 = 50;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Inventory load/save error.
    #[error("inventory error: {0}")]
    Inventory(#[from] gear_model_rs::ModelError),

    /// Registry or lexicon error.
    #[error("search error: {0}")]
    Search(#[from] gear_search_rs::SearchError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the config file.
    ///
    /// Colors are on unless disabled by `--no-color`, `NO_COLOR` or
    /// `output.color = false`.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config.output.color.unwrap_or(true),
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Everything a query command needs: the inventory and a registry.
pub struct Session {
    /// The loaded inventory snapshot.
    pub inventory: Inventory,
    /// Where the inventory was loaded from.
    pub inventory_path: PathBuf,
    /// Filter registry built with the configured lexicon.
    pub registry: Registry,
    /// Configured default result limit.
    pub limit: Option<u32>,
}

impl Session {
    /// Loads the inventory and lexicon.
    ///
    /// The inventory path comes from `--inventory` / `GS_INVENTORY`, falling back
    /// to `inventory` in the config. `current_store` in the config overrides the
    /// one recorded in the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if no inventory path is configured or a file can't be read.
    pub fn load(inventory_flag: Option<&Path>, config: &Config) -> Result<Self> {
        let inventory_path = inventory_flag
            .map(Path::to_path_buf)
            .or_else(|| config.inventory.clone())
            .ok_or_else(|| {
                CommandError::Config(
                    "no inventory file; pass --inventory or set 'inventory' in the config"
                        .to_string(),
                )
            })?;

        let mut inventory = Inventory::load(&inventory_path)?;
        if let Some(store) = &config.current_store {
            inventory.current_store = Some(store.clone());
        }

        let registry = load_registry(config)?;

        tracing::debug!(
            path = %inventory_path.display(),
            items = inventory.items.len(),
            stores = inventory.stores.len(),
            "loaded inventory"
        );

        Ok(Self {
            inventory,
            inventory_path,
            registry,
            limit: config.search.limit,
        })
    }
}

/// Builds the filter registry with the configured lexicon, or the built-in one.
pub fn load_registry(config: &Config) -> Result<Registry> {
    let lexicon = match &config.lexicon {
        Some(path) => Lexicon::load(path)?,
        None => Lexicon::builtin(),
    };
    Ok(Registry::builtin(lexicon)?)
}

/// Prints query diagnostics to stderr as warnings.
///
/// Silent in quiet and JSON modes; JSON output carries them in the payload.
pub fn report_diagnostics(ctx: &CommandContext, query: &CompiledQuery) {
    if ctx.quiet || ctx.json_output {
        return;
    }
    for error in query.diagnostics() {
        eprintln!(
            "{}",
            crate::output::helpers::format_diagnostic(error, ctx.use_colors)
        );
    }
}
