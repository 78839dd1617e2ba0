//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Standalone commands run without an inventory. Session commands load the
//! inventory and registry first.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result, Session};
use gear_search_rs::BulkAction;

/// Commands that don't need an inventory.
pub enum StandaloneDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Keywords,
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs an inventory.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            Some(Commands::Keywords) => Some(Self::Keywords),
            None => Some(Self::Help),
            _ => None,
        }
    }

    /// Execute the command.
    pub fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Keywords => commands::keywords::execute(ctx, config),
            Self::Help => {
                if !ctx.quiet {
                    println!("gs - inventory search");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Init) => commands::config::execute_init(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that run a query against the inventory.
pub enum SessionDispatch<'a> {
    Search {
        query: &'a str,
        limit: Option<u32>,
        all: bool,
    },
    Count {
        query: &'a str,
    },
    Bulk {
        query: &'a str,
        action: BulkAction,
    },
}

impl<'a> SessionDispatch<'a> {
    /// Create a session dispatch from the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Search { query, limit, all }) => Some(Self::Search {
                query,
                limit: *limit,
                all: *all,
            }),
            Some(Commands::Count { query }) => Some(Self::Count { query }),
            Some(Commands::Bulk { query, action }) => Some(Self::Bulk {
                query,
                action: *action,
            }),
            _ => None,
        }
    }

    /// Execute the command against a loaded session.
    pub async fn execute(&self, ctx: &CommandContext, session: &Session) -> Result<()> {
        match self {
            Self::Search { query, limit, all } => {
                let opts = commands::search::SearchOptions {
                    query: query.to_string(),
                    limit: *limit,
                    all: *all,
                };
                commands::search::execute(ctx, session, &opts)
            }
            Self::Count { query } => commands::count::execute(ctx, session, query),
            Self::Bulk { query, action } => {
                commands::bulk::execute(ctx, session, query, *action).await
            }
        }
    }
}
