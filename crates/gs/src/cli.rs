//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the gs CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gear_search_rs::BulkAction;

/// gs - search and bulk-edit an inventory snapshot
#[derive(Parser, Debug)]
#[command(name = "gs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Inventory file (default: from config)
    #[arg(long, global = true, env = "GS_INVENTORY")]
    pub inventory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items matching a search query
    #[command(alias = "s")]
    Search {
        /// Search query (e.g., "is:dupe masterwork:>7")
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Limit results (default: 50, or search.limit from config)
        #[arg(long)]
        limit: Option<u32>,

        /// Show all matching items (no limit)
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Count items matching a search query
    #[command(alias = "c")]
    Count {
        /// Search query
        #[arg(allow_hyphen_values = true)]
        query: String,
    },

    /// Apply an action to every item matching a search query
    Bulk {
        /// Search query
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Action: lock, unlock, clear, or a tag (favorite, keep, junk, infuse, archive)
        action: BulkAction,
    },

    /// List the filter keywords a query can use
    #[command(alias = "k")]
    Keywords,

    /// View and create configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Write a default config file if none exists
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., inventory, output.color, search.limit)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
