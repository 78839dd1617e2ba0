use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::{Cli, Commands};
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError, Session};
use dispatch::{SessionDispatch, StandaloneDispatch};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&error_json).unwrap_or_else(|_| e.to_string())
                );
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Sets up logging to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(log_colors(cli)),
        )
        .init();
}

/// Under `--json`, stderr carries only the JSON error object.
fn default_log_level(cli: &Cli) -> &'static str {
    if cli.json {
        "off"
    } else if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn log_colors(cli: &Cli) -> bool {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    !cli.no_color && !cli.json && !no_color_env && std::io::stderr().is_terminal()
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config_for(cli)?;
    let ctx = CommandContext::from_cli(cli, &config);

    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx, &config);
    }

    let Some(dispatch) = SessionDispatch::from_cli(cli) else {
        return Err(CommandError::Config(format!(
            "unhandled command: {:?}",
            cli.command
        )));
    };

    let session = Session::load(cli.inventory.as_deref(), &config)?;
    dispatch.execute(&ctx, &session).await
}

/// Loads the config file. A broken file only fails commands that depend on
/// it; `gs config` still runs so the file can be located and fixed.
fn load_config_for(cli: &Cli) -> commands::Result<Config> {
    match load_config() {
        Ok(config) => Ok(config),
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Inventory(_) => "INVENTORY_ERROR",
        CommandError::Search(_) => "SEARCH_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    ExitCode::from(exit_status(e))
}

fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Search(_) | CommandError::Json(_) => 1,
        CommandError::Io(_) => 3,
        CommandError::Inventory(_) => 4,
        CommandError::Config(_) => 5,
    }
}
