// crates/merlion-gate-cli/src/main.rs
// ============================================================================
// Module: Merlion Gate CLI Entry Point
// Description: Command dispatcher for the agent HTTP server.
// Purpose: Resolve configuration and run the serve loop.
// Dependencies: clap, merlion-gate-http, thiserror, tokio
// ============================================================================

//! ## Overview
//! The Merlion Gate CLI resolves process configuration (defaults, optional
//! TOML file, environment overrides, flag overrides, in that order) and runs
//! the agent HTTP server. Inputs are untrusted and validated before the
//! listener binds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use merlion_gate_http::AgentServer;
use merlion_gate_http::MerlionGateConfig;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Top-level CLI argument parser.
#[derive(Parser, Debug)]
#[command(name = "merlion-gate", disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the agent HTTP server.
    Serve(ServeCommand),
}

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Listen address override, e.g. `127.0.0.1:5000`.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
    /// Enable debug mode.
    #[arg(long, action = ArgAction::SetTrue)]
    debug: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("merlion-gate {version}"))
            .map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Serve(command) => command_serve(command).await,
    }
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> CliResult<ExitCode> {
    let config = resolve_config(&command)?;
    let server = AgentServer::from_config(config)
        .map_err(|err| CliError::new(format!("server startup failed: {err}")))?;
    server.serve().await.map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Resolves configuration from file, environment, and flag overrides.
fn resolve_config(command: &ServeCommand) -> CliResult<MerlionGateConfig> {
    let mut config = MerlionGateConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("config load failed: {err}")))?;
    config.apply_env().map_err(|err| CliError::new(format!("config env failed: {err}")))?;
    if let Some(bind) = &command.bind {
        config.server.bind.clone_from(bind);
    }
    if command.debug {
        config.server.debug = true;
    }
    config.validate().map_err(|err| CliError::new(format!("config invalid: {err}")))?;
    Ok(config)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints top-level help to stdout.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command
        .print_help()
        .map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
    write_stdout_line("").map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
    Ok(())
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod main_tests;
