// crates/merlion-gate-cli/src/main_tests.rs
// ============================================================================
// Module: Merlion Gate CLI Tests
// Description: Unit tests for argument parsing and config resolution.
// Purpose: Verify flag overrides and validation failures.
// Dependencies: clap, merlion-gate-http
// ============================================================================

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwraps for clarity."
)]

use clap::Parser;

use crate::Cli;
use crate::Commands;
use crate::ServeCommand;
use crate::resolve_config;

#[test]
fn parse_serve_with_overrides() {
    let cli =
        Cli::parse_from(["merlion-gate", "serve", "--bind", "127.0.0.1:9000", "--debug"]);
    let Some(Commands::Serve(command)) = cli.command else {
        panic!("expected serve command");
    };
    assert_eq!(command.bind.as_deref(), Some("127.0.0.1:9000"));
    assert!(command.debug);
    assert!(command.config.is_none());
}

#[test]
fn parse_version_flag() {
    let cli = Cli::parse_from(["merlion-gate", "--version"]);
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

#[test]
fn resolve_config_applies_flag_overrides() {
    let command = ServeCommand {
        config: None,
        bind: Some("127.0.0.1:9000".to_string()),
        debug: true,
    };
    let config = resolve_config(&command).unwrap();
    assert_eq!(config.server.bind, "127.0.0.1:9000");
    assert!(config.server.debug);
}

#[test]
fn resolve_config_defaults_without_overrides() {
    let command = ServeCommand {
        config: None,
        bind: None,
        debug: false,
    };
    let config = resolve_config(&command).unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:5000");
    assert!(!config.server.debug);
}

#[test]
fn resolve_config_rejects_invalid_bind_override() {
    let command = ServeCommand {
        config: None,
        bind: Some("not-an-address".to_string()),
        debug: false,
    };
    let err = resolve_config(&command).err().expect("invalid bind rejected");
    assert!(err.to_string().contains("config invalid"));
}
